use actix_web::web;

use crate::api::handlers::{catalog, gardens, info, session};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(catalog::list_catalog)
            .service(gardens::list_gardens)
            .service(gardens::create_garden)
            .service(gardens::tap_cell)
            .service(gardens::delete_selection)
            .service(gardens::rename_garden)
            .service(info::cell_info)
            .service(gardens::get_garden)
            .service(info::lookup_info)
            .service(session::get_session)
            .service(session::toggle_editing)
            .service(session::choose_pending)
            .service(session::cancel_pending),
    );
}
