use utoipa::OpenApi;

use crate::models::{
    garden::Garden,
    info::{Lifecycle, PlantInfoRecord},
    plant::Plant,
    request::{
        ChoosePendingRequest, CreateGardenRequest, ErrorResponse, InfoCardResponse,
        RenameGardenRequest, TapResponse,
    },
    session::EditingSession,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Greengrid API",
        description = "Garden grid editor: arrange catalog plants on rectangular gardens, move and remove them, and look up species reference data.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::catalog::list_catalog,
        crate::api::handlers::gardens::list_gardens,
        crate::api::handlers::gardens::get_garden,
        crate::api::handlers::gardens::create_garden,
        crate::api::handlers::gardens::tap_cell,
        crate::api::handlers::gardens::delete_selection,
        crate::api::handlers::gardens::rename_garden,
        crate::api::handlers::info::lookup_info,
        crate::api::handlers::info::cell_info,
        crate::api::handlers::session::get_session,
        crate::api::handlers::session::toggle_editing,
        crate::api::handlers::session::choose_pending,
        crate::api::handlers::session::cancel_pending,
    ),
    components(
        schemas(
            // Domain
            Plant, Garden, EditingSession,
            // Reference data
            Lifecycle, PlantInfoRecord,
            // Requests
            CreateGardenRequest, RenameGardenRequest, ChoosePendingRequest,
            // Responses
            TapResponse, InfoCardResponse, ErrorResponse,
        )
    ),
    tags(
        (name = "catalog",  description = "Fixed plant catalog — names and substring search"),
        (name = "gardens",  description = "Garden grids — creation, cell taps, selection, renaming"),
        (name = "info",     description = "Plant reference data — dataset lookup and placed-plant cards"),
        (name = "session",  description = "Editing session — mode toggle and pending placement"),
    )
)]
pub struct ApiDoc;
