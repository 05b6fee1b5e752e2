use actix_web::{delete, get, post, web, HttpResponse, Responder};

use crate::{
    api::state::SharedState,
    data::catalog,
    logic,
    models::{
        plant::Plant,
        request::{ChoosePendingRequest, ErrorResponse},
        session::EditingSession,
    },
};

/// GET /api/session
/// Returns the shared editing session.
#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "Current editing session", body = EditingSession),
    ),
    tag = "session"
)]
#[get("/session")]
pub async fn get_session(state: web::Data<SharedState>) -> impl Responder {
    let state = state.read().expect("state lock poisoned");
    HttpResponse::Ok().json(&state.session)
}

/// POST /api/session/editing/toggle
/// Flips editing mode. Leaving editing mode cancels the pending plant and
/// every garden's moving selection.
#[utoipa::path(
    post,
    path = "/api/session/editing/toggle",
    responses(
        (status = 200, description = "Session after the toggle", body = EditingSession),
    ),
    tag = "session"
)]
#[post("/session/editing/toggle")]
pub async fn toggle_editing(state: web::Data<SharedState>) -> impl Responder {
    let mut state = state.write().expect("state lock poisoned");
    let app = &mut *state;
    logic::session::toggle_editing(&mut app.session, &mut app.gardens);
    HttpResponse::Ok().json(&app.session)
}

/// POST /api/session/pending
/// Stages a catalog plant for placement and enters editing mode.
#[utoipa::path(
    post,
    path = "/api/session/pending",
    request_body = ChoosePendingRequest,
    responses(
        (status = 200, description = "Session with the staged plant", body = EditingSession),
        (status = 404, description = "Name not in the catalog", body = ErrorResponse),
    ),
    tag = "session"
)]
#[post("/session/pending")]
pub async fn choose_pending(
    state: web::Data<SharedState>,
    body: web::Json<ChoosePendingRequest>,
) -> impl Responder {
    match catalog::find_option(&body.name) {
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Plant '{}' is not in the catalog.", body.name)
        })),
        Some(name) => {
            let mut state = state.write().expect("state lock poisoned");
            logic::session::choose_pending(&mut state.session, Plant::new(name));
            HttpResponse::Ok().json(&state.session)
        }
    }
}

/// DELETE /api/session/pending
/// Drops the staged plant without leaving editing mode.
#[utoipa::path(
    delete,
    path = "/api/session/pending",
    responses(
        (status = 200, description = "Session without a staged plant", body = EditingSession),
    ),
    tag = "session"
)]
#[delete("/session/pending")]
pub async fn cancel_pending(state: web::Data<SharedState>) -> impl Responder {
    let mut state = state.write().expect("state lock poisoned");
    logic::session::cancel_pending(&mut state.session);
    HttpResponse::Ok().json(&state.session)
}
