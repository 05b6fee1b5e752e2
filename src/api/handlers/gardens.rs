use actix_web::{delete, get, post, put, web, HttpResponse, Responder};

use crate::{
    api::state::SharedState,
    logic::editor,
    models::{
        garden::Garden,
        request::{CreateGardenRequest, ErrorResponse, RenameGardenRequest, TapResponse},
    },
};

/// Upper bound on rows/cols accepted over the wire (the picker stepper's
/// range). The core itself only rejects zero.
pub const MAX_DIMENSION: usize = 9;

/// GET /api/gardens
/// Returns every garden in display order.
#[utoipa::path(
    get,
    path = "/api/gardens",
    responses(
        (status = 200, description = "All gardens in display order", body = [Garden]),
    ),
    tag = "gardens"
)]
#[get("/gardens")]
pub async fn list_gardens(state: web::Data<SharedState>) -> impl Responder {
    let state = state.read().expect("state lock poisoned");
    HttpResponse::Ok().json(state.gardens.gardens())
}

/// GET /api/gardens/{index}
/// Returns a single garden by display index.
#[utoipa::path(
    get,
    path = "/api/gardens/{index}",
    params(("index" = usize, Path, description = "Garden display index")),
    responses(
        (status = 200, description = "The garden", body = Garden),
        (status = 404, description = "Unknown garden index", body = ErrorResponse),
    ),
    tag = "gardens"
)]
#[get("/gardens/{index}")]
pub async fn get_garden(state: web::Data<SharedState>, path: web::Path<usize>) -> impl Responder {
    let index = path.into_inner();
    let state = state.read().expect("state lock poisoned");
    match state.gardens.get(index) {
        Some(garden) => HttpResponse::Ok().json(garden),
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Garden {index} not found.")
        })),
    }
}

/// POST /api/gardens
/// Creates a new all-empty garden and appends it to the collection.
#[utoipa::path(
    post,
    path = "/api/gardens",
    request_body = CreateGardenRequest,
    responses(
        (status = 201, description = "The created garden", body = Garden),
        (status = 400, description = "Dimensions out of range", body = ErrorResponse),
    ),
    tag = "gardens"
)]
#[post("/gardens")]
pub async fn create_garden(
    state: web::Data<SharedState>,
    body: web::Json<CreateGardenRequest>,
) -> impl Responder {
    let request = body.into_inner();
    if request.rows == 0
        || request.cols == 0
        || request.rows > MAX_DIMENSION
        || request.cols > MAX_DIMENSION
    {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!("Garden dimensions must be between 1 and {MAX_DIMENSION}.")
        }));
    }
    let mut state = state.write().expect("state lock poisoned");
    let index = state
        .gardens
        .add_garden(&request.name, request.rows, request.cols);
    let garden = state.gardens.get(index).expect("appended garden must exist");
    HttpResponse::Created().json(garden)
}

/// POST /api/gardens/{index}/cells/{cell}/tap
/// Dispatches a cell tap through the placement state machine and returns
/// the updated garden plus the shared session.
#[utoipa::path(
    post,
    path = "/api/gardens/{index}/cells/{cell}/tap",
    params(
        ("index" = usize, Path, description = "Garden display index"),
        ("cell" = usize, Path, description = "Row-major cell index"),
    ),
    responses(
        (status = 200, description = "State after the tap", body = TapResponse),
        (status = 400, description = "Cell index out of range", body = ErrorResponse),
        (status = 404, description = "Unknown garden index", body = ErrorResponse),
    ),
    tag = "gardens"
)]
#[post("/gardens/{index}/cells/{cell}/tap")]
pub async fn tap_cell(
    state: web::Data<SharedState>,
    path: web::Path<(usize, usize)>,
) -> impl Responder {
    let (index, cell) = path.into_inner();
    let mut state = state.write().expect("state lock poisoned");
    let app = &mut *state;
    match app.gardens.get_mut(index) {
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Garden {index} not found.")
        })),
        Some(garden) => {
            if cell >= garden.cell_count() {
                return HttpResponse::BadRequest().json(serde_json::json!({
                    "error": format!(
                        "Cell {cell} is out of range for a {}x{} garden.",
                        garden.rows, garden.cols
                    )
                }));
            }
            editor::tap_cell(garden, &mut app.session, cell);
            HttpResponse::Ok().json(TapResponse {
                garden: garden.clone(),
                session: app.session.clone(),
            })
        }
    }
}

/// DELETE /api/gardens/{index}/selection
/// Removes the plant in the selected cell. Only valid while a cell is
/// selected for moving.
#[utoipa::path(
    delete,
    path = "/api/gardens/{index}/selection",
    params(("index" = usize, Path, description = "Garden display index")),
    responses(
        (status = 200, description = "Garden after the removal", body = Garden),
        (status = 400, description = "No cell is selected", body = ErrorResponse),
        (status = 404, description = "Unknown garden index", body = ErrorResponse),
    ),
    tag = "gardens"
)]
#[delete("/gardens/{index}/selection")]
pub async fn delete_selection(
    state: web::Data<SharedState>,
    path: web::Path<usize>,
) -> impl Responder {
    let index = path.into_inner();
    let mut state = state.write().expect("state lock poisoned");
    match state.gardens.get_mut(index) {
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Garden {index} not found.")
        })),
        Some(garden) => {
            if garden.moving_index.is_none() {
                return HttpResponse::BadRequest().json(serde_json::json!({
                    "error": "No cell is selected."
                }));
            }
            editor::delete_selected(garden);
            HttpResponse::Ok().json(&*garden)
        }
    }
}

/// PUT /api/gardens/{index}/name
/// Renames a garden, storing the name exactly as typed.
#[utoipa::path(
    put,
    path = "/api/gardens/{index}/name",
    params(("index" = usize, Path, description = "Garden display index")),
    request_body = RenameGardenRequest,
    responses(
        (status = 200, description = "Garden after the rename", body = Garden),
        (status = 404, description = "Unknown garden index", body = ErrorResponse),
    ),
    tag = "gardens"
)]
#[put("/gardens/{index}/name")]
pub async fn rename_garden(
    state: web::Data<SharedState>,
    path: web::Path<usize>,
    body: web::Json<RenameGardenRequest>,
) -> impl Responder {
    let index = path.into_inner();
    let mut state = state.write().expect("state lock poisoned");
    match state.gardens.get_mut(index) {
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Garden {index} not found.")
        })),
        Some(garden) => {
            editor::rename_garden(garden, &body.name);
            HttpResponse::Ok().json(&*garden)
        }
    }
}
