use actix_web::{get, web, HttpResponse, Responder};

use crate::{
    api::state::SharedState,
    data::info::PlantInfoIndex,
    models::{
        info::PlantInfoRecord,
        plant::Plant,
        request::{ErrorResponse, InfoCardResponse},
    },
};

/// Static fallback shown where descriptive fields would go when a species
/// has no reference record.
pub const NO_INFORMATION: &str = "No information available.";

/// GET /api/info/{id}
/// Raw reference-dataset lookup by record id.
#[utoipa::path(
    get,
    path = "/api/info/{id}",
    params(("id" = String, Path, description = "Reference record id")),
    responses(
        (status = 200, description = "The reference record", body = PlantInfoRecord),
        (status = 404, description = "Unknown record id", body = ErrorResponse),
    ),
    tag = "info"
)]
#[get("/info/{id}")]
pub async fn lookup_info(
    index: web::Data<PlantInfoIndex>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    match index.lookup(&id) {
        Some(record) => HttpResponse::Ok().json(record),
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("No plant info record for '{id}'.")
        })),
    }
}

/// GET /api/gardens/{index}/cells/{cell}/info
/// Reference card for the plant in a cell. A species missing from the
/// dataset degrades to its bare name, its id and a static message instead
/// of failing.
#[utoipa::path(
    get,
    path = "/api/gardens/{index}/cells/{cell}/info",
    params(
        ("index" = usize, Path, description = "Garden display index"),
        ("cell" = usize, Path, description = "Row-major cell index"),
    ),
    responses(
        (status = 200, description = "Card for the placed plant", body = InfoCardResponse),
        (status = 400, description = "Cell index out of range", body = ErrorResponse),
        (status = 404, description = "Unknown garden or empty cell", body = ErrorResponse),
    ),
    tag = "info"
)]
#[get("/gardens/{index}/cells/{cell}/info")]
pub async fn cell_info(
    state: web::Data<SharedState>,
    index: web::Data<PlantInfoIndex>,
    path: web::Path<(usize, usize)>,
) -> impl Responder {
    let (garden_index, cell) = path.into_inner();
    let state = state.read().expect("state lock poisoned");
    match state.gardens.get(garden_index) {
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Garden {garden_index} not found.")
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
            match &garden.cells[cell] {
                None => HttpResponse::NotFound().json(serde_json::json!({
                    "error": "Cell is empty."
                })),
                Some(plant) => HttpResponse::Ok().json(info_card(plant, &index)),
            }
        }
    }
}

/// Builds the card shown when a placed plant is inspected.
pub fn info_card(plant: &Plant, index: &PlantInfoIndex) -> InfoCardResponse {
    match index.lookup(&plant.info_id) {
        Some(record) => InfoCardResponse {
            name: plant.name.clone(),
            info_id: plant.info_id.clone(),
            record: Some(record.clone()),
            message: None,
        },
        None => InfoCardResponse {
            name: plant.name.clone(),
            info_id: plant.info_id.clone(),
            record: None,
            message: Some(NO_INFORMATION.to_string()),
        },
    }
}
