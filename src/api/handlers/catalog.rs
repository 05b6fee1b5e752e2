use actix_web::{get, web, HttpResponse, Responder};

use crate::{data::catalog, models::request::CatalogQuery};

/// GET /api/catalog
/// Returns the catalog species names, optionally narrowed by a
/// case-insensitive substring filter.
#[utoipa::path(
    get,
    path = "/api/catalog",
    params(CatalogQuery),
    responses(
        (status = 200, description = "Catalog names in fixed order", body = [String]),
    ),
    tag = "catalog"
)]
#[get("/catalog")]
pub async fn list_catalog(query: web::Query<CatalogQuery>) -> impl Responder {
    let filter = query.filter.as_deref().unwrap_or("");
    HttpResponse::Ok().json(catalog::filter_options(filter))
}
