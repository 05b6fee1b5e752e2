use actix_web::{test, web, App};
use greengrid::api::routes::configure;
use greengrid::api::state::{AppState, SharedState};
use greengrid::data::info::PlantInfoIndex;

fn build_app(
    info: PlantInfoIndex,
) -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(info))
        .app_data(web::Data::new(SharedState::new(AppState::new())))
        .configure(configure)
        .app_data(
            web::JsonConfig::default().error_handler(|err, _req| {
                let message = format!("{err}");
                actix_web::error::InternalError::from_response(
                    err,
                    actix_web::HttpResponse::BadRequest()
                        .json(serde_json::json!({ "error": message })),
                )
                .into()
            }),
        )
}

fn shipped_dataset() -> PlantInfoIndex {
    PlantInfoIndex::load_from_path("data/plant_info.csv")
}

// ---------------------------------------------------------------------------
// GET /api/catalog
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_get_catalog_returns_200() {
    let app = test::init_service(build_app(shipped_dataset())).await;
    let req = test::TestRequest::get().uri("/api/catalog").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_get_catalog_returns_all_names() {
    let app = test::init_service(build_app(shipped_dataset())).await;
    let req = test::TestRequest::get().uri("/api/catalog").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Wheat", "Barley", "Grape", "Fig", "Pomegranate", "Olive", "Date"]
    );
}

#[actix_web::test]
async fn test_get_catalog_filter_preserves_order() {
    let app = test::init_service(build_app(shipped_dataset())).await;
    let req = test::TestRequest::get()
        .uri("/api/catalog?filter=o")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, serde_json::json!(["Pomegranate", "Olive"]));
}

// ---------------------------------------------------------------------------
// GET /api/gardens, POST /api/gardens
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_initial_collection_has_one_default_garden() {
    let app = test::init_service(build_app(shipped_dataset())).await;
    let req = test::TestRequest::get().uri("/api/gardens").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let gardens = body.as_array().unwrap();
    assert_eq!(gardens.len(), 1);
    assert_eq!(gardens[0]["name"], "New Garden");
    assert_eq!(gardens[0]["cells"].as_array().unwrap().len(), 9);
}

#[actix_web::test]
async fn test_create_garden_with_blank_name_gets_default() {
    let app = test::init_service(build_app(shipped_dataset())).await;
    let payload = serde_json::json!({ "name": "", "rows": 2, "cols": 4 });
    let req = test::TestRequest::post()
        .uri("/api/gardens")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "New Garden");
    let cells = body["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 8);
    assert!(cells.iter().all(|c| c.is_null()));
}

#[actix_web::test]
async fn test_create_garden_zero_dimension_returns_400() {
    let app = test::init_service(build_app(shipped_dataset())).await;
    let payload = serde_json::json!({ "name": "Bad", "rows": 0, "cols": 4 });
    let req = test::TestRequest::post()
        .uri("/api/gardens")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_create_garden_oversized_returns_400() {
    let app = test::init_service(build_app(shipped_dataset())).await;
    let payload = serde_json::json!({ "name": "Huge", "rows": 10, "cols": 3 });
    let req = test::TestRequest::post()
        .uri("/api/gardens")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("between 1 and 9"));
}

#[actix_web::test]
async fn test_get_unknown_garden_returns_404() {
    let app = test::init_service(build_app(shipped_dataset())).await;
    let req = test::TestRequest::get().uri("/api/gardens/7").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_malformed_json_returns_400() {
    let app = test::init_service(build_app(shipped_dataset())).await;
    let req = test::TestRequest::post()
        .uri("/api/gardens")
        .insert_header(("content-type", "application/json"))
        .set_payload("{invalid json}")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

// ---------------------------------------------------------------------------
// POST /api/gardens/{index}/cells/{cell}/tap
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_tap_outside_editing_mode_changes_nothing() {
    let app = test::init_service(build_app(shipped_dataset())).await;
    let req = test::TestRequest::post()
        .uri("/api/gardens/0/cells/0/tap")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["garden"]["cells"][0].is_null());
    assert_eq!(body["session"]["is_editing"], false);
}

#[actix_web::test]
async fn test_tap_cell_out_of_range_returns_400() {
    let app = test::init_service(build_app(shipped_dataset())).await;
    let req = test::TestRequest::post()
        .uri("/api/gardens/0/cells/9/tap")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_tap_unknown_garden_returns_404() {
    let app = test::init_service(build_app(shipped_dataset())).await;
    let req = test::TestRequest::post()
        .uri("/api/gardens/3/cells/0/tap")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

// ---------------------------------------------------------------------------
// DELETE /api/gardens/{index}/selection
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_delete_selection_without_selection_returns_400() {
    let app = test::init_service(build_app(shipped_dataset())).await;
    let req = test::TestRequest::delete()
        .uri("/api/gardens/0/selection")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "No cell is selected.");
}

// ---------------------------------------------------------------------------
// PUT /api/gardens/{index}/name
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_rename_garden_stores_name_as_typed() {
    let app = test::init_service(build_app(shipped_dataset())).await;
    let req = test::TestRequest::put()
        .uri("/api/gardens/0/name")
        .set_json(serde_json::json!({ "name": "Orchard" }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "Orchard");

    // Renaming to empty is accepted as typed; normalization is
    // construction-time only.
    let req = test::TestRequest::put()
        .uri("/api/gardens/0/name")
        .set_json(serde_json::json!({ "name": "" }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "");
}

// ---------------------------------------------------------------------------
// Session endpoints
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_choose_pending_enters_editing_mode() {
    let app = test::init_service(build_app(shipped_dataset())).await;
    let req = test::TestRequest::post()
        .uri("/api/session/pending")
        .set_json(serde_json::json!({ "name": "olive" }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["is_editing"], true);
    assert_eq!(body["pending_plant"]["name"], "Olive", "Catalog casing wins");
    assert_eq!(body["pending_plant"]["info_id"], "olive");
}

#[actix_web::test]
async fn test_choose_pending_unknown_name_returns_404() {
    let app = test::init_service(build_app(shipped_dataset())).await;
    let req = test::TestRequest::post()
        .uri("/api/session/pending")
        .set_json(serde_json::json!({ "name": "Cactus" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_cancel_pending_keeps_editing_mode() {
    let app = test::init_service(build_app(shipped_dataset())).await;
    let req = test::TestRequest::post()
        .uri("/api/session/pending")
        .set_json(serde_json::json!({ "name": "Fig" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::delete()
        .uri("/api/session/pending")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["is_editing"], true);
    assert!(body["pending_plant"].is_null());
}

// ---------------------------------------------------------------------------
// Info endpoints
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_shipped_dataset_covers_every_catalog_species() {
    let index = shipped_dataset();
    for id in ["wheat", "barley", "grape", "fig", "pomegranate", "olive", "date"] {
        assert!(index.lookup(id).is_some(), "Missing record for '{id}'");
    }
}

#[actix_web::test]
async fn test_lookup_info_known_id_returns_record() {
    let app = test::init_service(build_app(shipped_dataset())).await;
    let req = test::TestRequest::get().uri("/api/info/olive").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["scientific_name"], "Olea europaea");
    assert_eq!(body["lifecycle"], "Perennial");
}

#[actix_web::test]
async fn test_lookup_info_unknown_id_returns_404() {
    let app = test::init_service(build_app(shipped_dataset())).await;
    let req = test::TestRequest::get()
        .uri("/api/info/unknownid")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(!body["error"].as_str().unwrap_or("").is_empty());
}

#[actix_web::test]
async fn test_cell_info_on_empty_cell_returns_404() {
    let app = test::init_service(build_app(shipped_dataset())).await;
    let req = test::TestRequest::get()
        .uri("/api/gardens/0/cells/0/info")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
