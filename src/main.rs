use actix_web::{middleware, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use greengrid::api::{openapi::ApiDoc, routes, state::AppState};
use greengrid::data::info::PlantInfoIndex;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let bind_addr =
        std::env::var("GREENGRID_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let dataset_path =
        std::env::var("PLANT_INFO_CSV").unwrap_or_else(|_| "data/plant_info.csv".to_string());

    let info_index = web::Data::new(PlantInfoIndex::load_from_path(&dataset_path));
    let state = web::Data::new(std::sync::RwLock::new(AppState::new()));

    println!("🌱 Greengrid started at http://{bind_addr}");
    println!("   GET  /api/catalog");
    println!("   GET  /api/gardens");
    println!("   POST /api/gardens/{{index}}/cells/{{cell}}/tap");
    println!("   ");
    println!("   📖 Swagger UI → http://{bind_addr}/swagger-ui/");
    println!("   📌 OpenAPI spec → http://{bind_addr}/api-docs/openapi.json");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(info_index.clone())
            .app_data(state.clone())
            .configure(routes::configure)
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let message = format!("JSON deserialization error: {err}");
                actix_web::error::InternalError::from_response(
                    err,
                    actix_web::HttpResponse::BadRequest()
                        .json(serde_json::json!({ "error": message })),
                )
                .into()
            }))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
