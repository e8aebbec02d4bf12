use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use nuage_services::api::{self, health::ServiceInfo, swagger::ProductApiDoc};
use nuage_services::config::ServiceConfig;
use nuage_services::middleware;
use nuage_services::services::ProductCatalog;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServiceConfig::from_env(DEFAULT_PORT)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    log::info!("🚀 Starting Product Service...");

    let catalog = web::Data::new(ProductCatalog::seeded());
    let info = web::Data::new(ServiceInfo { name: "product-service" });

    log::info!("📦 Catalog loaded: {} products", catalog.list_products().len());
    log::info!("🌐 Server starting on {}", config.bind_address());
    log::info!("📚 Swagger UI available at: http://{}/docs/", config.bind_address());

    let cors_origins = config.cors_origins.clone();

    HttpServer::new(move || {
        let openapi = ProductApiDoc::openapi();

        App::new()
            .app_data(catalog.clone())
            .app_data(info.clone())
            .app_data(api::json_config())
            .wrap(middleware::cors(&cors_origins))
            .wrap(Logger::default())
            .service(SwaggerUi::new("/docs/{_:.*}").url("/openapi.json", openapi))
            .route("/health", web::get().to(api::health::health_check))
            .route("/products", web::get().to(api::products::list_products))
            .default_service(web::route().to(api::not_found))
    })
    .bind(config.bind_address())?
    .run()
    .await
}
