use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use nuage_services::api::{self, health::ServiceInfo, swagger::UserApiDoc};
use nuage_services::config::ServiceConfig;
use nuage_services::middleware;
use nuage_services::services::{InMemoryUserStore, UserStore};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_PORT: u16 = 8000;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServiceConfig::from_env(DEFAULT_PORT)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    log::info!("🚀 Starting User Service...");
    log::info!("🔐 Duplicate policy: {:?}", config.duplicate_policy);

    // One registry for every worker
    let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new(config.duplicate_policy));
    let store = web::Data::from(store);
    let info = web::Data::new(ServiceInfo { name: "user-service" });

    log::info!("🌐 Server starting on {}", config.bind_address());
    log::info!("📚 Swagger UI available at: http://{}/docs/", config.bind_address());

    let cors_origins = config.cors_origins.clone();

    HttpServer::new(move || {
        let openapi = UserApiDoc::openapi();

        App::new()
            .app_data(store.clone())
            .app_data(info.clone())
            .app_data(api::json_config())
            .wrap(middleware::cors(&cors_origins))
            .wrap(Logger::default())
            .service(SwaggerUi::new("/docs/{_:.*}").url("/openapi.json", openapi))
            .route("/health", web::get().to(api::health::health_check))
            .configure(api::users::configure)
            .default_service(web::route().to(api::not_found))
    })
    .bind(config.bind_address())?
    .run()
    .await
}
