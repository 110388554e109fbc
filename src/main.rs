use actix_web::{App, HttpServer, middleware, web};

use clubsite::config::AppConfig;
use clubsite::{build_backend, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let backend = match build_backend(&config) {
        Ok(backend) => web::Data::new(backend),
        Err(e) => {
            log::error!("Failed to build HTTP client: {e}");
            std::process::exit(1);
        }
    };

    if backend.is_enabled() {
        log::info!("Caching backend queries for {}s", config.cache_ttl.as_secs());
    }
    log::info!("Reading club data from {}", backend.inner().rest_url());
    log::info!("Starting server at http://{}", config.bind_addr);

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(backend.clone())
            .service(actix_files::Files::new("/static", &static_dir))
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
