use anyhow::Context;
use dotenvy::dotenv;
use std::sync::Arc;

use blog_server::application::BlogService;
use blog_server::data::PostgresPostRepository;
use blog_server::infrastructure::{
    database::{create_pool, initialize_database},
    logging::init_logging,
    AppConfig,
};
use blog_server::presentation::{configure_cors, configure_routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    init_logging()?;

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let http_addr = config.http_addr();

    tracing::info!("Starting blog server...");
    tracing::info!("HTTP server will listen on {}", http_addr);
    tracing::info!(
        "Database config: {}:{}/{}",
        config.db_host,
        config.db_port,
        config.db_name
    );

    let pool = create_pool(&config);

    tracing::info!("Initializing database...");
    initialize_database(&pool, &config).await;

    let post_repo = Arc::new(PostgresPostRepository::new(pool.clone()));
    let blog_service = BlogService::new(post_repo);

    run_http_server(http_addr, blog_service).await?;

    tracing::info!("Shutting down, closing database pool");
    pool.close().await;

    Ok(())
}

async fn run_http_server(addr: String, blog_service: BlogService) -> anyhow::Result<()> {
    use actix_web::{middleware::Logger, middleware::NormalizePath, web, App, HttpServer};

    tracing::info!("Configuring HTTP server...");

    let blog_service = web::Data::new(blog_service);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(configure_cors())
            .wrap(Logger::default())
            .app_data(blog_service.clone())
            .configure(configure_routes)
    })
    .bind(&addr)
    .with_context(|| format!("Failed to bind {}", addr))?
    .run();

    tracing::info!("Server running on {}", addr);

    server.await?;

    Ok(())
}
