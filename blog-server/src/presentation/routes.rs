use crate::presentation::http_handlers;
use crate::presentation::middleware::payload_config;
use actix_web::web;

/// Mounts `/health` and `/api/posts`. Every other path, and every other
/// method on these paths, answers `404 {"error":"Route not found"}`.
/// GET routes also answer HEAD.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(payload_config())
        .service(
            web::resource("/health")
                .route(web::get().to(http_handlers::health))
                .route(web::head().to(http_handlers::health))
                .default_service(web::to(http_handlers::route_not_found)),
        )
        .service(
            web::scope("/api/posts")
                .service(
                    web::resource("")
                        .route(web::get().to(http_handlers::list_posts))
                        .route(web::head().to(http_handlers::list_posts))
                        .route(web::post().to(http_handlers::create_post))
                        .default_service(web::to(http_handlers::route_not_found)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(http_handlers::get_post))
                        .route(web::head().to(http_handlers::get_post))
                        .default_service(web::to(http_handlers::route_not_found)),
                ),
        )
        .default_service(web::to(http_handlers::route_not_found));
}
