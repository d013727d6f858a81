use actix_cors::Cors;
use actix_web::web;

const BODY_LIMIT: usize = 100 * 1024;

/// Any origin, method and header is allowed.
pub fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .send_wildcard()
        .max_age(3600)
}

/// Size limit for buffered request bodies.
pub fn payload_config() -> web::PayloadConfig {
    web::PayloadConfig::new(BODY_LIMIT)
}
