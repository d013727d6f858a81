pub mod http_handlers;
pub mod json_body;
pub mod middleware;
pub mod routes;

pub use middleware::configure_cors;
pub use routes::configure_routes;
