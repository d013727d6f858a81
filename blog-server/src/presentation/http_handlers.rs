use crate::application::BlogService;
use crate::domain::post::CreatePostRequest;
use crate::domain::DomainError;
use crate::presentation::json_body::read_json_object;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use chrono::{SecondsFormat, Utc};

pub const SERVICE_NAME: &str = "blog-backend";

pub(crate) const FETCH_POSTS_FAILED: &str = "Failed to fetch posts";
pub(crate) const FETCH_POST_FAILED: &str = "Failed to fetch post";
pub(crate) const CREATE_POST_FAILED: &str = "Failed to create post";
pub(crate) const ROUTE_NOT_FOUND: &str = "Route not found";
pub(crate) const SOMETHING_WENT_WRONG: &str = "Something went wrong!";

#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
    service: &'static str,
}

fn error_body(message: &str) -> serde_json::Value {
    serde_json::json!({ "error": message })
}

// Storage detail only goes to the log; the client sees the per-operation
// message.
fn error_to_response(err: DomainError, failure_message: &str) -> HttpResponse {
    match err.to_status_code() {
        400 => HttpResponse::BadRequest().json(error_body(&err.to_string())),
        404 => HttpResponse::NotFound().json(error_body(&err.to_string())),
        _ => {
            tracing::error!("{}: {}", failure_message, err);
            HttpResponse::InternalServerError().json(error_body(failure_message))
        }
    }
}

fn something_went_wrong() -> HttpResponse {
    HttpResponse::InternalServerError().json(error_body(SOMETHING_WENT_WRONG))
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        service: SERVICE_NAME,
    })
}

pub async fn route_not_found() -> impl Responder {
    HttpResponse::NotFound().json(error_body(ROUTE_NOT_FOUND))
}

// ============== Post Handlers ==============

pub async fn list_posts(blog_service: web::Data<BlogService>) -> impl Responder {
    tracing::debug!("Listing posts");

    match blog_service.list_posts().await {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(err) => error_to_response(err, FETCH_POSTS_FAILED),
    }
}

pub async fn get_post(
    blog_service: web::Data<BlogService>,
    path: web::Path<String>,
) -> impl Responder {
    let post_id = path.into_inner();

    tracing::debug!("Getting post with id={}", post_id);

    match blog_service.get_post(&post_id).await {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(err) => error_to_response(err, FETCH_POST_FAILED),
    }
}

pub async fn create_post(
    req: HttpRequest,
    blog_service: web::Data<BlogService>,
    body: web::Bytes,
) -> impl Responder {
    let fields = match read_json_object(&req, &body) {
        Ok(fields) => fields,
        Err(err) => {
            tracing::error!("Failed to parse body of {} {}: {}", req.method(), req.path(), err);
            return something_went_wrong();
        }
    };

    match blog_service
        .create_post(CreatePostRequest::from_object(fields))
        .await
    {
        Ok(post) => HttpResponse::Created().json(post),
        Err(err) => error_to_response(err, CREATE_POST_FAILED),
    }
}
