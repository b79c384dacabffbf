/// HTTP handlers for the gallery API
use actix_web::{HttpResponse, ResponseError};

use crate::error::AppError;

pub mod generation;
pub mod posts;

pub use generation::{generate_image, generation_greeting};
pub use posts::{create_post, list_posts};

/// GET / - Root greeting
pub async fn index_greeting() -> HttpResponse {
    HttpResponse::Ok().body("Hello World!")
}

/// Fallback for unknown routes, keeping the uniform error body
pub async fn not_found() -> HttpResponse {
    AppError::NotFound("route not found".to_string()).error_response()
}
