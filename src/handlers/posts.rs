/// Post handlers - HTTP endpoints for the gallery feed
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::Post;
use crate::services::PostService;
use crate::AppState;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    /// Display name of the author
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Prompt the image was generated from
    #[validate(length(min = 1, message = "prompt must not be empty"))]
    pub prompt: String,
    /// Image to share, as a base64 data URI
    #[validate(length(min = 1, message = "photo must not be empty"))]
    pub photo: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostListResponse {
    pub success: bool,
    /// All gallery posts, newest first
    pub data: Vec<Post>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostCreatedResponse {
    pub success: bool,
    pub data: Post,
}

/// Uniform error body returned by every endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

/// GET /api/v1/post - List all gallery posts, newest first
#[utoipa::path(
    get,
    path = "/api/v1/post",
    responses(
        (status = 200, description = "All gallery posts, newest first", body = PostListResponse),
        (status = 500, description = "Lookup failed", body = ErrorResponse)
    ),
    tag = "posts"
)]
pub async fn list_posts(state: web::Data<AppState>) -> Result<HttpResponse> {
    let service = PostService::new(state.db.clone(), state.storage.clone());
    let posts = service.list_posts().await?;

    Ok(HttpResponse::Ok().json(PostListResponse {
        success: true,
        data: posts,
    }))
}

/// POST /api/v1/post - Share a generated image to the gallery
///
/// Hosts the inline image on Cloudinary and persists the post with the
/// returned URL.
#[utoipa::path(
    post,
    path = "/api/v1/post",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = PostCreatedResponse),
        (status = 400, description = "Missing or empty field", body = ErrorResponse),
        (status = 500, description = "Upload or persistence failed", body = ErrorResponse),
        (status = 503, description = "Image hosting not configured", body = ErrorResponse)
    ),
    tag = "posts"
)]
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    body.validate()?;

    if !state.storage.is_configured() {
        return Err(AppError::ServiceUnavailable(
            "image hosting is not configured".to_string(),
        ));
    }

    let service = PostService::new(state.db.clone(), state.storage.clone());
    let post = service
        .create_post(&body.name, &body.prompt, &body.photo)
        .await?;

    Ok(HttpResponse::Created().json(PostCreatedResponse {
        success: true,
        data: post,
    }))
}
