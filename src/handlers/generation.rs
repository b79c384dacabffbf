/// Generation handlers - HTTP endpoints for prompt-to-image generation
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::handlers::posts::ErrorResponse;
use crate::metrics;
use crate::AppState;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenerateImageRequest {
    /// Text prompt to generate an image from
    #[validate(length(min = 1, message = "prompt must not be empty"))]
    pub prompt: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GeneratedImageResponse {
    /// Generated image as a base64-encoded string, without a data URI prefix
    pub photo: String,
}

/// GET /api/v1/dalle - Greeting for the generation route
pub async fn generation_greeting() -> HttpResponse {
    HttpResponse::Ok().body("Hello from DALL-E!")
}

/// POST /api/v1/dalle - Generate an image from a text prompt
#[utoipa::path(
    post,
    path = "/api/v1/dalle",
    request_body = GenerateImageRequest,
    responses(
        (status = 200, description = "Generated image as base64", body = GeneratedImageResponse),
        (status = 400, description = "Missing or empty prompt", body = ErrorResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse),
        (status = 503, description = "Generation API not configured", body = ErrorResponse)
    ),
    tag = "generation"
)]
pub async fn generate_image(
    state: web::Data<AppState>,
    body: web::Json<GenerateImageRequest>,
) -> Result<HttpResponse> {
    body.validate()?;

    if !state.generation.is_configured() {
        return Err(AppError::ServiceUnavailable(
            "image generation is not configured".to_string(),
        ));
    }

    let started = Instant::now();
    let generated = state.generation.generate_image(&body.prompt).await;
    metrics::record_upstream("openai", started.elapsed(), generated.is_ok());

    let photo = generated?;
    metrics::IMAGES_GENERATED_TOTAL.inc();

    Ok(HttpResponse::Ok().json(GeneratedImageResponse { photo }))
}
