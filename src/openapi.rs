/// OpenAPI documentation for the gallery service
use utoipa::OpenApi;

use crate::handlers::generation::{GenerateImageRequest, GeneratedImageResponse};
use crate::handlers::posts::{
    CreatePostRequest, ErrorResponse, PostCreatedResponse, PostListResponse,
};
use crate::models::Post;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gallery Service API",
        version = "1.0.0",
        description = "Community gallery for AI-generated images. Generates images from text prompts, hosts shared images on Cloudinary, and serves the gallery feed from MongoDB.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server"),
    ),
    paths(
        crate::handlers::posts::list_posts,
        crate::handlers::posts::create_post,
        crate::handlers::generation::generate_image,
    ),
    components(schemas(
        Post,
        CreatePostRequest,
        PostListResponse,
        PostCreatedResponse,
        GenerateImageRequest,
        GeneratedImageResponse,
        ErrorResponse
    )),
    tags(
        (name = "posts", description = "Gallery post creation and listing"),
        (name = "generation", description = "Prompt-to-image generation"),
    )
)]
pub struct ApiDoc;
