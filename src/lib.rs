/// Gallery Service Library
///
/// Backend for a community gallery of AI-generated images: turns text prompts
/// into images through the OpenAI API, hosts shared images on Cloudinary, and
/// persists gallery posts in MongoDB.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers for posts and image generation
/// - `models`: Post document and API representations
/// - `services`: Business logic and the Cloudinary storage client
/// - `providers`: External AI provider clients
/// - `db`: MongoDB access layer and the post repository
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Observability and metrics collection
/// - `openapi`: API documentation
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod openapi;
pub mod providers;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};

use mongodb::Database;
use std::sync::Arc;

use crate::providers::OpenAiImageClient;
use crate::services::CloudinaryClient;

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub generation: Arc<OpenAiImageClient>,
    pub storage: Arc<CloudinaryClient>,
}
