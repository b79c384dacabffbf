//! OpenAI image generation API integration
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::{AppError, Result};

/// OpenAI image generation client
pub struct OpenAiImageClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    image_size: String,
}

// ============================================
// Request types
// ============================================

#[derive(Debug, Serialize)]
struct ImageGenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'a str,
    response_format: &'a str,
}

// ============================================
// Response types
// ============================================

#[derive(Debug, Deserialize)]
struct ImageGenerationResponse {
    data: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
struct GeneratedImage {
    b64_json: Option<String>,
}

impl OpenAiImageClient {
    /// Create a new image generation client from configuration
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.openai_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: cfg.openai_api_key.clone(),
            base_url: cfg.openai_base_url.trim_end_matches('/').to_string(),
            model: cfg.openai_image_model.clone(),
            image_size: cfg.openai_image_size.clone(),
        })
    }

    /// Generate one image for a text prompt
    ///
    /// # Returns
    /// * The generated image as a base64-encoded string, without a data URI
    ///   prefix; clients prepend their own.
    pub async fn generate_image(&self, prompt: &str) -> Result<String> {
        info!(model = %self.model, size = %self.image_size, "Generating image from prompt");

        let request = ImageGenerationRequest {
            model: &self.model,
            prompt,
            n: 1,
            size: &self.image_size,
            response_format: "b64_json",
        };

        let start = std::time::Instant::now();

        let url = format!("{}/images/generations", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalService(format!("Image generation request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "Image generation request failed");
            return Err(AppError::ExternalService(format!(
                "image generation failed ({}): {}",
                status, error_text
            )));
        }

        let generation: ImageGenerationResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse image generation response: {e}"))
        })?;

        let image = generation
            .data
            .into_iter()
            .next()
            .and_then(|image| image.b64_json)
            .ok_or_else(|| {
                AppError::ExternalService(
                    "image generation response contained no image data".to_string(),
                )
            })?;

        debug!(
            elapsed_ms = start.elapsed().as_millis(),
            "Image generation complete"
        );

        Ok(image)
    }

    /// Check if an API key is configured
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(api_key: &str) -> OpenAiImageClient {
        OpenAiImageClient::from_config(&Config {
            openai_api_key: api_key.to_string(),
            ..Config::default()
        })
        .expect("build client")
    }

    #[test]
    fn test_client_not_configured() {
        let client = test_client("");
        assert!(!client.is_configured());
    }

    #[test]
    fn test_client_configured() {
        let client = test_client("test-api-key");
        assert!(client.is_configured());
    }

    #[test]
    fn test_generation_request_shape() {
        let request = ImageGenerationRequest {
            model: "dall-e-2",
            prompt: "a castle in the clouds",
            n: 1,
            size: "1024x1024",
            response_format: "b64_json",
        };

        let json = serde_json::to_value(&request).expect("serialize request");
        assert_eq!(json["model"], "dall-e-2");
        assert_eq!(json["n"], 1);
        assert_eq!(json["response_format"], "b64_json");
    }
}
