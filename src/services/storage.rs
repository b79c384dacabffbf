/// Cloudinary storage client for hosting gallery images
///
/// Shared images arrive as inline base64 data URIs and are pushed to the
/// Cloudinary upload API with a signed form request. Only the returned URL
/// is persisted; image bytes never touch the database.
use reqwest::Client as HttpClient;
use serde::Deserialize;
use sha1::{Digest, Sha1};
use std::time::Duration;

use crate::config::Config;
use crate::error::{AppError, Result};

/// Upload endpoint response, trimmed to the fields the service consumes
#[derive(Debug, Deserialize)]
pub struct CloudinaryUploadResponse {
    pub public_id: String,
    /// Canonical URL of the hosted image, persisted with the post
    pub url: String,
    pub secure_url: String,
}

/// Cloudinary upload API client
pub struct CloudinaryClient {
    cloud_name: String,
    api_key: String,
    api_secret: String,
    base_url: String,
    http_client: HttpClient,
}

impl CloudinaryClient {
    /// Create a new Cloudinary client from configuration
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(cfg.cloudinary_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {e}")))?;

        tracing::info!(
            cloud_name = %cfg.cloudinary_cloud_name,
            "Cloudinary storage client initialized"
        );

        Ok(Self {
            cloud_name: cfg.cloudinary_cloud_name.clone(),
            api_key: cfg.cloudinary_api_key.clone(),
            api_secret: cfg.cloudinary_api_secret.clone(),
            base_url: cfg.cloudinary_base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    /// Check if upload credentials are configured
    pub fn is_configured(&self) -> bool {
        !self.cloud_name.is_empty() && !self.api_key.is_empty() && !self.api_secret.is_empty()
    }

    fn upload_url(&self) -> String {
        format!("{}/v1_1/{}/image/upload", self.base_url, self.cloud_name)
    }

    /// Upload an inline image and return its hosted location
    ///
    /// `file` is passed through opaque: a base64 data URI or a remote URL,
    /// both of which the upload API accepts.
    pub async fn upload_image(&self, file: &str) -> Result<CloudinaryUploadResponse> {
        let timestamp = chrono::Utc::now().timestamp();
        let signature = sign_upload(timestamp, &self.api_secret);
        let timestamp_field = timestamp.to_string();

        let form = [
            ("file", file),
            ("api_key", self.api_key.as_str()),
            ("timestamp", timestamp_field.as_str()),
            ("signature", signature.as_str()),
        ];

        let start = std::time::Instant::now();
        let response = self
            .http_client
            .post(self.upload_url())
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Cloudinary upload failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, error = %body, "Cloudinary upload rejected");
            return Err(AppError::ExternalService(format!(
                "Cloudinary upload failed with status {}: {}",
                status, body
            )));
        }

        let uploaded: CloudinaryUploadResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse Cloudinary response: {e}"))
        })?;

        tracing::info!(
            public_id = %uploaded.public_id,
            secure_url = %uploaded.secure_url,
            elapsed_ms = start.elapsed().as_millis(),
            "Image uploaded to Cloudinary"
        );

        Ok(uploaded)
    }
}

/// Compute the SHA-1 request signature over the signed form parameters.
///
/// Cloudinary signs the alphabetically ordered parameters (everything except
/// `file` and `api_key`) concatenated with the API secret. This service only
/// sends `timestamp`, so the signed string is `timestamp=<ts><secret>`.
fn sign_upload(timestamp: i64, api_secret: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(format!("timestamp={timestamp}").as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(cloud_name: &str, api_key: &str, api_secret: &str) -> CloudinaryClient {
        CloudinaryClient::from_config(&Config {
            cloudinary_cloud_name: cloud_name.to_string(),
            cloudinary_api_key: api_key.to_string(),
            cloudinary_api_secret: api_secret.to_string(),
            ..Config::default()
        })
        .expect("build client")
    }

    #[test]
    fn test_upload_signature() {
        assert_eq!(
            sign_upload(1234567890, "shhh"),
            "03ce8f00121318ba0ede212a6e4daaa329df5813"
        );
        assert_eq!(
            sign_upload(1700000000, "top-secret"),
            "cb2a6f5ba08a4de4a2761b773b7b9d3c37f18440"
        );
    }

    #[test]
    fn test_upload_response_parsing() {
        let body = r#"{
            "public_id": "gallery/abc123",
            "version": 1700000000,
            "url": "http://res.cloudinary.com/demo/image/upload/v1700000000/abc123.png",
            "secure_url": "https://res.cloudinary.com/demo/image/upload/v1700000000/abc123.png"
        }"#;

        let parsed: CloudinaryUploadResponse =
            serde_json::from_str(body).expect("parse upload response");
        assert_eq!(parsed.public_id, "gallery/abc123");
        assert_eq!(
            parsed.url,
            "http://res.cloudinary.com/demo/image/upload/v1700000000/abc123.png"
        );
        assert!(parsed.secure_url.starts_with("https://"));
    }

    #[test]
    fn test_upload_url_includes_cloud_name() {
        let client = test_client("demo", "key", "secret");
        assert_eq!(
            client.upload_url(),
            "https://api.cloudinary.com/v1_1/demo/image/upload"
        );
    }

    #[test]
    fn test_client_not_configured() {
        let client = test_client("", "", "");
        assert!(!client.is_configured());

        let partial = test_client("demo", "key", "");
        assert!(!partial.is_configured());
    }

    #[test]
    fn test_client_configured() {
        let client = test_client("demo", "key", "secret");
        assert!(client.is_configured());
    }
}
