//! Configuration for the gallery service
use serde::Deserialize;

/// Main configuration struct, loaded from environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address the HTTP server binds to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP server listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment name (development, staging, production)
    #[serde(default = "default_app_env")]
    pub app_env: String,

    /// Comma-separated list of allowed CORS origins, `*` allows any
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: String,

    /// Maximum accepted JSON body size in bytes (image payloads arrive inline)
    #[serde(default = "default_max_json_payload_bytes")]
    pub max_json_payload_bytes: usize,

    /// MongoDB connection URL
    #[serde(default = "default_mongodb_url")]
    pub mongodb_url: String,

    /// Database name used when the connection URL does not name one
    #[serde(default = "default_mongodb_database")]
    pub mongodb_database: String,

    /// OpenAI API key (empty disables image generation)
    #[serde(default)]
    pub openai_api_key: String,

    /// Base URL of the OpenAI API
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,

    /// Image model to generate with
    #[serde(default = "default_openai_image_model")]
    pub openai_image_model: String,

    /// Generated image dimensions
    #[serde(default = "default_openai_image_size")]
    pub openai_image_size: String,

    /// Request timeout for image generation calls
    #[serde(default = "default_openai_timeout_secs")]
    pub openai_timeout_secs: u64,

    /// Cloudinary cloud name (empty disables image hosting)
    #[serde(default)]
    pub cloudinary_cloud_name: String,

    /// Cloudinary API key
    #[serde(default)]
    pub cloudinary_api_key: String,

    /// Cloudinary API secret used to sign upload requests
    #[serde(default)]
    pub cloudinary_api_secret: String,

    /// Base URL of the Cloudinary upload API
    #[serde(default = "default_cloudinary_base_url")]
    pub cloudinary_base_url: String,

    /// Request timeout for image upload calls
    #[serde(default = "default_cloudinary_timeout_secs")]
    pub cloudinary_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_cors_allowed_origins() -> String {
    "*".to_string()
}

fn default_max_json_payload_bytes() -> usize {
    52_428_800 // 50 MB, enough for an inline base64 image
}

fn default_mongodb_url() -> String {
    "mongodb://localhost:27017/gallery".to_string()
}

fn default_mongodb_database() -> String {
    "gallery".to_string()
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_image_model() -> String {
    "dall-e-2".to_string()
}

fn default_openai_image_size() -> String {
    "1024x1024".to_string()
}

fn default_openai_timeout_secs() -> u64 {
    120
}

fn default_cloudinary_base_url() -> String {
    "https://api.cloudinary.com".to_string()
}

fn default_cloudinary_timeout_secs() -> u64 {
    120
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            app_env: default_app_env(),
            cors_allowed_origins: default_cors_allowed_origins(),
            max_json_payload_bytes: default_max_json_payload_bytes(),
            mongodb_url: default_mongodb_url(),
            mongodb_database: default_mongodb_database(),
            openai_api_key: String::new(),
            openai_base_url: default_openai_base_url(),
            openai_image_model: default_openai_image_model(),
            openai_image_size: default_openai_image_size(),
            openai_timeout_secs: default_openai_timeout_secs(),
            cloudinary_cloud_name: String::new(),
            cloudinary_api_key: String::new(),
            cloudinary_api_secret: String::new(),
            cloudinary_base_url: default_cloudinary_base_url(),
            cloudinary_timeout_secs: default_cloudinary_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ENV_VARS: &[&str] = &[
        "HOST",
        "PORT",
        "APP_ENV",
        "CORS_ALLOWED_ORIGINS",
        "MAX_JSON_PAYLOAD_BYTES",
        "MONGODB_URL",
        "MONGODB_DATABASE",
        "OPENAI_API_KEY",
        "OPENAI_BASE_URL",
        "OPENAI_IMAGE_MODEL",
        "OPENAI_IMAGE_SIZE",
        "OPENAI_TIMEOUT_SECS",
        "CLOUDINARY_CLOUD_NAME",
        "CLOUDINARY_API_KEY",
        "CLOUDINARY_API_SECRET",
        "CLOUDINARY_BASE_URL",
        "CLOUDINARY_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn defaults_applied_when_env_empty() {
        clear_env();

        let config = Config::from_env().expect("load config");
        assert_eq!(config.port, 8080);
        assert_eq!(config.mongodb_url, "mongodb://localhost:27017/gallery");
        assert_eq!(config.openai_image_model, "dall-e-2");
        assert_eq!(config.openai_image_size, "1024x1024");
        assert_eq!(config.max_json_payload_bytes, 52_428_800);
        assert_eq!(config.cors_allowed_origins, "*");
        assert!(config.openai_api_key.is_empty());
        assert!(config.cloudinary_api_secret.is_empty());
    }

    #[test]
    #[serial]
    fn env_overrides_defaults() {
        clear_env();
        std::env::set_var("PORT", "9090");
        std::env::set_var("MONGODB_URL", "mongodb://db.internal:27017/pictures");
        std::env::set_var("OPENAI_IMAGE_SIZE", "512x512");

        let config = Config::from_env().expect("load config");
        assert_eq!(config.port, 9090);
        assert_eq!(config.mongodb_url, "mongodb://db.internal:27017/pictures");
        assert_eq!(config.openai_image_size, "512x512");

        clear_env();
    }

    #[test]
    #[serial]
    fn default_impl_matches_env_defaults() {
        clear_env();

        let from_env = Config::from_env().expect("load config");
        let from_default = Config::default();
        assert_eq!(from_env.port, from_default.port);
        assert_eq!(from_env.mongodb_url, from_default.mongodb_url);
        assert_eq!(from_env.cloudinary_base_url, from_default.cloudinary_base_url);
    }
}
