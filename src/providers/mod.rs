//! External AI provider clients
pub mod openai;

pub use openai::OpenAiImageClient;
