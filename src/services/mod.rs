/// Service layer for the gallery API
pub mod posts;
pub mod storage;

pub use posts::PostService;
pub use storage::CloudinaryClient;
