/// Post service - orchestrates image hosting and post persistence
use mongodb::Database;
use std::sync::Arc;
use std::time::Instant;

use crate::db::post_repo;
use crate::error::Result;
use crate::metrics;
use crate::models::Post;
use crate::services::storage::CloudinaryClient;

pub struct PostService {
    database: Database,
    storage: Arc<CloudinaryClient>,
}

impl PostService {
    pub fn new(database: Database, storage: Arc<CloudinaryClient>) -> Self {
        Self { database, storage }
    }

    /// Share a generated image: host it on Cloudinary, then persist the post
    ///
    /// A post is only persisted once its image is hosted; a failed upload
    /// leaves no document behind.
    pub async fn create_post(&self, name: &str, prompt: &str, photo: &str) -> Result<Post> {
        let started = Instant::now();
        let uploaded = self.storage.upload_image(photo).await;
        metrics::record_upstream("cloudinary", started.elapsed(), uploaded.is_ok());
        let uploaded = uploaded?;

        let document =
            post_repo::insert_post(&self.database, name, prompt, &uploaded.url).await?;
        metrics::POSTS_CREATED_TOTAL.inc();

        let post = Post::from(document);
        tracing::info!(post_id = %post.id, "Gallery post created");
        Ok(post)
    }

    /// All posts in the gallery, newest first
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        let documents = post_repo::find_all_posts(&self.database).await?;
        Ok(documents.into_iter().map(Post::from).collect())
    }
}
