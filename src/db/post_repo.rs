//! Post repository - MongoDB operations for gallery posts
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use mongodb::{Collection, Database};

use crate::models::PostDocument;

/// Collection holding all gallery posts
pub const POSTS_COLLECTION: &str = "posts";

fn posts(database: &Database) -> Collection<PostDocument> {
    database.collection::<PostDocument>(POSTS_COLLECTION)
}

/// Insert a new post and return the stored document with its assigned id
pub async fn insert_post(
    database: &Database,
    name: &str,
    prompt: &str,
    photo_url: &str,
) -> Result<PostDocument, mongodb::error::Error> {
    let mut document = PostDocument {
        id: None,
        name: name.to_string(),
        prompt: prompt.to_string(),
        photo: photo_url.to_string(),
        created_at: Utc::now(),
    };

    let result = posts(database).insert_one(&document, None).await?;
    document.id = result.inserted_id.as_object_id();

    Ok(document)
}

/// Fetch every post, newest first
pub async fn find_all_posts(
    database: &Database,
) -> Result<Vec<PostDocument>, mongodb::error::Error> {
    let options = FindOptions::builder()
        .sort(doc! { "created_at": -1 })
        .build();

    let cursor = posts(database).find(doc! {}, options).await?;
    cursor.try_collect().await
}
