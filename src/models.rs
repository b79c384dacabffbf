//! Post data shapes: the MongoDB document and the API representation
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A gallery post as stored in the `posts` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub prompt: String,
    pub photo: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// A gallery post as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Post {
    /// Document id as a hex string
    pub id: String,
    /// Display name of the author
    pub name: String,
    /// Prompt the image was generated from
    pub prompt: String,
    /// Hosted image URL
    pub photo: String,
    pub created_at: DateTime<Utc>,
}

impl From<PostDocument> for Post {
    fn from(doc: PostDocument) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: doc.name,
            prompt: doc.prompt,
            photo: doc.photo,
            created_at: doc.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_exposes_hex_document_id() {
        let oid = ObjectId::new();
        let doc = PostDocument {
            id: Some(oid),
            name: "ada".to_string(),
            prompt: "a castle in the clouds".to_string(),
            photo: "https://res.cloudinary.com/demo/image/upload/castle.png".to_string(),
            created_at: Utc::now(),
        };

        let post = Post::from(doc);
        assert_eq!(post.id, oid.to_hex());
        assert_eq!(post.id.len(), 24);
        assert_eq!(post.prompt, "a castle in the clouds");
    }

    #[test]
    fn post_serializes_created_at_as_rfc3339() {
        let post = Post {
            id: "65f2a0c4b7e9d21a3c8f0e11".to_string(),
            name: "ada".to_string(),
            prompt: "a castle".to_string(),
            photo: "https://example.com/castle.png".to_string(),
            created_at: "2026-01-15T10:30:00Z".parse().expect("timestamp"),
        };

        let json = serde_json::to_value(&post).expect("serialize post");
        assert_eq!(json["created_at"], "2026-01-15T10:30:00Z");
    }
}
