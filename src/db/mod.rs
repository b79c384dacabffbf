//! MongoDB connection management
use mongodb::bson::doc;
use mongodb::{Client, Database};

use crate::config::Config;

pub mod post_repo;

/// Build a database handle from the configured connection URL.
///
/// The database named in the URL path wins; `MONGODB_DATABASE` is the
/// fallback for URLs without one. Connections are established lazily on
/// first use, so startup should follow up with [`ping`].
pub async fn connect(config: &Config) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(&config.mongodb_url).await?;
    let database = client
        .default_database()
        .unwrap_or_else(|| client.database(&config.mongodb_database));

    tracing::info!(database = %database.name(), "MongoDB client initialized");
    Ok(database)
}

/// Round-trip a `ping` command to verify the deployment is reachable.
pub async fn ping(database: &Database) -> Result<(), mongodb::error::Error> {
    database.run_command(doc! { "ping": 1 }, None).await?;
    Ok(())
}
