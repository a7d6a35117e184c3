use mongodb::{Client, bson::doc, options::ClientOptions};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;
use crate::common::{RetryConfig, retry, retry_with_backoff};

/// Error type for MongoDB connection setup
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// The client was built but the server did not answer `ping`
    #[error("Connection failed")]
    ConnectionFailed(#[source] mongodb::error::Error),
}

/// Parse `config` into driver options without touching the network
///
/// Options in the connection string are kept unless `config` overrides them.
async fn client_options(config: &MongoConfig) -> Result<ClientOptions, MongoError> {
    let mut options = ClientOptions::parse(&config.url).await?;

    if let Some(max) = config.max_pool_size {
        options.max_pool_size = Some(max);
    }
    if let Some(min) = config.min_pool_size {
        options.min_pool_size = Some(min);
    }
    if let Some(secs) = config.connect_timeout_secs {
        options.connect_timeout = Some(Duration::from_secs(secs));
    }
    if let Some(secs) = config.server_selection_timeout_secs {
        options.server_selection_timeout = Some(Duration::from_secs(secs));
    }
    // appName in the URL names the deployment; the config only fills it in
    if options.app_name.is_none() {
        options.app_name = config.app_name.clone();
    }

    Ok(options)
}

/// Build a client from `config` and verify the server answers a ping
///
/// # Example
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config};
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "tasktracker");
/// let client = connect_from_config(&config).await?;
/// ```
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    info!(database = %config.database, "Attempting to connect to MongoDB");

    let client = Client::with_options(client_options(config).await?)?;

    // The driver connects lazily; force a round-trip so misconfiguration fails here
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(MongoError::ConnectionFailed)?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

/// [`connect_from_config`] with exponential backoff
///
/// `None` uses [`RetryConfig::default`].
///
/// # Example
/// ```ignore
/// use database::common::RetryConfig;
/// use database::mongodb::{MongoConfig, connect_from_config_with_retry};
///
/// let config = MongoConfig::default();
/// let client = connect_from_config_with_retry(&config, Some(RetryConfig::new().with_max_retries(5))).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> Result<Client, MongoError> {
    match retry_config {
        Some(policy) => retry_with_backoff(|| connect_from_config(config), policy).await,
        None => retry(|| connect_from_config(config)).await,
    }
}
