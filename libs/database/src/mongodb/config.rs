#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_first, env_parse_opt};

/// Connection string used when no URL is configured
pub const DEFAULT_URL: &str = "mongodb://localhost:27017";

/// Database used when no name is configured
pub const DEFAULT_DATABASE: &str = "tasktracker";

/// MongoDB connection settings
///
/// Built by hand or loaded from environment variables (with the `config` feature).
///
/// # Example
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "tasktracker")
///     .with_app_name("tasktracker-api");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MongoConfig {
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub url: String,

    /// Database name to use
    pub database: String,

    /// Application name reported in server logs
    pub app_name: Option<String>,

    // Overrides for the connection string. `None` keeps whatever `url` says,
    // or the driver default.
    pub max_pool_size: Option<u32>,
    pub min_pool_size: Option<u32>,
    pub connect_timeout_secs: Option<u64>,
    pub server_selection_timeout_secs: Option<u64>,
}

impl MongoConfig {
    /// Config for `url` using the default database
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Config for `url` using a specific database
    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            ..Self::default()
        }
    }

    pub fn with_pool_size(mut self, max_pool_size: u32, min_pool_size: u32) -> Self {
        self.max_pool_size = Some(max_pool_size);
        self.min_pool_size = Some(min_pool_size);
        self
    }

    /// Set the application name for server logs
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            app_name: None,
            max_pool_size: None,
            min_pool_size: None,
            connect_timeout_secs: None,
            server_selection_timeout_secs: None,
        }
    }
}

/// Load MongoConfig from environment variables
///
/// - `MONGODB_URL` or `MONGO_URL` (default: `mongodb://localhost:27017`)
/// - `MONGODB_DATABASE` or `MONGO_DATABASE` (default: `tasktracker`)
/// - `MONGODB_APP_NAME` (optional)
/// - `MONGODB_MAX_POOL_SIZE`, `MONGODB_MIN_POOL_SIZE`,
///   `MONGODB_CONNECT_TIMEOUT_SECS`, `MONGODB_SERVER_SELECTION_TIMEOUT_SECS`
///   (optional; override the matching connection string options)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            url: env_first(&["MONGODB_URL", "MONGO_URL"]).unwrap_or(defaults.url),
            database: env_first(&["MONGODB_DATABASE", "MONGO_DATABASE"])
                .unwrap_or(defaults.database),
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: env_parse_opt("MONGODB_MAX_POOL_SIZE")?,
            min_pool_size: env_parse_opt("MONGODB_MIN_POOL_SIZE")?,
            connect_timeout_secs: env_parse_opt("MONGODB_CONNECT_TIMEOUT_SECS")?,
            server_selection_timeout_secs: env_parse_opt("MONGODB_SERVER_SELECTION_TIMEOUT_SECS")?,
        })
    }
}
