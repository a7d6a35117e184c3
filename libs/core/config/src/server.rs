use crate::{env_or_default, env_parse, ConfigError, FromEnv};

/// Bind address used when `HOST` is unset (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 8080;

/// Where the HTTP listener binds
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// `host:port`, ready for `TcpListener::bind`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `HOST` (default `0.0.0.0`) and `PORT` (default `8080`)
impl FromEnv for ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_or_default("HOST", DEFAULT_HOST),
            port: env_parse("PORT", DEFAULT_PORT)?,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}
