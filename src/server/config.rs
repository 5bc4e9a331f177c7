use crate::server::error::config::ConfigError;

/// Used when `DATABASE_URL` is not set
pub static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holonet.db?mode=rwc";
pub static DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL").ok();
        let port = std::env::var("PORT").ok();

        Self::from_values(database_url, port)
    }

    /// Builds the configuration from raw variable values, applying defaults for unset ones.
    pub fn from_values(
        database_url: Option<String>,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        let database_url = database_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let port = match port {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { database_url, port })
    }
}
