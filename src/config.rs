//! Environment-driven configuration resolved once at process startup.

use std::env;

use thiserror::Error;

/// Database used when `MONGO_DB` is not set.
const DEFAULT_DB: &str = "multimedia_db";
/// Port used when neither `PORT` nor `SERVER_PORT` is set.
const DEFAULT_PORT: u16 = 8080;

/// Errors raised while reading the process environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent.
    #[error("required environment variable `{var}` is not set")]
    MissingEnvVar {
        /// Name of the missing variable.
        var: &'static str,
    },
    /// A variable is present but cannot be parsed.
    #[error("environment variable `{var}` holds an invalid value `{value}`")]
    InvalidValue {
        /// Name of the offending variable.
        var: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },
}

/// Immutable runtime configuration shared across the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// MongoDB connection string.
    pub mongo_uri: String,
    /// Logical database holding the resource collections.
    pub database_name: String,
    /// TCP port the server binds to.
    pub port: u16,
}

impl AppConfig {
    /// Load the configuration from the environment.
    ///
    /// `MONGO_URI` is mandatory; the process must not start serving without
    /// a store address. `MONGO_DB` and `PORT`/`SERVER_PORT` fall back to
    /// defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mongo_uri =
            env::var("MONGO_URI").map_err(|_| ConfigError::MissingEnvVar { var: "MONGO_URI" })?;
        let database_name = env::var("MONGO_DB").unwrap_or_else(|_| DEFAULT_DB.to_owned());

        let port = match env::var("PORT").or_else(|_| env::var("SERVER_PORT")) {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: "PORT",
                value: raw,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            mongo_uri,
            database_name,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation is process-global, so every from_env path is
    // exercised in a single test.
    #[test]
    fn from_env_paths() {
        unsafe {
            env::remove_var("MONGO_URI");
            env::remove_var("MONGO_DB");
            env::remove_var("PORT");
            env::remove_var("SERVER_PORT");
        }
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::MissingEnvVar { var: "MONGO_URI" })
        ));

        unsafe {
            env::set_var("MONGO_URI", "mongodb://localhost:27017");
        }
        let config = AppConfig::from_env().expect("config with defaults");
        assert_eq!(config.database_name, DEFAULT_DB);
        assert_eq!(config.port, DEFAULT_PORT);

        unsafe {
            env::set_var("PORT", "not-a-port");
        }
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::InvalidValue { var: "PORT", .. })
        ));

        unsafe {
            env::remove_var("MONGO_URI");
            env::remove_var("PORT");
        }
    }
}
