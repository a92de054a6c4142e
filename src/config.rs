//! Configuration types.

use secrecy::SecretString;

use crate::error::ConfigError;

/// Service configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gemini API key.
    pub api_key: SecretString,
    /// Model used for profile analysis.
    pub model: String,
    /// Path to the local database file.
    pub db_path: String,
    /// HTTP listen port.
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `GEMINI_API_KEY` is required; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()))?;

        let model = std::env::var("CAREER_PILOT_MODEL")
            .unwrap_or_else(|_| "gemini-2.5-flash".to_string());

        let db_path = std::env::var("CAREER_PILOT_DB_PATH")
            .unwrap_or_else(|_| "./data/career-pilot.db".to_string());

        let port = match std::env::var("CAREER_PILOT_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "CAREER_PILOT_PORT".to_string(),
                message: format!("not a valid port number: {raw}"),
            })?,
            Err(_) => 8080,
        };

        Ok(Self {
            api_key: SecretString::from(api_key),
            model,
            db_path,
            port,
        })
    }
}
