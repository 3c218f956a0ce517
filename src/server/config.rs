use crate::server::error::config::ConfigError;

/// Default OpenAI API base URL.
pub static DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
/// Default model used for itinerary generation.
pub static DEFAULT_OPENAI_MODEL: &str = "gpt-5-nano";

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// `DATABASE_URL`, `VALKEY_URL` and `OPENAI_API_KEY` are required. `OPENAI_BASE_URL` and
    /// `OPENAI_MODEL` fall back to the public API and `gpt-5-nano`.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is missing or empty
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };
        let optional = |var: &str, default: &str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let openai_base_url = optional("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL);
        if !openai_base_url.starts_with("http://") && !openai_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidEnvValue {
                var: "OPENAI_BASE_URL".to_string(),
                reason: "must start with http:// or https://".to_string(),
            });
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_base_url: openai_base_url.trim_end_matches('/').to_string(),
            openai_model: optional("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
        })
    }
}
