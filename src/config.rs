use dioxus_logger::tracing::Level;
use reqwest::Url;

use crate::{error::config::ConfigError, model::language::Language};

pub struct Config {
    /// Base URL of the backend API without a trailing slash, e.g. `https://conf.example.org`
    pub api_base_url: String,
    pub language: Language,
    pub log_level: Level,
    /// Credentials used by the binary to log in, if both are set
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the config from any variable source; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional_var =
            |var: &str| lookup(var).filter(|value: &String| !value.trim().is_empty());
        let required_var = |var: &str| {
            optional_var(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let api_base_url = required_var("API_BASE_URL")?;
        let api_base_url = api_base_url.trim_end_matches('/').to_string();
        Url::parse(&api_base_url).map_err(|e| ConfigError::InvalidEnvValue {
            var: "API_BASE_URL".to_string(),
            reason: e.to_string(),
        })?;

        let language = match optional_var("APP_LANGUAGE") {
            Some(value) => value
                .parse::<Language>()
                .map_err(|reason| ConfigError::InvalidEnvValue {
                    var: "APP_LANGUAGE".to_string(),
                    reason,
                })?,
            None => Language::default(),
        };

        let log_level = match optional_var("LOG_LEVEL") {
            Some(value) => value
                .parse::<Level>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "LOG_LEVEL".to_string(),
                    reason: e.to_string(),
                })?,
            None => Level::INFO,
        };

        Ok(Self {
            api_base_url,
            language,
            log_level,
            email: optional_var("AGORA_EMAIL"),
            password: optional_var("AGORA_PASSWORD"),
        })
    }

    /// Login credentials, only when both email & password are configured
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.email, &self.password) {
            (Some(email), Some(password)) => Some((email.as_str(), password.as_str())),
            _ => None,
        }
    }
}
