// src/config/mod.rs

use crate::error::{Result, WellnessError};

pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_ENV_VAR: &str = "GEMINI_MODEL";
pub const API_BASE_ENV_VAR: &str = "GEMINI_API_BASE";

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Process configuration, read once at start-up.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from any variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = read(API_KEY_ENV_VAR).ok_or(WellnessError::MissingCredential {
            var: API_KEY_ENV_VAR,
        })?;

        let model = read(MODEL_ENV_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        if model.contains(char::is_whitespace) || model.contains('/') {
            return Err(WellnessError::Config(format!(
                "{MODEL_ENV_VAR} is not a valid model id: {model}"
            )));
        }

        let api_base = read(API_BASE_ENV_VAR)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();
        if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
            return Err(WellnessError::Config(format!(
                "{API_BASE_ENV_VAR} must be an http(s) URL, got {api_base}"
            )));
        }

        Ok(Self {
            api_key,
            model,
            api_base,
        })
    }
}

// Keeps the credential out of debug logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn missing_key_is_a_credential_error() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(
            err,
            WellnessError::MissingCredential { var: API_KEY_ENV_VAR }
        ));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let err = Config::from_lookup(lookup(&[(API_KEY_ENV_VAR, "   ")])).unwrap_err();
        assert!(matches!(err, WellnessError::MissingCredential { .. }));
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = Config::from_lookup(lookup(&[(API_KEY_ENV_VAR, "k-123")])).unwrap();
        assert_eq!(config.api_key, "k-123");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn overrides_are_read_and_base_is_normalized() {
        let config = Config::from_lookup(lookup(&[
            (API_KEY_ENV_VAR, "k"),
            (MODEL_ENV_VAR, "gemini-2.0-flash"),
            (API_BASE_ENV_VAR, "http://localhost:8080/v1beta/"),
        ]))
        .unwrap();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.api_base, "http://localhost:8080/v1beta");
    }

    #[test]
    fn rejects_bad_base_url() {
        let err = Config::from_lookup(lookup(&[
            (API_KEY_ENV_VAR, "k"),
            (API_BASE_ENV_VAR, "localhost:8080"),
        ]))
        .unwrap_err();
        assert!(matches!(err, WellnessError::Config(_)));
    }

    #[test]
    fn debug_output_redacts_key() {
        let config = Config::from_lookup(lookup(&[(API_KEY_ENV_VAR, "secret-key")])).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("<redacted>"));
    }
}
