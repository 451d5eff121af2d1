use std::time::Duration;
use anyhow::{Context, Result};

use crate::env_keys::{EMOTION_MODEL, HOST, MODEL_TIMEOUT_MS, PORT, SENTIMENT_MODEL, SERVICE_NAME, USE_MODELS};

pub const DEFAULT_SERVICE_NAME: &str = "ai-service";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8001;
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-haiku-20240307-v1:0";
pub const DEFAULT_MODEL_TIMEOUT_MS: u64 = 10_000;

/// Text handed to a model is cut to this many characters.
pub const MAX_MODEL_INPUT_CHARS: usize = 1000;


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub service_name: String,
    pub host: String,
    pub port: u16,
    pub use_models: bool,
    pub sentiment_model_id: Option<String>,
    pub emotion_model_id: Option<String>,
    pub model_timeout: Duration,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_owned(),
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            use_models: true,
            sentiment_model_id: Some(DEFAULT_MODEL_ID.to_owned()),
            emotion_model_id: Some(DEFAULT_MODEL_ID.to_owned()),
            model_timeout: Duration::from_millis(DEFAULT_MODEL_TIMEOUT_MS),
        }
    }
}

impl AnalysisConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup(PORT) {
            Some(port) => port.trim().parse::<u16>().with_context(|| format!("Invalid {}: {}", PORT, port))?,
            None => defaults.port,
        };

        let model_timeout = match lookup(MODEL_TIMEOUT_MS) {
            Some(millis) => {
                let millis = millis.trim().parse::<u64>().with_context(|| format!("Invalid {}: {}", MODEL_TIMEOUT_MS, millis))?;
                Duration::from_millis(millis)
            },
            None => defaults.model_timeout,
        };

        let use_models = lookup(USE_MODELS).map(|value| parse_flag(&value)).unwrap_or(defaults.use_models);

        Ok(Self {
            service_name: lookup(SERVICE_NAME).unwrap_or(defaults.service_name),
            host: lookup(HOST).unwrap_or(defaults.host),
            port,
            use_models,
            sentiment_model_id: model_id(lookup(SENTIMENT_MODEL), defaults.sentiment_model_id),
            emotion_model_id: model_id(lookup(EMOTION_MODEL), defaults.emotion_model_id),
            model_timeout,
        })
    }

    /// Config with both model capabilities switched off.
    pub fn heuristic_only() -> Self {
        Self {
            use_models: false,
            sentiment_model_id: None,
            emotion_model_id: None,
            ..Self::default()
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(value.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off")
}

// set but empty means "no model"
fn model_id(value: Option<String>, default: Option<String>) -> Option<String> {
    match value {
        Some(id) if id.trim().is_empty() => None,
        Some(id) => Some(id.trim().to_owned()),
        None => default,
    }
}


#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AnalysisConfig> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AnalysisConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.port, 8001);
        assert_eq!(config.service_name, "ai-service");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            (PORT, "9000"),
            (SERVICE_NAME, "therapy"),
            (MODEL_TIMEOUT_MS, "250"),
            (SENTIMENT_MODEL, "model-a"),
            (EMOTION_MODEL, ""),
        ]).unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.service_name, "therapy");
        assert_eq!(config.model_timeout, Duration::from_millis(250));
        assert_eq!(config.sentiment_model_id.as_deref(), Some("model-a"));
        assert_eq!(config.emotion_model_id, None);
    }

    #[test]
    fn use_models_flag() {
        for off in ["false", "0", "No", " off "] {
            assert!(!config_from(&[(USE_MODELS, off)]).unwrap().use_models);
        }
        assert!(config_from(&[(USE_MODELS, "true")]).unwrap().use_models);
    }

    #[test]
    fn bad_numbers_are_errors() {
        assert!(config_from(&[(PORT, "eighty")]).is_err());
        assert!(config_from(&[(MODEL_TIMEOUT_MS, "-5")]).is_err());
    }
}
