use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

use crate::services::providers::gemini::{GeminiConfig, GEMINI_API_BASE};

/// The key shipped in old `.env` templates; it can never authenticate.
pub const PLACEHOLDER_API_KEY: &str = "your api key";

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Deserialize)]
pub struct WellnessConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub cors: CorsSettings,
}

#[derive(Clone, Deserialize)]
pub struct GeminiSettings {
    pub api_key: String,
    /// Bare model id, e.g. `gemini-2.5-flash`.
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// `["*"]` allows any origin.
    pub allowed_origins: Vec<String>,
}

impl WellnessConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        Self::from_source(common_config, |key| env::var(key).ok())
    }

    /// Build the config from `lookup` instead of the process environment.
    pub fn from_source<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_prod = lookup("ENVIRONMENT").unwrap_or_else(|| "dev".to_string()) == "prod";
        let get = |key: &str, default: Option<&str>| get_env(&lookup, key, default, is_prod);

        let timeout_secs = get(
            "GEMINI_TIMEOUT_SECS",
            Some(&DEFAULT_GEMINI_TIMEOUT_SECS.to_string()),
        )?
        .parse::<u64>()
        .map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("GEMINI_TIMEOUT_SECS is invalid: {}", e))
        })?;

        Ok(WellnessConfig {
            common,
            gemini: GeminiSettings {
                api_key: validate_api_key(get("GEMINI_API_KEY", None)?)?,
                model: normalize_model(&get("GEMINI_MODEL", Some(DEFAULT_GEMINI_MODEL))?),
                api_base: get("GEMINI_API_BASE", Some(GEMINI_API_BASE))?,
                timeout_secs,
            },
            cors: CorsSettings {
                allowed_origins: parse_origins(&get("WELLNESS_ALLOWED_ORIGINS", Some("*"))?),
            },
        })
    }

    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.gemini.api_key.clone(),
            model: self.gemini.model.clone(),
            api_base: self.gemini.api_base.clone(),
            timeout: Duration::from_secs(self.gemini.timeout_secs),
        }
    }
}

/// Misconfiguration fails at startup instead of surfacing later as
/// authentication errors on every request.
fn validate_api_key(key: String) -> Result<String, AppError> {
    let trimmed = key.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(PLACEHOLDER_API_KEY) {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "GEMINI_API_KEY must be set to a real API key"
        )));
    }
    Ok(trimmed.to_string())
}

fn normalize_model(model: &str) -> String {
    let model = model.trim();
    model.strip_prefix("models/").unwrap_or(model).to_string()
}

fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec!["*".to_string()]
    } else {
        origins
    }
}

fn get_env<F>(lookup: &F, key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => Ok(val),
        None => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
