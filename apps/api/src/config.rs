use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Which generator backs the plan and kit endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationMode {
    /// Always call the completion endpoint.
    Live,
    /// Offline demo: always serve fallback content.
    Fallback,
    /// Live when an API key is configured, fallback otherwise.
    #[default]
    Auto,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::Live => "live",
            GenerationMode::Fallback => "fallback",
            GenerationMode::Auto => "auto",
        }
    }
}

impl FromStr for GenerationMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(GenerationMode::Live),
            "fallback" | "offline" => Ok(GenerationMode::Fallback),
            "auto" | "" => Ok(GenerationMode::Auto),
            other => bail!("GENERATION_MODE must be one of live, fallback, auto (got '{other}')"),
        }
    }
}

/// Settings for the outbound completion client.
/// Built once in `main` and handed to `LlmClient::new`; nothing reads the
/// process environment after startup.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Absent key is not a startup error: live calls fail with a configuration error instead.
    pub api_key: Option<String>,
    pub base_url: String,
    pub plan_model: String,
    pub kit_model: String,
    pub temperature: f32,
    pub kit_max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            plan_model: DEFAULT_MODEL.to_string(),
            kit_model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            kit_max_tokens: 4000,
            timeout_secs: 120,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmConfig,
    pub generation_mode: GenerationMode,
    pub fallback_library_path: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests never touch process state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = LlmConfig::default();

        let llm = LlmConfig {
            api_key: lookup("OPENAI_API_KEY").filter(|k| !k.trim().is_empty()),
            base_url: lookup("OPENAI_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            plan_model: lookup("PLAN_MODEL").unwrap_or(defaults.plan_model),
            kit_model: lookup("KIT_MODEL").unwrap_or(defaults.kit_model),
            temperature: parse_or(&lookup, "LLM_TEMPERATURE", defaults.temperature)?,
            kit_max_tokens: parse_or(&lookup, "KIT_MAX_TOKENS", defaults.kit_max_tokens)?,
            timeout_secs: parse_or(&lookup, "UPSTREAM_TIMEOUT_SECS", defaults.timeout_secs)?,
        };

        Ok(Config {
            llm,
            generation_mode: lookup("GENERATION_MODE")
                .map(|m| m.parse::<GenerationMode>())
                .transpose()?
                .unwrap_or_default(),
            fallback_library_path: lookup("FALLBACK_LIBRARY_PATH").map(PathBuf::from),
            port: parse_or(&lookup, "PORT", 8080u16).context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Resolves `Auto` against the presence of a credential.
    pub fn uses_live_generation(&self) -> bool {
        match self.generation_mode {
            GenerationMode::Live => true,
            GenerationMode::Fallback => false,
            GenerationMode::Auto => self.llm.api_key.is_some(),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.llm.api_key.is_none());
        assert_eq!(config.llm.base_url, "https://api.openai.com/v1");
        assert_eq!(config.llm.plan_model, "gpt-4o-mini");
        assert_eq!(config.llm.kit_max_tokens, 4000);
        assert_eq!(config.port, 8080);
        assert_eq!(config.generation_mode, GenerationMode::Auto);
        assert!(!config.uses_live_generation());
    }

    #[test]
    fn test_auto_mode_goes_live_with_key() {
        let config = Config::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
        assert_eq!(config.llm.api_key.as_deref(), Some("sk-test"));
        assert!(config.uses_live_generation());
    }

    #[test]
    fn test_blank_key_is_treated_as_missing() {
        let config = Config::from_lookup(lookup_from(&[("OPENAI_API_KEY", "   ")])).unwrap();
        assert!(config.llm.api_key.is_none());
    }

    #[test]
    fn test_fallback_mode_overrides_key() {
        let config = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("GENERATION_MODE", "fallback"),
        ]))
        .unwrap();
        assert!(!config.uses_live_generation());
    }

    #[test]
    fn test_live_mode_without_key_still_live() {
        let config = Config::from_lookup(lookup_from(&[("GENERATION_MODE", "LIVE")])).unwrap();
        assert!(config.uses_live_generation());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config =
            Config::from_lookup(lookup_from(&[("OPENAI_BASE_URL", "http://localhost:9000/v1/")]))
                .unwrap();
        assert_eq!(config.llm.base_url, "http://localhost:9000/v1");
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[("PORT", "eighty")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_mode_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[("GENERATION_MODE", "sometimes")]));
        assert!(result.is_err());
    }
}
