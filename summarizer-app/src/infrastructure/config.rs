use std::time::Duration;
use summarizer_errors::AppError;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

const COMPLETION_TIMEOUT: Duration = Duration::from_secs(30);
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const FETCH_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionConfig {
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub base_url: String,
    pub timeout: Duration,
}

impl CompletionConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: COMPLETION_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: FETCH_TIMEOUT,
            user_agent: FETCH_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub completion: CompletionConfig,
    pub fetch: FetchConfig,
    pub debug: bool,
    pub log_level: String,
}

impl AppConfig {
    /// Reads the process environment. Load a `.env` file with `dotenvy` beforehand.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                AppError::Configuration(
                    "OPENAI_API_KEY is not set in the environment variables. \
                     Please set it in your .env file or as an environment variable."
                        .to_string(),
                )
            })?;

        let mut completion = CompletionConfig::new(api_key);

        if let Some(model) = lookup("OPENAI_MODEL").filter(|m| !m.trim().is_empty()) {
            completion.model = model.trim().to_string();
        }

        if let Some(raw) = lookup("OPENAI_TEMPERATURE") {
            completion.temperature = raw.trim().parse().map_err(|_| {
                AppError::Configuration(format!("OPENAI_TEMPERATURE is not a number: {}", raw))
            })?;
        }

        if let Some(base_url) = lookup("OPENAI_BASE_URL").filter(|u| !u.trim().is_empty()) {
            completion.base_url = base_url.trim().trim_end_matches('/').to_string();
        }

        let debug = lookup("DEBUG")
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let log_level = lookup("LOG_LEVEL")
            .map(|l| l.trim().to_uppercase())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            completion,
            fetch: FetchConfig::default(),
            debug,
            log_level,
        })
    }

    /// Applies the `--debug` flag.
    pub fn with_debug(mut self) -> Self {
        self.debug = true;
        self.log_level = "DEBUG".to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_is_configuration_error() {
        let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, AppError::Configuration(msg) if msg.contains("OPENAI_API_KEY")));
    }

    #[test]
    fn test_blank_api_key_is_configuration_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "   ")])).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
        assert_eq!(config.completion.api_key, "sk-test");
        assert_eq!(config.completion.model, DEFAULT_MODEL);
        assert_eq!(config.completion.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(config.completion.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.fetch.timeout, Duration::from_secs(10));
        assert!(config.fetch.user_agent.starts_with("Mozilla/5.0"));
        assert!(!config.debug);
        assert_eq!(config.log_level, "INFO");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o"),
            ("OPENAI_TEMPERATURE", "0.2"),
            ("OPENAI_BASE_URL", "http://localhost:8080/v1/"),
            ("DEBUG", "TRUE"),
            ("LOG_LEVEL", "warn"),
        ]))
        .unwrap();
        assert_eq!(config.completion.model, "gpt-4o");
        assert_eq!(config.completion.temperature, 0.2);
        assert_eq!(config.completion.base_url, "http://localhost:8080/v1");
        assert!(config.debug);
        assert_eq!(config.log_level, "WARN");
    }

    #[test]
    fn test_bad_temperature_is_configuration_error() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_TEMPERATURE", "warm"),
        ]))
        .unwrap_err();
        assert!(matches!(err, AppError::Configuration(msg) if msg.contains("warm")));
    }

    #[test]
    fn test_with_debug_forces_debug_level() {
        let config = AppConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")]))
            .unwrap()
            .with_debug();
        assert!(config.debug);
        assert_eq!(config.log_level, "DEBUG");
    }
}
