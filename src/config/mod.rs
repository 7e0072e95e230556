use actix_web::http::Uri;
use log::LevelFilter;

use crate::consts;
use crate::errors::ChatError;

#[derive(Debug, Clone)]
pub struct Settings {
    pub openai_api_key: String,
    pub openai_model_name: String,
    pub openai_base_url: String,
    pub log_level: LevelFilter,
    pub log_file: String,
    pub cors_origins: Vec<String>,
    pub app_name: String,
    pub app_version: String,
    pub host: String,
    pub port: u16,
}

impl Settings {
    /// Builds settings from a variable lookup. Keys are the upper-case
    /// environment variable names.
    pub fn from_source<F>(lookup: F) -> Result<Settings, ChatError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let openai_api_key = get("OPENAI_API_KEY").ok_or_else(|| {
            ChatError::ConfigError("OpenAI API key is not configured (OPENAI_API_KEY).".to_string())
        })?;

        let log_level = parse_log_level(
            &get("LOG_LEVEL").unwrap_or_else(|| consts::DEFAULT_LOG_LEVEL.to_string()),
        )?;

        let port = match get("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| ChatError::ConfigError(format!("invalid PORT {:?}: {}", port, e)))?,
            None => consts::DEFAULT_PORT,
        };

        let cors_origins = match get("CORS_ORIGINS") {
            Some(origins) => parse_origins(&origins)?,
            None => Vec::new(),
        };
        let cors_origins = if cors_origins.is_empty() {
            vec!["*".to_string()]
        } else {
            cors_origins
        };

        Ok(Settings {
            openai_api_key,
            openai_model_name: get("OPENAI_MODEL_NAME")
                .unwrap_or_else(|| consts::DEFAULT_MODEL_NAME.to_string()),
            openai_base_url: get("OPENAI_BASE_URL")
                .unwrap_or_else(|| consts::DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            log_level,
            log_file: get("LOG_FILE").unwrap_or_else(|| consts::DEFAULT_LOG_FILE.to_string()),
            cors_origins,
            app_name: get("APP_NAME").unwrap_or_else(|| consts::DEFAULT_APP_NAME.to_string()),
            app_version: get("APP_VERSION")
                .unwrap_or_else(|| consts::DEFAULT_APP_VERSION.to_string()),
            host: get("HOST").unwrap_or_else(|| consts::DEFAULT_HOST.to_string()),
            port,
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}

fn parse_log_level(level: &str) -> Result<LevelFilter, ChatError> {
    match level.to_ascii_uppercase().as_str() {
        "TRACE" => Ok(LevelFilter::Trace),
        "DEBUG" => Ok(LevelFilter::Debug),
        "INFO" => Ok(LevelFilter::Info),
        "WARN" | "WARNING" => Ok(LevelFilter::Warn),
        "ERROR" | "CRITICAL" => Ok(LevelFilter::Error),
        "OFF" => Ok(LevelFilter::Off),
        _ => Err(ChatError::ConfigError(format!(
            "invalid LOG_LEVEL: {:?}",
            level
        ))),
    }
}

fn parse_origins(origins: &str) -> Result<Vec<String>, ChatError> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(validate_origin)
        .collect()
}

/// Accepts `*` or a bare `scheme://host[:port]` origin.
fn validate_origin(origin: &str) -> Result<String, ChatError> {
    if origin == "*" {
        return Ok(origin.to_string());
    }

    let origin = origin.trim_end_matches('/');
    let invalid = |reason: &str| {
        ChatError::ConfigError(format!(
            "invalid CORS_ORIGINS entry {:?}: {}",
            origin, reason
        ))
    };

    let uri: Uri = origin.parse().map_err(|_| invalid("not a URI"))?;
    if uri.scheme().is_none() {
        return Err(invalid("missing scheme"));
    }
    if uri.host().is_none_or(str::is_empty) {
        return Err(invalid("missing host"));
    }
    let has_path = uri
        .path_and_query()
        .is_some_and(|pq| !matches!(pq.as_str(), "" | "/"));
    if has_path {
        return Err(invalid("origins cannot carry a path or query"));
    }

    Ok(origin.to_string())
}

pub trait SettingsLoader: Send + Sync {
    fn load_settings(&self) -> Result<Settings, ChatError>;
}

pub struct EnvSettingsLoader;

impl EnvSettingsLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvSettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsLoader for EnvSettingsLoader {
    fn load_settings(&self) -> Result<Settings, ChatError> {
        dotenv::dotenv().ok();
        Settings::from_source(|key| std::env::var(key).ok())
    }
}

pub fn load_settings() -> Result<Settings, ChatError> {
    let loader = EnvSettingsLoader::new();
    loader.load_settings()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings, ChatError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_applied() {
        let settings = settings_from(&[("OPENAI_API_KEY", "sk-test")]).unwrap();
        assert_eq!(settings.openai_api_key, "sk-test");
        assert_eq!(settings.openai_model_name, "gpt-4o-mini");
        assert_eq!(settings.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(settings.log_level, LevelFilter::Info);
        assert_eq!(settings.log_file, "app.log");
        assert_eq!(settings.cors_origins, vec!["*".to_string()]);
        assert!(settings.allows_any_origin());
        assert_eq!(settings.app_version, "0.1.0");
        assert_eq!(settings.port, 8000);
    }

    #[rstest]
    #[case(&[])]
    #[case(&[("OPENAI_API_KEY", "")])]
    #[case(&[("OPENAI_API_KEY", "   ")])]
    fn test_missing_api_key_fails_fast(#[case] pairs: &[(&str, &str)]) {
        let result = settings_from(pairs);
        assert!(matches!(result, Err(ChatError::ConfigError(_))));
    }

    #[rstest]
    #[case("debug", LevelFilter::Debug)]
    #[case("INFO", LevelFilter::Info)]
    #[case("WARNING", LevelFilter::Warn)]
    #[case("error", LevelFilter::Error)]
    #[case("CRITICAL", LevelFilter::Error)]
    fn test_log_level_parsing(#[case] raw: &str, #[case] expected: LevelFilter) {
        let settings = settings_from(&[("OPENAI_API_KEY", "k"), ("LOG_LEVEL", raw)]).unwrap();
        assert_eq!(settings.log_level, expected);
    }

    #[test]
    fn test_invalid_log_level() {
        let result = settings_from(&[("OPENAI_API_KEY", "k"), ("LOG_LEVEL", "LOUD")]);
        assert!(matches!(result, Err(ChatError::ConfigError(_))));
    }

    #[test]
    fn test_invalid_port() {
        let result = settings_from(&[("OPENAI_API_KEY", "k"), ("PORT", "http")]);
        assert!(matches!(result, Err(ChatError::ConfigError(_))));
    }

    #[rstest]
    #[case("not a url")]
    #[case("a.example")]
    #[case("https://")]
    #[case("https://a.example/app")]
    #[case("https://a.example, ://broken")]
    fn test_invalid_cors_origin_fails_fast(#[case] origins: &str) {
        let result = settings_from(&[("OPENAI_API_KEY", "k"), ("CORS_ORIGINS", origins)]);
        match result {
            Err(ChatError::ConfigError(msg)) => {
                assert!(msg.contains("invalid CORS_ORIGINS entry"), "{}", msg)
            }
            other => panic!("Expected ConfigError, got {:?}", other),
        }
    }

    #[rstest]
    #[case("*", vec!["*"])]
    #[case("https://a.example/", vec!["https://a.example"])]
    #[case("http://localhost:3000,,", vec!["http://localhost:3000"])]
    #[case(" , ", vec!["*"])]
    fn test_valid_cors_origins(#[case] origins: &str, #[case] expected: Vec<&str>) {
        let settings =
            settings_from(&[("OPENAI_API_KEY", "k"), ("CORS_ORIGINS", origins)]).unwrap();
        assert_eq!(settings.cors_origins, expected);
    }

    #[test]
    fn test_overrides() {
        let settings = settings_from(&[
            ("OPENAI_API_KEY", "k"),
            ("OPENAI_MODEL_NAME", "gpt-4o"),
            ("OPENAI_BASE_URL", "http://localhost:9000/v1/"),
            ("CORS_ORIGINS", "https://a.example, https://b.example"),
            ("PORT", "9090"),
        ])
        .unwrap();
        assert_eq!(settings.openai_model_name, "gpt-4o");
        assert_eq!(settings.openai_base_url, "http://localhost:9000/v1");
        assert_eq!(
            settings.cors_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert!(!settings.allows_any_origin());
        assert_eq!(settings.port, 9090);
    }
}
