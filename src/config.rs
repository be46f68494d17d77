use std::{env, time::Duration};

use secrecy::SecretString;

const DEFAULT_COMPLETION_API_BASE: &str = "https://api.groq.com/openai/v1";
const DEFAULT_COMPLETION_MODEL: &str = "llama-3.3-70b-versatile";

#[derive(Clone, Debug)]
pub struct Config {
    pub app_env: String,
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
    pub completion_api_key: SecretString,
    pub completion_api_base: String,
    pub completion_model: String,
    pub completion_timeout_secs: u64,
    pub course_max_output_tokens: u32,
    pub quiz_max_output_tokens: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "eduai-local".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: parse_env("WEB_SERVER_PORT", 8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            completion_api_key: SecretString::from(env::var("GROQ_API_KEY").unwrap_or_default()),
            completion_api_base: env::var("COMPLETION_API_BASE")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_API_BASE.to_string()),
            completion_model: env::var("COMPLETION_MODEL")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_MODEL.to_string()),
            completion_timeout_secs: parse_env("COMPLETION_TIMEOUT_SECS", 60),
            course_max_output_tokens: parse_env("COURSE_MAX_OUTPUT_TOKENS", 8000),
            quiz_max_output_tokens: parse_env("QUIZ_MAX_OUTPUT_TOKENS", 4096),
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    pub fn completion_timeout(&self) -> Duration {
        Duration::from_secs(self.completion_timeout_secs)
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are missing
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.completion_api_key.expose_secret().trim().is_empty() {
            panic!(
                "FATAL: GROQ_API_KEY is not set! Every generation request would fall back to template content."
            );
        }

        if self.completion_timeout_secs == 0 {
            panic!("FATAL: COMPLETION_TIMEOUT_SECS must be greater than zero.");
        }

        if self.cors_allowed_origin == "*" {
            panic!("FATAL: CORS_ALLOWED_ORIGIN must name an origin in production, not '*'.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            app_env: "test".to_string(),
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "eduai-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: "http://localhost:5173".to_string(),
            completion_api_key: SecretString::from("test_api_key".to_string()),
            completion_api_base: DEFAULT_COMPLETION_API_BASE.to_string(),
            completion_model: DEFAULT_COMPLETION_MODEL.to_string(),
            completion_timeout_secs: 5,
            course_max_output_tokens: 8000,
            quiz_max_output_tokens: 4096,
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.mongo_conn_string.is_empty());
        assert!(!config.mongo_db_name.is_empty());
        assert!(!config.completion_model.is_empty());
        assert!(config.completion_timeout_secs > 0);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.mongo_db_name, "eduai-test");
        assert_eq!(config.completion_timeout(), Duration::from_secs(5));
        assert!(!config.is_production());
    }

    #[test]
    fn test_validate_for_production_accepts_complete_config() {
        Config::test_config().validate_for_production();
    }

    #[test]
    #[should_panic(expected = "GROQ_API_KEY")]
    fn test_validate_for_production_rejects_missing_key() {
        let config = Config {
            completion_api_key: SecretString::from(String::new()),
            ..Config::test_config()
        };
        config.validate_for_production();
    }
}
