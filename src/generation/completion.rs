use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    config::Config,
    generation::{error::GenerationError, prompt::Prompt},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    JsonObject,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::JsonObject => "json_object",
        }
    }
}

/// Model selection and sampling settings for a single call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOptions {
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub response_format: ResponseFormat,
}

/// Boundary to the external text-generation service.
///
/// One call, one string. Remote errors, timeouts and empty payloads all come
/// back as [`GenerationError::UpstreamGeneration`]; there are no retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn generate_text(
        &self,
        prompt: &Prompt,
        options: &CompletionOptions,
    ) -> Result<String, GenerationError>;
}

/// Chat-completions client for OpenAI-compatible endpoints (Groq by default).
pub struct OpenAiCompletionClient {
    client: Client<OpenAIConfig>,
    timeout: Duration,
}

impl OpenAiCompletionClient {
    pub fn new(api_key: &SecretString, api_base: &str, timeout: Duration) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(api_base);

        Self {
            client: Client::with_config(openai_config),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.completion_api_key,
            &config.completion_api_base,
            config.completion_timeout(),
        )
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn generate_text(
        &self,
        prompt: &Prompt,
        options: &CompletionOptions,
    ) -> Result<String, GenerationError> {
        let body = request_body(prompt, options);

        log::debug!(
            "Sending completion request (model={}, temperature={}, max_tokens={})",
            options.model,
            options.temperature,
            options.max_output_tokens
        );

        let response = tokio::time::timeout(
            self.timeout,
            self.client.chat().create_byot::<_, ChatCompletion>(body),
        )
        .await
        .map_err(|_| {
            GenerationError::UpstreamGeneration(format!(
                "completion request timed out after {}s",
                self.timeout.as_secs()
            ))
        })??;

        extract_content(response)
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

fn request_body(prompt: &Prompt, options: &CompletionOptions) -> Value {
    json!({
        "model": options.model,
        "messages": [
            { "role": "system", "content": prompt.system },
            { "role": "user", "content": prompt.user },
        ],
        "temperature": options.temperature,
        "max_tokens": options.max_output_tokens,
        "response_format": { "type": options.response_format.as_str() },
    })
}

fn extract_content(response: ChatCompletion) -> Result<String, GenerationError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| {
            GenerationError::UpstreamGeneration("no content received from completion service".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> CompletionOptions {
        CompletionOptions {
            model: "test-model".to_string(),
            temperature: 0.5,
            max_output_tokens: 8000,
            response_format: ResponseFormat::JsonObject,
        }
    }

    fn completion(json: Value) -> ChatCompletion {
        serde_json::from_value(json).expect("completion should deserialize")
    }

    #[test]
    fn request_body_carries_both_messages_and_settings() {
        let prompt = Prompt {
            system: "policy".to_string(),
            user: "topic".to_string(),
        };
        let body = request_body(&prompt, &options());

        assert_eq!(body["model"], "test-model");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "policy");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "topic");
        assert_eq!(body["max_tokens"], 8000);
        assert_eq!(body["response_format"]["type"], "json_object");
        assert!((body["temperature"].as_f64().unwrap_or_default() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn extract_content_returns_first_choice() {
        let response = completion(json!({
            "choices": [
                { "message": { "role": "assistant", "content": "{\"a\":1}" } },
                { "message": { "role": "assistant", "content": "ignored" } }
            ]
        }));
        assert_eq!(extract_content(response).expect("content expected"), "{\"a\":1}");
    }

    #[test]
    fn extract_content_rejects_empty_payloads() {
        for response in [
            json!({ "choices": [] }),
            json!({}),
            json!({ "choices": [{ "message": { "content": null } }] }),
            json!({ "choices": [{ "message": { "content": "   " } }] }),
        ] {
            let err = extract_content(completion(response)).expect_err("empty payload");
            assert!(matches!(err, GenerationError::UpstreamGeneration(_)));
        }
    }
}
