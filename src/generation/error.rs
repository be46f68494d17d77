use thiserror::Error;

/// Failures inside the generation pipeline. None of these reach callers of
/// [`ContentGenerator`](super::ContentGenerator); each one routes the request
/// to the template fallback.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Upstream generation failed: {0}")]
    UpstreamGeneration(String),

    #[error("Response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Response is missing required structure: {0}")]
    SchemaViolation(String),
}

impl From<async_openai::error::OpenAIError> for GenerationError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        GenerationError::UpstreamGeneration(err.to_string())
    }
}

impl GenerationError {
    /// Short label for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::UpstreamGeneration(_) => "upstream",
            GenerationError::Parse(_) => "parse",
            GenerationError::SchemaViolation(_) => "schema",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_map_to_parse() {
        let err: GenerationError = serde_json::from_str::<serde_json::Value>("{nope")
            .expect_err("input is not JSON")
            .into();
        assert_eq!(err.kind(), "parse");
    }

    #[test]
    fn messages_name_the_failure() {
        let err = GenerationError::SchemaViolation("no modules".into());
        assert_eq!(
            err.to_string(),
            "Response is missing required structure: no modules"
        );
    }
}
