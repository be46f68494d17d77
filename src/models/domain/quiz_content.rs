use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::domain::{lenient, question::Question};

/// A generated, aggregated or synthesized quiz document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct QuizContent {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::items")]
    pub questions: Vec<Question>,
}

impl QuizContent {
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            questions,
        }
    }

    /// Title used when a quiz is assembled from course material.
    pub fn comprehensive_title(topic: &str) -> String {
        format!("{} - Comprehensive Quiz", topic)
    }
}
