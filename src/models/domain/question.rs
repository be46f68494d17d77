use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::domain::lenient;

/// Multiple-choice question shared by chapter quizzes, final assessments and
/// stored quizzes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Question {
    #[serde(deserialize_with = "lenient::text")]
    pub question: String,
    #[serde(deserialize_with = "lenient::items")]
    pub options: Vec<String>, // four expected
    #[serde(deserialize_with = "lenient::text")]
    pub correct_answer: String, // must match one option exactly
    #[serde(deserialize_with = "lenient::text")]
    pub explanation: String,
}

impl Question {
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options,
            correct_answer: correct_answer.into(),
            explanation: explanation.into(),
        }
    }

    /// Key used for duplicate detection: trimmed and lower-cased text.
    pub fn normalized_text(&self) -> String {
        self.question.trim().to_lowercase()
    }

    pub fn has_valid_answer(&self) -> bool {
        self.options.iter().any(|option| option == &self.correct_answer)
    }

    pub fn is_well_formed(&self) -> bool {
        !self.question.trim().is_empty() && self.has_valid_answer()
    }
}

/// Wrapper matching the `{ "questions": [...] }` shape used by chapter quizzes
/// and the final assessment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct QuestionSet {
    #[serde(deserialize_with = "lenient::items")]
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
