use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{question::Question, quiz_content::QuizContent};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub course_id: String,
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    pub created_at: DateTime<Utc>,
}

impl Quiz {
    pub fn new(course_id: &str, title: &str, questions: Vec<Question>) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            course_id: course_id.to_string(),
            title: title.to_string(),
            questions,
            created_at: Utc::now(),
        }
    }

    /// Stores generated quiz content, keeping `fallback_title` when the
    /// generated title is blank.
    pub fn from_content(course_id: &str, content: QuizContent, fallback_title: &str) -> Self {
        let title = if content.title.trim().is_empty() {
            fallback_title.to_string()
        } else {
            content.title
        };
        Quiz::new(course_id, &title, content.questions)
    }
}
