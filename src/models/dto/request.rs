use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::models::domain::Question;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(length(max = 200))]
    pub topic: Option<String>,

    #[serde(default, alias = "useAI")]
    pub use_ai: bool,
}

impl CreateCourseRequest {
    /// The topic to generate from, when generation was asked for.
    pub fn generation_topic(&self) -> Option<&str> {
        if !self.use_ai {
            return None;
        }
        self.topic.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizRequest {
    #[validate(length(min = 1))]
    pub course_id: String,

    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 200))]
    pub topic: Option<String>,

    #[serde(default, alias = "useAI")]
    pub use_ai: bool,

    #[serde(default)]
    pub questions: Vec<Question>,
}

impl CreateQuizRequest {
    pub fn generation_topic(&self) -> Option<&str> {
        if !self.use_ai {
            return None;
        }
        self.topic.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressRequest {
    #[validate(length(min = 1))]
    pub course_id: String,

    pub completed_module_id: Option<String>,

    pub completed_lesson_id: Option<String>,

    pub quiz_id: Option<String>,

    #[validate(range(min = 0.0))]
    pub quiz_score: Option<f64>,

    #[validate(range(min = 0.0))]
    pub final_assessment_score: Option<f64>,

    #[validate(range(min = 1))]
    pub total_questions: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TrackSessionRequest {
    #[validate(length(min = 1))]
    pub course_id: String,

    pub start_time: DateTime<Utc>,

    pub end_time: DateTime<Utc>,

    pub lesson_id: Option<String>,

    pub module_id: Option<String>,
}
