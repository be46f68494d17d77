use serde::Serialize;

use crate::models::domain::Progress;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSessionResponse {
    pub learning_hours: f64,
    pub session_duration: i64,
    pub message: String,
}

/// Progress as returned to clients; a learner with no record yet gets an
/// empty view rather than a 404.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProgressResponse {
    Recorded(Progress),
    Empty(EmptyProgress),
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyProgress {
    pub completed_modules: Vec<String>,
    pub completed_lessons: Vec<String>,
    pub quiz_scores: Vec<String>,
}

impl From<Option<Progress>> for ProgressResponse {
    fn from(progress: Option<Progress>) -> Self {
        match progress {
            Some(p) => ProgressResponse::Recorded(p),
            None => ProgressResponse::Empty(EmptyProgress::default()),
        }
    }
}
