use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::course_content::CourseContent;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default)]
    pub generated_by_ai: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<CourseContent>, // stored verbatim, never edited
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// A course authored by hand, without generated content.
    pub fn new_manual(title: &str, description: &str, instructor_id: &str) -> Self {
        Course {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            instructor_id: instructor_id.to_string(),
            topic: None,
            generated_by_ai: false,
            content: None,
            created_at: Utc::now(),
        }
    }

    /// A course backed by generated (or fallback) content. Generated title and
    /// description win over the requested ones; the topic is the last resort.
    pub fn new_generated(
        topic: &str,
        requested_title: Option<&str>,
        requested_description: Option<&str>,
        instructor_id: &str,
        content: CourseContent,
    ) -> Self {
        let title = first_non_empty(&[Some(content.title.as_str()), requested_title])
            .unwrap_or_else(|| format!("Course on {}", topic));
        let description =
            first_non_empty(&[Some(content.description.as_str()), requested_description])
                .unwrap_or_else(|| format!("Learn {}", topic));

        Course {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            instructor_id: instructor_id.to_string(),
            topic: Some(topic.to_string()),
            generated_by_ai: true,
            content: Some(content),
            created_at: Utc::now(),
        }
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.instructor_id == user_id
    }
}

fn first_non_empty(candidates: &[Option<&str>]) -> Option<String> {
    candidates
        .iter()
        .flatten()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_title_prefers_content_then_request_then_topic() {
        let content = CourseContent {
            title: "Generated".to_string(),
            ..CourseContent::default()
        };
        let course = Course::new_generated("Optics", Some("Requested"), None, "u1", content);
        assert_eq!(course.title, "Generated");
        assert_eq!(course.description, "Learn Optics");

        let course =
            Course::new_generated("Optics", Some("Requested"), None, "u1", CourseContent::default());
        assert_eq!(course.title, "Requested");

        let course = Course::new_generated("Optics", Some("  "), None, "u1", CourseContent::default());
        assert_eq!(course.title, "Course on Optics");
        assert!(course.generated_by_ai);
        assert_eq!(course.topic.as_deref(), Some("Optics"));
    }

    #[test]
    fn manual_course_has_no_content() {
        let course = Course::new_manual("Intro", "desc", "u1");
        assert!(!course.generated_by_ai);
        assert!(course.content.is_none());
        assert!(course.is_owned_by("u1"));
        assert!(!course.is_owned_by("u2"));
    }
}
