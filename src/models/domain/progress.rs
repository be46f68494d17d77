use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{course_content::CourseContent, lesson_id::LessonId};

/// A learner's progress through one course.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    #[serde(default)]
    pub completed_modules: Vec<String>,
    #[serde(default)]
    pub completed_lessons: Vec<String>, // "<moduleIndex>-<lessonIndex>"
    #[serde(default)]
    pub completed_hours: f64,
    #[serde(default)]
    pub learning_hours: f64,
    #[serde(default)]
    pub quiz_scores: Vec<QuizScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_assessment_score: Option<FinalAssessmentScore>,
    pub last_accessed: DateTime<Utc>,
    #[serde(default)]
    pub session_logs: Vec<SessionLog>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizScore {
    pub quiz_id: String,
    pub score: f64,
    pub taken_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalAssessmentScore {
    pub score: f64,
    pub total_questions: u32,
    pub taken_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionLog {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration: i64, // minutes
    pub lesson_id: String,
    pub module_id: String,
}

impl Progress {
    pub fn new(user_id: &str, course_id: &str) -> Self {
        Progress {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            course_id: course_id.to_string(),
            completed_modules: Vec::new(),
            completed_lessons: Vec::new(),
            completed_hours: 0.0,
            learning_hours: 0.0,
            quiz_scores: Vec::new(),
            final_assessment_score: None,
            last_accessed: Utc::now(),
            session_logs: Vec::new(),
        }
    }

    /// Returns `false` when the module was already recorded.
    pub fn complete_module(&mut self, module_id: &str) -> bool {
        if self.completed_modules.iter().any(|m| m == module_id) {
            return false;
        }
        self.completed_modules.push(module_id.to_string());
        true
    }

    /// Returns `false` when the lesson was already recorded.
    pub fn complete_lesson(&mut self, lesson: LessonId) -> bool {
        let key = lesson.to_string();
        if self.completed_lessons.contains(&key) {
            return false;
        }
        self.completed_lessons.push(key);
        true
    }

    pub fn record_quiz_score(&mut self, quiz_id: &str, score: f64) {
        self.quiz_scores.push(QuizScore {
            quiz_id: quiz_id.to_string(),
            score,
            taken_at: Utc::now(),
        });
    }

    pub fn record_final_assessment(&mut self, score: f64, total_questions: u32) {
        self.final_assessment_score = Some(FinalAssessmentScore {
            score,
            total_questions,
            taken_at: Utc::now(),
        });
    }

    /// Appends a session log and adds its rounded duration to the learning
    /// hours. Returns the duration in minutes.
    pub fn record_session(
        &mut self,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        lesson_id: &str,
        module_id: &str,
    ) -> i64 {
        let seconds = (end_time - start_time).num_seconds();
        let duration = (seconds as f64 / 60.0).round() as i64;

        self.session_logs.push(SessionLog {
            start_time,
            end_time,
            duration,
            lesson_id: lesson_id.to_string(),
            module_id: module_id.to_string(),
        });
        self.learning_hours += duration as f64 / 60.0;
        duration
    }

    /// Sum of the estimated hours of every completed lesson that still
    /// resolves against `content`.
    pub fn recompute_completed_hours(&mut self, content: &CourseContent) {
        self.completed_hours = self
            .completed_lessons
            .iter()
            .filter_map(|raw| raw.parse::<LessonId>().ok())
            .filter_map(|id| id.resolve(content))
            .map(|lesson| lesson.estimated_hours)
            .sum();
    }

    pub fn touch(&mut self) {
        self.last_accessed = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::course_content::{Lesson, Module};
    use chrono::Duration;

    #[test]
    fn completing_twice_is_idempotent() {
        let mut progress = Progress::new("u1", "c1");
        assert!(progress.complete_module("0"));
        assert!(!progress.complete_module("0"));
        assert!(progress.complete_lesson(LessonId::new(0, 1)));
        assert!(!progress.complete_lesson(LessonId::new(0, 1)));

        assert_eq!(progress.completed_modules, vec!["0"]);
        assert_eq!(progress.completed_lessons, vec!["0-1"]);
    }

    #[test]
    fn session_duration_rounds_to_minutes_and_accumulates_hours() {
        let mut progress = Progress::new("u1", "c1");
        let start = Utc::now();

        let first = progress.record_session(start, start + Duration::seconds(90 * 60 + 20), "0-0", "0");
        let second = progress.record_session(start, start + Duration::minutes(30), "", "");

        assert_eq!(first, 90);
        assert_eq!(second, 30);
        assert_eq!(progress.session_logs.len(), 2);
        assert!((progress.learning_hours - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn completed_hours_follow_resolved_lessons() {
        let content = CourseContent {
            modules: vec![Module {
                lessons: vec![
                    Lesson {
                        estimated_hours: 2.0,
                        ..Lesson::default()
                    },
                    Lesson {
                        estimated_hours: 1.5,
                        ..Lesson::default()
                    },
                ],
                ..Module::default()
            }],
            ..CourseContent::default()
        };

        let mut progress = Progress::new("u1", "c1");
        progress.complete_lesson(LessonId::new(0, 0));
        progress.complete_lesson(LessonId::new(0, 1));
        progress.completed_lessons.push("7-7".to_string());
        progress.recompute_completed_hours(&content);

        assert!((progress.completed_hours - 3.5).abs() < f64::EPSILON);
    }
}
