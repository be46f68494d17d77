use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{LessonId, Progress},
        dto::{
            request::{TrackSessionRequest, UpdateProgressRequest},
            response::TrackSessionResponse,
        },
    },
    repositories::{CourseRepository, ProgressRepository},
};

pub struct ProgressService {
    progress: Arc<dyn ProgressRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl ProgressService {
    pub fn new(progress: Arc<dyn ProgressRepository>, courses: Arc<dyn CourseRepository>) -> Self {
        Self { progress, courses }
    }

    pub async fn get_progress(&self, user_id: &str, course_id: &str) -> AppResult<Option<Progress>> {
        self.progress.find_by_user_and_course(user_id, course_id).await
    }

    /// Records completions and scores. Repeating a module or lesson completion
    /// is a no-op; lesson ids must exist in the course content.
    pub async fn update_progress(
        &self,
        user_id: &str,
        request: UpdateProgressRequest,
    ) -> AppResult<Progress> {
        request.validate()?;

        let course = self
            .courses
            .find_by_id(&request.course_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Course with id '{}' not found", request.course_id))
            })?;

        let mut progress = self.load_or_start(user_id, &course.id).await?;

        if let Some(module_id) = non_blank(request.completed_module_id.as_deref()) {
            progress.complete_module(module_id);
        }

        if let Some(raw) = non_blank(request.completed_lesson_id.as_deref()) {
            let lesson_id = raw
                .parse::<LessonId>()
                .map_err(|e| AppError::ValidationError(e.to_string()))?;
            let exists = course
                .content
                .as_ref()
                .and_then(|content| lesson_id.resolve(content))
                .is_some();
            if !exists {
                return Err(AppError::ValidationError(format!(
                    "Lesson '{}' does not exist in course '{}'",
                    lesson_id, course.id
                )));
            }
            progress.complete_lesson(lesson_id);
        }

        if let (Some(quiz_id), Some(score)) = (non_blank(request.quiz_id.as_deref()), request.quiz_score) {
            progress.record_quiz_score(quiz_id, score);
        }

        if let (Some(score), Some(total)) = (request.final_assessment_score, request.total_questions) {
            progress.record_final_assessment(score, total);
        }

        if let Some(content) = &course.content {
            progress.recompute_completed_hours(content);
        }
        progress.touch();

        self.progress.save(progress).await
    }

    /// Appends a learning session and adds its length to the learning hours.
    pub async fn track_session(
        &self,
        user_id: &str,
        request: TrackSessionRequest,
    ) -> AppResult<TrackSessionResponse> {
        request.validate()?;
        if request.end_time < request.start_time {
            return Err(AppError::ValidationError(
                "Session end time must not be before its start time".to_string(),
            ));
        }

        let mut progress = self.load_or_start(user_id, &request.course_id).await?;

        let duration = progress.record_session(
            request.start_time,
            request.end_time,
            request.lesson_id.as_deref().unwrap_or_default(),
            request.module_id.as_deref().unwrap_or_default(),
        );
        progress.touch();

        let progress = self.progress.save(progress).await?;
        log::debug!(
            "Tracked {} minute session for user {} on course {}",
            duration,
            user_id,
            progress.course_id
        );

        Ok(TrackSessionResponse {
            learning_hours: progress.learning_hours,
            session_duration: duration,
            message: "Session tracked successfully".to_string(),
        })
    }

    async fn load_or_start(&self, user_id: &str, course_id: &str) -> AppResult<Progress> {
        Ok(self
            .progress
            .find_by_user_and_course(user_id, course_id)
            .await?
            .unwrap_or_else(|| Progress::new(user_id, course_id)))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
