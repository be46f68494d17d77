use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    generation::{aggregate, ContentGenerator},
    models::{
        domain::{Course, CourseContent, Quiz, QuizContent},
        dto::request::{CreateCourseRequest, UpdateCourseRequest},
    },
    repositories::{CourseRepository, QuizRepository},
};

pub struct CourseService {
    courses: Arc<dyn CourseRepository>,
    quizzes: Arc<dyn QuizRepository>,
    generator: Arc<ContentGenerator>,
}

impl CourseService {
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        quizzes: Arc<dyn QuizRepository>,
        generator: Arc<ContentGenerator>,
    ) -> Self {
        Self {
            courses,
            quizzes,
            generator,
        }
    }

    /// Creates a course. With `useAI` and a topic the content is generated and
    /// a comprehensive quiz is stored alongside it.
    pub async fn create_course(
        &self,
        instructor_id: &str,
        request: CreateCourseRequest,
    ) -> AppResult<Course> {
        request.validate()?;

        let Some(topic) = request.generation_topic() else {
            let title = request
                .title
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .ok_or_else(|| {
                    AppError::ValidationError(
                        "A title is required unless the course is generated from a topic".to_string(),
                    )
                })?;
            let course = Course::new_manual(
                title,
                request.description.as_deref().unwrap_or_default(),
                instructor_id,
            );
            return self.courses.create(course).await;
        };

        log::info!("Generating course for topic '{}'", topic);
        let content = self.generator.generate_course_content(topic).await;
        log::info!(
            "Course content ready: {} modules, {} lessons",
            content.modules.len(),
            content.lesson_count()
        );

        let course = Course::new_generated(
            topic,
            request.title.as_deref(),
            request.description.as_deref(),
            instructor_id,
            content,
        );
        let course = self.courses.create(course).await?;
        log::info!("Course saved: {}", course.id);

        if let Some(content) = &course.content {
            if let Err(e) = self.create_course_quiz(&course, topic, content).await {
                log::error!("Failed to create quiz for course {}: {}", course.id, e);
            }
        }

        Ok(course)
    }

    async fn create_course_quiz(
        &self,
        course: &Course,
        topic: &str,
        content: &CourseContent,
    ) -> AppResult<Quiz> {
        let questions = aggregate::aggregate_course_questions(content);

        let quiz = if questions.len() >= aggregate::MIN_AGGREGATED_QUESTIONS {
            Quiz::new(
                &course.id,
                &QuizContent::comprehensive_title(&course.title),
                questions,
            )
        } else {
            let generated = self.generator.generate_quiz(topic, Some(&content.modules)).await;
            Quiz::from_content(&course.id, generated, &format!("{} Quiz", topic))
        };

        log::info!(
            "Storing quiz '{}' with {} questions for course {}",
            quiz.title,
            quiz.questions.len(),
            course.id
        );
        self.quizzes.create(quiz).await
    }

    pub async fn get_course(&self, id: &str) -> AppResult<Course> {
        self.courses
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course with id '{}' not found", id)))
    }

    pub async fn list_courses_for(&self, instructor_id: &str) -> AppResult<Vec<Course>> {
        self.courses.list_by_instructor(instructor_id).await
    }

    pub async fn list_all_courses(&self) -> AppResult<Vec<Course>> {
        self.courses.list_all().await
    }

    /// Only title and description can change; generated content is immutable.
    pub async fn update_course(
        &self,
        id: &str,
        user_id: &str,
        request: UpdateCourseRequest,
    ) -> AppResult<Course> {
        request.validate()?;
        let mut course = self.owned_course(id, user_id).await?;

        if let Some(title) = request.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            course.title = title.to_string();
        }
        if let Some(description) = request
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
        {
            course.description = description.to_string();
        }

        self.courses.update(course).await
    }

    /// Deletes the course and every quiz attached to it.
    pub async fn delete_course(&self, id: &str, user_id: &str) -> AppResult<()> {
        let course = self.owned_course(id, user_id).await?;

        let removed = self.quizzes.delete_by_course(&course.id).await?;
        self.courses.delete(&course.id).await?;
        log::info!("Deleted course {} and {} quizzes", course.id, removed);
        Ok(())
    }

    async fn owned_course(&self, id: &str, user_id: &str) -> AppResult<Course> {
        let course = self.get_course(id).await?;
        if !course.is_owned_by(user_id) {
            return Err(AppError::Forbidden(
                "Only the course instructor can modify this course".to_string(),
            ));
        }
        Ok(course)
    }
}
