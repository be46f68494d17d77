use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    generation::ContentGenerator,
    models::{domain::Quiz, dto::request::CreateQuizRequest},
    repositories::{CourseRepository, QuizRepository},
};

pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    courses: Arc<dyn CourseRepository>,
    generator: Arc<ContentGenerator>,
}

impl QuizService {
    pub fn new(
        quizzes: Arc<dyn QuizRepository>,
        courses: Arc<dyn CourseRepository>,
        generator: Arc<ContentGenerator>,
    ) -> Self {
        Self {
            quizzes,
            courses,
            generator,
        }
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        self.quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))
    }

    pub async fn list_quizzes_for_course(&self, course_id: &str) -> AppResult<Vec<Quiz>> {
        self.quizzes.list_by_course(course_id).await
    }

    /// Creates a quiz for an existing course, either from the supplied
    /// questions or, with `useAI` and a topic, from generated content that
    /// follows the course's modules. A requested title replaces the
    /// generated one.
    pub async fn create_quiz(&self, request: CreateQuizRequest) -> AppResult<Quiz> {
        request.validate()?;

        let course = self
            .courses
            .find_by_id(&request.course_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Course with id '{}' not found", request.course_id))
            })?;

        let requested_title = request
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());

        let quiz = match request.generation_topic() {
            Some(topic) => {
                let modules = course
                    .content
                    .as_ref()
                    .map(|content| content.modules.as_slice())
                    .filter(|modules| !modules.is_empty());
                let mut generated = self.generator.generate_quiz(topic, modules).await;
                if let Some(title) = requested_title {
                    generated.title = title.to_string();
                }
                Quiz::from_content(&course.id, generated, &format!("{} Quiz", topic))
            }
            None => {
                let title = requested_title.ok_or_else(|| {
                    AppError::ValidationError(
                        "A title is required unless the quiz is generated from a topic".to_string(),
                    )
                })?;
                if let Some(position) = request.questions.iter().position(|q| !q.is_well_formed()) {
                    return Err(AppError::ValidationError(format!(
                        "Question {} must have text and a correct answer that is one of its options",
                        position + 1
                    )));
                }
                Quiz::new(&course.id, title, request.questions.clone())
            }
        };

        log::info!(
            "Creating quiz '{}' with {} questions for course {}",
            quiz.title,
            quiz.questions.len(),
            course.id
        );
        self.quizzes.create(quiz).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::domain::{Course, Question},
        test_utils::{
            fixtures::{generated_course_json, generator_with_responses},
            in_memory::{InMemoryCourseRepository, InMemoryQuizRepository},
        },
    };

    async fn service_with_course(responses: Vec<String>) -> (QuizService, Course) {
        let courses = Arc::new(InMemoryCourseRepository::new());
        let course = courses
            .create(Course::new_manual("Algebra", "Groups and rings", "instructor"))
            .await
            .expect("course stored");
        let service = QuizService::new(
            Arc::new(InMemoryQuizRepository::new()),
            courses,
            Arc::new(generator_with_responses(responses)),
        );
        (service, course)
    }

    fn question(answer: &str) -> Question {
        Question::new("Is a group a monoid?", vec!["Yes".into(), "No".into()], answer, "")
    }

    #[tokio::test]
    async fn manual_quiz_is_stored() {
        let (service, course) = service_with_course(vec![]).await;
        let request = CreateQuizRequest {
            course_id: course.id.clone(),
            title: Some("Week 1".to_string()),
            questions: vec![question("Yes")],
            ..Default::default()
        };

        let quiz = service.create_quiz(request).await.expect("created");
        assert_eq!(quiz.title, "Week 1");
        assert_eq!(service.get_quiz(&quiz.id).await.expect("stored"), quiz);
        assert_eq!(
            service.list_quizzes_for_course(&course.id).await.expect("listed").len(),
            1
        );
    }

    #[tokio::test]
    async fn manual_question_with_unknown_answer_is_rejected() {
        let (service, course) = service_with_course(vec![]).await;
        let request = CreateQuizRequest {
            course_id: course.id.clone(),
            title: Some("Week 1".to_string()),
            questions: vec![question("Yes"), question("Maybe")],
            ..Default::default()
        };

        let err = service.create_quiz(request).await.expect_err("invalid answer");
        assert!(matches!(err, AppError::ValidationError(msg) if msg.starts_with("Question 2")));
    }

    #[tokio::test]
    async fn unknown_course_is_not_found() {
        let (service, _) = service_with_course(vec![]).await;
        let request = CreateQuizRequest {
            course_id: "missing".to_string(),
            title: Some("T".to_string()),
            ..Default::default()
        };

        let err = service.create_quiz(request).await.expect_err("no course");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn generated_quiz_falls_back_to_template() {
        let (service, course) = service_with_course(vec![]).await;
        let request = CreateQuizRequest {
            course_id: course.id.clone(),
            topic: Some("Algebra".to_string()),
            use_ai: true,
            ..Default::default()
        };

        let quiz = service.create_quiz(request).await.expect("created");
        assert_eq!(quiz.title, "Algebra Quiz");
        assert_eq!(quiz.questions.len(), 5);
    }

    fn generated_quiz_json() -> String {
        serde_json::json!({
            "title": "Abstract Algebra Check",
            "questions": [{ "question": "Identity?", "options": ["e", "0"], "correctAnswer": "e" }]
        })
        .to_string()
    }

    #[tokio::test]
    async fn requested_title_replaces_generated_title() {
        let (service, course) = service_with_course(vec![generated_quiz_json()]).await;
        let request = CreateQuizRequest {
            course_id: course.id.clone(),
            title: Some("Midterm Review".to_string()),
            topic: Some("Algebra".to_string()),
            use_ai: true,
            ..Default::default()
        };

        let quiz = service.create_quiz(request).await.expect("created");
        assert_eq!(quiz.title, "Midterm Review");
        assert_eq!(quiz.questions.len(), 1);
    }

    #[tokio::test]
    async fn generated_title_is_kept_without_a_requested_title() {
        let (service, course) = service_with_course(vec![generated_quiz_json()]).await;
        let request = CreateQuizRequest {
            course_id: course.id.clone(),
            title: Some("   ".to_string()),
            topic: Some("Algebra".to_string()),
            use_ai: true,
            ..Default::default()
        };

        let quiz = service.create_quiz(request).await.expect("created");
        assert_eq!(quiz.title, "Abstract Algebra Check");
    }

    #[tokio::test]
    async fn generated_course_questions_are_reused() {
        let courses = Arc::new(InMemoryCourseRepository::new());
        let content = serde_json::from_str(&generated_course_json("Rust", 15)).expect("fixture");
        let course = courses
            .create(Course::new_generated("Rust", None, None, "instructor", content))
            .await
            .expect("course stored");
        let service = QuizService::new(
            Arc::new(InMemoryQuizRepository::new()),
            courses,
            Arc::new(generator_with_responses(vec![])),
        );

        let quiz = service
            .create_quiz(CreateQuizRequest {
                course_id: course.id.clone(),
                topic: Some("Rust".to_string()),
                use_ai: true,
                ..Default::default()
            })
            .await
            .expect("created");

        assert_eq!(quiz.title, "Rust - Comprehensive Quiz");
        assert_eq!(quiz.questions.len(), 15);
    }
}
