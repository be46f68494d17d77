#[cfg(test)]
pub mod fixtures {
    use std::{collections::VecDeque, sync::Mutex};

    use async_trait::async_trait;
    use serde_json::json;

    use crate::generation::{
        prompt::Prompt, CompletionClient, CompletionOptions, ContentGenerator, GenerationError,
        GenerationSettings,
    };

    /// Replays canned responses in order; once they run out every call fails
    /// as an upstream error.
    pub struct ScriptedCompletionClient {
        responses: Mutex<VecDeque<String>>,
    }

    impl ScriptedCompletionClient {
        pub fn new(responses: Vec<String>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
            }
        }
    }

    #[async_trait]
    impl CompletionClient for ScriptedCompletionClient {
        async fn generate_text(
            &self,
            _prompt: &Prompt,
            _options: &CompletionOptions,
        ) -> Result<String, GenerationError> {
            self.responses
                .lock()
                .expect("responses lock")
                .pop_front()
                .ok_or_else(|| GenerationError::UpstreamGeneration("no scripted response".into()))
        }
    }

    pub fn test_settings() -> GenerationSettings {
        GenerationSettings {
            model: "test-model".to_string(),
            course_temperature: 0.5,
            quiz_temperature: 0.7,
            course_max_output_tokens: 8000,
            quiz_max_output_tokens: 4096,
        }
    }

    pub fn generator_with_responses(responses: Vec<String>) -> ContentGenerator {
        ContentGenerator::new(
            std::sync::Arc::new(ScriptedCompletionClient::new(responses)),
            test_settings(),
        )
    }

    /// A generated course titled "<topic> Deep Dive": two modules of two
    /// lessons (2 hours each), with `question_count` unique chapter questions
    /// spread over the lessons and an empty final assessment.
    pub fn generated_course_json(topic: &str, question_count: usize) -> String {
        let mut lesson_questions = vec![Vec::new(); 4];
        for i in 0..question_count {
            lesson_questions[i % 4].push(json!({
                "question": format!("{} question {}?", topic, i),
                "options": ["right", "wrong", "also wrong", "still wrong"],
                "correctAnswer": "right",
                "explanation": "it is right"
            }));
        }

        let mut questions = lesson_questions.into_iter();
        let mut lesson = |title: String| {
            json!({
                "lessonTitle": title,
                "estimatedHours": 2,
                "chapterQuiz": { "questions": questions.next().unwrap_or_default() }
            })
        };

        json!({
            "title": format!("{} Deep Dive", topic),
            "description": format!("Everything about {}", topic),
            "estimatedLearningHours": 8,
            "modules": [
                {
                    "moduleTitle": "Basics",
                    "level": "Beginner",
                    "estimatedHours": 4,
                    "lessons": [lesson("Basics 1".into()), lesson("Basics 2".into())]
                },
                {
                    "moduleTitle": "Advanced",
                    "level": "Advanced",
                    "estimatedHours": 4,
                    "lessons": [lesson("Advanced 1".into()), lesson("Advanced 2".into())]
                }
            ]
        })
        .to_string()
    }
}

#[cfg(test)]
pub mod in_memory {
    use std::{collections::HashMap, sync::Arc};

    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use crate::{
        errors::AppResult,
        models::domain::{Course, Progress, Quiz},
        repositories::{CourseRepository, ProgressRepository, QuizRepository},
    };

    pub struct InMemoryCourseRepository {
        courses: Arc<RwLock<HashMap<String, Course>>>,
    }

    impl InMemoryCourseRepository {
        pub fn new() -> Self {
            Self {
                courses: Arc::new(RwLock::new(HashMap::new())),
            }
        }

        pub async fn len(&self) -> usize {
            self.courses.read().await.len()
        }
    }

    fn newest_first(mut items: Vec<Course>) -> Vec<Course> {
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }

    #[async_trait]
    impl CourseRepository for InMemoryCourseRepository {
        async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>> {
            Ok(self.courses.read().await.get(id).cloned())
        }

        async fn list_by_instructor(&self, instructor_id: &str) -> AppResult<Vec<Course>> {
            let courses = self.courses.read().await;
            Ok(newest_first(
                courses
                    .values()
                    .filter(|c| c.instructor_id == instructor_id)
                    .cloned()
                    .collect(),
            ))
        }

        async fn list_all(&self) -> AppResult<Vec<Course>> {
            let courses = self.courses.read().await;
            Ok(newest_first(courses.values().cloned().collect()))
        }

        async fn create(&self, course: Course) -> AppResult<Course> {
            self.courses
                .write()
                .await
                .insert(course.id.clone(), course.clone());
            Ok(course)
        }

        async fn update(&self, course: Course) -> AppResult<Course> {
            self.create(course).await
        }

        async fn delete(&self, id: &str) -> AppResult<bool> {
            Ok(self.courses.write().await.remove(id).is_some())
        }
    }

    pub struct InMemoryQuizRepository {
        quizzes: Arc<RwLock<Vec<Quiz>>>,
    }

    impl InMemoryQuizRepository {
        pub fn new() -> Self {
            Self {
                quizzes: Arc::new(RwLock::new(Vec::new())),
            }
        }

        pub async fn len(&self) -> usize {
            self.quizzes.read().await.len()
        }

        pub async fn all(&self) -> Vec<Quiz> {
            self.quizzes.read().await.clone()
        }
    }

    #[async_trait]
    impl QuizRepository for InMemoryQuizRepository {
        async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
            Ok(self.quizzes.read().await.iter().find(|q| q.id == id).cloned())
        }

        async fn list_by_course(&self, course_id: &str) -> AppResult<Vec<Quiz>> {
            let quizzes = self.quizzes.read().await;
            Ok(quizzes
                .iter()
                .filter(|q| q.course_id == course_id)
                .cloned()
                .collect())
        }

        async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
            self.quizzes.write().await.push(quiz.clone());
            Ok(quiz)
        }

        async fn delete_by_course(&self, course_id: &str) -> AppResult<u64> {
            let mut quizzes = self.quizzes.write().await;
            let before = quizzes.len();
            quizzes.retain(|q| q.course_id != course_id);
            Ok((before - quizzes.len()) as u64)
        }
    }

    pub struct InMemoryProgressRepository {
        records: Arc<RwLock<HashMap<(String, String), Progress>>>,
    }

    impl InMemoryProgressRepository {
        pub fn new() -> Self {
            Self {
                records: Arc::new(RwLock::new(HashMap::new())),
            }
        }
    }

    #[async_trait]
    impl ProgressRepository for InMemoryProgressRepository {
        async fn find_by_user_and_course(
            &self,
            user_id: &str,
            course_id: &str,
        ) -> AppResult<Option<Progress>> {
            let records = self.records.read().await;
            Ok(records
                .get(&(user_id.to_string(), course_id.to_string()))
                .cloned())
        }

        async fn save(&self, progress: Progress) -> AppResult<Progress> {
            self.records.write().await.insert(
                (progress.user_id.clone(), progress.course_id.clone()),
                progress.clone(),
            );
            Ok(progress)
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::generation::validate::validate_course;

    #[test]
    fn generated_course_fixture_validates() {
        let content = validate_course(&generated_course_json("Rust", 6)).expect("valid fixture");
        assert_eq!(content.title, "Rust Deep Dive");
        assert_eq!(content.lesson_count(), 4);
        assert_eq!(content.chapter_questions().count(), 6);
    }
}
