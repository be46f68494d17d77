pub mod aggregate;
pub mod completion;
pub mod error;
pub mod fallback;
pub mod prompt;
pub mod validate;

use std::sync::Arc;

pub use completion::{CompletionClient, CompletionOptions, OpenAiCompletionClient, ResponseFormat};
pub use error::GenerationError;

use crate::{
    config::Config,
    models::domain::{CourseContent, Module, QuizContent},
};

const COURSE_TEMPERATURE: f32 = 0.5;
const QUIZ_TEMPERATURE: f32 = 0.7;

/// Model and sampling settings for course and quiz calls.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub course_temperature: f32,
    pub quiz_temperature: f32,
    pub course_max_output_tokens: u32,
    pub quiz_max_output_tokens: u32,
}

impl GenerationSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: config.completion_model.clone(),
            course_temperature: COURSE_TEMPERATURE,
            quiz_temperature: QUIZ_TEMPERATURE,
            course_max_output_tokens: config.course_max_output_tokens,
            quiz_max_output_tokens: config.quiz_max_output_tokens,
        }
    }

    fn course_options(&self) -> CompletionOptions {
        CompletionOptions {
            model: self.model.clone(),
            temperature: self.course_temperature,
            max_output_tokens: self.course_max_output_tokens,
            response_format: ResponseFormat::JsonObject,
        }
    }

    fn quiz_options(&self) -> CompletionOptions {
        CompletionOptions {
            model: self.model.clone(),
            temperature: self.quiz_temperature,
            max_output_tokens: self.quiz_max_output_tokens,
            response_format: ResponseFormat::JsonObject,
        }
    }
}

/// Turns a topic into course or quiz content.
///
/// Both entry points are total: any upstream, parse or schema failure is
/// logged and answered with the offline template for the same topic.
pub struct ContentGenerator {
    client: Arc<dyn CompletionClient>,
    settings: GenerationSettings,
}

impl ContentGenerator {
    pub fn new(client: Arc<dyn CompletionClient>, settings: GenerationSettings) -> Self {
        Self { client, settings }
    }

    pub async fn generate_course_content(&self, topic: &str) -> CourseContent {
        log::info!("Generating course content for topic '{}'", topic);

        match self.request_course(topic).await {
            Ok(content) => content,
            Err(e) => {
                log::warn!(
                    "Course generation for '{}' failed ({}): {}. Using template course",
                    topic,
                    e.kind(),
                    e
                );
                fallback::default_course(topic)
            }
        }
    }

    /// With modules that already carry at least
    /// [`aggregate::MIN_AGGREGATED_QUESTIONS`] unique chapter questions the quiz
    /// is assembled from them without calling the completion service.
    pub async fn generate_quiz(&self, topic: &str, modules: Option<&[Module]>) -> QuizContent {
        if let Some(modules) = modules {
            let questions = aggregate::aggregate_questions(modules, None);
            if questions.len() >= aggregate::MIN_AGGREGATED_QUESTIONS {
                log::info!(
                    "Assembled quiz for '{}' from {} course questions",
                    topic,
                    questions.len()
                );
                return QuizContent::new(QuizContent::comprehensive_title(topic), questions);
            }
            log::info!(
                "Only {} unique course questions for '{}', generating a dedicated quiz",
                questions.len(),
                topic
            );
        }

        match self.request_quiz(topic, modules).await {
            Ok(quiz) => quiz,
            Err(e) => {
                log::warn!(
                    "Quiz generation for '{}' failed ({}): {}. Using template quiz",
                    topic,
                    e.kind(),
                    e
                );
                fallback::default_quiz(topic)
            }
        }
    }

    async fn request_course(&self, topic: &str) -> Result<CourseContent, GenerationError> {
        let prompt = prompt::course_prompt(topic);
        let raw = self
            .client
            .generate_text(&prompt, &self.settings.course_options())
            .await?;
        validate::validate_course(&raw)
    }

    async fn request_quiz(
        &self,
        topic: &str,
        modules: Option<&[Module]>,
    ) -> Result<QuizContent, GenerationError> {
        let prompt = prompt::quiz_prompt(topic, modules);
        let raw = self
            .client
            .generate_text(&prompt, &self.settings.quiz_options())
            .await?;
        validate::validate_quiz(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{Lesson, Question, QuestionSet};
    use super::completion::MockCompletionClient;
    use serde_json::json;

    const TOPIC: &str = "Distributed Systems";

    fn settings() -> GenerationSettings {
        GenerationSettings {
            model: "test-model".to_string(),
            course_temperature: COURSE_TEMPERATURE,
            quiz_temperature: QUIZ_TEMPERATURE,
            course_max_output_tokens: 8000,
            quiz_max_output_tokens: 4096,
        }
    }

    fn generator_returning(
        response: impl Fn() -> Result<String, GenerationError> + Send + Sync + 'static,
    ) -> ContentGenerator {
        let mut client = MockCompletionClient::new();
        client
            .expect_generate_text()
            .times(1)
            .returning(move |_, _| response());
        ContentGenerator::new(Arc::new(client), settings())
    }

    fn generator_never_called() -> ContentGenerator {
        let mut client = MockCompletionClient::new();
        client.expect_generate_text().never();
        ContentGenerator::new(Arc::new(client), settings())
    }

    fn question(text: &str) -> Question {
        Question::new(
            text,
            vec!["A".into(), "B".into(), "C".into(), "D".into()],
            "C",
            "",
        )
    }

    fn modules_with_questions(count: usize) -> Vec<Module> {
        vec![Module {
            module_title: "Consensus".to_string(),
            lessons: vec![Lesson {
                lesson_title: "Raft".to_string(),
                chapter_quiz: QuestionSet::new(
                    (0..count).map(|i| question(&format!("Question {}?", i))).collect(),
                ),
                ..Lesson::default()
            }],
            ..Module::default()
        }]
    }

    fn valid_course_json() -> String {
        json!({
            "title": "Distributed Systems in Practice",
            "description": "generated",
            "estimatedLearningHours": "12",
            "modules": [
                { "moduleTitle": "Foundations", "level": "beginner", "lessons": [
                    { "lessonTitle": "Clocks" }, { "lessonTitle": "Consensus" }
                ]}
            ]
        })
        .to_string()
    }

    fn valid_quiz_json() -> String {
        json!({
            "title": "Generated Quiz",
            "questions": [
                { "question": "What is Raft?", "options": ["A", "B", "C", "D"], "correctAnswer": "A", "explanation": "" }
            ]
        })
        .to_string()
    }

    #[tokio::test]
    async fn valid_course_response_is_returned() {
        let generator = generator_returning(|| Ok(valid_course_json()));
        let content = generator.generate_course_content(TOPIC).await;

        assert_eq!(content.title, "Distributed Systems in Practice");
        assert_eq!(content.estimated_learning_hours, 12.0);
        assert_eq!(content.modules[0].lessons[1].lesson_title, "Consensus");
    }

    #[tokio::test]
    async fn course_generation_falls_back_on_every_failure() {
        let failures: Vec<fn() -> Result<String, GenerationError>> = vec![
            || Err(GenerationError::UpstreamGeneration("timed out".into())),
            || Ok("{\"modules\": [".to_string()),
            || Ok(String::new()),
            || Ok("{\"title\":\"no modules\"}".to_string()),
            || Ok("{\"modules\":[]}".to_string()),
        ];

        for failure in failures {
            let generator = generator_returning(failure);
            let content = generator.generate_course_content(TOPIC).await;
            assert_eq!(content, fallback::default_course(TOPIC));
        }
    }

    #[tokio::test]
    async fn quiz_generation_falls_back_on_every_failure() {
        let failures: Vec<fn() -> Result<String, GenerationError>> = vec![
            || Err(GenerationError::UpstreamGeneration("timed out".into())),
            || Ok("not json".to_string()),
            || Ok(String::new()),
            || Ok("{\"title\":\"no questions\"}".to_string()),
        ];

        for failure in failures {
            let generator = generator_returning(failure);
            let quiz = generator.generate_quiz(TOPIC, None).await;
            assert_eq!(quiz, fallback::default_quiz(TOPIC));
        }
    }

    #[tokio::test]
    async fn course_call_uses_course_settings() {
        let mut client = MockCompletionClient::new();
        client
            .expect_generate_text()
            .withf(|prompt, options| {
                prompt.user.contains(TOPIC)
                    && options.temperature == COURSE_TEMPERATURE
                    && options.max_output_tokens == 8000
                    && options.response_format == ResponseFormat::JsonObject
            })
            .times(1)
            .returning(|_, _| Ok(valid_course_json()));

        let generator = ContentGenerator::new(Arc::new(client), settings());
        generator.generate_course_content(TOPIC).await;
    }

    #[tokio::test]
    async fn enough_course_questions_skip_the_completion_call() {
        let generator = generator_never_called();
        let modules = modules_with_questions(25);

        let quiz = generator.generate_quiz(TOPIC, Some(&modules)).await;

        assert_eq!(quiz.title, "Distributed Systems - Comprehensive Quiz");
        assert_eq!(quiz.questions.len(), aggregate::MAX_AGGREGATED_QUESTIONS);
    }

    #[tokio::test]
    async fn nine_course_questions_trigger_fresh_generation() {
        let mut client = MockCompletionClient::new();
        client
            .expect_generate_text()
            .withf(|prompt, options| {
                prompt.user.contains("- Module 1: Consensus")
                    && options.temperature == QUIZ_TEMPERATURE
                    && options.max_output_tokens == 4096
            })
            .times(1)
            .returning(|_, _| Ok(valid_quiz_json()));

        let generator = ContentGenerator::new(Arc::new(client), settings());
        let modules = modules_with_questions(9);

        let quiz = generator.generate_quiz(TOPIC, Some(&modules)).await;
        assert_eq!(quiz.title, "Generated Quiz");
        assert_eq!(quiz.questions.len(), 1);
    }

    #[tokio::test]
    async fn ten_course_questions_are_enough() {
        let generator = generator_never_called();
        let modules = modules_with_questions(10);

        let quiz = generator.generate_quiz(TOPIC, Some(&modules)).await;
        assert_eq!(quiz.questions.len(), 10);
    }

    #[tokio::test]
    async fn generated_quiz_questions_are_deduplicated() {
        let generator = generator_returning(|| {
            Ok(json!({
                "title": "Dupes",
                "questions": [
                    { "question": "Same?", "options": ["x", "y"], "correctAnswer": "x" },
                    { "question": "SAME?", "options": ["x", "y"], "correctAnswer": "y" }
                ]
            })
            .to_string())
        });

        let quiz = generator.generate_quiz(TOPIC, None).await;
        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.questions[0].correct_answer, "x");
    }
}
