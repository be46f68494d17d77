use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    generation::{ContentGenerator, GenerationSettings, OpenAiCompletionClient},
    repositories::{
        CourseRepository, MongoCourseRepository, MongoProgressRepository, MongoQuizRepository,
        ProgressRepository, QuizRepository,
    },
    services::{CourseService, ProgressService, QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub course_service: Arc<CourseService>,
    pub quiz_service: Arc<QuizService>,
    pub progress_service: Arc<ProgressService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let course_repository = Arc::new(MongoCourseRepository::new(&db));
        course_repository.ensure_indexes().await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;

        let progress_repository = Arc::new(MongoProgressRepository::new(&db));
        progress_repository.ensure_indexes().await?;

        let client = Arc::new(OpenAiCompletionClient::from_config(&config));
        let generator = Arc::new(ContentGenerator::new(
            client,
            GenerationSettings::from_config(&config),
        ));

        Ok(Self::from_parts(
            config,
            course_repository,
            quiz_repository,
            progress_repository,
            generator,
        ))
    }

    /// Wires services over already-built repositories and generator.
    pub fn from_parts(
        config: Config,
        courses: Arc<dyn CourseRepository>,
        quizzes: Arc<dyn QuizRepository>,
        progress: Arc<dyn ProgressRepository>,
        generator: Arc<ContentGenerator>,
    ) -> Self {
        Self {
            course_service: Arc::new(CourseService::new(
                courses.clone(),
                quizzes.clone(),
                generator.clone(),
            )),
            quiz_service: Arc::new(QuizService::new(quizzes, courses.clone(), generator)),
            progress_service: Arc::new(ProgressService::new(progress, courses)),
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
