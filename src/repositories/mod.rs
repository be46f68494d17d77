pub mod course_repository;
pub mod progress_repository;
pub mod quiz_repository;

pub use course_repository::{CourseRepository, MongoCourseRepository};
pub use progress_repository::{MongoProgressRepository, ProgressRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
