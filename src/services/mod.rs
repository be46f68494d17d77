pub mod course_service;
pub mod progress_service;
pub mod quiz_service;

pub use course_service::CourseService;
pub use progress_service::ProgressService;
pub use quiz_service::QuizService;
