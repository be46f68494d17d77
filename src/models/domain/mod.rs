pub mod course;
pub mod course_content;
pub mod lenient;
pub mod lesson_id;
pub mod progress;
pub mod question;
pub mod quiz;
pub mod quiz_content;

pub use course::Course;
pub use course_content::{
    CaseStudy, CourseContent, Difficulty, HandsOnExercise, Lesson, Module, ModuleLevel,
    PracticalExample, Project, Projects, Resources,
};
pub use lesson_id::LessonId;
pub use progress::Progress;
pub use question::{Question, QuestionSet};
pub use quiz::Quiz;
pub use quiz_content::QuizContent;
