pub mod course_handler;
pub mod health_handler;
pub mod progress_handler;
pub mod quiz_handler;

use actix_web::web;

pub use course_handler::{
    create_course, delete_course, get_course, list_all_courses, list_my_courses, update_course,
};
pub use health_handler::health_check;
pub use progress_handler::{get_progress, track_session, update_progress};
pub use quiz_handler::{create_quiz, get_quiz, list_course_quizzes};

/// Registers every route. Static segments come before their `{id}` siblings.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(create_course)
        .service(list_my_courses)
        .service(list_all_courses)
        .service(get_course)
        .service(update_course)
        .service(delete_course)
        .service(create_quiz)
        .service(list_course_quizzes)
        .service(get_quiz)
        .service(update_progress)
        .service(track_session)
        .service(get_progress);
}
