use std::collections::HashSet;

use crate::models::domain::{CourseContent, Module, Question, QuestionSet};

/// Upper bound on questions in an aggregated quiz.
pub const MAX_AGGREGATED_QUESTIONS: usize = 20;

/// Below this many aggregated questions a dedicated quiz is generated instead.
pub const MIN_AGGREGATED_QUESTIONS: usize = 10;

/// Keeps the first occurrence of every question, comparing trimmed,
/// lower-cased text. Relative order is preserved.
pub fn dedup_questions(questions: Vec<Question>) -> Vec<Question> {
    let mut seen = HashSet::new();
    questions
        .into_iter()
        .filter(|question| seen.insert(question.normalized_text()))
        .collect()
}

/// Collects chapter quiz questions in module, lesson, question order followed
/// by the final assessment. Malformed questions are skipped, duplicates keep
/// their first occurrence and the result is capped at
/// [`MAX_AGGREGATED_QUESTIONS`].
pub fn aggregate_questions(modules: &[Module], final_assessment: Option<&QuestionSet>) -> Vec<Question> {
    let chapter = modules
        .iter()
        .flat_map(|module| module.lessons.iter())
        .flat_map(|lesson| lesson.chapter_quiz.questions.iter());
    let assessment = final_assessment
        .into_iter()
        .flat_map(|set| set.questions.iter());

    let mut seen = HashSet::new();
    chapter
        .chain(assessment)
        .filter(|question| question.is_well_formed())
        .filter(|question| seen.insert(question.normalized_text()))
        .take(MAX_AGGREGATED_QUESTIONS)
        .cloned()
        .collect()
}

pub fn aggregate_course_questions(content: &CourseContent) -> Vec<Question> {
    aggregate_questions(&content.modules, Some(&content.final_assessment))
}
