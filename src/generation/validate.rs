use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    generation::{aggregate::dedup_questions, error::GenerationError},
    models::domain::{CourseContent, Question, QuizContent},
};

/// Parses a raw course response.
///
/// Malformed JSON is a [`GenerationError::Parse`]; a document without a
/// non-empty `modules` array, or one that does not fit the typed model, is a
/// [`GenerationError::SchemaViolation`]. Chapter-quiz and final-assessment
/// questions whose answer is not among their options are dropped.
pub fn validate_course(raw: &str) -> Result<CourseContent, GenerationError> {
    let document: Value = serde_json::from_str(raw)?;
    require_non_empty_array(&document, "modules")?;

    let mut content: CourseContent = into_typed(document)?;

    let mut dropped = 0;
    for lesson in content.modules.iter_mut().flat_map(|m| m.lessons.iter_mut()) {
        dropped += retain_well_formed(&mut lesson.chapter_quiz.questions);
    }
    dropped += retain_well_formed(&mut content.final_assessment.questions);
    if dropped > 0 {
        log::warn!("Dropped {} generated course questions with an answer outside their options", dropped);
    }

    log::info!(
        "Course generated: '{}' with {} modules",
        content.title,
        content.modules.len()
    );
    for (index, module) in content.modules.iter().enumerate() {
        log::info!(
            "  Module {}: {} - {} lessons",
            index + 1,
            module.module_title,
            module.lessons.len()
        );
    }

    Ok(content)
}

/// Parses a raw quiz response. Questions are filtered as for courses and then
/// deduplicated; a quiz left without questions is a schema violation.
pub fn validate_quiz(raw: &str) -> Result<QuizContent, GenerationError> {
    let document: Value = serde_json::from_str(raw)?;
    require_non_empty_array(&document, "questions")?;

    let mut quiz: QuizContent = into_typed(document)?;
    let received = quiz.questions.len();

    quiz.questions.retain(Question::is_well_formed);
    quiz.questions = dedup_questions(quiz.questions);

    if quiz.questions.is_empty() {
        return Err(GenerationError::SchemaViolation(
            "no usable questions in quiz response".to_string(),
        ));
    }

    log::info!(
        "Quiz generated: '{}' with {} unique questions ({} received)",
        quiz.title,
        quiz.questions.len(),
        received
    );

    Ok(quiz)
}

fn require_non_empty_array(document: &Value, field: &str) -> Result<(), GenerationError> {
    match document.get(field).and_then(Value::as_array) {
        Some(items) if !items.is_empty() => Ok(()),
        Some(_) => Err(GenerationError::SchemaViolation(format!("'{}' is empty", field))),
        None => Err(GenerationError::SchemaViolation(format!(
            "'{}' is missing or not an array",
            field
        ))),
    }
}

fn into_typed<T: DeserializeOwned>(document: Value) -> Result<T, GenerationError> {
    serde_json::from_value(document).map_err(|e| GenerationError::SchemaViolation(e.to_string()))
}

fn retain_well_formed(questions: &mut Vec<Question>) -> usize {
    let before = questions.len();
    questions.retain(Question::is_well_formed);
    before - questions.len()
}
