use once_cell::sync::Lazy;

use crate::{
    constants::prompts::{
        COURSE_GENERATOR_PROMPT, COURSE_REQUEST_GUIDANCE, QUIZ_GENERATOR_PROMPT,
        QUIZ_REQUEST_GUIDANCE,
    },
    models::domain::{CourseContent, Module, QuizContent},
};

/// System policy plus per-call user instruction for one completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

static COURSE_SCHEMA: Lazy<String> =
    Lazy::new(|| render_schema(&schemars::schema_for!(CourseContent)));

static QUIZ_SCHEMA: Lazy<String> =
    Lazy::new(|| render_schema(&schemars::schema_for!(QuizContent)));

fn render_schema(schema: &schemars::Schema) -> String {
    serde_json::to_string_pretty(schema).unwrap_or_else(|_| "{}".to_string())
}

/// Course prompt. The topic appears once, in the user instruction.
pub fn course_prompt(topic: &str) -> Prompt {
    Prompt {
        system: format!("{}{}", COURSE_GENERATOR_PROMPT, COURSE_SCHEMA.as_str()),
        user: format!(
            "Create a complete course on the topic: **{}**.\n\n{}",
            topic, COURSE_REQUEST_GUIDANCE
        ),
    }
}

/// Quiz prompt. When modules are given their titles are listed so the
/// questions follow the course that was already generated. Titles usually
/// repeat the topic, so occurrences in the outline are masked and the topic
/// still appears once.
pub fn quiz_prompt(topic: &str, modules: Option<&[Module]>) -> Prompt {
    let mut user = format!(
        "Create a comprehensive 15-20 question quiz for the topic: **{}**.\n\n{}",
        topic, QUIZ_REQUEST_GUIDANCE
    );

    if let Some(outline) = modules.and_then(|m| course_outline(m, topic)) {
        user.push_str("\n\nBase the questions on this course outline:\n");
        user.push_str(&outline);
    }

    Prompt {
        system: format!("{}{}", QUIZ_GENERATOR_PROMPT, QUIZ_SCHEMA.as_str()),
        user,
    }
}

const OUTLINE_TOPIC_MASK: &str = "[topic]";

fn course_outline(modules: &[Module], topic: &str) -> Option<String> {
    if modules.is_empty() {
        return None;
    }

    let mask = |title: &str| {
        if topic.is_empty() {
            title.to_string()
        } else {
            title.replace(topic, OUTLINE_TOPIC_MASK)
        }
    };

    let mut outline = String::new();
    for (index, module) in modules.iter().enumerate() {
        outline.push_str(&format!("- Module {}: {}\n", index + 1, mask(&module.module_title)));
        for lesson in &module.lessons {
            outline.push_str(&format!("  - {}\n", mask(&lesson.lesson_title)));
        }
    }
    Some(outline)
}
