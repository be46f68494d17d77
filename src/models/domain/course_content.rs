use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::domain::lenient;
use crate::models::domain::question::{Question, QuestionSet};

/// A generated (or synthesized) course document.
///
/// Only `modules` is structurally required; every other field defaults to an
/// empty value when the completion service leaves it out.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseContent {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::items")]
    pub learning_outcomes: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub estimated_duration: String,
    #[serde(deserialize_with = "lenient::number")]
    #[schemars(with = "f64")]
    pub estimated_learning_hours: f64,
    pub modules: Vec<Module>,
    #[serde(deserialize_with = "lenient::or_default")]
    #[schemars(with = "Projects")]
    pub projects: Projects,
    #[serde(deserialize_with = "lenient::text")]
    pub revision_notes: String,
    #[serde(deserialize_with = "lenient::or_default")]
    #[schemars(with = "QuestionSet")]
    pub final_assessment: QuestionSet,
    #[serde(deserialize_with = "lenient::or_default")]
    #[schemars(with = "Resources")]
    pub resources: Resources,
}

impl CourseContent {
    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(|m| m.lessons.len()).sum()
    }

    /// Chapter quiz questions in module, lesson, question order.
    pub fn chapter_questions(&self) -> impl Iterator<Item = &Question> {
        self.modules
            .iter()
            .flat_map(|m| m.lessons.iter())
            .flat_map(|l| l.chapter_quiz.questions.iter())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Module {
    #[serde(alias = "title", deserialize_with = "lenient::text")]
    pub module_title: String,
    pub level: ModuleLevel,
    #[serde(deserialize_with = "lenient::text")]
    pub module_overview: String,
    #[serde(deserialize_with = "lenient::number")]
    #[schemars(with = "f64")]
    pub estimated_hours: f64,
    pub lessons: Vec<Lesson>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub enum ModuleLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl ModuleLevel {
    /// Case-insensitive; unknown labels map to `Beginner`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "intermediate" => ModuleLevel::Intermediate,
            "advanced" => ModuleLevel::Advanced,
            _ => ModuleLevel::Beginner,
        }
    }
}

impl<'de> Deserialize<'de> for ModuleLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient::text(deserializer).map(|label| ModuleLevel::from_label(&label))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Lesson {
    #[serde(deserialize_with = "lenient::text")]
    pub lesson_title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub beginner_explanation: String,
    #[serde(deserialize_with = "lenient::text")]
    pub deep_theory: String,
    #[serde(deserialize_with = "lenient::items")]
    pub practical_examples: Vec<PracticalExample>,
    #[serde(deserialize_with = "lenient::items")]
    pub hands_on_exercises: Vec<HandsOnExercise>,
    #[serde(deserialize_with = "lenient::or_default")]
    #[schemars(with = "CaseStudy")]
    pub case_study: CaseStudy,
    #[serde(deserialize_with = "lenient::or_default")]
    #[schemars(with = "QuestionSet")]
    pub chapter_quiz: QuestionSet,
    #[serde(deserialize_with = "lenient::number")]
    #[schemars(with = "f64")]
    pub estimated_hours: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PracticalExample {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::text")]
    pub common_mistakes: String,
    #[serde(deserialize_with = "lenient::text")]
    pub correction: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct HandsOnExercise {
    #[serde(deserialize_with = "lenient::text")]
    pub exercise: String,
    pub difficulty: Difficulty,
    #[serde(deserialize_with = "lenient::text")]
    pub solution: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient::text(deserializer).map(|label| Difficulty::from_label(&label))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct CaseStudy {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub scenario: String,
    #[serde(deserialize_with = "lenient::items")]
    pub steps: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub outcome: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Projects {
    #[serde(deserialize_with = "lenient::or_default")]
    pub mini_project: Project,
    #[serde(deserialize_with = "lenient::or_default")]
    pub final_project: Project,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::items")]
    pub requirements: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub sample_solution: String,
    #[serde(deserialize_with = "lenient::items")]
    pub improvement_ideas: Vec<String>,
}

/// External learning material suggested alongside a course.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Resources {
    #[serde(deserialize_with = "lenient::items")]
    pub youtube_playlists: Vec<Playlist>,
    #[serde(deserialize_with = "lenient::items")]
    pub recommended_books: Vec<Book>,
    #[serde(deserialize_with = "lenient::items")]
    pub articles: Vec<LinkResource>,
    #[serde(deserialize_with = "lenient::items")]
    pub documentation: Vec<LinkResource>,
    #[serde(deserialize_with = "lenient::items")]
    pub tools: Vec<ToolResource>,
    #[serde(deserialize_with = "lenient::items")]
    pub courses: Vec<ExternalCourse>,
}

impl Resources {
    pub fn is_empty(&self) -> bool {
        self.youtube_playlists.is_empty()
            && self.recommended_books.is_empty()
            && self.articles.is_empty()
            && self.documentation.is_empty()
            && self.tools.is_empty()
            && self.courses.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Playlist {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub playlist_id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct Book {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub author: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::text")]
    pub link: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct LinkResource {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub url: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct ToolResource {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub url: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct ExternalCourse {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub platform: String,
    #[serde(deserialize_with = "lenient::text")]
    pub url: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
}
