use std::{fmt, str::FromStr};

use crate::models::domain::course_content::{CourseContent, Lesson};

/// Composite lesson identity `"<moduleIndex>-<lessonIndex>"`.
///
/// Progress records reference lessons by this key, so it is only stable as
/// long as module and lesson order never change after generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LessonId {
    pub module_index: usize,
    pub lesson_index: usize,
}

impl LessonId {
    pub fn new(module_index: usize, lesson_index: usize) -> Self {
        Self {
            module_index,
            lesson_index,
        }
    }

    pub fn resolve<'a>(&self, content: &'a CourseContent) -> Option<&'a Lesson> {
        content
            .modules
            .get(self.module_index)?
            .lessons
            .get(self.lesson_index)
    }

    /// Every lesson id of a course, in module then lesson order.
    pub fn all(content: &CourseContent) -> Vec<LessonId> {
        content
            .modules
            .iter()
            .enumerate()
            .flat_map(|(m, module)| (0..module.lessons.len()).map(move |l| LessonId::new(m, l)))
            .collect()
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.module_index, self.lesson_index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLessonIdError(pub String);

impl fmt::Display for ParseLessonIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid lesson id '{}', expected '<module>-<lesson>'", self.0)
    }
}

impl std::error::Error for ParseLessonIdError {}

impl FromStr for LessonId {
    type Err = ParseLessonIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseLessonIdError(s.to_string());
        let (module, lesson) = s.trim().split_once('-').ok_or_else(err)?;
        let module_index = module.parse().map_err(|_| err())?;
        let lesson_index = lesson.parse().map_err(|_| err())?;
        Ok(LessonId::new(module_index, lesson_index))
    }
}
