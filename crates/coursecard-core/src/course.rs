//! Course record as supplied by the outside world.
//!
//! Records arrive as loosely-shaped JSON, so the identifier and the lesson
//! list are kept as raw [`Value`]s and interpreted on demand.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LessonsError;
use crate::lessons;
use crate::palette::AccentColor;

/// A single course shown on a card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Identifier of any JSON shape; coerced with [`CourseId::from_value`]
    #[serde(default)]
    pub course_id: Value,
    /// Display name (e.g. "Intro to Programming")
    #[serde(default)]
    pub course_name: Option<String>,
    /// Instructor shown under the title
    #[serde(default)]
    pub instructor_name: Option<String>,
    /// Ordered lesson titles, possibly absent or malformed
    #[serde(default)]
    pub lessons: Value,
}

impl Course {
    /// Create a course with a string id and a well-formed lesson list
    pub fn new(
        course_id: impl Into<String>,
        course_name: impl Into<String>,
        instructor_name: impl Into<String>,
        lessons: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            course_id: Value::String(course_id.into()),
            course_name: Some(course_name.into()),
            instructor_name: Some(instructor_name.into()),
            lessons: Value::Array(
                lessons
                    .into_iter()
                    .map(|l| Value::String(l.into()))
                    .collect(),
            ),
        }
    }

    /// Replace the raw lessons value
    pub fn with_lessons(mut self, lessons: Value) -> Self {
        self.lessons = lessons;
        self
    }

    /// Replace the raw identifier value
    pub fn with_course_id(mut self, course_id: Value) -> Self {
        self.course_id = course_id;
        self
    }

    /// Identifier in string form
    pub fn id(&self) -> CourseId {
        CourseId::from_value(&self.course_id)
    }

    /// Name to display; empty when absent
    pub fn name(&self) -> &str {
        self.course_name.as_deref().unwrap_or("")
    }

    /// Instructor to display; empty when absent
    pub fn instructor(&self) -> &str {
        self.instructor_name.as_deref().unwrap_or("")
    }

    /// Accent color derived from the identifier
    pub fn accent(&self) -> AccentColor {
        AccentColor::for_id(&self.id())
    }

    /// Strict lesson extraction
    pub fn read_lessons(&self) -> Result<Vec<String>, LessonsError> {
        lessons::read_lessons(&self.lessons)
    }

    /// Lesson list with the empty fallback applied
    pub fn lessons_or_empty(&self) -> Vec<String> {
        lessons::lessons_or_empty(&self.lessons)
    }
}

/// String form of a course identifier.
///
/// Hashing always operates on this form so that `101` and `"101"` share an
/// accent color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(String);

impl CourseId {
    /// Coerce a raw identifier value to its string form
    pub fn from_value(value: &Value) -> Self {
        Self(coerce_to_string(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CourseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CourseId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// String coercion for loosely typed JSON values.
///
/// Arrays join their elements with `,` and objects collapse to a fixed
/// marker, matching how identifiers were stringified by the data source.
pub(crate) fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(coerce_to_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
