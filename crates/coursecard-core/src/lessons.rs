//! Lesson list extraction.
//!
//! `lessons` comes from outside and may be missing, a JSON array, a string
//! holding a serialized array, or something else entirely. [`read_lessons`]
//! reports exactly what went wrong; [`lessons_or_empty`] is the policy the
//! card uses: log and show nothing.

use serde_json::Value;

use crate::error::LessonsError;

/// Interpret a raw `lessons` value as an ordered list of lesson titles.
///
/// Numbers are shown in their display form; `null` and boolean entries
/// render as empty text. Nested arrays or objects cannot be shown as a
/// title, so they make the whole list malformed.
pub fn read_lessons(value: &Value) -> Result<Vec<String>, LessonsError> {
    match value {
        Value::Null => Err(LessonsError::Missing),
        Value::Array(items) => items.iter().enumerate().map(lesson_entry).collect(),
        Value::String(encoded) => {
            let decoded: Value = serde_json::from_str(encoded)
                .map_err(|e| LessonsError::Malformed(e.to_string()))?;
            match decoded {
                Value::Array(items) => items.iter().enumerate().map(lesson_entry).collect(),
                other => Err(LessonsError::Malformed(format!(
                    "encoded lessons are {}, expected an array",
                    kind(&other)
                ))),
            }
        }
        other => Err(LessonsError::Malformed(format!(
            "lessons are {}, expected an array",
            kind(other)
        ))),
    }
}

/// Lesson list with failures degraded to an empty list.
///
/// A missing field is logged as a warning, anything malformed as an error.
/// Never fails.
pub fn lessons_or_empty(value: &Value) -> Vec<String> {
    match read_lessons(value) {
        Ok(lessons) => lessons,
        Err(LessonsError::Missing) => {
            tracing::warn!("Course has no lessons field, showing none");
            Vec::new()
        }
        Err(e) => {
            tracing::error!(error = %e, "Invalid lessons JSON, showing none");
            Vec::new()
        }
    }
}

fn lesson_entry((index, item): (usize, &Value)) -> Result<String, LessonsError> {
    match item {
        Value::Null | Value::Bool(_) => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Array(_) | Value::Object(_) => Err(LessonsError::Malformed(format!(
            "lesson {} is {}, expected text",
            index,
            kind(item)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
