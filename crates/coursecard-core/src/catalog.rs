//! Course catalog loading.
//!
//! A catalog is either a bare JSON array of course records or an object
//! with a `courses` array. Loading is read-only.

use std::path::Path;

use serde_json::Value;

use crate::course::Course;
use crate::error::{CourseError, Result};

const SAMPLE_CATALOG: &str = include_str!("../assets/sample_catalog.json");

/// Ordered list of courses shown together
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Parse a catalog from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let records = match value {
            Value::Array(records) => records,
            Value::Object(mut map) => match map.remove("courses") {
                Some(Value::Array(records)) => records,
                Some(_) => {
                    return Err(CourseError::InvalidCatalog(
                        "`courses` must be an array".to_string(),
                    ))
                }
                None => {
                    return Err(CourseError::InvalidCatalog(
                        "missing `courses` array".to_string(),
                    ))
                }
            },
            _ => {
                return Err(CourseError::InvalidCatalog(
                    "expected an array of courses or an object with `courses`".to_string(),
                ))
            }
        };

        let courses = records
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<Course>, _>>()?;

        Ok(Self { courses })
    }

    /// Read and parse a catalog file
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!("Loaded {} courses from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// The built-in demo catalog
    pub fn sample() -> Result<Self> {
        Self::from_json_str(SAMPLE_CATALOG)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn into_courses(self) -> Vec<Course> {
        self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
