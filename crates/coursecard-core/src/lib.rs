//! Course Card Core Library
//!
//! Domain logic behind the course card: loosely-typed course records, the
//! accent color derived from a course identifier, and lesson extraction
//! with an empty-list fallback.
//!
//! ## Quick Start
//!
//! ```
//! use coursecard_core::{AccentColor, Course, LessonVisibility};
//!
//! let course = Course::new("CS101", "Introduction to Programming", "Ada Lovelace", ["L1", "L2"]);
//!
//! assert_eq!(course.accent(), AccentColor::Success);
//! assert_eq!(course.lessons_or_empty(), vec!["L1", "L2"]);
//! assert_eq!(LessonVisibility::default().toggle_label(), "Show Lessons");
//! ```

pub mod catalog;
pub mod course;
pub mod error;
pub mod hash;
pub mod lessons;
pub mod palette;
pub mod visibility;

// Re-exports
pub use catalog::Catalog;
pub use course::{Course, CourseId};
pub use error::{CourseError, LessonsError, Result};
pub use hash::string_hash;
pub use lessons::{lessons_or_empty, read_lessons};
pub use palette::{AccentCache, AccentColor};
pub use visibility::LessonVisibility;
