//! Course Card List Component

use coursecard_core::Course;
use dioxus::prelude::*;

use super::CourseCard;

/// Column of course cards, one per course, each with its own state
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CourseCardList { courses: catalog.into_courses() }
/// }
/// ```
#[component]
pub fn CourseCardList(
    /// Courses in display order
    courses: Vec<Course>,
    /// Whether every card starts with lessons expanded
    #[props(default = false)]
    lessons_visible: bool,
) -> Element {
    if courses.is_empty() {
        return rsx! {
            p { class: "course-card-list__empty", "No courses available" }
        };
    }

    rsx! {
        div { class: "course-card-list",
            for (index, course) in courses.iter().enumerate() {
                CourseCard {
                    key: "{index}",
                    course: course.clone(),
                    initially_visible: lessons_visible,
                }
            }
        }
    }
}
