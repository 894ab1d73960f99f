//! Course Card Component
//!
//! Accent-colored card with course name, instructor and a collapsible
//! lesson list.

use std::cell::RefCell;
use std::rc::Rc;

use coursecard_core::{AccentCache, Course, LessonVisibility};
use dioxus::prelude::*;

use super::{LessonList, LessonToggle};

/// Properties for the CourseCard component
#[derive(Clone, PartialEq, Props)]
pub struct CourseCardProps {
    /// Course record to display
    pub course: Course,
    /// Whether lessons start expanded
    #[props(default = false)]
    pub initially_visible: bool,
    /// Notified with the new state after each toggle
    #[props(default)]
    pub on_toggle: Option<EventHandler<LessonVisibility>>,
}

/// Displays one course
///
/// # Design Notes
///
/// - Accent comes from the course id through a per-card [`AccentCache`],
///   so toggling lessons never re-hashes the id
/// - Malformed or missing lessons show as an empty list, never an error
/// - Visibility lives in this card only and is dropped on unmount
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CourseCard {
///         course: Course::new("CS101", "Introduction to Programming", "Ada Lovelace", ["Variables"]),
///         on_toggle: move |state: LessonVisibility| tracing::debug!(?state, "toggled"),
///     }
/// }
/// ```
#[component]
pub fn CourseCard(props: CourseCardProps) -> Element {
    let course = &props.course;

    let accent_cache = use_hook(|| Rc::new(RefCell::new(AccentCache::new())));
    let course_id = course.id();
    let accent = accent_cache.borrow_mut().resolve(&course_id);
    let accent_class = accent.class();

    let initially_visible = props.initially_visible;
    let mut visibility = use_signal(move || LessonVisibility::from_visible(initially_visible));
    let on_toggle = props.on_toggle;

    let name = course.name();
    let instructor = course.instructor();
    let lessons = course.lessons_or_empty();

    rsx! {
        div { class: "card mb-4 shadow-sm {accent_class} text-white",
            div { class: "card-body",
                h5 { class: "card-title", "{name}" }
                h6 { class: "card-subtitle mb-2", "{instructor}" }

                LessonToggle {
                    visibility: visibility(),
                    on_toggle: move |_| {
                        let next = visibility().toggled();
                        visibility.set(next);
                        tracing::debug!(course_id = %course_id, ?next, "Toggled lessons");
                        if let Some(handler) = &on_toggle {
                            handler.call(next);
                        }
                    },
                }

                if visibility().is_visible() {
                    LessonList { lessons: lessons.clone() }
                }
            }
        }
    }
}
