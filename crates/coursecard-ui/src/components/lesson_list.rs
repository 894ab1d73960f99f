//! Lesson List Components
//!
//! The show/hide button and the list it reveals.

use coursecard_core::LessonVisibility;
use dioxus::prelude::*;

/// Properties for the LessonToggle component
#[derive(Clone, PartialEq, Props)]
pub struct LessonToggleProps {
    /// Current state; decides the label
    pub visibility: LessonVisibility,
    /// Click handler
    pub on_toggle: EventHandler<()>,
}

/// Button flipping a card between "Show Lessons" and "Hide Lessons"
///
/// # Example
///
/// ```rust,ignore
/// let mut visibility = use_signal(LessonVisibility::default);
///
/// rsx! {
///     LessonToggle {
///         visibility: visibility(),
///         on_toggle: move |_| visibility.set(visibility().toggled()),
///     }
/// }
/// ```
#[component]
pub fn LessonToggle(props: LessonToggleProps) -> Element {
    let label = props.visibility.toggle_label();
    let expanded = props.visibility.is_visible();

    rsx! {
        button {
            class: "btn btn-light",
            r#type: "button",
            "aria-expanded": if expanded { "true" } else { "false" },
            onclick: move |_| props.on_toggle.call(()),
            "{label}"
        }
    }
}

/// Ordered lesson titles, one list item each.
///
/// Items are keyed by position; duplicate titles stay separate items.
#[component]
pub fn LessonList(lessons: Vec<String>) -> Element {
    rsx! {
        ul { class: "list-group list-group-flush mt-3",
            for (index, lesson) in lessons.iter().enumerate() {
                li { key: "{index}", class: "list-group-item", "{lesson}" }
            }
        }
    }
}
