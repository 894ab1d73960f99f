use coursecard_ui::CourseCardList;
use dioxus::prelude::*;

use crate::context::{launch_options, LaunchOptions};
use crate::theme::{accent_styles, GLOBAL_STYLES};

/// Root application component.
///
/// Injects global styles and renders the catalog chosen at startup.
#[component]
pub fn App() -> Element {
    let LaunchOptions {
        title,
        catalog,
        lessons_visible,
    } = use_hook(launch_options);
    let accent_css = use_hook(accent_styles);

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {accent_css} }
        main { class: "container",
            if !title.is_empty() {
                h1 { class: "catalog-title", "{title}" }
            }
            CourseCardList {
                courses: catalog.into_courses(),
                lessons_visible: lessons_visible,
            }
        }
    }
}
