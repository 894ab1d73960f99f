//! Launch-time state handed from `main` to the root component.
//!
//! `LaunchBuilder::launch` takes a bare component function, so the parsed
//! options travel through a process-wide `OnceLock`.

use std::sync::OnceLock;

use coursecard_core::Catalog;

static LAUNCH_OPTIONS: OnceLock<LaunchOptions> = OnceLock::new();

/// Everything the UI needs from the command line
#[derive(Clone, Debug, Default)]
pub struct LaunchOptions {
    /// Heading shown above the cards
    pub title: String,
    /// Courses to display
    pub catalog: Catalog,
    /// Whether cards start with lessons expanded
    pub lessons_visible: bool,
}

/// Store the options; only the first call has any effect.
pub fn set_launch_options(options: LaunchOptions) {
    if LAUNCH_OPTIONS.set(options).is_err() {
        tracing::warn!("Launch options already set, ignoring");
    }
}

/// Options set at startup, or defaults when none were set.
pub fn launch_options() -> LaunchOptions {
    LAUNCH_OPTIONS.get().cloned().unwrap_or_default()
}
