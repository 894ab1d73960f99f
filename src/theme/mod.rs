//! Visual theme: palette colors and the global stylesheet.

mod colors;
mod styles;

pub use styles::{accent_styles, GLOBAL_STYLES};
