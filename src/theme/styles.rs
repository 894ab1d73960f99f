//! Global CSS styles for Course Card.
//!
//! Covers the Bootstrap class names the card markup uses. Accent rules are
//! generated from the palette so the stylesheet cannot drift from it.

use coursecard_core::AccentColor;

use super::colors::{accent_hex, CARD_SHADOW, PAGE_BACKGROUND, TEXT_DARK, TEXT_ON_ACCENT};

pub const GLOBAL_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
  line-height: 1.5;
  min-height: 100vh;
}

/* === Layout === */
.container {
  max-width: 640px;
  margin: 0 auto;
  padding: 2rem 1rem;
}

.catalog-title {
  font-size: 1.75rem;
  font-weight: 600;
  margin-bottom: 1.5rem;
}

.course-card-list__empty {
  font-style: italic;
  opacity: 0.7;
}

/* === Card === */
.card {
  border-radius: 0.5rem;
  overflow: hidden;
}

.card-body {
  padding: 1.25rem;
}

.card-title {
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.card-subtitle {
  font-size: 1rem;
  font-weight: 400;
  opacity: 0.85;
}

/* === Spacing Utilities === */
.mb-2 { margin-bottom: 0.5rem; }
.mb-4 { margin-bottom: 1.5rem; }
.mt-3 { margin-top: 1rem; }

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 0.375rem 0.75rem;
  border: 1px solid transparent;
  border-radius: 0.375rem;
  font: inherit;
  cursor: pointer;
  transition: filter 150ms ease;
}

.btn:hover {
  filter: brightness(0.92);
}

.btn-light {
  background: #f8f9fa;
  border-color: #f8f9fa;
}

/* === Lesson List === */
.list-group {
  list-style: none;
  border-radius: 0.375rem;
  overflow: hidden;
}

.list-group-item {
  padding: 0.5rem 1rem;
  background: rgba(255, 255, 255, 0.92);
}

.list-group-flush > .list-group-item + .list-group-item {
  border-top: 1px solid rgba(0, 0, 0, 0.125);
}
"#;

/// Page, text and accent rules derived from the theme colors
pub fn accent_styles() -> String {
    let mut css = format!(
        "body {{ background: {PAGE_BACKGROUND}; color: {TEXT_DARK}; }}\n\
         .shadow-sm {{ box-shadow: 0 0.125rem 0.25rem {CARD_SHADOW}; }}\n\
         .text-white {{ color: {TEXT_ON_ACCENT}; }}\n\
         .list-group-item, .btn-light {{ color: {TEXT_DARK}; }}\n"
    );
    for accent in AccentColor::PALETTE {
        css.push_str(&format!(
            ".{} {{ background-color: {}; }}\n",
            accent.class(),
            accent_hex(accent)
        ));
    }
    css
}
