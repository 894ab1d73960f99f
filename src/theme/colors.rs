//! Color constants for the card theme.

use coursecard_core::AccentColor;

// === PAGE ===
pub const PAGE_BACKGROUND: &str = "#f4f5f7";
pub const CARD_SHADOW: &str = "rgba(0, 0, 0, 0.12)";

// === ACCENTS (palette order) ===
pub const ACCENT_PRIMARY: &str = "#0d6efd";
pub const ACCENT_SECONDARY: &str = "#6c757d";
pub const ACCENT_SUCCESS: &str = "#198754";
pub const ACCENT_DANGER: &str = "#dc3545";
pub const ACCENT_WARNING: &str = "#b8860b";
pub const ACCENT_INFO: &str = "#0b7285";

// === TEXT ===
pub const TEXT_ON_ACCENT: &str = "#ffffff";
pub const TEXT_DARK: &str = "#212529";

/// Background color behind a card's accent class
pub fn accent_hex(accent: AccentColor) -> &'static str {
    match accent {
        AccentColor::Primary => ACCENT_PRIMARY,
        AccentColor::Secondary => ACCENT_SECONDARY,
        AccentColor::Success => ACCENT_SUCCESS,
        AccentColor::Danger => ACCENT_DANGER,
        AccentColor::Warning => ACCENT_WARNING,
        AccentColor::Info => ACCENT_INFO,
    }
}
