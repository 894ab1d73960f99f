//! Accent palette for course cards.
//!
//! Six fixed styles, selected by `string_hash(course_id) % 6`. The order of
//! [`AccentColor::PALETTE`] is part of the contract: reordering it changes
//! the color of every existing card.

use crate::course::CourseId;
use crate::hash::string_hash;

/// Card accent style
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum AccentColor {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
}

impl AccentColor {
    /// Palette in selection order
    pub const PALETTE: [AccentColor; 6] = [
        AccentColor::Primary,
        AccentColor::Secondary,
        AccentColor::Success,
        AccentColor::Danger,
        AccentColor::Warning,
        AccentColor::Info,
    ];

    /// Returns the CSS class for this accent
    pub fn class(&self) -> &'static str {
        match self {
            AccentColor::Primary => "bg-primary",
            AccentColor::Secondary => "bg-secondary",
            AccentColor::Success => "bg-success",
            AccentColor::Danger => "bg-danger",
            AccentColor::Warning => "bg-warning",
            AccentColor::Info => "bg-info",
        }
    }

    /// Palette index for an identifier, always in `0..6`
    pub fn index_for(id: &CourseId) -> usize {
        string_hash(id.as_str()) as usize % Self::PALETTE.len()
    }

    /// Accent for an identifier
    pub fn for_id(id: &CourseId) -> Self {
        Self::PALETTE[Self::index_for(id)]
    }
}

/// Single-entry cache of the last identifier's accent.
///
/// A card holds one of these for its whole lifetime so re-renders caused by
/// unrelated state skip the hash. A different identifier replaces the entry.
#[derive(Debug, Default, Clone)]
pub struct AccentCache {
    entry: Option<(CourseId, AccentColor)>,
    computations: u64,
}

impl AccentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accent for `id`, hashing only when `id` differs from the cached key
    pub fn resolve(&mut self, id: &CourseId) -> AccentColor {
        if let Some((cached_id, accent)) = &self.entry {
            if cached_id == id {
                return *accent;
            }
        }

        let accent = AccentColor::for_id(id);
        self.computations += 1;
        tracing::debug!(course_id = %id, accent = accent.class(), "Computed card accent");
        self.entry = Some((id.clone(), accent));
        accent
    }

    /// Number of times the hash has actually run
    pub fn computations(&self) -> u64 {
        self.computations
    }
}
