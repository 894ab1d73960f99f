//! Show/hide state of a card's lesson list.

/// Whether a card's lessons are expanded
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LessonVisibility {
    /// Collapsed; every card starts here
    #[default]
    Hidden,
    /// Expanded; the lesson list is rendered
    Visible,
}

impl LessonVisibility {
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            LessonVisibility::Visible
        } else {
            LessonVisibility::Hidden
        }
    }

    /// The opposite state
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            LessonVisibility::Hidden => LessonVisibility::Visible,
            LessonVisibility::Visible => LessonVisibility::Hidden,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, LessonVisibility::Visible)
    }

    /// Label for the button that flips this state
    pub fn toggle_label(&self) -> &'static str {
        match self {
            LessonVisibility::Hidden => "Show Lessons",
            LessonVisibility::Visible => "Hide Lessons",
        }
    }
}
