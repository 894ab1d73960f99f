//! Course card components
//!
//! Cards own their lesson visibility; nothing is shared between cards.

mod course_card;
mod course_card_list;
mod lesson_list;

pub use course_card::*;
pub use course_card_list::*;
pub use lesson_list::*;
