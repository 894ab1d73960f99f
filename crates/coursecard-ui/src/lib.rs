//! Course Card UI Components
//!
//! Dioxus components for showing a course catalog as a column of cards.
//!
//! ## Card Anatomy
//!
//! - **Accent**: one of six background styles picked from the course id
//! - **Title / subtitle**: course name and instructor
//! - **Lessons**: hidden until the "Show Lessons" button is pressed
//!
//! Class names follow Bootstrap's card vocabulary (`card`, `card-body`,
//! `list-group`, ...) so the markup can be styled by any stylesheet that
//! knows them.

pub mod components;

pub use components::*;
