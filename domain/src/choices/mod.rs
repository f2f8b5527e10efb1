//! Answer choice collection

pub mod unique_choices;

pub use unique_choices::{DEFAULT_CHOICE_LIMIT, UniqueChoices};
