//! Domain layer for radix-quiz
//!
//! This crate contains the core logic for change-of-base questions.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Answer choices
//!
//! [`UniqueChoices`] collects at most `limit` distinct answer strings in
//! insertion order. The correct answer goes in first; distractors fill the
//! remaining slots.
//!
//! ## Distractors
//!
//! - **Wrong target base**: the right value rendered in a sibling radix
//! - **Misread source**: the source digits read in a sibling radix
//! - **Random fill**: other values from the same range (application layer)

pub mod choices;
pub mod config;
pub mod core;
pub mod distractor;
pub mod question;
pub mod radix;

// Re-export commonly used types
pub use choices::{DEFAULT_CHOICE_LIMIT, UniqueChoices};
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use distractor::{
    DistractorGenerator, SUPPORTED_RADICES, StandardDistractors, add_distractor_choices,
    distractor_radices, from_radix_distractors, to_radix_distractors,
};
pub use question::{QuestionFormat, QuestionRecord};
pub use radix::{
    Conversion, NumberRange, PrefixRadixParser, Radix, RadixPair, RadixParser, StrictRadixParser,
    render,
};
