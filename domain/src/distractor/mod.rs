//! Distractor (wrong answer) generation

pub mod generator;

pub use generator::{
    DistractorGenerator, SUPPORTED_RADICES, StandardDistractors, add_distractor_choices,
    distractor_radices, from_radix_distractors, to_radix_distractors,
};
