//! Random source adapters

mod seeded;

pub use seeded::SeededRandomSource;
