//! Question output formatting

pub mod console;
pub mod formatter;
