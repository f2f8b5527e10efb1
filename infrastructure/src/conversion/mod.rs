//! Conversion provider adapters

mod table;

pub use table::{TableConversionProvider, default_conversion_table};
