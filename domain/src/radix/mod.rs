//! Radix domain
//!
//! Value objects describing a conversion task, plus rendering and parsing of
//! digit strings in an arbitrary base.

pub mod parser;
pub mod render;
pub mod value_objects;

pub use parser::{PrefixRadixParser, RadixParser, StrictRadixParser};
pub use render::render;
pub use value_objects::{Conversion, NumberRange, Radix, RadixPair};
