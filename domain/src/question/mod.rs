//! Generated question records

mod format;
mod record;

pub use format::QuestionFormat;
pub use record::QuestionRecord;
