//! Question phrasing adapters

mod template;

pub use template::{DEFAULT_TEMPLATES, TemplatePhrasingProvider};
