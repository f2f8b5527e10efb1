//! Template-based question phrasing
//!
//! Templates use three placeholders:
//!
//! - `{number}`: the digit string to convert
//! - `{from}`: the source radix, e.g. "decimal" or "base 5"
//! - `{to}`: the target radix

use radix_quiz_application::{PhrasingProvider, RandomSource};
use radix_quiz_domain::Radix;

/// Built-in question templates
pub const DEFAULT_TEMPLATES: &[&str] = &[
    "Convert {number} from {from} to {to}.",
    "What is the {from} number {number} in {to}?",
    "Express the {from} value {number} as a {to} number.",
    "{number} is written in {from}. How is it written in {to}?",
];

/// Picks one of its templates at random and fills in the placeholders
#[derive(Debug, Clone)]
pub struct TemplatePhrasingProvider {
    templates: Vec<String>,
}

impl Default for TemplatePhrasingProvider {
    fn default() -> Self {
        Self {
            templates: DEFAULT_TEMPLATES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl TemplatePhrasingProvider {
    /// Use custom templates; an empty list falls back to the defaults
    pub fn new(templates: Vec<String>) -> Self {
        if templates.is_empty() {
            return Self::default();
        }
        Self { templates }
    }

    /// Human-readable radix label
    pub fn radix_label(radix: Radix) -> String {
        match radix.name() {
            Some(name) => name.to_string(),
            None => format!("base {}", radix),
        }
    }
}

impl PhrasingProvider for TemplatePhrasingProvider {
    fn question_text(
        &self,
        rng: &mut dyn RandomSource,
        source_text: &str,
        from: Radix,
        to: Radix,
    ) -> String {
        let template = rng
            .pick_index(self.templates.len())
            .and_then(|index| self.templates.get(index))
            .map(String::as_str)
            .unwrap_or(DEFAULT_TEMPLATES[0]);

        template
            .replace("{number}", source_text)
            .replace("{from}", &Self::radix_label(from))
            .replace("{to}", &Self::radix_label(to))
    }
}
