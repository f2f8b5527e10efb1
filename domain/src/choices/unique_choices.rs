//! Bounded, duplicate-rejecting collection of answer choices

use crate::core::error::DomainError;
use serde_json::Value;
use std::collections::HashSet;

/// Capacity used when no explicit limit is given
pub const DEFAULT_CHOICE_LIMIT: usize = 4;

/// Answer choices for a single question.
///
/// Keeps at most `limit` distinct strings in insertion order. Adding a
/// duplicate or adding to a full collection is a silent no-op, so callers
/// can throw candidates at it until [`full`](Self::full) reports true.
///
/// # Example
///
/// ```
/// use radix_quiz_domain::UniqueChoices;
///
/// let mut choices = UniqueChoices::new(3);
/// for choice in ["a", "a", "b", "c", "d"] {
///     choices.add(choice);
/// }
/// assert_eq!(choices.choices(), ["a", "b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct UniqueChoices {
    limit: usize,
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl Default for UniqueChoices {
    fn default() -> Self {
        Self::new(DEFAULT_CHOICE_LIMIT)
    }
}

impl UniqueChoices {
    /// Create a collector holding at most `limit` choices.
    ///
    /// A limit of zero is accepted and produces a collector that is always
    /// full.
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            seen: HashSet::new(),
            ordered: Vec::new(),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn full(&self) -> bool {
        self.ordered.len() >= self.limit
    }

    pub fn contains(&self, choice: &str) -> bool {
        self.seen.contains(choice)
    }

    /// Add a choice, returning whether it was accepted
    pub fn add(&mut self, choice: impl Into<String>) -> bool {
        if self.full() {
            return false;
        }
        let choice = choice.into();
        if self.seen.contains(&choice) {
            return false;
        }
        self.seen.insert(choice.clone());
        self.ordered.push(choice);
        true
    }

    /// Add choices in order until the collector is full.
    ///
    /// Elements after the point where the collector fills up are skipped.
    pub fn add_all<I>(&mut self, choices: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for choice in choices {
            if self.full() {
                break;
            }
            self.add(choice);
        }
    }

    /// Add choices from an untyped JSON value.
    ///
    /// The value must be an array; anything else is rejected with
    /// [`DomainError::InvalidArgument`] before the collector is touched.
    /// String elements are added verbatim, other elements by their JSON text.
    pub fn add_all_json(&mut self, choices: &Value) -> Result<(), DomainError> {
        let Value::Array(items) = choices else {
            return Err(DomainError::InvalidArgument(
                "add_all expects an array of choices".to_string(),
            ));
        };
        self.add_all(items.iter().map(|item| match item {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }));
        Ok(())
    }

    /// Accepted choices in insertion order
    pub fn choices(&self) -> &[String] {
        &self.ordered
    }

    pub fn into_choices(self) -> Vec<String> {
        self.ordered
    }
}
