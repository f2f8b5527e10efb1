//! Distractor generation
//!
//! Wrong answers for a change-of-base question come from two classic
//! mistakes:
//!
//! 1. Converting to the wrong target base (`to` distractors)
//! 2. Reading the source digits in the wrong base (`from` distractors)
//!
//! Both only consider the "sibling" radices among octal, decimal and
//! hexadecimal.

use crate::choices::UniqueChoices;
use crate::radix::{Radix, RadixParser, StrictRadixParser, render};

/// Radices that have sibling distractors, in ascending order
pub const SUPPORTED_RADICES: [Radix; 3] = [Radix::OCTAL, Radix::DECIMAL, Radix::HEXADECIMAL];

/// The other supported radices, in ascending order.
///
/// Unsupported or missing radices have no siblings.
///
/// ```
/// use radix_quiz_domain::{Radix, distractor_radices};
///
/// assert_eq!(distractor_radices(Radix::OCTAL), [Radix::DECIMAL, Radix::HEXADECIMAL]);
/// assert!(distractor_radices(None).is_empty());
/// ```
pub fn distractor_radices(radix: impl Into<Option<Radix>>) -> Vec<Radix> {
    match radix.into() {
        Some(radix) if SUPPORTED_RADICES.contains(&radix) => SUPPORTED_RADICES
            .iter()
            .copied()
            .filter(|r| *r != radix)
            .collect(),
        _ => Vec::new(),
    }
}

/// `value` rendered in each sibling radix of `target`
pub fn to_radix_distractors(target: Radix, value: i64) -> Vec<String> {
    StandardDistractors::<StrictRadixParser>::default().to_radix_distractors(target, value)
}

/// `source_text` re-read in each sibling radix of `source` and rendered in
/// `target`, using strict parsing
pub fn from_radix_distractors(
    source: Radix,
    target: Radix,
    value: i64,
    source_text: &str,
) -> Vec<String> {
    StandardDistractors::<StrictRadixParser>::default()
        .from_radix_distractors(source, target, value, source_text)
}

/// Source of distractor candidates.
///
/// The provided methods are written in terms of
/// [`distractor_radices`](Self::distractor_radices) and
/// [`parser`](Self::parser), so an implementation can swap either one and
/// keep the rest.
pub trait DistractorGenerator {
    /// Parser used to re-read source digits
    fn parser(&self) -> &dyn RadixParser;

    fn distractor_radices(&self, radix: Option<Radix>) -> Vec<Radix> {
        distractor_radices(radix)
    }

    fn to_radix_distractors(&self, target: Radix, value: i64) -> Vec<String> {
        self.distractor_radices(Some(target))
            .into_iter()
            .map(|radix| render(value, radix))
            .collect()
    }

    fn from_radix_distractors(
        &self,
        source: Radix,
        target: Radix,
        _value: i64,
        source_text: &str,
    ) -> Vec<String> {
        self.distractor_radices(Some(source))
            .into_iter()
            .filter_map(|radix| self.parser().parse(source_text, radix))
            .map(|misread| render(misread, target))
            .collect()
    }
}

/// Default [`DistractorGenerator`] backed by a [`RadixParser`]
#[derive(Debug, Clone, Default)]
pub struct StandardDistractors<P = StrictRadixParser> {
    parser: P,
}

impl<P: RadixParser> StandardDistractors<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<P: RadixParser> DistractorGenerator for StandardDistractors<P> {
    fn parser(&self) -> &dyn RadixParser {
        &self.parser
    }
}

/// Add wrong-target-base and misread-source distractors to `answer_choices`.
///
/// Wrong-target-base candidates go in first, so they win over an identical
/// misread candidate.
pub fn add_distractor_choices<G>(
    generator: &G,
    answer_choices: &mut UniqueChoices,
    source: Radix,
    target: Radix,
    source_text: &str,
    value: i64,
) where
    G: DistractorGenerator + ?Sized,
{
    answer_choices.add_all(generator.to_radix_distractors(target, value));
    answer_choices.add_all(generator.from_radix_distractors(source, target, value, source_text));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radix::PrefixRadixParser;
    use std::cell::RefCell;

    fn radix(base: u32) -> Radix {
        Radix::new(base).unwrap()
    }

    #[test]
    fn test_distractor_radices_supported() {
        assert_eq!(distractor_radices(radix(8)), [radix(10), radix(16)]);
        assert_eq!(distractor_radices(radix(10)), [radix(8), radix(16)]);
        assert_eq!(distractor_radices(radix(16)), [radix(8), radix(10)]);
    }

    #[test]
    fn test_distractor_radices_unsupported() {
        assert!(distractor_radices(radix(5)).is_empty());
        assert!(distractor_radices(Radix::BINARY).is_empty());
        assert!(distractor_radices(None).is_empty());
    }

    #[test]
    fn test_distractor_radices_exclude_input() {
        for r in SUPPORTED_RADICES {
            let siblings = distractor_radices(r);
            assert_eq!(siblings.len(), 2);
            assert!(!siblings.contains(&r));
            assert_eq!(siblings, distractor_radices(r));
        }
    }

    #[test]
    fn test_to_radix_distractors() {
        assert_eq!(to_radix_distractors(Radix::HEXADECIMAL, 255), ["377", "255"]);
        assert_eq!(to_radix_distractors(Radix::DECIMAL, 8), ["10", "8"]);
        assert!(to_radix_distractors(Radix::BINARY, 8).is_empty());
        assert_eq!(
            to_radix_distractors(Radix::OCTAL, 100),
            to_radix_distractors(Radix::OCTAL, 100)
        );
    }

    #[test]
    fn test_from_radix_distractors_reads_siblings() {
        let result = from_radix_distractors(Radix::OCTAL, Radix::DECIMAL, 17, "19");
        assert_eq!(result, ["19", "25"]);
    }

    #[test]
    fn test_from_radix_distractors_skips_unparseable() {
        let result = from_radix_distractors(Radix::DECIMAL, Radix::OCTAL, 154, "9A");
        assert_eq!(result, ["232"]);
    }

    #[test]
    fn test_from_radix_distractors_with_prefix_parser() {
        let generator = StandardDistractors::new(PrefixRadixParser);
        // "19" read as octal stops at '9' and yields 1
        let result =
            generator.from_radix_distractors(Radix::HEXADECIMAL, Radix::DECIMAL, 25, "19");
        assert_eq!(result, ["1", "19"]);
    }

    /// Generator with fixed sibling radices and a scripted parser
    struct FixedSiblings {
        siblings: Vec<Radix>,
        parser: ScriptedParser,
    }

    struct ScriptedParser {
        results: Vec<Option<i64>>,
        calls: RefCell<Vec<(String, Radix)>>,
    }

    impl RadixParser for ScriptedParser {
        fn parse(&self, text: &str, radix: Radix) -> Option<i64> {
            let mut calls = self.calls.borrow_mut();
            let result = self.results[calls.len()];
            calls.push((text.to_string(), radix));
            result
        }
    }

    impl DistractorGenerator for FixedSiblings {
        fn parser(&self) -> &dyn RadixParser {
            &self.parser
        }

        fn distractor_radices(&self, _radix: Option<Radix>) -> Vec<Radix> {
            self.siblings.clone()
        }
    }

    fn fixed(results: Vec<Option<i64>>) -> FixedSiblings {
        FixedSiblings {
            siblings: vec![radix(2), radix(3), radix(4)],
            parser: ScriptedParser {
                results,
                calls: RefCell::new(Vec::new()),
            },
        }
    }

    #[test]
    fn test_to_radix_distractors_uses_injected_siblings() {
        let generator = fixed(vec![]);
        let result = generator.to_radix_distractors(radix(5), 5);
        assert_eq!(result, ["101", "12", "11"]);
    }

    #[test]
    fn test_from_radix_distractors_parses_with_every_sibling() {
        let generator = fixed(vec![Some(7), None, None]);
        let result = generator.from_radix_distractors(radix(5), Radix::HEXADECIMAL, 0, "from");

        assert_eq!(result, ["7"]);
        let calls = generator.parser.calls.borrow();
        assert_eq!(
            *calls,
            [
                ("from".to_string(), radix(2)),
                ("from".to_string(), radix(3)),
                ("from".to_string(), radix(4)),
            ]
        );
    }

    /// Generator returning canned candidates and recording its inputs
    #[derive(Default)]
    struct Canned {
        to_calls: RefCell<Vec<(Radix, i64)>>,
        from_calls: RefCell<Vec<(Radix, Radix, i64, String)>>,
    }

    impl DistractorGenerator for Canned {
        fn parser(&self) -> &dyn RadixParser {
            &StrictRadixParser
        }

        fn to_radix_distractors(&self, target: Radix, value: i64) -> Vec<String> {
            self.to_calls.borrow_mut().push((target, value));
            vec!["to-a".to_string(), "shared".to_string()]
        }

        fn from_radix_distractors(
            &self,
            source: Radix,
            target: Radix,
            value: i64,
            source_text: &str,
        ) -> Vec<String> {
            self.from_calls
                .borrow_mut()
                .push((source, target, value, source_text.to_string()));
            vec!["shared".to_string(), "from-a".to_string()]
        }
    }

    #[test]
    fn test_add_distractor_choices_passes_arguments_through() {
        let generator = Canned::default();
        let mut choices = UniqueChoices::new(5);

        add_distractor_choices(
            &generator,
            &mut choices,
            Radix::OCTAL,
            Radix::HEXADECIMAL,
            "17",
            15,
        );

        assert_eq!(*generator.to_calls.borrow(), [(Radix::HEXADECIMAL, 15)]);
        assert_eq!(
            *generator.from_calls.borrow(),
            [(Radix::OCTAL, Radix::HEXADECIMAL, 15, "17".to_string())]
        );
        assert_eq!(choices.choices(), ["to-a", "shared", "from-a"]);
    }

    #[test]
    fn test_add_distractor_choices_respects_capacity() {
        let mut choices = UniqueChoices::new(3);
        choices.add("ff");

        add_distractor_choices(
            &StandardDistractors::<StrictRadixParser>::default(),
            &mut choices,
            Radix::DECIMAL,
            Radix::HEXADECIMAL,
            "255",
            255,
        );

        // "377" and "255" fill the collector before any misread is tried
        assert_eq!(choices.choices(), ["ff", "377", "255"]);
    }
}
