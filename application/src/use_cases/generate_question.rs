//! Generate Question use case
//!
//! Assembles a multiple-choice change-of-base question:
//!
//! 1. Pick a conversion and a number to convert
//! 2. Seed the choices with the correct answer
//! 3. Add wrong-target-base and misread-source distractors
//! 4. Fill the remaining slots with random values from the same range
//! 5. Shuffle, locate the answer and phrase the question

use crate::config::{GenerationParams, QuestionParams};
use crate::ports::conversion_provider::{ConversionError, ConversionProvider};
use crate::ports::phrasing_provider::PhrasingProvider;
use crate::ports::random_source::RandomSource;
use radix_quiz_domain::{
    Conversion, DistractorGenerator, NumberRange, QuestionRecord, Radix, StandardDistractors,
    UniqueChoices, add_distractor_choices, render,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while generating a question
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateQuestionError {
    #[error("Conversion selection failed: {0}")]
    Conversion(#[from] ConversionError),

    #[error(
        "Random fill gave up after {attempts} draws with {filled} of {limit} choices; \
         the range is too small for the requested number of choices"
    )]
    RandomFillExhausted {
        attempts: usize,
        filled: usize,
        limit: usize,
    },

    #[error("Correct answer {0:?} is missing from the choices")]
    AnswerMissing(String),
}

/// Fill `answer_choices` with random values from `range` rendered in `target`.
///
/// Draws until the collector is full. Duplicate renderings do not use up
/// capacity, so more draws than free slots may be needed. With
/// `max_attempts` set, running out of draws before the collector is full is
/// an error; with `None` the loop only ends once the collector is full.
pub fn add_random_choices(
    rng: &mut dyn RandomSource,
    answer_choices: &mut UniqueChoices,
    target: Radix,
    range: NumberRange,
    max_attempts: Option<usize>,
) -> Result<(), GenerateQuestionError> {
    let free = answer_choices.limit().saturating_sub(answer_choices.len());
    if range.span() < u64::try_from(free).unwrap_or(u64::MAX) {
        warn!(
            "Range {}..={} holds {} values but {} choices are still open",
            range.min(),
            range.max(),
            range.span(),
            free
        );
    }

    let mut attempts = 0usize;
    while !answer_choices.full() {
        if let Some(max) = max_attempts
            && attempts >= max
        {
            warn!(
                "Random fill exhausted after {} draws ({} of {} choices, range {}..={})",
                attempts,
                answer_choices.len(),
                answer_choices.limit(),
                range.min(),
                range.max()
            );
            return Err(GenerateQuestionError::RandomFillExhausted {
                attempts,
                filled: answer_choices.len(),
                limit: answer_choices.limit(),
            });
        }

        let value = rng.rand_int_between_inclusive(range.min(), range.max());
        attempts += 1;
        answer_choices.add(render(value, target));
    }

    debug!("Random fill completed after {} draws", attempts);
    Ok(())
}

/// Use case for generating change-of-base questions
pub struct GenerateQuestionUseCase<C, P, D = StandardDistractors>
where
    C: ConversionProvider,
    P: PhrasingProvider,
    D: DistractorGenerator,
{
    conversions: C,
    phrasing: P,
    distractors: D,
    params: GenerationParams,
}

impl<C: ConversionProvider, P: PhrasingProvider> GenerateQuestionUseCase<C, P> {
    pub fn new(conversions: C, phrasing: P) -> Self {
        Self {
            conversions,
            phrasing,
            distractors: StandardDistractors::default(),
            params: GenerationParams::default(),
        }
    }
}

impl<C, P, D> GenerateQuestionUseCase<C, P, D>
where
    C: ConversionProvider,
    P: PhrasingProvider,
    D: DistractorGenerator,
{
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Replace the distractor generator (e.g. to use a different parser)
    pub fn with_distractors<D2: DistractorGenerator>(
        self,
        distractors: D2,
    ) -> GenerateQuestionUseCase<C, P, D2> {
        GenerateQuestionUseCase {
            conversions: self.conversions,
            phrasing: self.phrasing,
            distractors,
            params: self.params,
        }
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Generate a single question
    pub fn generate(
        &self,
        rng: &mut dyn RandomSource,
        params: &QuestionParams,
    ) -> Result<QuestionRecord, GenerateQuestionError> {
        let defaults = self.conversions.default_conversions();
        let Conversion { radix, range } = self.conversions.conversion(rng, params, defaults)?;

        let num_to_convert = rng.rand_int_between_inclusive(range.min(), range.max());
        let source_text = render(num_to_convert, radix.from);
        let answer_text = render(num_to_convert, radix.to);
        debug!(
            "Converting {} (base {}) to base {}: answer {}",
            source_text, radix.from, radix.to, answer_text
        );

        let mut answer_choices = UniqueChoices::new(self.params.choice_limit);
        answer_choices.add(answer_text.clone());

        add_distractor_choices(
            &self.distractors,
            &mut answer_choices,
            radix.from,
            radix.to,
            &source_text,
            num_to_convert,
        );
        debug!(
            "{} choices after sibling distractors",
            answer_choices.len()
        );

        add_random_choices(
            rng,
            &mut answer_choices,
            radix.to,
            range,
            self.params.max_random_attempts,
        )?;

        let mut choices = answer_choices.into_choices();
        rng.shuffle(&mut choices);

        let answer = choices
            .iter()
            .position(|choice| *choice == answer_text)
            .ok_or_else(|| GenerateQuestionError::AnswerMissing(answer_text.clone()))?;

        let question = self
            .phrasing
            .question_text(rng, &source_text, radix.from, radix.to);

        Ok(QuestionRecord::multiple_choice(choices, answer, question))
    }

    /// Generate `count` independent questions
    pub fn generate_batch(
        &self,
        rng: &mut dyn RandomSource,
        params: &QuestionParams,
        count: usize,
    ) -> Result<Vec<QuestionRecord>, GenerateQuestionError> {
        info!("Generating {} question(s)", count);
        (0..count).map(|_| self.generate(rng, params)).collect()
    }
}
