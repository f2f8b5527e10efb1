//! CLI entrypoint for radix-quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use radix_quiz_application::{GenerateQuestionUseCase, GenerationParams, QuestionParams};
use radix_quiz_domain::StandardDistractors;
use radix_quiz_infrastructure::{
    ConfigLoader, FileConfig, FileParserMode, SeededRandomSource, TableConversionProvider,
    TemplatePhrasingProvider,
};
use radix_quiz_presentation::{Cli, ConsoleFormatter, OutputConfig, ParserMode};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Range used when `--from`/`--to` are given without `--min`/`--max`
const DEFAULT_CLI_MIN: i64 = 0;
const DEFAULT_CLI_MAX: i64 = 255;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    file_config.validate().context("Invalid configuration")?;

    let generation = generation_params(&cli, &file_config)?;
    let question_params = question_params(&cli, &file_config)?;

    let parser = match cli.parser {
        Some(ParserMode::Strict) => FileParserMode::Strict,
        Some(ParserMode::Prefix) => FileParserMode::Prefix,
        None => file_config.generation.parser,
    };

    let mut rng = match cli.seed.or(file_config.generation.seed) {
        Some(seed) => SeededRandomSource::from_seed(seed),
        None => SeededRandomSource::from_entropy(),
    };
    info!("Starting radix-quiz (seed {})", rng.seed());

    // === Dependency Injection ===
    let use_case = GenerateQuestionUseCase::new(
        TableConversionProvider::default(),
        TemplatePhrasingProvider::new(file_config.phrasing.templates.clone()),
    )
    .with_params(generation)
    .with_distractors(StandardDistractors::new(parser.into_parser()));

    let records = use_case
        .generate_batch(&mut rng, &question_params, cli.count)
        .context("Failed to generate questions")?;

    let output = OutputConfig::default()
        .with_format(
            cli.output
                .map(Into::into)
                .or(file_config.output.format)
                .unwrap_or_default(),
        )
        .with_color(file_config.output.color && !cli.no_color)
        .with_show_answer(cli.show_answer || file_config.output.show_answer);
    output.apply_color_preference();

    print!("{}", ConsoleFormatter::format_all(&records, &output));

    Ok(())
}

/// Generation parameters from the config file, overridden by CLI flags
fn generation_params(cli: &Cli, config: &FileConfig) -> Result<GenerationParams> {
    let mut params = config.generation_params();
    if let Some(choices) = cli.choices {
        let limit = usize::try_from(choices).context("--choices is too large")?;
        params = params.with_choice_limit(limit);
    }
    if let Some(max) = cli.max_attempts {
        params = params.with_max_random_attempts((max > 0).then_some(max));
    }
    Ok(params)
}

/// A single conversion from `--from`/`--to`, or the configured list
fn question_params(cli: &Cli, config: &FileConfig) -> Result<QuestionParams> {
    match (cli.from, cli.to) {
        (Some(from), Some(to)) => {
            let conversion = TableConversionProvider::conversion_from_parts(
                from,
                to,
                cli.min.unwrap_or(DEFAULT_CLI_MIN),
                cli.max.unwrap_or(DEFAULT_CLI_MAX),
            )
            .context("Invalid conversion")?;
            Ok(QuestionParams::new().with_conversion(conversion))
        }
        _ => Ok(config.question_params()?),
    }
}
