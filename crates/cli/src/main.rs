//! CLI tool for generating fill-in-the-blank quiz decks.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use talpon_core::{
    BlankSelector, CorpusLoader, Deck, DeckAssembler, TextDeckFormatter, DEFAULT_MASK_RATIO,
    DEFAULT_TITLE,
};

/// Number of questions used when none (or an unparsable value) is given.
const DEFAULT_QUESTION_COUNT: i64 = 10;

/// Generate a randomized fill-in-the-blank quiz deck from a question corpus.
#[derive(Parser, Debug)]
#[command(name = "talpon")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maximum number of questions to include (default: 10)
    #[arg(allow_negative_numbers = true)]
    count: Option<String>,

    /// Directory holding one question file per category
    #[arg(short, long, default_value = "kerdesek")]
    dir: PathBuf,

    /// Fraction of answer letters to blank out
    #[arg(short, long, default_value_t = DEFAULT_MASK_RATIO)]
    ratio: f64,

    /// Seed for a reproducible deck (default: OS entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Fail on a category file that ends with an unanswered question
    #[arg(long)]
    strict: bool,

    /// Title slide heading
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the deck to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let requested = parse_count(args.count.as_deref());

    let corpus = CorpusLoader::new()
        .with_strict_pairs(args.strict)
        .load(&args.dir)
        .with_context(|| format!("Failed to load questions from {}", args.dir.display()))?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let deck = DeckAssembler::new(&corpus)
        .with_selector(BlankSelector::new().with_ratio(args.ratio))
        .with_title(args.title.as_str())
        .build_deck(requested, &mut rng)
        .context("Failed to assemble deck")?;

    if args.verbose {
        eprintln!(
            "Built {} of {} questions from {} categories",
            deck.question_count(),
            corpus.len(),
            corpus.categories().len()
        );
    }

    let output = format_deck(&deck, args.format)?;

    match &args.output {
        Some(path) => {
            write_output(path, &output)?;
            if args.verbose {
                eprintln!("Written to: {}", path.display());
            }
        }
        None => print!("{}", output),
    }

    Ok(())
}

/// Parse the requested question count, falling back to the default.
///
/// Negative values are passed through; the assembler treats them as zero.
fn parse_count(raw: Option<&str>) -> i64 {
    match raw {
        None => DEFAULT_QUESTION_COUNT,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!(
                "Invalid question count '{}', using {}",
                raw,
                DEFAULT_QUESTION_COUNT
            );
            DEFAULT_QUESTION_COUNT
        }),
    }
}

/// Render the deck in the chosen output format.
fn format_deck(deck: &Deck, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(TextDeckFormatter::new().format_with_newline(deck)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(deck).context("Failed to serialize deck")?;
            Ok(format!("{}\n", json))
        }
    }
}

/// Write output to a file, creating parent directories as needed.
fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(None), DEFAULT_QUESTION_COUNT);
        assert_eq!(parse_count(Some("25")), 25);
        assert_eq!(parse_count(Some(" 3 ")), 3);
        assert_eq!(parse_count(Some("0")), 0);
        assert_eq!(parse_count(Some("-5")), -5);
        assert_eq!(parse_count(Some("lots")), DEFAULT_QUESTION_COUNT);
    }

    #[test]
    fn test_args_parse() {
        let args =
            Args::try_parse_from(["talpon", "5", "--seed", "9", "--format", "json"]).unwrap();
        assert_eq!(args.count.as_deref(), Some("5"));
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.dir, PathBuf::from("kerdesek"));
        assert_eq!(args.ratio, DEFAULT_MASK_RATIO);
        assert!(!args.strict);
        assert_eq!(args.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_args_title() {
        let args = Args::try_parse_from(["talpon", "--title", "Quiz night"]).unwrap();
        assert_eq!(args.title, "Quiz night");
        assert_eq!(args.count, None);
    }

    #[test]
    fn test_negative_count_is_accepted_as_value() {
        let args = Args::try_parse_from(["talpon", "-2"]).unwrap();
        assert_eq!(parse_count(args.count.as_deref()), -2);
    }

    #[test]
    fn test_format_deck_json() {
        let deck = Deck {
            title: talpon_core::TitleSlide::new("Quiz", 0),
            slides: Vec::new(),
        };
        let json = format_deck(&deck, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"]["question_count"], 0);
        assert_eq!(value["slides"].as_array().unwrap().len(), 0);
    }
}
