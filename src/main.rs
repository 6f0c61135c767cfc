use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use papercheck::config::Config;
use papercheck::document::read_document;
use papercheck::output::{self, terminal};
use papercheck::tokenize::Tokenizer;
use papercheck::Checker;

/// papercheck: score how similar a candidate document is to an original.
///
/// Both documents are split into words (dictionary-based segmentation, so
/// Chinese text works), counted into term frequency vectors, and compared by
/// cosine similarity. The score, from 0.00 to 1.00, is written to the output
/// file with two decimals.
#[derive(Parser)]
#[command(name = "papercheck", version, about)]
struct Cli {
    /// The original document
    original: PathBuf,

    /// The document suspected of copying the original
    candidate: PathBuf,

    /// Where to write the score
    output: PathBuf,

    /// Print the full comparison as JSON instead of the colored summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout carries the result
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("papercheck=warn")),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::load()?;
    config.require_user_dict()?;

    let original = read_document(&cli.original)?;
    let candidate = read_document(&cli.candidate)?;

    let checker = Checker::new(Tokenizer::from_config(&config)?);
    let comparison = checker.compare(&original, &candidate);
    info!(
        segmenter = checker.tokenizer().segmenter_name(),
        score = comparison.score,
        "Scored documents"
    );

    output::write_score(&cli.output, comparison.score)?;
    info!(output = %cli.output.display(), "Wrote similarity score");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        terminal::display_comparison(&comparison);
    }

    Ok(())
}
