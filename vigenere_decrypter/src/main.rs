use anyhow::{Context, Result};
use clap::Parser;
use classic_ciphers::{analysis, estimate_vigenere_key_length, KeyLengthCandidate};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the Vigenère key-length estimator.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: String,

    /// Number of ranked candidates to show
    #[arg(short, long, default_value_t = 10, help = "Number of ranked key lengths to show")]
    top: usize,
}

/// Main entry point for the Vigenère key-length estimator.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = Cli::parse();
    let input: String = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read input file {}", cli.file))?;

    let summary = analysis::coincidence(&input);
    if summary.text_length < 50 {
        tracing::warn!(letters = summary.text_length, "text may be too short for reliable analysis");
    }
    println!("Ciphertext: {summary}");

    // Rank key lengths by average column Index of Coincidence
    let candidates = estimate_vigenere_key_length(&input)?;
    print!("{}", render(&candidates, cli.top));

    if let Some(best) = candidates.first() {
        println!("Found key length: {}", best.key_length);
    }

    Ok(())
}

/// Table of the best `top` candidates, one per line.
fn render(candidates: &[KeyLengthCandidate], top: usize) -> String {
    let mut table = String::from("length  avg IoC  score\n");
    for candidate in candidates.iter().take(top) {
        table.push_str(&format!(
            "{:>6}  {:.5}  {:.3}\n",
            candidate.key_length, candidate.average_ioc, candidate.normalized_score
        ));
    }
    table
}
