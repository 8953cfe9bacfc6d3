use anyhow::{Context, Result};
use clap::Parser;
use classic_ciphers::{brute_force_shifts, ShiftCandidate};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the shift cipher brute-force program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: String,

    /// Path to the output file; the candidates are printed when omitted
    #[arg(short, long, help = "Path to the output file for all 26 candidates")]
    output: Option<String>,
}

/// Main entry point for the shift cipher brute-force program.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Read the encrypted content from the input file
    let content: String = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read the input file {}", cli.file))?;

    // Try every shift; picking the readable one is up to the reader
    let candidates = brute_force_shifts(content.trim_end());
    tracing::info!(candidates = candidates.len(), "decrypted with every shift");

    let report = render(&candidates);
    match &cli.output {
        Some(path) => std::fs::write(path, report)
            .with_context(|| format!("Failed to write the output file {path}"))?,
        None => print!("{report}"),
    }

    Ok(())
}

/// One `shift: text` line per candidate.
fn render(candidates: &[ShiftCandidate]) -> String {
    candidates
        .iter()
        .map(|candidate| format!("{candidate}\n"))
        .collect()
}
