use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use classic_ciphers::{transform, Cipher, Direction};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the classical cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Cipher family to use
    #[arg(short, long, value_enum, help = "Cipher to use")]
    cipher: CipherKind,

    /// Key: shift amount, keyword or rail count, depending on the cipher
    #[arg(short, long, allow_hyphen_values = true, help = "Key for the cipher (shift, keyword or rail count)")]
    key: Option<String>,

    /// Path to the output file; the result is printed when omitted
    #[arg(short, long, help = "Path to the output file")]
    output: Option<String>,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, value_enum, default_value = "encrypt", help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,
}

/// Cipher families selectable from the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CipherKind {
    Shift,
    Keyword,
    Mirror,
    Vigenere,
    RailFence,
    Morse,
    Pigpen,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

impl From<OperationMode> for Direction {
    fn from(mode: OperationMode) -> Self {
        match mode {
            OperationMode::Encrypt => Direction::Encrypt,
            OperationMode::Decrypt => Direction::Decrypt,
        }
    }
}

/// Main entry point for the classical cipher program.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = Cli::parse();

    let cipher = build_cipher(cli.cipher, cli.key.as_deref())?;

    let content: String = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read input file {}", cli.file))?;

    tracing::info!(cipher = cipher.name(), mode = ?cli.mode, "processing {}", cli.file);
    let result = transform(&cipher, cli.mode.into(), &content)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, result.text())
                .with_context(|| format!("Failed to write output file {path}"))?;
            println!("Operation completed successfully! Output saved to: {path}");
        }
        None => println!("{result}"),
    }

    Ok(())
}

/// Turns the command-line cipher choice and key into a library cipher.
fn build_cipher(kind: CipherKind, key: Option<&str>) -> Result<Cipher> {
    let cipher = match kind {
        CipherKind::Shift => {
            let key = require_key(kind, key)?;
            Cipher::Shift(key.parse::<i64>().with_context(|| format!("Shift must be an integer, got {key:?}"))?)
        }
        CipherKind::Keyword => Cipher::Keyword(require_key(kind, key)?.to_string()),
        CipherKind::Vigenere => Cipher::Vigenere(require_key(kind, key)?.to_string()),
        CipherKind::RailFence => {
            let key = require_key(kind, key)?;
            Cipher::RailFence(key.parse::<usize>().with_context(|| format!("Rail count must be a positive integer, got {key:?}"))?)
        }
        CipherKind::Mirror => Cipher::Mirror,
        CipherKind::Morse => Cipher::Morse,
        CipherKind::Pigpen => Cipher::Pigpen,
    };

    Ok(cipher)
}

fn require_key(kind: CipherKind, key: Option<&str>) -> Result<&str> {
    match key.map(str::trim) {
        Some(key) if !key.is_empty() => Ok(key),
        _ => bail!("The {kind:?} cipher needs a --key"),
    }
}
