use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mdhtml::Config;

#[derive(Parser)]
#[command(name = "mdhtml")]
#[command(about = "Render a Markdown file as a print-friendly HTML page")]
struct Cli {
    /// Input Markdown file (defaults to the configured input path)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output HTML file (defaults to the configured output path)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file overriding paths, document title/lang and extensions
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logs on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => Config::load(path).context("Failed to load config")?,
        None => Config::default(),
    };

    let input = cli.input.unwrap_or_else(|| config.paths.input.clone());
    let output = cli.output.unwrap_or_else(|| config.paths.output.clone());

    mdhtml::convert_file(&input, &output, &config).context("Conversion failed")?;

    println!("Successfully generated {}", output.display());
    Ok(())
}
