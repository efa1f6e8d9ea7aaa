use std::path::PathBuf;
use std::process;

use clap::Parser;
use gloss_config::Config;
use gloss_core::error::ConvertError;
use gloss_core::pipeline;

/// Convert a wiktextract dump into sorted per-word definition lines
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Input dump (default: raw_data/kaikki.org-dictionary-English.json next to the executable)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output file (default: defs.json in the working directory)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Aggregated records between progress notices
    #[arg(long)]
    progress_every: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = Config::new();
    let input = args.input.unwrap_or(config.input);
    let output = args.output.unwrap_or(config.output);
    let progress_every = args.progress_every.unwrap_or(config.progress_every);

    if let Err(err) = pipeline::run(&input, &output, progress_every) {
        if let ConvertError::InputNotFound(path) = &err {
            tracing::error!("Input dump not found at {}", path.display());
            tracing::error!(
                "Download the English extract from https://kaikki.org/dictionary/rawdata.html \
                 and place it there, or point --input / GLOSS_INPUT at it"
            );
            process::exit(2);
        }
        return Err(err.into());
    }
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();
}
