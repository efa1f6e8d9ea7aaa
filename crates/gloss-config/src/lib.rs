use std::env;
use std::path::{Path, PathBuf};

/// Converter configuration, overridable through the environment
pub struct Config {
    /// Path to the wiktextract dump to read
    pub input: PathBuf,
    /// Path the sorted JSON-lines output is written to
    pub output: PathBuf,
    /// How many aggregated records between progress notices
    pub progress_every: u64,
}

impl Config {
    pub fn new() -> Self {
        let input = env::var("GLOSS_INPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_input_path());

        let output = env::var("GLOSS_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("defs.json"));

        let progress_every = env::var("GLOSS_PROGRESS_EVERY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000); // progress notice cadence

        Config {
            input,
            output,
            progress_every,
        }
    }
}

/// The conventional dump location, resolved next to the executable
fn default_input_path() -> PathBuf {
    let base = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("raw_data").join("kaikki.org-dictionary-English.json")
}
