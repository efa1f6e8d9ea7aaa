use std::path::PathBuf;

/// Errors produced by the conversion pipeline
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("blank definition for word '{word}' in record: {record}")]
    EmptyDefinition { word: String, record: String },

    #[error("count mismatch: {processed} written + {skipped} skipped != {ingested} ingested")]
    CountMismatch {
        ingested: u64,
        processed: u64,
        skipped: u64,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
