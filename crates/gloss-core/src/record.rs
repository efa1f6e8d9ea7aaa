use serde::{Deserialize, Serialize};

/// One wiktextract entry, one JSON object per input line.
///
/// Only the fields the converter reads are modeled; the dump carries many
/// more, all ignored during deserialization.
#[derive(Debug, Deserialize)]
pub struct RawRecord {
    pub word: String,
    pub pos: String,
    #[serde(default)]
    pub senses: Vec<RawSense>,
    pub etymology_text: Option<String>,
}

/// A single sense of an entry
#[derive(Debug, Default, Deserialize)]
pub struct RawSense {
    #[serde(default)]
    pub raw_glosses: Vec<String>,
    #[serde(default)]
    pub glosses: Vec<String>,
}

/// One aggregated output entry: a part of speech plus its definitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefEntry {
    pub pos: String,
    pub defs: Vec<String>,
}

/// Parse a single input line as one wiktextract record.
///
/// Malformed lines are dropped with a warning rather than failing the run;
/// the end-of-run accounting check reports the divergence.
pub fn parse_line(line: &str) -> Option<RawRecord> {
    match serde_json::from_str(line) {
        Ok(record) => Some(record),
        Err(err) => {
            tracing::warn!("dropping malformed input line: {err}");
            None
        }
    }
}
