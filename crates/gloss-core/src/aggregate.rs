use std::collections::HashMap;

use crate::error::ConvertError;
use crate::record::{DefEntry, RawRecord};

/// Fallback definition for entries whose senses and etymology yield nothing
pub const NO_DEFINITION: &str = "No definition found";

/// Folds parsed records into the per-word definition map.
///
/// Owns all run state: the aggregation map and the written/skipped counters.
/// Entry order within a word is input arrival order; keys are sorted later,
/// by the writer.
pub struct Aggregator {
    entries: HashMap<String, Vec<DefEntry>>,
    processed: u64,
    skipped: u64,
    progress_every: u64,
}

impl Aggregator {
    pub fn new(progress_every: u64) -> Self {
        Self {
            entries: HashMap::new(),
            processed: 0,
            skipped: 0,
            progress_every: progress_every.max(1),
        }
    }

    /// Fold one record into the map.
    ///
    /// Records whose word is not made of lowercase ASCII letters are counted
    /// and skipped. A record that resolves to a blank definition is a fatal
    /// data-integrity failure.
    pub fn fold(&mut self, record: RawRecord) -> Result<(), ConvertError> {
        if !is_playable(&record.word) {
            self.skipped += 1;
            return Ok(());
        }

        let defs = flatten_defs(&record);
        if defs.iter().any(|def| def.is_empty()) {
            tracing::error!("blank definition for '{}': {:?}", record.word, record);
            return Err(ConvertError::EmptyDefinition {
                record: format!("{record:?}"),
                word: record.word,
            });
        }

        self.entries
            .entry(record.word)
            .or_insert_with(Vec::new)
            .push(DefEntry {
                pos: record.pos,
                defs,
            });

        self.processed += 1;
        if self.processed % self.progress_every == 0 {
            tracing::info!("Processed {} records", self.processed);
        }
        Ok(())
    }

    /// Records aggregated so far
    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Records skipped by the word filter so far
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn entries(&self) -> &HashMap<String, Vec<DefEntry>> {
        &self.entries
    }
}

/// Words are playable only when made entirely of lowercase ASCII letters.
/// Uppercase, digits, hyphens, spaces and anything non-ASCII all disqualify.
fn is_playable(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// Flatten a record's senses into one definition list.
///
/// Each sense contributes its `raw_glosses` when non-empty, otherwise its
/// `glosses`; a record with no glosses at all falls back to its etymology
/// text, then to the fixed placeholder.
fn flatten_defs(record: &RawRecord) -> Vec<String> {
    let mut defs = Vec::new();
    for sense in &record.senses {
        if !sense.raw_glosses.is_empty() {
            defs.extend_from_slice(&sense.raw_glosses);
        } else if !sense.glosses.is_empty() {
            defs.extend_from_slice(&sense.glosses);
        }
    }

    if defs.is_empty() {
        defs.push(match &record.etymology_text {
            Some(text) => text.clone(),
            None => NO_DEFINITION.to_string(),
        });
    }
    defs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_line;

    fn record(line: &str) -> RawRecord {
        parse_line(line).expect("test line must parse")
    }

    #[test]
    fn aggregates_a_simple_record() {
        let mut agg = Aggregator::new(5000);
        agg.fold(record(
            r#"{"word":"cat","pos":"noun","senses":[{"glosses":["a small domesticated feline"]}]}"#,
        ))
        .unwrap();

        assert_eq!(agg.processed(), 1);
        assert_eq!(agg.skipped(), 0);
        assert_eq!(
            agg.entries()["cat"],
            vec![DefEntry {
                pos: "noun".into(),
                defs: vec!["a small domesticated feline".into()],
            }]
        );
    }

    #[test]
    fn skips_words_outside_lowercase_ascii() {
        let mut agg = Aggregator::new(5000);
        for word in ["Dog", "cat-o-nine-tails", "ice cream", "a1", "", "café", "don't"] {
            agg.fold(record(&format!(
                r#"{{"word":{},"pos":"noun","senses":[{{"glosses":["x"]}}]}}"#,
                serde_json::to_string(word).unwrap()
            )))
            .unwrap();
        }

        assert_eq!(agg.processed(), 0);
        assert_eq!(agg.skipped(), 7);
        assert!(agg.entries().is_empty());
    }

    #[test]
    fn preserves_arrival_order_for_repeated_words() {
        let mut agg = Aggregator::new(5000);
        agg.fold(record(
            r#"{"word":"run","pos":"verb","senses":[{"glosses":["to move quickly"]}]}"#,
        ))
        .unwrap();
        agg.fold(record(
            r#"{"word":"run","pos":"noun","senses":[{"glosses":["an act of running"]}]}"#,
        ))
        .unwrap();

        let entries = &agg.entries()["run"];
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].pos, "verb");
        assert_eq!(entries[1].pos, "noun");
    }

    #[test]
    fn raw_glosses_win_over_glosses_within_a_sense() {
        let mut agg = Aggregator::new(5000);
        agg.fold(record(
            r#"{"word":"cat","pos":"noun","senses":[{"raw_glosses":["(informal) a feline"],"glosses":["a feline"]}]}"#,
        ))
        .unwrap();

        assert_eq!(agg.entries()["cat"][0].defs, vec!["(informal) a feline"]);
    }

    #[test]
    fn senses_flatten_in_order_with_per_sense_fallback() {
        let mut agg = Aggregator::new(5000);
        agg.fold(record(
            r#"{"word":"cat","pos":"noun","senses":[{"glosses":["first"]},{"raw_glosses":["second","third"]},{}]}"#,
        ))
        .unwrap();

        assert_eq!(agg.entries()["cat"][0].defs, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_senses_fall_back_to_etymology() {
        let mut agg = Aggregator::new(5000);
        agg.fold(record(
            r#"{"word":"cat","pos":"noun","senses":[{}],"etymology_text":"From Old English catt."}"#,
        ))
        .unwrap();

        assert_eq!(agg.entries()["cat"][0].defs, vec!["From Old English catt."]);
    }

    #[test]
    fn no_glosses_and_no_etymology_fall_back_to_placeholder() {
        let mut agg = Aggregator::new(5000);
        agg.fold(record(r#"{"word":"cat","pos":"noun","senses":[{}]}"#))
            .unwrap();

        assert_eq!(agg.entries()["cat"][0].defs, vec![NO_DEFINITION]);
    }

    #[test]
    fn blank_gloss_is_fatal() {
        let mut agg = Aggregator::new(5000);
        let err = agg
            .fold(record(
                r#"{"word":"cat","pos":"noun","senses":[{"glosses":["a feline",""]}]}"#,
            ))
            .unwrap_err();

        match err {
            ConvertError::EmptyDefinition { word, .. } => assert_eq!(word, "cat"),
            other => panic!("expected EmptyDefinition, got {other:?}"),
        }
        assert_eq!(agg.processed(), 0);
    }

    #[test]
    fn blank_etymology_is_fatal_too() {
        // A present-but-blank etymology_text is corrupt source data, not a
        // reason to substitute the placeholder.
        let mut agg = Aggregator::new(5000);
        let err = agg
            .fold(record(
                r#"{"word":"cat","pos":"noun","senses":[{}],"etymology_text":""}"#,
            ))
            .unwrap_err();

        assert!(matches!(err, ConvertError::EmptyDefinition { .. }));
    }
}
