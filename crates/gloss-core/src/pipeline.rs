use std::path::Path;

use crate::aggregate::Aggregator;
use crate::error::ConvertError;
use crate::record;
use crate::source::LineSource;
use crate::summary::RunSummary;
use crate::writer;

/// Run the full conversion: stream, parse, fold, sort, write, verify.
///
/// Stages interleave record by record; the aggregation map inside the
/// [`Aggregator`] is the only state retained across the run. The accounting
/// invariant is checked last, after the output file is already in place, so a
/// mismatch reports failure without discarding the written output.
pub fn run(input: &Path, output: &Path, progress_every: u64) -> Result<RunSummary, ConvertError> {
    tracing::info!("Reading {}", input.display());
    let source = LineSource::open(input)?;

    let mut aggregator = Aggregator::new(progress_every);
    let mut ingested = 0u64;
    for line in source {
        let line = line?;
        ingested += 1;
        if let Some(parsed) = record::parse_line(&line) {
            aggregator.fold(parsed)?;
        }
    }

    let distinct_words = writer::write_output(output, aggregator.entries())?;

    let summary = RunSummary {
        ingested,
        processed: aggregator.processed(),
        skipped: aggregator.skipped(),
        distinct_words,
    };
    summary.log();
    summary.verify()?;
    Ok(summary)
}
