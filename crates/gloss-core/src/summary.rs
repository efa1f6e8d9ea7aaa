use crate::error::ConvertError;

/// End-of-run counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read from the input file
    pub ingested: u64,
    /// Records aggregated into the output
    pub processed: u64,
    /// Records dropped by the word filter
    pub skipped: u64,
    /// Distinct words written
    pub distinct_words: u64,
}

impl RunSummary {
    /// Log the final counter report
    pub fn log(&self) {
        tracing::info!("Lines ingested:    {}", self.ingested);
        tracing::info!("Records written:   {}", self.processed);
        tracing::info!("Records skipped:   {}", self.skipped);
        tracing::info!("Written + skipped: {}", self.processed + self.skipped);
        tracing::info!("Distinct words:    {}", self.distinct_words);
    }

    /// Every ingested line must end up written or skipped; anything else
    /// means records were dropped without being accounted for.
    pub fn verify(&self) -> Result<(), ConvertError> {
        if self.processed + self.skipped != self.ingested {
            return Err(ConvertError::CountMismatch {
                ingested: self.ingested,
                processed: self.processed,
                skipped: self.skipped,
            });
        }
        Ok(())
    }
}
