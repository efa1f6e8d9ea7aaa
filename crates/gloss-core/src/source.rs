use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

use crate::error::ConvertError;

/// Streaming reader over the input dump: file order, one forward pass, one
/// open handle, released on drop.
pub struct LineSource {
    lines: Lines<BufReader<File>>,
}

impl LineSource {
    /// Open the input file, checking existence up front.
    ///
    /// A missing file is a user-facing precondition failure, reported before
    /// any output is produced.
    pub fn open(path: &Path) -> Result<Self, ConvertError> {
        if !path.exists() {
            return Err(ConvertError::InputNotFound(path.to_path_buf()));
        }
        let file = File::open(path)?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
        })
    }
}

impl Iterator for LineSource {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next()
    }
}
