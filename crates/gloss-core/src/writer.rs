use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::record::DefEntry;

/// Sort the aggregated words and stream them to `path` as JSON lines, one
/// `[word, entries]` array per line, ascending by word.
///
/// Output goes to a sibling `.tmp` file first and is renamed into place after
/// a successful flush, so an interrupted run never leaves a truncated file.
/// Returns the number of distinct words written.
pub fn write_output(
    path: &Path,
    entries: &HashMap<String, Vec<DefEntry>>,
) -> Result<u64, ConvertError> {
    tracing::info!("Sorting words");
    let mut words: Vec<&String> = entries.keys().collect();
    words.sort_unstable();

    tracing::info!("Writing JSON lines to {}", path.display());
    let tmp = tmp_path(path);
    let mut out = BufWriter::new(File::create(&tmp)?);
    for word in &words {
        write_line(&mut out, word, &entries[*word])?;
    }
    out.flush()?;
    drop(out);
    fs::rename(&tmp, path)?;

    Ok(words.len() as u64)
}

/// Emit one `[word, entries]` line in compact encoding.
fn write_line<W: Write>(out: &mut W, word: &str, entries: &[DefEntry]) -> Result<(), ConvertError> {
    serde_json::to_writer(&mut *out, &(word, entries))?;
    out.write_all(b"\n")?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "defs.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}
