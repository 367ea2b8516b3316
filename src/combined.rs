// WHY: Converts AOSP `.combined` dictionary exports into the IMPlus word list
// Lines look like ` word=hello,f=120,flags=,originalFreq=120`

use crate::error::{DictError, Result};
use crate::word_list::write_word_list;
use std::path::Path;
use tracing::info;

/// One dictionary entry parsed from a `.combined` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedEntry {
    pub word: String,
    pub frequency: i64,
}

/// Parse a single `.combined` line.
///
/// Returns `None` for header/shortcut/bigram lines and for entries whose word is empty.
pub fn parse_line(line: &str) -> Option<CombinedEntry> {
    let line = line.trim();
    if !line.starts_with("word=") {
        return None;
    }

    let mut word = "";
    let mut frequency = 0;
    for part in line.split(',') {
        if let Some(value) = part.strip_prefix("word=") {
            word = value;
        } else if let Some(value) = part.strip_prefix("f=") {
            frequency = value.trim().parse().unwrap_or(0);
        }
    }

    if word.is_empty() {
        return None;
    }

    Some(CombinedEntry {
        word: word.to_string(),
        frequency,
    })
}

/// Parse every word line in `content`, sorted by frequency descending.
///
/// Ties keep file order and duplicates are kept.
pub fn parse_combined(content: &str) -> Vec<CombinedEntry> {
    let mut entries: Vec<CombinedEntry> = content.lines().filter_map(parse_line).collect();
    entries.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    entries
}

/// Convert a `.combined` file into a word list. Returns the number of words written.
pub fn convert_combined(input_path: &Path, output_path: &Path) -> Result<usize> {
    info!("Parsing AOSP combined dictionary: {}", input_path.display());

    let bytes = std::fs::read(input_path).map_err(|e| DictError::read(input_path, e))?;
    // Exports sometimes carry stray non-UTF-8 bytes; those are replaced, not fatal
    let content = String::from_utf8_lossy(&bytes);

    let entries = parse_combined(&content);
    let count = write_word_list(
        output_path,
        entries.iter().map(|e| (e.word.as_str(), e.frequency)),
    )?;

    info!("Exported {} words to {}", count, output_path.display());
    Ok(count)
}
