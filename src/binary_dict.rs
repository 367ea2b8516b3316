// WHY: Best-effort word/frequency recovery from AOSP binary dictionaries
// The trie layout is not decoded; words are printable ASCII runs and the byte
// right after each run is taken as its frequency.

use crate::error::{DictError, Result};
use crate::word_list::write_word_list;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// Expected big-endian magic at the start of an AOSP binary dictionary
pub const DICTIONARY_MAGIC: u32 = 0x7855_B1ED;

/// Frequency assigned to a run that ends exactly at the end of the buffer
pub const FALLBACK_FREQUENCY: u8 = 200;

/// Size of the magic header in bytes
pub const HEADER_LEN: usize = 4;

/// A word recovered from the byte stream together with its trailing-byte frequency
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub word: String,
    pub frequency: u8,
}

impl Candidate {
    pub fn new(word: impl Into<String>, frequency: u8) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

/// Outcome of the magic number check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheck {
    Matched,
    Mismatch { found: u32 },
}

impl HeaderCheck {
    pub fn is_mismatch(&self) -> bool {
        matches!(self, HeaderCheck::Mismatch { .. })
    }
}

/// Summary of one extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    pub header: HeaderCheck,
    /// Candidates produced by the scan, before deduplication
    pub candidates_scanned: usize,
    /// Lines written to the output file
    pub words_written: usize,
}

/// Read the 4-byte big-endian magic and compare it against [`DICTIONARY_MAGIC`].
///
/// A short buffer is fatal; a wrong value is only reported through the returned
/// [`HeaderCheck`] and a single warning log line.
pub fn check_magic(data: &[u8]) -> Result<HeaderCheck> {
    let header: [u8; HEADER_LEN] = data
        .get(..HEADER_LEN)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(DictError::MalformedHeader { len: data.len() })?;

    let found = u32::from_be_bytes(header);
    if found == DICTIONARY_MAGIC {
        Ok(HeaderCheck::Matched)
    } else {
        warn!(
            "Unexpected dictionary magic {:#010x} (expected {:#010x}), continuing anyway",
            found, DICTIONARY_MAGIC
        );
        Ok(HeaderCheck::Mismatch { found })
    }
}

/// Visible ASCII including space
#[inline]
fn is_printable(b: u8) -> bool {
    (32..=126).contains(&b)
}

/// Collect every printable run longer than one byte, left to right.
///
/// The frequency of a run is the byte that terminates it, or
/// [`FALLBACK_FREQUENCY`] when the run reaches the end of `data`.
pub fn scan_printable_runs(data: &[u8]) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let mut run = String::new();

    for &b in data {
        if is_printable(b) {
            run.push(char::from(b));
            continue;
        }
        if run.len() > 1 {
            candidates.push(Candidate::new(std::mem::take(&mut run), b));
        } else {
            run.clear();
        }
    }

    if run.len() > 1 {
        candidates.push(Candidate::new(run, FALLBACK_FREQUENCY));
    }

    candidates
}

/// Drop exact duplicates and order by frequency, highest first.
///
/// Ties keep first-seen order.
pub fn rank_candidates(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen = HashSet::with_capacity(candidates.len());
    let mut unique: Vec<Candidate> = candidates
        .into_iter()
        .filter(|c| seen.insert(c.clone()))
        .collect();

    unique.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    unique
}

/// Extract candidates from an in-memory dictionary image.
///
/// Returns the header outcome, the raw candidate count and the ranked list.
pub fn extract_from_bytes(data: &[u8]) -> Result<(HeaderCheck, usize, Vec<Candidate>)> {
    let header = check_magic(data)?;
    let candidates = scan_printable_runs(&data[HEADER_LEN..]);
    let scanned = candidates.len();
    Ok((header, scanned, rank_candidates(candidates)))
}

/// Convert a binary dictionary at `input_path` into a word list at `output_path`.
pub fn extract_binary_dictionary(input_path: &Path, output_path: &Path) -> Result<ExtractionReport> {
    info!("Extracting binary dictionary: {}", input_path.display());

    let data = std::fs::read(input_path).map_err(|e| DictError::read(input_path, e))?;
    let (header, candidates_scanned, ranked) = extract_from_bytes(&data)?;

    let words_written = write_word_list(
        output_path,
        ranked.iter().map(|c| (c.word.as_str(), c.frequency)),
    )?;

    info!(
        "Exported {} words ({} candidates scanned) to {}",
        words_written,
        candidates_scanned,
        output_path.display()
    );

    Ok(ExtractionReport {
        header,
        candidates_scanned,
        words_written,
    })
}
