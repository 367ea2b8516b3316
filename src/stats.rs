// WHY: Optional machine-readable record of a conversion run (--stats-out)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Summary of one converter invocation
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConversionStats {
    /// Subcommand that produced the output (extract-binary, convert-combined)
    pub tool: String,
    pub input: String,
    pub output: String,
    /// Number of lines in the output word list
    pub words_written: u64,
    /// Raw candidates before deduplication, when the tool dedups
    pub candidates_scanned: Option<u64>,
    /// Wall-clock time in milliseconds
    pub duration_ms: u64,
    /// Non-fatal problems seen during the run
    pub warnings: Vec<String>,
}

impl ConversionStats {
    /// Write the stats as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write stats file {}", path.display()))?;
        Ok(())
    }
}
