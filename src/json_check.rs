// WHY: Recursive syntax check for the JSON layout/config assets in the project tree
// Discovery is a blocking directory walk; validation reads files with tokio::fs

use anyhow::Result;
use ignore::WalkBuilder;
use serde::de::IgnoredAny;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// Directories never descended into
pub const DEFAULT_SKIP_DIRS: &[&str] = &[".git", ".gradle", ".gradle_data", "build"];

/// Configuration for the JSON check
#[derive(Debug, Clone)]
pub struct JsonCheckConfig {
    /// Directory names pruned from the walk
    pub skip_dirs: Vec<String>,
    /// Stop at the first failing file
    pub fail_fast: bool,
    /// Lines of context shown on each side of a syntax error
    pub context_radius: usize,
}

impl Default for JsonCheckConfig {
    fn default() -> Self {
        Self {
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
            fail_fast: false,
            context_radius: 2,
        }
    }
}

/// A source line shown around a syntax error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextLine {
    /// 1-based line number
    pub number: usize,
    pub text: String,
    pub is_error_line: bool,
}

/// Problem found in a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonIssue {
    Syntax {
        path: PathBuf,
        message: String,
        line: usize,
        column: usize,
        context: Vec<ContextLine>,
    },
    Unreadable {
        path: PathBuf,
        message: String,
    },
}

impl JsonIssue {
    pub fn path(&self) -> &Path {
        match self {
            JsonIssue::Syntax { path, .. } | JsonIssue::Unreadable { path, .. } => path,
        }
    }
}

impl fmt::Display for JsonIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonIssue::Syntax {
                path,
                message,
                line,
                column,
                context,
            } => {
                writeln!(f, "Syntax error: {}", path.display())?;
                writeln!(f, "   Reason: {message}")?;
                write!(f, "   Location: line {line}, column {column}")?;
                for ctx in context {
                    let marker = if ctx.is_error_line { ">>" } else { "  " };
                    write!(f, "\n   {} {}: {}", marker, ctx.number, ctx.text)?;
                }
                Ok(())
            }
            JsonIssue::Unreadable { path, message } => {
                writeln!(f, "Read failed: {}", path.display())?;
                write!(f, "   Reason: {message}")
            }
        }
    }
}

/// Result of checking a directory tree
#[derive(Debug, Clone, Default)]
pub struct CheckSummary {
    pub files_checked: usize,
    pub issues: Vec<JsonIssue>,
}

impl CheckSummary {
    pub fn has_errors(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// Regular file, or a symlink that does not resolve to a directory
///
/// Dangling links are kept so that reading them reports an unreadable file.
fn is_file_entry(entry: &ignore::DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => !std::fs::metadata(entry.path()).is_ok_and(|m| m.is_dir()),
        _ => false,
    }
}

/// Find every `*.json` file under `root_dir`, skipping pruned directories.
///
/// Symlinked directories are not descended into, but symlinks to files are
/// checked through their target. Hidden files and ignore files get no special
/// treatment. Paths are returned sorted.
pub fn discover_json_files(root_dir: &Path, config: &JsonCheckConfig) -> Vec<PathBuf> {
    let skip: HashSet<String> = config.skip_dirs.iter().cloned().collect();

    let walker = WalkBuilder::new(root_dir)
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            entry.depth() == 0 || !is_dir || !skip.contains(&*entry.file_name().to_string_lossy())
        })
        .build();

    let mut files = Vec::new();
    for result in walker {
        match result {
            Ok(entry) => {
                if !is_file_entry(&entry) {
                    continue;
                }
                if entry.file_name().to_string_lossy().ends_with(".json") {
                    debug!("Found JSON file: {}", entry.path().display());
                    files.push(entry.into_path());
                }
            }
            Err(e) => {
                warn!("Directory walk error (continuing): {}", e);
            }
        }
    }

    files.sort();
    files
}

/// Lines `line - radius ..= line + radius` (1-based `line`), clamped to the content
fn context_lines(content: &str, line: usize, radius: usize) -> Vec<ContextLine> {
    let error_index = line.saturating_sub(1);
    let start = error_index.saturating_sub(radius);

    content
        .lines()
        .enumerate()
        .skip(start)
        .take(error_index + radius + 1 - start)
        .map(|(i, text)| ContextLine {
            number: i + 1,
            text: text.trim_end().to_string(),
            is_error_line: i == error_index,
        })
        .collect()
}

/// Check that `content` is syntactically valid JSON.
pub fn validate_json_str(path: &Path, content: &str, context_radius: usize) -> Option<JsonIssue> {
    let err = serde_json::from_str::<IgnoredAny>(content).err()?;

    let line = err.line();
    let column = err.column();
    let full = err.to_string();
    let suffix = format!(" at line {line} column {column}");
    let message = full.strip_suffix(&suffix).unwrap_or(&full).to_string();

    Some(JsonIssue::Syntax {
        path: path.to_path_buf(),
        message,
        line,
        column,
        context: context_lines(content, line, context_radius),
    })
}

/// Read and check a single file. `None` means the file is valid.
pub async fn validate_json_file(path: &Path, context_radius: usize) -> Option<JsonIssue> {
    match fs::read_to_string(path).await {
        Ok(content) => validate_json_str(path, &content, context_radius),
        Err(e) => Some(JsonIssue::Unreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
    }
}

/// Check every JSON file under `root_dir`.
pub async fn check_json_files(root_dir: impl AsRef<Path>, config: JsonCheckConfig) -> Result<CheckSummary> {
    let root_dir = root_dir.as_ref().to_path_buf();

    if !root_dir.exists() {
        anyhow::bail!("Root directory does not exist: {}", root_dir.display());
    }
    if !root_dir.is_dir() {
        anyhow::bail!("Root path is not a directory: {}", root_dir.display());
    }

    info!("Scanning directory: {}", root_dir.display());

    let walk_root = root_dir.clone();
    let walk_config = config.clone();
    let files = tokio::task::spawn_blocking(move || discover_json_files(&walk_root, &walk_config)).await?;

    let mut summary = CheckSummary::default();
    for path in &files {
        summary.files_checked += 1;
        if let Some(issue) = validate_json_file(path, config.context_radius).await {
            warn!("JSON check failed for {}", issue.path().display());
            summary.issues.push(issue);
            if config.fail_fast {
                info!("Stopping at first failure (fail-fast)");
                break;
            }
        }
    }

    info!(
        "JSON check complete: {} files checked, {} errors",
        summary.files_checked,
        summary.issues.len()
    );
    Ok(summary)
}
