// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use implus_tools::DICTIONARY_MAGIC;

/// Test fixture helper for creating temporary directories with dictionary and JSON files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Write raw bytes to a file under the fixture root
    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &[u8]) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        // Create parent directories if needed
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Write a binary dictionary: the correct magic header followed by `body`
    pub fn create_binary_dict<P: AsRef<Path>>(&self, relative_path: P, body: &[u8]) -> PathBuf {
        let mut data = DICTIONARY_MAGIC.to_be_bytes().to_vec();
        data.extend_from_slice(body);
        self.create_file(relative_path, &data)
    }

    /// Path for an output file that does not exist yet
    pub fn output_path<P: AsRef<Path>>(&self, relative_path: P) -> PathBuf {
        self.root_path.join(relative_path)
    }

    /// Parse a word list back into (word, frequency) pairs
    pub fn read_word_list<P: AsRef<Path>>(&self, path: P) -> Vec<(String, i64)> {
        let content = fs::read_to_string(path).expect("Failed to read word list");
        content
            .lines()
            .map(|line| {
                let (word, freq) = line.split_once('\t').expect("Missing tab separator");
                (word.to_string(), freq.parse().expect("Frequency is not an integer"))
            })
            .collect()
    }
}
