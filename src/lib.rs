pub mod binary_dict;
pub mod combined;
pub mod error;
pub mod json_check;
pub mod stats;
pub mod word_list;

// Re-export main types for convenient access
pub use binary_dict::{
    extract_binary_dictionary, Candidate, ExtractionReport, HeaderCheck,
    DICTIONARY_MAGIC, FALLBACK_FREQUENCY,
};
pub use combined::{convert_combined, CombinedEntry};
pub use error::DictError;

// Re-export JSON check types for the CLI and integration tests
pub use json_check::{check_json_files, CheckSummary, JsonCheckConfig, JsonIssue};
pub use stats::ConversionStats;
