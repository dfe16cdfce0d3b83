//! Error types for quiz deck generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a corpus or assembling a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// The corpus directory does not exist or is not a directory.
    #[error("Corpus directory not found: {}", .0.display())]
    CorpusNotFound(PathBuf),

    /// A corpus directory entry or category file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A category file ends on a question without an answer (strict mode only).
    #[error("Category '{category}' ends with an unanswered question: {question}")]
    DanglingQuestion { category: String, question: String },

    /// No category owns a question id the corpus claims to hold.
    #[error("Corpus index is inconsistent: no category owns question {0}")]
    InconsistentIndex(usize),

    /// A question id outside the loaded corpus was requested.
    #[error("Unknown question id: {0}")]
    UnknownQuestion(usize),
}
