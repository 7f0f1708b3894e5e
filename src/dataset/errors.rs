/// Errors from the dataset query layer.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or querying the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The `regex` matcher was given a pattern or flags it cannot compile.
    #[error("Invalid regular expression /{pattern}/{flags}: {reason}")]
    MalformedPattern {
        /// Pattern half of the search term.
        pattern: String,
        /// Flags half of the search term (may be empty).
        flags: String,
        /// Why compilation failed.
        reason: String,
    },

    /// The dataset file could not be read.
    #[error("Cannot read dataset '{}': {source}", path.display())]
    Unreadable {
        /// Path taken from `HADE_DATA`.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not a JSON array of records.
    #[error("Dataset '{origin}' is not a valid record array: {source}")]
    Malformed {
        /// File path, or `bundled` for the compiled-in dataset.
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// JSON rendering of the results failed.
    #[error("Cannot render results as JSON: {0}")]
    Render(#[from] serde_json::Error),
}

/// Exit code mapping for `DatasetError` variants.
impl DatasetError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MalformedPattern { .. } => 2,
            Self::Unreadable { .. } | Self::Malformed { .. } | Self::Render(_) => 1,
        }
    }

    /// Machine-readable code for the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedPattern { .. } => "malformed_pattern",
            Self::Unreadable { .. } | Self::Malformed { .. } => "dataset_unavailable",
            Self::Render(_) => "render_failed",
        }
    }
}
