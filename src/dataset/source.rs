/// Where the records come from: the bundled crawl export or a file on disk.
use std::path::{Path, PathBuf};

use super::{errors::DatasetError, record::RecordStore};

/// Environment variable naming a dataset file that replaces the bundled one.
pub const DATA_ENV: &str = "HADE_DATA";

const BUNDLED: &str = include_str!("../../data/html-data-aug-2019.json");

/// Dataset location resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Bundled,
    File(PathBuf),
}

impl Source {
    /// `HADE_DATA` when set and non-empty, otherwise the bundled dataset.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var_os(DATA_ENV) {
            Some(path) if !path.is_empty() => Self::File(PathBuf::from(path)),
            _ => Self::Bundled,
        }
    }

    /// Read and parse the records.
    ///
    /// # Errors
    ///
    /// - `DatasetError::Unreadable` — the file cannot be read
    /// - `DatasetError::Malformed` — the JSON is not a record array
    pub fn load(&self) -> Result<RecordStore, DatasetError> {
        match self {
            Self::Bundled => parse(BUNDLED, "bundled"),
            Self::File(path) => load_file(path),
        }
    }
}

fn load_file(path: &Path) -> Result<RecordStore, DatasetError> {
    let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Unreadable {
        path: path.to_owned(),
        source,
    })?;
    parse(&text, &path.display().to_string())
}

fn parse(text: &str, origin: &str) -> Result<RecordStore, DatasetError> {
    let store = RecordStore::from_json(text).map_err(|source| DatasetError::Malformed {
        origin: origin.to_owned(),
        source,
    })?;
    if store.is_empty() {
        log::warn!("dataset {origin} contains no records");
    }
    log::debug!("loaded {} records from {origin}", store.len());
    Ok(store)
}
