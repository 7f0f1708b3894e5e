/// Command dispatch: help text or the query pipeline.
pub mod help;
pub mod query;

use crate::cli::Configuration;
use crate::dataset::{DatasetError, RecordStore};

/// What one invocation prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Static help text.
    Help(String),
    /// Rendered, non-empty result set.
    Results(String),
    /// The pipeline produced no records; nothing is printed.
    NoResults,
}

/// Run help mode or the query pipeline for `config`.
///
/// Help mode never touches the pipeline, so a malformed pattern is not
/// reported when help is requested.
///
/// # Errors
///
/// Returns `DatasetError` when the query pipeline fails.
pub fn dispatch(store: &RecordStore, config: &Configuration) -> Result<Outcome, DatasetError> {
    if config.help {
        return Ok(help::run(store));
    }
    query::run(store, config)
}
