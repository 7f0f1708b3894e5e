/// Dataset layer: records, loading, matching, sorting, rendering.
pub mod errors;
pub mod formatter;
pub mod matcher;
pub mod record;
pub mod sorter;
pub mod source;

pub use errors::DatasetError;
pub use formatter::OutputFormat;
pub use matcher::{MatchType, Matcher};
pub use record::{Record, RecordStore};
pub use sorter::SortOrder;
pub use source::Source;
