/// Crawl records and the in-memory store that holds them.
use std::fmt;

use serde::{Deserialize, Serialize};

/// `client` value of the header row left over from the CSV export.
pub const SENTINEL_CLIENT: &str = "client";

/// Client name for mobile crawl rows.
pub const MOBILE: &str = "mobile";

/// Client name for desktop crawl rows.
pub const DESKTOP: &str = "desktop";

/// A numeric column that the dataset may encode as a JSON number or a string.
///
/// The original encoding is kept so output reproduces the dataset verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Metric {
    Number(serde_json::Number),
    Text(String),
}

impl Metric {
    /// Numeric value, or `None` when the text is not a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            Self::Text(s) => s.trim().parse().ok(),
        }
        .filter(|v: &f64| !v.is_nan())
    }

    /// Whole-number value, truncating fractional counts.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(n) => n.as_u64(),
            Self::Text(s) => s.trim().parse().ok(),
        }
        .or_else(|| self.as_f64().filter(|v| *v >= 0.0).map(|v| v as u64))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Metric {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map_or_else(|| Self::Text(value.to_string()), Self::Number)
    }
}

impl From<u64> for Metric {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for Metric {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// One row of crawl data. Field order is the JSON output order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// HTML tag name.
    pub element: String,
    /// `mobile`, `desktop`, or the header sentinel.
    pub client: String,
    /// Pages where the element was seen.
    pub pages: Metric,
    /// Pages crawled for this client.
    #[serde(rename = "totalPages")]
    pub total_pages: Metric,
    /// `pages / totalPages * 100`, precomputed by the dataset.
    pub pct: Metric,
}

impl Record {
    /// Whether this is the structural header row.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.client == SENTINEL_CLIENT
    }
}

/// The loaded dataset, in file order. Never mutated after loading.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of records.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the text is not a record array.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text).map(Self::new)
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Crawl-wide page total for `client`, read from its first record.
    #[must_use]
    pub fn client_total(&self, client: &str) -> u64 {
        self.records
            .iter()
            .find(|r| r.client == client)
            .and_then(|r| r.total_pages.as_u64())
            .unwrap_or(0)
    }

    /// Sum of the desktop and mobile crawl totals.
    #[must_use]
    pub fn site_total(&self) -> u64 {
        self.client_total(DESKTOP)
            .saturating_add(self.client_total(MOBILE))
    }
}
