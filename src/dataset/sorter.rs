/// Result ordering.
///
/// All orders are stable: records with equal keys keep their input order.
/// The character-keyed orders compare only the first character, so
/// `apple` and `avocado` are equal under `alphabetical`.
use std::cmp::Ordering;

use clap::ValueEnum;

use super::record::Record;

/// Sort orders selectable with `-s`/`--sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum SortOrder {
    /// Highest percentage first.
    #[default]
    #[value(name = "mostUsed")]
    MostUsed,
    /// Lowest percentage first.
    #[value(name = "leastUsed")]
    LeastUsed,
    /// By first character of the element, ascending.
    Alphabetical,
    /// By first character of the element, descending.
    Reverse,
    /// Mobile rows first.
    Mobile,
    /// Desktop rows first.
    Desktop,
}

impl SortOrder {
    /// Compare two records under this order.
    #[must_use]
    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            Self::MostUsed => pct_key(b).cmp(&pct_key(a)),
            Self::LeastUsed => pct_key(a).cmp(&pct_key(b)),
            Self::Alphabetical => first_char(&a.element).cmp(&first_char(&b.element)),
            Self::Reverse => first_char(&b.element).cmp(&first_char(&a.element)),
            Self::Mobile => first_char(&b.client).cmp(&first_char(&a.client)),
            Self::Desktop => first_char(&a.client).cmp(&first_char(&b.client)),
        }
    }

    /// Return a new, stably sorted sequence. The input is left untouched.
    #[must_use]
    pub fn sort<'a>(self, records: &[&'a Record]) -> Vec<&'a Record> {
        let mut sorted = records.to_vec();
        sorted.sort_by(|a, b| self.compare(a, b));
        sorted
    }
}

/// Totally ordered percentage key; non-numeric values rank below all numbers.
#[derive(Debug)]
struct PctKey(Option<f64>);

impl PartialEq for PctKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PctKey {}

impl PartialOrd for PctKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PctKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (a, b) => a.is_some().cmp(&b.is_some()),
        }
    }
}

fn pct_key(record: &Record) -> PctKey {
    PctKey(record.pct.as_f64())
}

/// Code point of the first character; an empty string ranks first.
fn first_char(s: &str) -> Option<u32> {
    s.chars().next().map(u32::from)
}
