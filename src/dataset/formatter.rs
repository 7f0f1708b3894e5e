/// Rendering of result sequences. Renderers never filter or reorder.
use clap::ValueEnum;

use super::{errors::DatasetError, record::Record};

/// Header row of the `csv` format.
pub const CSV_HEADER: &str = "Tag Name, Data set, Percentage, Pages Seen, Pages Crawled";

/// Output formats selectable with `-o`/`--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// `<element> [client] pct% (pages/totalPages)`, one per line.
    #[default]
    Cli,
    /// Quoted comma-separated values with a header row.
    Csv,
    /// Pretty-printed JSON array.
    Json,
}

impl OutputFormat {
    /// Render `records` as a single string without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Render` if JSON serialization fails.
    pub fn render(self, records: &[&Record]) -> Result<String, DatasetError> {
        match self {
            Self::Cli => Ok(render_cli(records)),
            Self::Csv => Ok(render_csv(records)),
            Self::Json => Ok(serde_json::to_string_pretty(records)?),
        }
    }
}

fn render_cli(records: &[&Record]) -> String {
    records
        .iter()
        .map(|r| {
            format!(
                "<{}> [{}] {}% ({}/{})",
                r.element, r.client, r.pct, r.pages, r.total_pages
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_csv(records: &[&Record]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.to_owned());
    for r in records {
        let cells = [
            csv_cell(&r.element),
            csv_cell(&r.client),
            csv_cell(&r.pct.to_string()),
            csv_cell(&r.pages.to_string()),
            csv_cell(&r.total_pages.to_string()),
        ];
        lines.push(cells.join(","));
    }
    lines.join("\n")
}

/// Quote a cell, doubling any embedded quotes.
fn csv_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
