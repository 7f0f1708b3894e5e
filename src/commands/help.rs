/// Help text. Plugin lists are generated from the registries.
use clap::ValueEnum;

use crate::cli::args::names;
use crate::dataset::{MatchType, OutputFormat, RecordStore, SortOrder};

use super::Outcome;

/// Build the help outcome for `store`.
#[must_use]
pub fn run(store: &RecordStore) -> Outcome {
    Outcome::Help(help_text(store.site_total()))
}

/// The full help message for a crawl of `site_total` websites.
#[must_use]
pub fn help_text(site_total: u64) -> String {
    format!(
        r"
HTTPArchive DOM Explorer

About:

This utility lets you filter and sort data exported from the HTTPArchive crawl of {total} websites. Enter a search term, an optional matching type, an optional sorting order, and an output format.

Options:

  -m, --mobile     exclude mobile data from output
  -d, --desktop    exclude desktop data from output
  -t, --type       specify which type of term matching to use
  -s, --sort       specify the ordering of the results
  -o, --output     declare the formatting of the output
  -h, --help       display this help message

Matching types available:
{matchers}

Sorting orders available:
{sorters}

Output formats available:
{formatters}

Usage:

  To display stats for <body> tag usage:

    $ hade body -t exact

  To find all tag names starting with 'modal-'

    $ hade 'modal-' -t startsWith

  To find all tag names ending with '-modal' sorted alphabetically

    $ hade '-modal' -t endsWith -s alphabetical

  To match case-insensitively with a regular expression

    $ hade '^h[1-6]$/i'

  To display JSON output

    $ hade noscript -t exact -o json
",
        total = group_thousands(site_total),
        matchers = bullets::<MatchType>(),
        sorters = bullets::<SortOrder>(),
        formatters = bullets::<OutputFormat>(),
    )
}

fn bullets<T: ValueEnum>() -> String {
    names::<T>()
        .iter()
        .map(|name| format!("\n  - {name}"))
        .collect()
}

/// Format `n` with `,` between each group of three digits.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
