/// Term matching over record element names.
use clap::ValueEnum;
use regex::{Regex, RegexBuilder};

use super::{errors::DatasetError, record::Record};

/// Matching strategies selectable with `-t`/`--type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum MatchType {
    /// `pattern/flags` regular expression search.
    #[default]
    Regex,
    /// Element starts with the term.
    #[value(name = "startsWith")]
    StartsWith,
    /// Element ends with the term.
    #[value(name = "endsWith")]
    EndsWith,
    /// Element contains the term.
    Includes,
    /// Element equals the term exactly.
    Exact,
    /// Element equals the term, ignoring case and surrounding whitespace.
    Loose,
}

/// A compiled predicate over element names.
#[derive(Debug, Clone)]
pub enum Matcher {
    Regex(Regex),
    StartsWith(String),
    EndsWith(String),
    Includes(String),
    Exact(String),
    /// Holds the already lower-cased, trimmed term.
    Loose(String),
}

impl Matcher {
    /// Build the predicate for `kind` from the user's search term.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::MalformedPattern` when `kind` is `Regex` and the
    /// term does not compile.
    pub fn new(kind: MatchType, term: &str) -> Result<Self, DatasetError> {
        Ok(match kind {
            MatchType::Regex => Self::Regex(compile_term(term)?),
            MatchType::StartsWith => Self::StartsWith(term.to_owned()),
            MatchType::EndsWith => Self::EndsWith(term.to_owned()),
            MatchType::Includes => Self::Includes(term.to_owned()),
            MatchType::Exact => Self::Exact(term.to_owned()),
            MatchType::Loose => Self::Loose(normalize(term)),
        })
    }

    /// Whether `element` satisfies the predicate.
    #[must_use]
    pub fn is_match(&self, element: &str) -> bool {
        match self {
            Self::Regex(re) => re.is_match(element),
            Self::StartsWith(term) => element.starts_with(term.as_str()),
            Self::EndsWith(term) => element.ends_with(term.as_str()),
            Self::Includes(term) => element.contains(term.as_str()),
            Self::Exact(term) => element == term.as_str(),
            Self::Loose(term) => normalize(element) == *term,
        }
    }

    /// Keep the records whose element matches, in input order.
    #[must_use]
    pub fn filter<'a>(&self, records: &[&'a Record]) -> Vec<&'a Record> {
        records
            .iter()
            .copied()
            .filter(|r| self.is_match(&r.element))
            .collect()
    }
}

fn normalize(s: &str) -> String {
    s.to_lowercase().trim().to_owned()
}

/// Compile a `pattern/flags` term. Only the first `/` separates the halves.
///
/// Flags follow JavaScript spelling: `i`, `m`, `s` and `y` change matching;
/// `g`, `u` and `d` are accepted but have no effect on a single test.
fn compile_term(term: &str) -> Result<Regex, DatasetError> {
    let (pattern, flags) = term.split_once('/').unwrap_or((term, ""));
    let malformed = |reason: String| DatasetError::MalformedPattern {
        pattern: pattern.to_owned(),
        flags: flags.to_owned(),
        reason,
    };

    let mut seen = Vec::with_capacity(flags.len());
    let (mut case_insensitive, mut multi_line, mut dot_all, mut sticky) =
        (false, false, false, false);
    for flag in flags.chars() {
        if seen.contains(&flag) {
            return Err(malformed(format!("duplicate flag '{flag}'")));
        }
        seen.push(flag);
        match flag {
            'i' => case_insensitive = true,
            'm' => multi_line = true,
            's' => dot_all = true,
            'y' => sticky = true,
            'g' | 'u' | 'd' => {}
            other => return Err(malformed(format!("unknown flag '{other}'"))),
        }
    }

    let build = |source: &str| {
        RegexBuilder::new(source)
            .case_insensitive(case_insensitive)
            .multi_line(multi_line)
            .dot_matches_new_line(dot_all)
            .build()
            .map_err(|e| malformed(e.to_string()))
    };

    let regex = build(pattern)?;
    if sticky {
        // Sticky with lastIndex 0 only matches at the start of the input.
        build(&format!(r"\A(?:{pattern})"))
    } else {
        Ok(regex)
    }
}
