/// The query pipeline: sentinel and device filters, matcher, sorter, formatter.
use crate::cli::{Configuration, StageTimer};
use crate::dataset::{DatasetError, Matcher, Record, RecordStore};

use super::Outcome;

/// Run the pipeline over `store`. The store is only borrowed; every stage
/// produces a new sequence.
///
/// # Errors
///
/// Returns `DatasetError::MalformedPattern` for an invalid `regex` term, or
/// `DatasetError::Render` if rendering fails.
pub fn run(store: &RecordStore, config: &Configuration) -> Result<Outcome, DatasetError> {
    let t_filter = StageTimer::new("device_filter");
    let candidates: Vec<&Record> = store
        .records()
        .iter()
        .filter(|r| !r.is_sentinel())
        .filter(|r| config.devices.admits(r))
        .collect();
    drop(t_filter);
    log::debug!("{} of {} records after device filter", candidates.len(), store.len());

    let t_match = StageTimer::new("match");
    let matched = Matcher::new(config.match_type, &config.term)?.filter(&candidates);
    drop(t_match);
    log::debug!("{} records matched {:?}", matched.len(), config.term);

    let t_sort = StageTimer::new("sort");
    let sorted = config.sort_order.sort(&matched);
    drop(t_sort);

    if sorted.is_empty() {
        return Ok(Outcome::NoResults);
    }

    let t_render = StageTimer::new("render");
    let rendered = config.output.render(&sorted)?;
    drop(t_render);

    Ok(Outcome::Results(rendered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::resolve;

    fn store() -> RecordStore {
        RecordStore::from_json(
            r#"[
                {"element":"element","client":"client","pages":"pages","totalPages":"totalPages","pct":"pct"},
                {"element":"tbody","client":"desktop","pages":"300","totalPages":"1000","pct":"30.00"},
                {"element":"body","client":"desktop","pages":"990","totalPages":"1000","pct":"99.00"},
                {"element":"div","client":"mobile","pages":"1900","totalPages":"2000","pct":"95.00"},
                {"element":"body","client":"mobile","pages":"1985","totalPages":"2000","pct":"99.25"}
            ]"#,
        )
        .unwrap()
    }

    fn run_args(args: &[&str]) -> Result<Outcome, DatasetError> {
        run(&store(), &resolve(args))
    }

    #[test]
    fn test_exact_body_end_to_end() {
        let outcome = run_args(&["body", "-t", "exact"]).unwrap();
        assert_eq!(
            outcome,
            Outcome::Results(
                "<body> [mobile] 99.25% (1985/2000)\n<body> [desktop] 99.00% (990/1000)"
                    .to_owned()
            )
        );
    }

    #[test]
    fn test_default_regex_is_partial() {
        let Outcome::Results(text) = run_args(&["body"]).unwrap() else {
            panic!("expected results");
        };
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("<tbody>"));
    }

    #[test]
    fn test_device_exclusion() {
        let Outcome::Results(text) = run_args(&["body", "-t", "exact", "-m"]).unwrap() else {
            panic!("expected results");
        };
        assert_eq!(text, "<body> [desktop] 99.00% (990/1000)");
    }

    #[test]
    fn test_excluding_both_devices_prints_nothing() {
        assert_eq!(run_args(&["body", "-m", "-d"]).unwrap(), Outcome::NoResults);
    }

    #[test]
    fn test_sentinel_row_never_matches() {
        assert_eq!(
            run_args(&["element", "-t", "exact"]).unwrap(),
            Outcome::NoResults
        );
    }

    #[test]
    fn test_no_match_is_empty_even_for_csv_and_json() {
        for format in ["cli", "csv", "json"] {
            assert_eq!(
                run_args(&["marquee", "-o", format]).unwrap(),
                Outcome::NoResults
            );
        }
    }

    #[test]
    fn test_malformed_pattern_propagates() {
        assert!(matches!(
            run_args(&["(body"]),
            Err(DatasetError::MalformedPattern { .. })
        ));
    }

    #[test]
    fn test_store_untouched() {
        let store = store();
        let before = store.records().to_vec();
        run(&store, &resolve(&["body", "-s", "alphabetical"])).unwrap();
        assert_eq!(store.records(), before.as_slice());
    }
}
