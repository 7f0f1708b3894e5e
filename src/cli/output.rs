/// Writing results to stdout and errors to stderr. Stage timing.
use std::io::Write;

use crate::commands::Outcome;
use crate::dataset::OutputFormat;
use crate::types::ErrorOutput;

/// Print an outcome. `NoResults` prints nothing at all.
pub fn write_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Help(text) | Outcome::Results(text) => println!("{text}"),
        Outcome::NoResults => {}
    }
}

// --- Error output ---

/// Write a structured error to stderr: a JSON envelope for `json` output,
/// a plain `Error:` line otherwise.
pub fn write_error(err: &ErrorOutput, format: OutputFormat) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match format {
        OutputFormat::Json => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Cli | OutputFormat::Csv => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Stage timer ---

/// A RAII timer that logs elapsed milliseconds at `debug` level on drop.
///
/// Does nothing unless debug logging is enabled (`RUST_LOG=debug`).
pub struct StageTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl StageTimer {
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active: log::log_enabled!(log::Level::Debug),
        }
    }
}

impl Drop for StageTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            log::debug!("{}: {ms:.2}ms", self.label);
        }
    }
}
