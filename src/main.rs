#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! hade — filter and sort HTTP Archive HTML tag usage data.

mod cli;
mod commands;
mod dataset;
mod types;

use cli::{write_error, write_outcome};
use commands::Outcome;
use dataset::{DatasetError, Source};
use types::ErrorOutput;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let config = cli::resolve(&args);

    match run(&config) {
        Ok(outcome) => write_outcome(&outcome),
        Err(err) => {
            let error_output = ErrorOutput::from_dataset_error(&err);
            write_error(&error_output, config.output);
            std::process::exit(err.exit_code());
        }
    }
}

fn run(config: &cli::Configuration) -> Result<Outcome, DatasetError> {
    let store = Source::from_env().load()?;
    commands::dispatch(&store, config)
}
