//! `mediatag batch`: name every request in a JSON file.

use log::info;
use mediatag_core::{BatchOutcome, CoreConfig, CoreError, NameRequest, Resolution, batch};
use std::io;
use std::path::Path;

use crate::cli::BatchArgs;
use crate::error::CliResult;
use crate::output::{print_failure, print_info, print_json, print_success};

fn load_requests(input: &Path) -> CliResult<Vec<NameRequest>> {
    if input == Path::new("-") {
        let contents = io::read_to_string(io::stdin())?;
        batch::parse_requests(&contents)
    } else {
        batch::read_requests(input)
    }
}

/// In strict mode, turns successes with an unknown resolution into failures.
fn apply_strict(outcomes: Vec<BatchOutcome>, config: &CoreConfig) -> Vec<BatchOutcome> {
    if !config.strict {
        return outcomes;
    }
    outcomes
        .into_iter()
        .map(|outcome| match outcome.result {
            Ok(name) if name.postfix().resolution() == Resolution::Unknown => BatchOutcome {
                index: outcome.index,
                result: Err(CoreError::StrictRejection(format!("'{}'", name.file_name()))),
            },
            result => BatchOutcome {
                index: outcome.index,
                result,
            },
        })
        .collect()
}

pub fn run_batch(args: &BatchArgs, config: &CoreConfig) -> CliResult<bool> {
    let requests = load_requests(&args.input)?;
    info!("Loaded {} request(s) from {}", requests.len(), args.input.display());

    let outcomes = apply_strict(batch::name_all(&requests, config.default_container), config);
    let summary = batch::summarize(&outcomes);

    if config.json_output {
        print_json(&outcomes)?;
    } else {
        for outcome in &outcomes {
            match &outcome.result {
                Ok(name) => print_success(outcome.index, &name.file_name()),
                Err(e) => print_failure(outcome.index, &e.to_string()),
            }
        }
        print_info("Summary", summary);
    }

    Ok(summary.failed == 0)
}
