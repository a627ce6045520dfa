//! `mediatag postfix`: derive a postfix from source properties.

use mediatag_core::{CoreConfig, MediaPostfix};

use super::check_resolution;
use crate::cli::PostfixArgs;
use crate::error::CliResult;
use crate::output::{print_json, print_value};

/// Names the postfix in diagnostics; an empty value would render as `''`.
fn subject(postfix: &MediaPostfix) -> &str {
    if postfix.is_empty() {
        "postfix"
    } else {
        postfix.value()
    }
}

pub fn run_postfix(args: &PostfixArgs, config: &CoreConfig) -> CliResult<bool> {
    let source = &args.source;
    let postfix = MediaPostfix::create(source.resolution(), source.frame_rate, source.hdr)?;
    check_resolution(config, postfix.resolution(), subject(&postfix))?;

    if config.json_output {
        print_json(&postfix)?;
    } else if args.delimited {
        print_value(postfix.value_with_delimiter());
    } else {
        print_value(postfix.value());
    }
    Ok(true)
}
