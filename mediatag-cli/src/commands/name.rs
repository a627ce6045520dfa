//! `mediatag name`: build a full file name.

use mediatag_core::{CoreConfig, MediaFileName, NameRequest};
use serde_json::json;

use super::check_resolution;
use crate::cli::NameArgs;
use crate::error::CliResult;
use crate::output::{print_json, print_value};

/// Converts parsed arguments into a core naming request.
pub fn request_from_args(args: &NameArgs) -> NameRequest {
    NameRequest {
        title: args.title.clone(),
        year: args.year,
        resolution: args.source.resolution().map(|r| r.to_string()),
        frame_rate: args.source.frame_rate,
        hdr: args.source.hdr,
        container: args.container,
    }
}

pub fn run_name(args: &NameArgs, config: &CoreConfig) -> CliResult<bool> {
    let request = request_from_args(args);
    let name = MediaFileName::create(&request, config.default_container)?;
    let file_name = name.file_name();
    check_resolution(config, name.postfix().resolution(), &file_name)?;

    if config.json_output {
        print_json(&json!({
            "file_name": file_name,
            "stem": name.stem(),
            "postfix": name.postfix(),
        }))?;
    } else {
        print_value(file_name);
    }
    Ok(true)
}
