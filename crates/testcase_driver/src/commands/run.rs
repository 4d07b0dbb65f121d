use std::process::ExitCode;

use anyhow::Result;

use crate::cli_args::{CliArgs, RunArgs};

pub fn run(_top_args: &CliArgs, run_args: &RunArgs) -> Result<ExitCode> {
    let all_passed = crate::test_runner::run_tests(&run_args.filter, run_args.seed)?;
    Ok(if all_passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
