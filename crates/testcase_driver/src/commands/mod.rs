mod list;
mod run;

use std::process::ExitCode;

use anyhow::Result;

use crate::cli_args;

/// Figure out what command to run, then run it.
pub fn dispatch_command(args: cli_args::CliArgs) -> Result<ExitCode> {
    match &args.command {
        cli_args::Command::List(l) => list::list(&args, l),
        cli_args::Command::Run(r) => run::run(&args, r),
    }
}
