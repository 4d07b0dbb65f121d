//! Reference driver for `testcase_registry`.
//!
//! Test cases register themselves wherever they are declared; see the `testcase_registry` crate for how.  This binary
//! is one consumer of the resulting registry.  It can:
//!
//! - `list` the registered tests, optionally filtered by a glob over their names, either for humans or as JSON.
//! - `run` them.  Each test is started, its completion is driven to the end on this thread, and panics are caught so
//!   that one bad test doesn't take the rest down with it.
//!
//! Tests run in registration order unless `--seed` is given, in which case the order is shuffled deterministically
//! from the seed.  Duplicate names are allowed by the registry; we warn about them since they make filtering and
//! reporting ambiguous, but run them anyway.
//!
//! The tests which ship in this binary live under [tests] and are a smoke test for the driver itself.
//!
//! Logging goes through `env_logger`, so `RUST_LOG=debug` shows what the driver is doing.
mod cli_args;
mod commands;
mod reporter;
mod test_filtering;
mod test_runner;

use std::process::ExitCode;

fn main() -> ExitCode {
    use clap::Parser;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli_args::CliArgs::parse();
    match commands::dispatch_command(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::from(2)
        }
    }
}
