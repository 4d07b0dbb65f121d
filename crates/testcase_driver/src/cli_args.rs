//! Definition of the Clap command line.
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run tests.
    Run(RunArgs),

    /// List all tests.
    List(ListArgs),
}

#[derive(Debug, Parser)]
pub struct FilterArgs {
    /// If specified, filter tests with this glob pattern over their names.
    pub pattern: Option<String>,
}

#[derive(Debug, Parser)]
pub struct RunArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Shuffle the selected tests using this seed instead of running them in registration order.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// List all tests, optionally constrained by a filter.
#[derive(Debug, Parser)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Print a JSON array of `{name, file, line, column}` instead of one test per line.
    #[arg(long)]
    pub json: bool,
}
