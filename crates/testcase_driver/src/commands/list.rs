use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;
use testcase_registry::TestDescriptor;

use crate::cli_args::{CliArgs, ListArgs};

/// What `list --json` prints per test.
#[derive(Debug, Serialize)]
struct ListedTest {
    name: &'static str,
    file: &'static str,
    line: u32,
    column: u32,
}

impl From<&'static TestDescriptor> for ListedTest {
    fn from(d: &'static TestDescriptor) -> Self {
        ListedTest {
            name: d.name(),
            file: d.file(),
            line: d.line(),
            column: d.column(),
        }
    }
}

pub fn list(_top_args: &CliArgs, list_args: &ListArgs) -> Result<ExitCode> {
    let tests = crate::test_filtering::get_tests_filtered(&list_args.filter)?;

    if list_args.json {
        let listed = tests.map(ListedTest::from).collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&listed)?);
    } else {
        for i in tests {
            println!("{i}");
        }
    }

    Ok(ExitCode::SUCCESS)
}
