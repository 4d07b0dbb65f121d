//! Infrastructure to report the results of running a test.
//!
//! This is called from [crate::test_runner] to display the outcomes of tests.
use std::fmt::{Result, Write};

use indenter::indented;

use crate::test_runner::{FailedOutcome, PanicOutcome, TestOutcome};

// Implementation: we have a root entrypoint at `report_test`, then we use indenter to bring everything together.
// Formatting here is to strings and so cannot fail, but unwrap is annoying so we put that behind a function and unwrap
// once at the top.
//
// The output string does not contain a newline, and this is handled by stripping at the top.  This lets us use writeln
// everywhere.

/// Report the outcome of a test.
///
/// Returns a string without a trailing newline.
pub fn report_test(test_name: &str, outcome: &TestOutcome) -> String {
    let mut dest = String::new();
    report_test_fallible(&mut dest, test_name, outcome)
        .expect("This is formatting to strings and should never fail");

    // it's really hard to get newlines right, so we strip at the top.
    let Some(stripped) = dest.strip_suffix('\n') else {
        return dest;
    };
    stripped.to_string()
}

fn report_test_fallible(mut dest: &mut dyn Write, test_name: &str, outcome: &TestOutcome) -> Result {
    write!(dest, "{test_name} ")?;

    match outcome {
        TestOutcome::Passed => write!(dest, "passed")?,
        TestOutcome::Failed(f) => {
            writeln!(dest, "failed")?;
            report_failed(&mut indented(&mut dest).with_str("  "), f)?;
        }
        TestOutcome::Panicked(p) => {
            writeln!(dest, "panicked")?;
            report_panic(&mut indented(&mut dest).with_str("  "), p)?;
        }
    }

    Ok(())
}

fn report_failed(dest: &mut dyn Write, info: &FailedOutcome) -> Result {
    writeln!(dest, "Reason: {}", info.reason)
}

fn report_panic(dest: &mut dyn Write, info: &PanicOutcome) -> Result {
    writeln!(dest, "{}", info.message)
}

/// One line saying how the run went overall.
pub fn report_summary(passed: usize, total: usize) -> String {
    let failed = total - passed;
    if failed == 0 {
        format!("{passed} of {total} tests passed")
    } else {
        format!("{failed} of {total} tests failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn passed_is_one_line() {
        assert_eq!(report_test("a/1", &TestOutcome::Passed), "a/1 passed");
    }

    #[test]
    fn failure_is_indented() {
        let outcome = TestOutcome::Failed(FailedOutcome {
            reason: "went wrong".to_string(),
        });
        assert_eq!(report_test("a/2", &outcome), "a/2 failed\n  Reason: went wrong");
    }

    #[test]
    fn multiline_panics_stay_indented() {
        let outcome = TestOutcome::Panicked(PanicOutcome {
            message: "first\nsecond".to_string(),
        });
        assert_eq!(
            report_test("b/1", &outcome),
            "b/1 panicked\n  first\n  second"
        );
    }

    #[test]
    fn summary() {
        assert_eq!(report_summary(3, 3), "3 of 3 tests passed");
        assert_eq!(report_summary(1, 3), "2 of 3 tests failed");
    }
}
