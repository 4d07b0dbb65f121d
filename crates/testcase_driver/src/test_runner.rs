//! Knows how to run a single test, and how to run a filtered set of them.
use std::panic::AssertUnwindSafe;

use anyhow::Result;
use futures::FutureExt;
use testcase_registry::TestDescriptor;

/// The outcome of a test.
#[derive(Clone, Debug, derive_more::IsVariant)]
pub enum TestOutcome {
    Passed,

    /// The completion resolved to an error.
    Failed(FailedOutcome),

    /// The test panicked, either while starting or while being driven.
    Panicked(PanicOutcome),
}

#[derive(Clone, Debug)]
pub struct FailedOutcome {
    /// The error, formatted with its chain of causes.
    pub reason: String,
}

#[derive(Clone, Debug)]
pub struct PanicOutcome {
    /// The panic payload if it was a string, otherwise a placeholder.
    pub message: String,
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "<non-string panic payload>".to_string()
    }
}

/// Start one test and drive its completion to the end on this thread.
pub fn run_single_test(test: &TestDescriptor) -> TestOutcome {
    log::debug!("Starting {test}");

    // Starting the body may itself panic before there is any completion to poll.
    let completion = match std::panic::catch_unwind(|| test.start()) {
        Ok(c) => c,
        Err(p) => {
            return TestOutcome::Panicked(PanicOutcome {
                message: panic_message(p),
            })
        }
    };

    let outcome = match futures::executor::block_on(AssertUnwindSafe(completion).catch_unwind()) {
        Ok(Ok(())) => TestOutcome::Passed,
        Ok(Err(e)) => TestOutcome::Failed(FailedOutcome {
            reason: format!("{e:#}"),
        }),
        Err(p) => TestOutcome::Panicked(PanicOutcome {
            message: panic_message(p),
        }),
    };

    log::debug!("Finished {}: {outcome:?}", test.name());
    outcome
}

/// Put tests in the order they will run.  Without a seed this is registration order.
pub fn order_tests(tests: &mut [&'static TestDescriptor], seed: Option<u64>) {
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    if let Some(seed) = seed {
        log::info!("Shuffling {} tests with seed {seed}", tests.len());
        let mut rng = rand_xoshiro::Xoshiro256PlusPlus::seed_from_u64(seed);
        tests.shuffle(&mut rng);
    }
}

/// Filter down the tests with the provided filter and run them all, reporting each outcome to stderr.
///
/// Returns whether every test passed.
pub fn run_tests(filter: &crate::cli_args::FilterArgs, seed: Option<u64>) -> Result<bool> {
    let mut tests = crate::test_filtering::get_tests_filtered(filter)?.collect::<Vec<_>>();
    crate::test_filtering::warn_duplicate_names(tests.iter().copied());
    order_tests(&mut tests[..], seed);

    let mut passed = 0usize;
    for test in tests.iter() {
        let outcome = run_single_test(test);
        passed += outcome.is_passed() as usize;
        eprintln!("{}", crate::reporter::report_test(test.name(), &outcome));
    }

    eprintln!("{}", crate::reporter::report_summary(passed, tests.len()));
    Ok(passed == tests.len())
}
