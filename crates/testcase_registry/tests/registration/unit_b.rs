//! Second compilation unit: the externally produced variant, and repeated names.
use std::sync::atomic::{AtomicUsize, Ordering};

use testcase_registry::{completion_of, register_test_case, test_case, Completion};

pub const C1_LINE: u32 = line!() + 1;
register_test_case!(c_1, "c/1");

fn c_1() -> Completion {
    completion_of(async {
        futures::future::ready(()).await;
        Ok::<(), anyhow::Error>(())
    })
}

async fn suspended_body() -> anyhow::Result<()> {
    futures::future::lazy(|_| ()).await;
    Ok(())
}

pub const C2_LINE: u32 = line!() + 1;
register_test_case!(async suspended_body, "c/2");

pub const DUP_FIRST_LINE: u32 = line!() + 1;
#[test_case("dup")]
fn dup_first() {}

pub const DUP_SECOND_LINE: u32 = line!() + 1;
#[test_case("dup")]
fn dup_second() {}

/// Counts calls to [fresh_state], so that the test can tell the body ran again.
pub static FRESH_STATE_CALLS: AtomicUsize = AtomicUsize::new(0);

#[test_case("fresh/state")]
fn fresh_state() -> Completion {
    FRESH_STATE_CALLS.fetch_add(1, Ordering::SeqCst);

    // Everything the completion touches is created by this call.
    let mut seen = vec![];
    completion_of(async move {
        seen.push(1);
        anyhow::ensure!(seen == [1], "state leaked between runs: {seen:?}");
        Ok(())
    })
}

#[test_case("fails")]
fn fails() -> anyhow::Result<()> {
    anyhow::bail!("this test fails on purpose")
}
