//! The completion handle returned by a test body, and conversions into it.
//!
//! A test body is anything which can be turned into a [Completion].  Synchronous bodies produce a value which is turned
//! into an already-resolved future; asynchronous bodies produce the future directly.
use futures::future::{BoxFuture, FutureExt};

/// What a test resolves to.  `Err` is a failure, and is never inspected here.
pub type TestResult = anyhow::Result<()>;

/// Eventual completion of one run of a test.
///
/// May already be resolved (synchronous tests) or resolve later.  Polling it is the driver's business.
pub type Completion = BoxFuture<'static, TestResult>;

/// The value a test resolves with: `()` or any `Result<(), E>` whose error converts into [anyhow::Error].
pub trait IntoTestResult {
    fn into_test_result(self) -> TestResult;
}

impl IntoTestResult for () {
    fn into_test_result(self) -> TestResult {
        Ok(())
    }
}

impl<E: Into<anyhow::Error>> IntoTestResult for Result<(), E> {
    fn into_test_result(self) -> TestResult {
        self.map_err(Into::into)
    }
}

/// Something a synchronous test body may return.
///
/// Implemented for everything which is [IntoTestResult], giving an immediately resolved completion, and for
/// [Completion] itself, so that a plain function may start asynchronous work and hand back its handle.
pub trait IntoCompletion {
    fn into_completion(self) -> Completion;
}

impl IntoCompletion for () {
    fn into_completion(self) -> Completion {
        futures::future::ready(self.into_test_result()).boxed()
    }
}

impl<E: Into<anyhow::Error>> IntoCompletion for Result<(), E> {
    fn into_completion(self) -> Completion {
        futures::future::ready(self.into_test_result()).boxed()
    }
}

impl IntoCompletion for Completion {
    fn into_completion(self) -> Completion {
        self
    }
}

/// Wrap a future as a [Completion].
///
/// This is the adapter applied to `async fn` bodies.
pub fn completion_of<F>(fut: F) -> Completion
where
    F: std::future::Future + Send + 'static,
    F::Output: IntoTestResult,
{
    fut.map(IntoTestResult::into_test_result).boxed()
}
