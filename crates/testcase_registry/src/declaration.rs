//! Declarative halves of the registration facility.
//!
//! The attribute macro [crate::test_case] and [register_test_case] both funnel into `__submit_test_case`, which is the
//! only place that knows whether this build registers anything.  It is defined twice below, once per mode, so the
//! decision is made when this crate is compiled rather than in whichever crate expands the macro.

#[cfg(not(feature = "disable-test-cases"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __submit_test_case {
    ($name:expr, $body:expr) => {
        $crate::__private::inventory::submit! {
            $crate::TestDescriptor::new($name, file!(), line!(), column!(), $body)
        }
    };
}

// Disabled builds drop the registration entirely.  Bodies passed in are still ordinary items and so still type-check
// where they are defined.
#[cfg(feature = "disable-test-cases")]
#[doc(hidden)]
#[macro_export]
macro_rules! __submit_test_case {
    ($name:expr, $body:expr) => {};
}

/// Register a function which already exists as a test.
///
/// Takes the path to a function and the test name:
///
/// - `register_test_case!(my_fn, "a/b")` registers `fn my_fn() -> Completion` as-is.
/// - `register_test_case!(async my_fn, "a/b")` registers `async fn my_fn()`, which must return `()` or `Result<(), E>`
///   with `E: Into<anyhow::Error>`.  A small adapter boxes the future; no other callable is generated.
///
/// The descriptor records the location of this macro invocation.  Under `disable-test-cases` this expands to nothing.
#[macro_export]
macro_rules! register_test_case {
    (async $body:path, $name:expr $(,)?) => {
        $crate::__submit_test_case!($name, {
            fn adapter() -> $crate::Completion {
                $crate::completion_of($body())
            }
            adapter
        });
    };
    ($body:path, $name:expr $(,)?) => {
        $crate::__submit_test_case!($name, $body);
    };
}
