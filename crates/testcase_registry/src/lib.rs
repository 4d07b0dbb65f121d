//! Self-registering, optionally asynchronous test cases.
//!
//! A test is declared where it is written, and shows up in a process-wide [Registry] before `main` runs.  There is no
//! central list to maintain.  Drivers (the things which actually decide what to run, in what order, and how to report
//! it) live elsewhere and only ever see the registry through [registry] and [enumerate].
//!
//! Declaring a test:
//!
//! ```IGNORE
//! use testcase_registry::test_case;
//!
//! #[test_case("product/module/case")]
//! fn case() -> anyhow::Result<()> {
//!     anyhow::ensure!(1 + 1 == 2);
//!     Ok(())
//! }
//!
//! #[test_case("product/module/suspends")]
//! async fn suspends() -> anyhow::Result<()> {
//!     some_io().await?;
//!     Ok(())
//! }
//! ```
//!
//! A function which already has the right shape (`fn() -> Completion`) can be registered as-is with
//! [register_test_case].
//!
//! Every registered test is a [TestDescriptor] whose body returns a [Completion].  Synchronous tests return a
//! completion which is already resolved; asynchronous tests return one which resolves whenever the runtime driving it
//! gets there.  This crate never polls completions itself.
//!
//! Building with the `disable-test-cases` feature keeps every declaration compiling but registers nothing, so that a
//! shipped binary carries no tests.
extern crate self as testcase_registry;

#[macro_use]
mod declaration;

mod completion;
mod descriptor;
mod registry;

pub use completion::*;
pub use descriptor::*;
pub use registry::*;

/// Declare a test whose body is the annotated function.
///
/// See the crate-level documentation for the accepted function shapes.
pub use testcase_registry_macros::test_case;

/// Whether declarations in this build register anything.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display, derive_more::IsVariant)]
pub enum Registration {
    /// Tests register normally.
    #[display(fmt = "enabled")]
    Enabled,

    /// Test bodies compile but produce no descriptor.
    #[display(fmt = "disabled")]
    Disabled,
}

/// The registration mode this crate was built with.
#[cfg(not(feature = "disable-test-cases"))]
pub const REGISTRATION: Registration = Registration::Enabled;

/// The registration mode this crate was built with.
#[cfg(feature = "disable-test-cases")]
pub const REGISTRATION: Registration = Registration::Disabled;

// Used by macro expansions only.  Not part of the public API.
#[doc(hidden)]
pub mod __private {
    pub use inventory;
}
