//! Procedural macros for `testcase_registry`.
//!
//! Use these through the re-exports in `testcase_registry`; the expansions refer to that crate by absolute path.
//!
//! This crate contains dummy forwarders at the root to let us split it into files. Procmacro limitations currently
//! require that they be at the root.
mod test_case_impl;

/// Declare a test.  See `testcase_registry::test_case`.
#[proc_macro_attribute]
#[proc_macro_error::proc_macro_error]
pub fn test_case(
    attrs: proc_macro::TokenStream,
    body: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    test_case_impl::test_case_impl(attrs.into(), body.into()).into()
}
