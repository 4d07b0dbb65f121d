//! The `#[test_case("name")]` attribute.
//!
//! Applied to a free function with no parameters, this leaves the function exactly as written (so it may still be
//! called or referenced by name) and adds, next to it:
//!
//! ```IGNORE
//! const _: () = {
//!     fn __testcase_body() -> ::testcase_registry::Completion {
//!         // adapter
//!     }
//!
//!     ::testcase_registry::__submit_test_case!("name", __testcase_body);
//! };
//! ```
//!
//! The adapter is `IntoCompletion::into_completion(f())` for ordinary functions and `completion_of(f())` for `async
//! fn`.  Living in an anonymous const means any number of declarations in a module never collide, whatever their
//! names.
//!
//! We reject anything the adapter could not call with no arguments: parameters, generics, methods.
use quote::quote;
use syn::spanned::Spanned;

/// The name of the hidden adapter.  Unique because each one is inside its own `const _`.
const ADAPTER_NAME: &str = "__testcase_body";

fn parse_name(attrs: proc_macro2::TokenStream) -> syn::LitStr {
    if attrs.is_empty() {
        proc_macro_error::abort_call_site!(
            "test_case requires a name, e.g. #[test_case(\"product/module/case\")]"
        );
    }

    match syn::parse2::<syn::LitStr>(attrs) {
        Ok(x) => x,
        Err(e) => proc_macro_error::abort!(e.span(), "The test name must be a string literal"),
    }
}

fn validate_signature(sig: &syn::Signature) {
    if !sig.generics.params.is_empty() {
        proc_macro_error::abort!(
            sig.generics.span(),
            "Test cases cannot be generic; the registry needs a single concrete function"
        );
    }

    if let Some(recv) = sig.receiver() {
        proc_macro_error::abort!(recv.span(), "Test cases must be free functions, not methods");
    }

    if !sig.inputs.is_empty() {
        proc_macro_error::abort!(sig.inputs.span(), "Test cases take no arguments");
    }

    if let Some(v) = &sig.variadic {
        proc_macro_error::abort!(v.span(), "Test cases take no arguments");
    }

    if let Some(u) = &sig.unsafety {
        proc_macro_error::abort!(u.span(), "Test cases cannot be unsafe functions");
    }
}

pub(crate) fn test_case_impl(
    attrs: proc_macro2::TokenStream,
    body: proc_macro2::TokenStream,
) -> proc_macro2::TokenStream {
    let name = parse_name(attrs);

    let item: syn::ItemFn = match syn::parse2(body) {
        Ok(x) => x,
        Err(e) => proc_macro_error::abort!(e.span(), "test_case can only be applied to functions"),
    };

    validate_signature(&item.sig);

    let ident = &item.sig.ident;
    let adapter = syn::Ident::new(ADAPTER_NAME, proc_macro2::Span::call_site());

    let adapted_call = if item.sig.asyncness.is_some() {
        quote!(::testcase_registry::completion_of(#ident()))
    } else {
        quote!(::testcase_registry::IntoCompletion::into_completion(#ident()))
    };

    quote!(
        #item

        const _: () = {
            #[allow(dead_code)]
            fn #adapter() -> ::testcase_registry::Completion {
                #adapted_call
            }

            ::testcase_registry::__submit_test_case!(#name, #adapter);
        };
    )
}
