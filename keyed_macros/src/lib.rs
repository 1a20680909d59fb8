//! Procedural macros for `keyed`.
//!
//! The [`Keyed`] derive scans a struct's named fields for the `#[keyed]`
//! tag and generates two artifacts next to the declaration: a `<Name>Keys`
//! registry struct with one `FieldKey` constant per tagged field, and an
//! implementation of the `Keyed` trait resolving run-time key strings to
//! typed field accessors. Both artifacts render from one scan of the field
//! list, so their key sets are identical by construction.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for the `keyed::Keyed` trait.
///
/// Tag fields with `#[keyed]` to expose them. Struct-level options are
/// accepted under `#[keyed(...)]`:
///
/// - `resolver = "match"` (default) renders the resolver as a string
///   `match`; `resolver = "table"` renders a lazily built hash table.
/// - `crate = "path"` overrides the runtime crate path in generated code
///   for crates that re-export `keyed` under another name.
#[proc_macro_derive(Keyed, attributes(keyed))]
pub fn derive_keyed(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
