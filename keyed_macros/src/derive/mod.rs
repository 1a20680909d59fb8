//! Derive pipeline for `Keyed`.
//!
//! Expansion runs in three phases: attribute lowering ([`parse`]) turns the
//! `syn` input into a host model plus plain field descriptors, the scanner
//! ([`scan`]) filters those descriptors down to the exposed fields, and the
//! emitters ([`generate`]) render the registry and resolver from that one
//! sequence. Decision logic never touches the syntax tree directly, and the
//! whole pass is deterministic: unchanged input produces token-identical
//! output.

pub(crate) mod crate_path;
pub(crate) mod generate;
pub(crate) mod parse;
pub(crate) mod scan;

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

/// Expand one `#[derive(Keyed)]` invocation.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let (host, members) = parse::parse_input(input)?;
    let exposed = scan::scan(members);
    let krate = crate_path::resolve(host.crate_path.as_ref());

    let registry = generate::registry::generate_registry(&host, &exposed, &krate);
    let resolver = generate::resolver::generate_resolver(&host, &exposed, &krate);

    Ok(quote! {
        #registry
        #resolver
    })
}
