//! Registry generation: the `<Host>Keys` struct and its key constants.

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive::generate::{const_ident, registry_ident};
use crate::derive::parse::HostModel;
use crate::derive::scan::ExposedField;

/// Render the registry struct with one key constant per exposed field, in
/// declaration order.
///
/// A host with zero exposed fields still gets the struct, just without
/// constants; an empty registry is valid.
pub(crate) fn generate_registry(
    host: &HostModel,
    exposed: &[ExposedField],
    krate: &TokenStream,
) -> TokenStream {
    let vis = &host.vis;
    let keys_ident = registry_ident(&host.ident);
    let host_name = host.ident.to_string();
    let struct_doc = format!("Field keys generated for `{host_name}`.");

    let consts: Vec<TokenStream> = exposed
        .iter()
        .map(|field| {
            let ident = const_ident(field);
            let key = &field.key;
            let doc = format!("Key for `{host_name}::{key}`.");
            quote! {
                #[doc = #doc]
                #vis const #ident: #krate::FieldKey = #krate::FieldKey::new(#key);
            }
        })
        .collect();

    if consts.is_empty() {
        quote! {
            #[doc = #struct_doc]
            #vis struct #keys_ident;
        }
    } else {
        quote! {
            #[doc = #struct_doc]
            #vis struct #keys_ident;

            impl #keys_ident {
                #( #consts )*
            }
        }
    }
}
