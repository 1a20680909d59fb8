//! Resolver generation: the `Keyed` impl mapping key strings to accessors.
//!
//! Exactly one dispatch strategy is rendered per host. The match strategy
//! compares the key against each exposed name inline with no construction
//! cost; the table strategy builds an immutable hash map once, on first
//! lookup. Either way the accessors are produced from the same exposed
//! field sequence as the registry constants, so the resolvable key set and
//! the registry key set are identical by construction.

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive::generate::{const_ident, registry_ident};
use crate::derive::parse::{HostModel, ResolverStrategy};
use crate::derive::scan::ExposedField;

/// Render the `impl Keyed for <Host>` block: `keys()` in declaration order
/// plus `resolve` in the selected strategy.
pub(crate) fn generate_resolver(
    host: &HostModel,
    exposed: &[ExposedField],
    krate: &TokenStream,
) -> TokenStream {
    let host_ident = &host.ident;
    let keys_ident = registry_ident(host_ident);
    let key_count = exposed.len();
    let key_consts = exposed.iter().map(|field| {
        let ident = const_ident(field);
        quote! { #keys_ident::#ident }
    });

    let resolve_body = match host.resolver {
        ResolverStrategy::Match => match_body(host, exposed, krate),
        ResolverStrategy::Table => table_body(host, exposed, krate),
    };

    quote! {
        #[automatically_derived]
        impl #krate::Keyed for #host_ident {
            fn keys() -> &'static [#krate::FieldKey] {
                static KEYS: [#krate::FieldKey; #key_count] = [#( #key_consts ),*];
                &KEYS
            }

            fn resolve(key: &str) -> ::core::option::Option<#krate::FieldAccessor<Self>> {
                #resolve_body
            }
        }
    }
}

/// The accessor literal for one exposed field: a read-write handle whose
/// projections pin the erased value to the field's declared type.
fn accessor_expr(host: &HostModel, field: &ExposedField, krate: &TokenStream) -> TokenStream {
    let host_ident = &host.ident;
    let keys_ident = registry_ident(host_ident);
    let key_const = const_ident(field);
    let field_ident = &field.ident;
    let ty = &field.ty;
    quote! {
        {
            fn get(host: &#host_ident) -> &dyn ::core::any::Any {
                let value: &#ty = &host.#field_ident;
                value
            }
            fn get_mut(host: &mut #host_ident) -> &mut dyn ::core::any::Any {
                let value: &mut #ty = &mut host.#field_ident;
                value
            }
            #krate::FieldAccessor::read_write(#keys_ident::#key_const, get, get_mut)
        }
    }
}

/// Branch dispatch: one match arm per key, fallback `None`.
fn match_body(host: &HostModel, exposed: &[ExposedField], krate: &TokenStream) -> TokenStream {
    if exposed.is_empty() {
        return quote! {
            let _ = key;
            ::core::option::Option::None
        };
    }
    let arms = exposed.iter().map(|field| {
        let key = &field.key;
        let accessor = accessor_expr(host, field, krate);
        quote! { #key => ::core::option::Option::Some(#accessor), }
    });
    quote! {
        match key {
            #( #arms )*
            _ => ::core::option::Option::None,
        }
    }
}

/// Static map dispatch: an immutable table built once, on first lookup.
fn table_body(host: &HostModel, exposed: &[ExposedField], krate: &TokenStream) -> TokenStream {
    let host_ident = &host.ident;
    let table_init = if exposed.is_empty() {
        quote! { ::std::collections::HashMap::new() }
    } else {
        let entries = exposed.iter().map(|field| {
            let key = &field.key;
            let accessor = accessor_expr(host, field, krate);
            quote! { (#key, #accessor) }
        });
        quote! { ::std::collections::HashMap::from([#( #entries ),*]) }
    };
    quote! {
        static TABLE: ::std::sync::LazyLock<
            ::std::collections::HashMap<&'static str, #krate::FieldAccessor<#host_ident>>,
        > = ::std::sync::LazyLock::new(|| #table_init);
        TABLE.get(key).cloned()
    }
}
