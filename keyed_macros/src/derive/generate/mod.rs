//! Code generation for the derive system.
//!
//! The registry and resolver emitters both consume the scanner's exposed
//! field sequence, so the key sets of the two artifacts agree by
//! construction. Keeping them in dedicated modules keeps the derive
//! entrypoint concise while allowing focused unit tests for each generator.

pub(crate) mod registry;
pub(crate) mod resolver;

use heck::ToShoutySnakeCase;
use quote::format_ident;

use crate::derive::scan::ExposedField;

/// Name of the generated registry struct for a host.
pub(crate) fn registry_ident(host: &syn::Ident) -> syn::Ident {
    format_ident!("{}Keys", host)
}

/// Name of the registry constant for one exposed field.
pub(crate) fn const_ident(field: &ExposedField) -> syn::Ident {
    format_ident!("{}", field.key.to_shouty_snake_case())
}
