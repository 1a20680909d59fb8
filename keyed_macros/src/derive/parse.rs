//! Attribute lowering for the `Keyed` derive macro.
//!
//! Bridges the `syn` view of the annotated struct to the core's input model:
//! the host's identity and options, plus one [`FieldDescriptor`] per named
//! field with its tag resolved to a boolean. Hosts the emitter cannot name
//! or populate (enums, unions, tuple and unit structs, generic types) are
//! rejected here with a spanned error; everything past this point is
//! infallible.

use syn::{Attribute, Data, DeriveInput, Fields, Lit, LitStr};

use crate::derive::scan::FieldDescriptor;

/// The host type as the emitters see it: identity, visibility, and the
/// struct-level options.
pub(crate) struct HostModel {
    pub ident: syn::Ident,
    pub vis: syn::Visibility,
    pub resolver: ResolverStrategy,
    pub crate_path: Option<syn::Path>,
}

/// How the generated `resolve` dispatches on the key string.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub(crate) enum ResolverStrategy {
    /// A `match` over string literals; no construction cost.
    #[default]
    Match,
    /// A lazily built hash table; O(1) average lookup.
    Table,
}

impl ResolverStrategy {
    pub(crate) fn parse(s: &str, span: proc_macro2::Span) -> Result<Self, syn::Error> {
        match s {
            "match" => Ok(ResolverStrategy::Match),
            "table" => Ok(ResolverStrategy::Table),
            _ => Err(syn::Error::new(
                span,
                "unknown resolver strategy, expected \"match\" or \"table\"",
            )),
        }
    }
}

/// Iterate all `#[keyed(...)]` attributes once and apply a callback.
fn parse_keyed_options<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&syn::meta::ParseNestedMeta<'_>) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("keyed")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Parses a string literal value for the named option.
fn lit_str(meta: &syn::meta::ParseNestedMeta<'_>, name: &str) -> syn::Result<LitStr> {
    let value = meta.value()?.parse::<Lit>()?;
    if let Lit::Str(s) = value {
        Ok(s)
    } else {
        Err(syn::Error::new(
            value.span(),
            format!("{name} must be a string"),
        ))
    }
}

/// Extracts `#[keyed(...)]` options applied to the struct itself.
///
/// Unknown keys are rejected rather than discarded: the derive exists to
/// catch mistakes at compile time, so a misspelled option must not pass
/// silently.
fn parse_struct_options(
    attrs: &[Attribute],
) -> syn::Result<(ResolverStrategy, Option<syn::Path>)> {
    let mut resolver = ResolverStrategy::default();
    let mut crate_path = None;
    parse_keyed_options(attrs, |meta| {
        if meta.path.is_ident("resolver") {
            let s = lit_str(meta, "resolver")?;
            resolver = ResolverStrategy::parse(&s.value(), s.span())?;
            Ok(())
        } else if meta.path.is_ident("crate") {
            let s = lit_str(meta, "crate")?;
            crate_path = Some(s.parse::<syn::Path>()?);
            Ok(())
        } else {
            Err(meta.error("unknown `keyed` option"))
        }
    })?;
    Ok((resolver, crate_path))
}

/// Lower the derive input to the host model and its field descriptors.
///
/// # Errors
///
/// Fails when the host is not a struct with named fields, when it is
/// generic, or when a `#[keyed(...)]` option is malformed.
pub(crate) fn parse_input(
    input: &DeriveInput,
) -> syn::Result<(HostModel, Vec<FieldDescriptor>)> {
    if let Some(param) = input.generics.params.first() {
        return Err(syn::Error::new_spanned(
            param,
            "Keyed does not support generic hosts: field accessors require concrete field types",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            Fields::Unnamed(_) | Fields::Unit => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Keyed requires a struct with named fields",
                ));
            }
        },
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Keyed can only be derived for structs",
            ));
        }
    };

    let (resolver, crate_path) = parse_struct_options(&input.attrs)?;

    let mut members = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(field_ident) = field.ident.clone() else {
            // `Fields::Named` guarantees an identifier.
            continue;
        };
        let mut is_tagged = false;
        for attr in field.attrs.iter().filter(|a| a.path().is_ident("keyed")) {
            if attr.meta.require_path_only().is_err() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "the `keyed` field tag takes no arguments",
                ));
            }
            is_tagged = true;
        }
        members.push(FieldDescriptor {
            ident: field_ident,
            ty: field.ty.clone(),
            is_stored: true,
            is_tagged,
        });
    }

    let host = HostModel {
        ident: input.ident.clone(),
        vis: input.vis.clone(),
        resolver,
        crate_path,
    };
    Ok((host, members))
}
