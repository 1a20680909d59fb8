//! Field scanning: the pure analysis phase of the derive.
//!
//! Given the host's members as plain descriptors, the scanner keeps exactly
//! the stored, tagged fields, in declaration order. Members without a stable
//! backing slot are never eligible regardless of tagging; untagged stored
//! members are silently excluded, not an error. Scanning never fails and an
//! empty result is valid.

use syn::ext::IdentExt;

/// One member of the host type, as seen by the scanner.
///
/// Created fresh per expansion from the lowered derive input and consumed by
/// [`scan`]; never persisted.
pub(crate) struct FieldDescriptor {
    pub ident: syn::Ident,
    pub ty: syn::Type,
    /// Whether the member has a plain backing slot. Named struct fields
    /// always do; the flag exists so the eligibility rule is stated once,
    /// here, rather than implied by the lowering.
    pub is_stored: bool,
    pub is_tagged: bool,
}

/// An eligible, tagged field: the unit both emitters consume.
pub(crate) struct ExposedField {
    pub ident: syn::Ident,
    pub ty: syn::Type,
    /// The field's declared name, unraw'd. The exposed key always equals
    /// this name; renaming is unsupported.
    pub key: String,
}

/// Filter the host's members down to the exposed fields.
///
/// Declaration order is preserved; nothing is deduplicated (field names are
/// unique within a type by construction) and nothing is sorted.
pub(crate) fn scan(members: Vec<FieldDescriptor>) -> Vec<ExposedField> {
    members
        .into_iter()
        .filter(|member| member.is_stored && member.is_tagged)
        .map(|member| {
            let key = member.ident.unraw().to_string();
            ExposedField {
                ident: member.ident,
                ty: member.ty,
                key,
            }
        })
        .collect()
}
