//! Error type for typed field access through an accessor.

use thiserror::Error;

use crate::key::FieldKey;

/// Errors that can occur when reading or writing a field through a
/// [`FieldAccessor`](crate::FieldAccessor).
///
/// A key that fails to resolve is not an error; `resolve` reports that case
/// as `None`. These variants only cover misuse of an accessor that was
/// resolved successfully.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    /// The caller requested a value type that does not match the field's
    /// declared type.
    #[error("field '{key}' does not have type '{requested}'")]
    TypeMismatch {
        /// Key of the field being accessed.
        key: FieldKey,
        /// Type name the caller asked for.
        requested: &'static str,
    },

    /// A write was attempted through a read-only accessor.
    #[error("field '{key}' is exposed read-only")]
    ReadOnly {
        /// Key of the field being accessed.
        key: FieldKey,
    },
}
