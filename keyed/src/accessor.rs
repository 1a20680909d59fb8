//! Typed, type-erased accessors for exposed fields.
//!
//! A [`FieldAccessor`] is the uniform handle the generated resolver returns:
//! one opaque type regardless of the field's concrete type, carrying
//! monomorphic projections bound to exactly one field of one host type.
//! Typed access goes through `dyn Any` downcasts, so a caller that knows the
//! field type statically gets a checked `&V`/`&mut V` back out.

use std::any::Any;
use std::fmt;

use crate::error::AccessError;
use crate::key::FieldKey;

/// Projection from a host value to one field, erased to `dyn Any`.
type GetFn<T> = fn(&T) -> &dyn Any;

/// Mutable projection from a host value to one field, erased to `dyn Any`.
type GetMutFn<T> = fn(&mut T) -> &mut dyn Any;

/// The closed set of accessor capabilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessorKind {
    /// The accessor can only read the field.
    ReadOnly,
    /// The accessor can read and write the field.
    ReadWrite,
}

/// An opaque handle to one field of one host type.
///
/// Accessors are produced by the generated `Keyed::resolve`; stored fields
/// resolve to read-write handles, and [`FieldAccessor::to_read_only`]
/// downgrades a handle before passing it to code that must not write.
///
/// ```rust
/// use keyed::Keyed;
///
/// #[derive(Keyed)]
/// struct Person {
///     #[keyed]
///     name: String,
///     age: u32,
/// }
///
/// # fn main() -> Result<(), keyed::AccessError> {
/// let mut person = Person { name: "John".to_owned(), age: 30 };
/// if let Some(accessor) = Person::resolve("name") {
///     assert_eq!(accessor.get::<String>(&person)?, "John");
///     accessor.set(&mut person, "Joan".to_owned())?;
/// }
/// assert_eq!(person.name, "Joan");
/// # Ok(())
/// # }
/// ```
pub struct FieldAccessor<T> {
    key: FieldKey,
    kind: AccessorKind,
    get: GetFn<T>,
    get_mut: Option<GetMutFn<T>>,
}

impl<T> FieldAccessor<T> {
    /// Build a read-only accessor from a key and a projection.
    ///
    /// Not intended as a public entry point; use
    /// [`FieldAccessor::to_read_only`] to drop the write capability of a
    /// resolved accessor.
    #[doc(hidden)]
    #[must_use]
    pub const fn read_only(key: FieldKey, get: GetFn<T>) -> Self {
        Self {
            key,
            kind: AccessorKind::ReadOnly,
            get,
            get_mut: None,
        }
    }

    /// Build a read-write accessor from a key and a pair of projections.
    ///
    /// Called by generated resolvers; not intended as a public entry point.
    #[doc(hidden)]
    #[must_use]
    pub const fn read_write(key: FieldKey, get: GetFn<T>, get_mut: GetMutFn<T>) -> Self {
        Self {
            key,
            kind: AccessorKind::ReadWrite,
            get,
            get_mut: Some(get_mut),
        }
    }

    /// Key of the field this accessor targets.
    #[must_use]
    pub const fn key(&self) -> &FieldKey {
        &self.key
    }

    /// Capability of this accessor.
    #[must_use]
    pub const fn kind(&self) -> AccessorKind {
        self.kind
    }

    /// Read the field, checked against the caller's expected type.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::TypeMismatch`] when `V` is not the field's
    /// declared type.
    pub fn get<'a, V: Any>(&self, host: &'a T) -> Result<&'a V, AccessError> {
        (self.get)(host)
            .downcast_ref::<V>()
            .ok_or_else(|| self.type_mismatch::<V>())
    }

    /// Borrow the field mutably, checked against the caller's expected type.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::ReadOnly`] for read-only accessors and
    /// [`AccessError::TypeMismatch`] when `V` is not the field's declared
    /// type.
    pub fn get_mut<'a, V: Any>(&self, host: &'a mut T) -> Result<&'a mut V, AccessError> {
        let project = self.get_mut.ok_or_else(|| AccessError::ReadOnly {
            key: self.key.clone(),
        })?;
        // Capture the mismatch error before the mutable projection so the
        // key clone does not overlap the borrow of `host`.
        let mismatch = self.type_mismatch::<V>();
        project(host).downcast_mut::<V>().ok_or(mismatch)
    }

    /// Replace the field's value, checked against the caller's value type.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::ReadOnly`] for read-only accessors and
    /// [`AccessError::TypeMismatch`] when `V` is not the field's declared
    /// type.
    pub fn set<V: Any>(&self, host: &mut T, value: V) -> Result<(), AccessError> {
        *self.get_mut::<V>(host)? = value;
        Ok(())
    }

    /// A copy of this accessor with the write capability removed.
    #[must_use]
    pub fn to_read_only(&self) -> Self {
        Self::read_only(self.key.clone(), self.get)
    }

    fn type_mismatch<V>(&self) -> AccessError {
        AccessError::TypeMismatch {
            key: self.key.clone(),
            requested: std::any::type_name::<V>(),
        }
    }
}

// Manual impls because derives would require `T: Clone` / `T: Debug` even
// though only function pointers and the key are stored.
impl<T> Clone for FieldAccessor<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            kind: self.kind,
            get: self.get,
            get_mut: self.get_mut,
        }
    }
}

impl<T> fmt::Debug for FieldAccessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("key", &self.key)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
