//! Core crate for the `Keyed` field-registry framework.
//!
//! This crate defines the [`Keyed`] trait and the supporting key, accessor,
//! and error types. The actual implementation of the derive macro lives in
//! the companion `keyed_macros` crate.
//!
//! Deriving `Keyed` on a struct generates two artifacts next to it:
//!
//! - a *registry*: a `<Name>Keys` struct carrying one [`FieldKey`] constant
//!   per field tagged `#[keyed]`, in declaration order; and
//! - a *resolver*: an implementation of [`Keyed`] whose
//!   [`resolve`](Keyed::resolve) maps a run-time key string back to a typed
//!   [`FieldAccessor`] for the corresponding field.
//!
//! Both artifacts render from the same scan of the struct's fields, so the
//! set of registry constants and the set of resolvable keys cannot drift
//! apart.

pub use keyed_macros::Keyed;

mod accessor;
mod error;
mod key;

pub use accessor::{AccessorKind, FieldAccessor};
pub use error::AccessError;
pub use key::FieldKey;

/// Trait implemented (via derive) for structs that expose tagged fields
/// through a generated registry and resolver.
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
/// let person = Person { name: "John".to_owned(), age: 30 };
///
/// // `age` is untagged, so only `name` is exposed.
/// assert_eq!(Person::keys(), &[PersonKeys::NAME][..]);
///
/// if let Some(accessor) = Person::resolve("name") {
///     assert_eq!(accessor.get::<String>(&person)?, "John");
/// }
/// assert!(Person::resolve("age").is_none());
/// # Ok(())
/// # }
/// ```
pub trait Keyed: Sized {
    /// The exposed field keys, in declaration order.
    #[must_use]
    fn keys() -> &'static [FieldKey];

    /// Resolve a run-time key string to a typed accessor.
    ///
    /// Returns `None` for any string that is not an exposed field's declared
    /// name, including the empty string. Not-found is an expected outcome,
    /// not an error.
    #[must_use]
    fn resolve(key: &str) -> Option<FieldAccessor<Self>>;
}
