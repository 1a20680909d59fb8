//! Stable, typed keys for exposed fields.
//!
//! A [`FieldKey`] wraps the declared name of one exposed field. Generated
//! registry constants construct keys from `'static` string literals;
//! deserialized keys own their buffer. Both compare, hash, and order by the
//! underlying name, so a key recovered from storage matches the registry
//! constant for the same field.

use std::borrow::{Borrow, Cow};
use std::fmt;

use serde::{Deserialize, Serialize};

/// A stable identifier for one exposed field of one host type.
///
/// Keys are usable as map keys, compared for equality, ordered, and carried
/// across serialization boundaries. The key string always equals the field's
/// declared name; renaming is deliberately unsupported.
///
/// The registry for a type is closed: obtain keys from the constants the
/// `Keyed` derive generates (or by deserializing a previously stored key)
/// rather than constructing them by hand.
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
/// assert_eq!(PersonKeys::NAME.as_str(), "name");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldKey {
    name: Cow<'static, str>,
}

impl FieldKey {
    /// Wrap a declared field name as a key.
    ///
    /// Called by generated registry constants; not intended as a public
    /// entry point.
    #[doc(hidden)]
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
        }
    }

    /// The declared field name this key denotes.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for FieldKey {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl Borrow<str> for FieldKey {
    fn borrow(&self) -> &str {
        &self.name
    }
}
