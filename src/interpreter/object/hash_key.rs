use std::hash::Hasher;

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHasher};

use crate::interpreter::object::core::{Object, ObjectType};

/// The key a hash value is indexed by: the key's type tag plus a 64-bit
/// value derived from it.
///
/// Integers use their two's complement bits, booleans `1` or `0`, and strings
/// an `FxHasher` digest of their bytes. `FxHasher` is unseeded, so the same
/// string always yields the same key, within and across runs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct HashKey {
    /// Type of the original key.
    pub kind:  ObjectType,
    /// The derived value.
    pub value: u64,
}

/// One entry of a hash value. The original key is kept so that the hash can
/// be rendered back to readable text.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as it was written.
    pub key:   Object,
    /// The associated value.
    pub value: Object,
}

/// Storage of a hash value. Entries render in insertion order.
pub type HashMapObject = IndexMap<HashKey, HashPair, FxBuildHasher>;

impl Object {
    /// Derives the hash key of this value.
    ///
    /// Returns `None` for values that cannot be used as hash keys; only
    /// integers, strings and booleans can.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::object::core::Object;
    ///
    /// let a = Object::from("name").hash_key();
    /// let b = Object::from("name").hash_key();
    ///
    /// assert!(a.is_some());
    /// assert_eq!(a, b);
    /// assert_ne!(Object::Integer(1).hash_key(), Object::Boolean(true).hash_key());
    /// assert_eq!(Object::Null.hash_key(), None);
    /// ```
    #[must_use]
    pub fn hash_key(&self) -> Option<HashKey> {
        #[allow(clippy::cast_sign_loss)]
        let value = match self {
            Self::Integer(n) => *n as u64,
            Self::Boolean(b) => u64::from(*b),
            Self::String(s) => {
                let mut hasher = FxHasher::default();
                hasher.write(s.as_bytes());
                hasher.finish()
            },
            _ => return None,
        };

        Some(HashKey { kind: self.object_type(),
                       value })
    }
}
