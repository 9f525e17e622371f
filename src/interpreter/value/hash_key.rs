use crate::interpreter::value::core::Value;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// The kind tag of a hash key.
///
/// Keys of different kinds never collide even when their digests match
/// (`1`, `true` and `"1"` are three distinct keys).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashKind {
    /// Key derived from an integer value.
    Integer,
    /// Key derived from a boolean value.
    Boolean,
    /// Key derived from a string value.
    Str,
}

/// A 64-bit digest deriving a hash-table key from a scalar value.
///
/// Only integers, booleans, and strings are hashable: integers hash to
/// their numeric value, booleans to 0/1, and strings to an FNV-1a digest
/// of their bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    /// The key's kind tag.
    pub kind: HashKind,
    /// The key's 64-bit digest.
    pub value: u64,
}

/// A key/value entry stored in a hash.
///
/// The original key value is retained alongside the digest so `keys()` and
/// `for (k, v in hash)` can reproduce it.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as written.
    pub key: Value,
    /// The associated value.
    pub value: Value,
}

/// Computes the FNV-1a digest of a byte string.
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(FNV_OFFSET_BASIS, |hash, byte| (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME))
}

impl Value {
    /// Computes this value's hash key, if its kind is hashable.
    ///
    /// # Returns
    /// `Some(HashKey)` for integers, booleans, and strings; `None` for
    /// every other kind (floats, null, arrays, hashes, functions).
    ///
    /// # Example
    /// ```
    /// use cixac::interpreter::value::core::Value;
    ///
    /// let one = Value::Str("one".to_string()).hash_key();
    /// let same = Value::Str("one".to_string()).hash_key();
    /// assert_eq!(one, same);
    ///
    /// assert!(Value::Integer(4).hash_key().is_some());
    /// assert!(Value::Float(4.0).hash_key().is_none());
    /// assert!(Value::Null.hash_key().is_none());
    /// ```
    #[must_use]
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Self::Integer(value) => Some(HashKey {
                kind: HashKind::Integer,
                value: *value as u64,
            }),
            Self::Bool(value) => Some(HashKey {
                kind: HashKind::Boolean,
                value: u64::from(*value),
            }),
            Self::Str(value) => Some(HashKey {
                kind: HashKind::Str,
                value: fnv1a(value.as_bytes()),
            }),
            _ => None,
        }
    }
}
