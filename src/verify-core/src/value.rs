//! The dynamic value representation.
//!
//! Values have dynamic types and can be composed, at the cost of
//! incurring memory and performance overhead over statically typed
//! serde models.

use indexmap::IndexMap;
use serde::Serialize;

mod array;
pub use array::*;

mod cmp;

mod drop;

mod fmt;

mod from;
#[doc(hidden)]
pub use from::LiteralValue;

mod object;
pub use object::*;

mod opaque;
pub(crate) use opaque::Lowered;
pub use opaque::Opaque;

/// A bag of schema-less properties, as found in credential metadata
/// or invitation payloads.
pub type Properties = IndexMap<String, DynamicValue>;

/// A dynamically typed JSON-compatible value.
///
/// Its type is assigned at runtime, which mandates appropriate checks
/// for interpreting its contents. Numeric values remember the native
/// width they were created from; equality is strict about this, so
/// `Int8(1)` and `Int64(1)` are different values.
///
/// Decoding only ever produces [`DynamicValue::Int64`] for signed and
/// [`DynamicValue::UInt64`] for unsigned integers (the latter only for
/// values which do not fit the signed range).
///
/// The [`From`] impls keep the width of their input, so an unsuffixed
/// integer literal passed to `DynamicValue::from` becomes `Int32`. Use
/// [`dynamic!`](crate::dynamic) for literal semantics, where such a
/// literal becomes the canonical `Int64`:
///
/// ```
/// use verify_core::{dynamic, DynamicValue};
///
/// assert_eq!(DynamicValue::from(1), DynamicValue::Int32(1));
/// assert_eq!(dynamic!(1), DynamicValue::Int64(1));
/// ```
#[derive(Clone)]
pub enum DynamicValue {
    /// The absence of a value, JSON `null`.
    Null,

    /// A boolean value.
    Bool(bool),

    /// A signed 8-bit integer.
    Int8(i8),
    /// A signed 16-bit integer.
    Int16(i16),
    /// A signed 32-bit integer.
    Int32(i32),
    /// A signed 64-bit integer.
    Int64(i64),

    /// An unsigned integer of platform word size.
    UInt(usize),
    /// An unsigned 8-bit integer.
    UInt8(u8),
    /// An unsigned 16-bit integer.
    UInt16(u16),
    /// An unsigned 32-bit integer.
    UInt32(u32),
    /// An unsigned 64-bit integer.
    UInt64(u64),

    /// A 32-bit floating-point value.
    Float32(f32),
    /// A 64-bit floating-point value.
    Float64(f64),

    /// A UTF-8 string.
    String(String),

    /// An ordered sequence of values.
    Array(Array),
    /// A mapping of string keys to values.
    Object(Object),

    /// An application value which knows how to serialize itself, but
    /// has no structural identity. Never produced by decoding.
    Opaque(Opaque),
}

impl Default for DynamicValue {
    fn default() -> Self {
        Self::Null
    }
}

impl DynamicValue {
    /// Builds a value from any serializable native structure by going
    /// through its JSON representation.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> crate::Result<Self> {
        let json = serde_json::to_value(value)?;
        crate::from_json_value(json)
    }

    /// A short name for the variant of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(..) => "bool",
            Self::Int8(..) => "int8",
            Self::Int16(..) => "int16",
            Self::Int32(..) => "int32",
            Self::Int64(..) => "int64",
            Self::UInt(..) => "uint",
            Self::UInt8(..) => "uint8",
            Self::UInt16(..) => "uint16",
            Self::UInt32(..) => "uint32",
            Self::UInt64(..) => "uint64",
            Self::Float32(..) => "float32",
            Self::Float64(..) => "float64",
            Self::String(..) => "string",
            Self::Array(..) => "array",
            Self::Object(..) => "object",
            Self::Opaque(..) => "opaque",
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(v) => Some(v),
            _ => None,
        }
    }

    /// Narrows any integer width to an [`i64`], if the value fits.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Int8(v) => Some(v.into()),
            Self::Int16(v) => Some(v.into()),
            Self::Int32(v) => Some(v.into()),
            Self::Int64(v) => Some(v),
            Self::UInt(v) => i64::try_from(v).ok(),
            Self::UInt8(v) => Some(v.into()),
            Self::UInt16(v) => Some(v.into()),
            Self::UInt32(v) => Some(v.into()),
            Self::UInt64(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    /// Narrows any integer width to a [`u64`], if the value fits.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Self::Int8(v) => u64::try_from(v).ok(),
            Self::Int16(v) => u64::try_from(v).ok(),
            Self::Int32(v) => u64::try_from(v).ok(),
            Self::Int64(v) => u64::try_from(v).ok(),
            Self::UInt(v) => u64::try_from(v).ok(),
            Self::UInt8(v) => Some(v.into()),
            Self::UInt16(v) => Some(v.into()),
            Self::UInt32(v) => Some(v.into()),
            Self::UInt64(v) => Some(v),
            _ => None,
        }
    }

    /// Converts any numeric value to an [`f64`].
    ///
    /// Integers beyond 2^53 lose precision in the process.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Float32(v) => Some(v.into()),
            Self::Float64(v) => Some(v),
            Self::Int8(v) => Some(v.into()),
            Self::Int16(v) => Some(v.into()),
            Self::Int32(v) => Some(v.into()),
            Self::Int64(v) => Some(v as f64),
            Self::UInt(v) => Some(v as f64),
            Self::UInt8(v) => Some(v.into()),
            Self::UInt16(v) => Some(v.into()),
            Self::UInt32(v) => Some(v.into()),
            Self::UInt64(v) => Some(v as f64),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_opaque(&self) -> Option<&Opaque> {
        match self {
            Self::Opaque(v) => Some(v),
            _ => None,
        }
    }

    /// Looks up `key` if this value is an object.
    pub fn get(&self, key: &str) -> Option<&DynamicValue> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// Looks up the element at `index` if this value is an array.
    pub fn get_index(&self, index: usize) -> Option<&DynamicValue> {
        self.as_array().and_then(|arr| arr.get(index))
    }

    /// Looks up a nested value by a JSON Pointer ([RFC 6901]).
    ///
    /// The empty pointer refers to the value itself.
    ///
    /// [RFC 6901]: https://datatracker.ietf.org/doc/html/rfc6901
    pub fn pointer(&self, pointer: &str) -> Option<&DynamicValue> {
        if pointer.is_empty() {
            return Some(self);
        }
        if !pointer.starts_with('/') {
            return None;
        }

        pointer
            .split('/')
            .skip(1)
            .map(|token| token.replace("~1", "/").replace("~0", "~"))
            .try_fold(self, |target, token| match target {
                Self::Object(obj) => obj.get(token.as_str()),
                Self::Array(arr) => parse_index(&token).and_then(|idx| arr.get(idx)),
                _ => None,
            })
    }
}

fn parse_index(token: &str) -> Option<usize> {
    // Leading zeros and signs are not valid array indices.
    if token.starts_with('+') || (token.starts_with('0') && token.len() > 1) {
        return None;
    }

    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic;

    #[test]
    fn narrowing() {
        assert_eq!(DynamicValue::UInt8(7).as_i64(), Some(7));
        assert_eq!(DynamicValue::Int8(-1).as_u64(), None);
        assert_eq!(DynamicValue::UInt64(u64::MAX).as_i64(), None);
        assert_eq!(DynamicValue::Float32(0.5).as_f64(), Some(0.5));
        assert_eq!(DynamicValue::Bool(true).as_i64(), None);
        assert_eq!(DynamicValue::from("x").as_str(), Some("x"));
    }

    #[test]
    fn pointer_lookup() {
        let value = dynamic!({
            "a": [1, {"b/c": true}],
            "m~n": "tilde",
        });

        assert_eq!(value.pointer(""), Some(&value));
        assert_eq!(value.pointer("/a/0"), Some(&DynamicValue::Int64(1)));
        assert_eq!(value.pointer("/a/1/b~1c"), Some(&DynamicValue::Bool(true)));
        assert_eq!(value.pointer("/m~0n").and_then(DynamicValue::as_str), Some("tilde"));
        assert_eq!(value.pointer("/a/01"), None);
        assert_eq!(value.pointer("/a/7"), None);
        assert_eq!(value.pointer("a"), None);
    }

    #[test]
    fn property_bags_decode_directly() {
        let props: Properties =
            serde_json::from_str(r#"{"name": "Alice", "age": 31, "tags": ["a"]}"#).unwrap();

        assert_eq!(props.keys().collect::<Vec<_>>(), ["name", "age", "tags"]);
        assert_eq!(props["age"], DynamicValue::Int64(31));
        assert_eq!(
            serde_json::to_string(&props).unwrap(),
            r#"{"name":"Alice","age":31,"tags":["a"]}"#
        );
    }

    #[test]
    fn type_names() {
        assert_eq!(DynamicValue::Null.type_name(), "null");
        assert_eq!(DynamicValue::UInt(3).type_name(), "uint");
        assert_eq!(dynamic!([]).type_name(), "array");
    }
}
