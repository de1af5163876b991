use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

use indexmap::IndexMap;

use super::{Array, DynamicValue, Object, Opaque};

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for DynamicValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    usize => UInt,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    String => String,
    Array => Array,
    Object => Object,
    Opaque => Opaque,
}

impl From<()> for DynamicValue {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<isize> for DynamicValue {
    fn from(value: isize) -> Self {
        // There is no signed word-sized variant; isize is at most 64 bits.
        Self::Int64(value as i64)
    }
}

impl From<&str> for DynamicValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<&String> for DynamicValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<Cow<'_, str>> for DynamicValue {
    fn from(value: Cow<'_, str>) -> Self {
        Self::String(value.into_owned())
    }
}

impl From<char> for DynamicValue {
    fn from(value: char) -> Self {
        Self::String(value.to_string())
    }
}

impl<T: Into<DynamicValue>> From<Option<T>> for DynamicValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<DynamicValue>> From<Vec<T>> for DynamicValue {
    fn from(value: Vec<T>) -> Self {
        Self::Array(value.into_iter().collect())
    }
}

impl<T: Clone + Into<DynamicValue>> From<&[T]> for DynamicValue {
    fn from(value: &[T]) -> Self {
        Self::Array(value.iter().cloned().collect())
    }
}

impl<K, V> From<IndexMap<K, V>> for DynamicValue
where
    K: Into<String>,
    V: Into<DynamicValue>,
{
    fn from(value: IndexMap<K, V>) -> Self {
        Self::Object(value.into_iter().collect())
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for DynamicValue
where
    K: Into<String>,
    V: Into<DynamicValue>,
    S: BuildHasher,
{
    fn from(value: HashMap<K, V, S>) -> Self {
        Self::Object(value.into_iter().collect())
    }
}

impl<K, V> From<BTreeMap<K, V>> for DynamicValue
where
    K: Into<String>,
    V: Into<DynamicValue>,
{
    fn from(value: BTreeMap<K, V>) -> Self {
        Self::Object(value.into_iter().collect())
    }
}

impl<T: Into<DynamicValue>> FromIterator<T> for DynamicValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

impl<K, V> FromIterator<(K, V)> for DynamicValue
where
    K: Into<String>,
    V: Into<DynamicValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Object(iter.into_iter().collect())
    }
}

/// Conversion of source literals for the [`dynamic!`](crate::dynamic)
/// macro.
///
/// Only one impl exists per kind of literal, so untyped integer
/// literals become [`DynamicValue::Int64`] and untyped float literals
/// become [`DynamicValue::Float64`].
pub trait LiteralValue {
    fn into_literal(self) -> DynamicValue;
}

impl LiteralValue for i64 {
    #[inline]
    fn into_literal(self) -> DynamicValue {
        DynamicValue::Int64(self)
    }
}

impl LiteralValue for f64 {
    #[inline]
    fn into_literal(self) -> DynamicValue {
        DynamicValue::Float64(self)
    }
}

impl LiteralValue for bool {
    #[inline]
    fn into_literal(self) -> DynamicValue {
        DynamicValue::Bool(self)
    }
}

impl LiteralValue for &str {
    #[inline]
    fn into_literal(self) -> DynamicValue {
        DynamicValue::from(self)
    }
}

impl LiteralValue for char {
    #[inline]
    fn into_literal(self) -> DynamicValue {
        DynamicValue::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_are_kept() {
        assert_eq!(DynamicValue::from(1i8), DynamicValue::Int8(1));
        assert_eq!(DynamicValue::from(1u32), DynamicValue::UInt32(1));
        assert_eq!(DynamicValue::from(1usize), DynamicValue::UInt(1));
        assert_eq!(DynamicValue::from(-1isize), DynamicValue::Int64(-1));
        assert_eq!(DynamicValue::from(0.5f32), DynamicValue::Float32(0.5));
    }

    #[test]
    fn unsuffixed_literals_differ_from_macro() {
        assert_eq!(DynamicValue::from(1), DynamicValue::Int32(1));
        assert_eq!(crate::dynamic!(1), DynamicValue::Int64(1));
        assert_ne!(DynamicValue::from(1), crate::dynamic!(1));
    }

    #[test]
    fn options_and_unit() {
        assert_eq!(DynamicValue::from(()), DynamicValue::Null);
        assert_eq!(DynamicValue::from(None::<bool>), DynamicValue::Null);
        assert_eq!(DynamicValue::from(Some("x")), DynamicValue::from("x"));
    }

    #[test]
    fn collections() {
        let arr = DynamicValue::from(vec![Some(1i64), None]);
        assert_eq!(
            arr,
            DynamicValue::Array(Array::new(vec![DynamicValue::Int64(1), DynamicValue::Null]))
        );

        let mut map = BTreeMap::new();
        map.insert("b", 2i64);
        map.insert("a", 1i64);
        let obj = DynamicValue::from(map);
        assert_eq!(obj.get("a"), Some(&DynamicValue::Int64(1)));
        assert_eq!(obj.get("b"), Some(&DynamicValue::Int64(2)));
    }

    #[test]
    fn collect_pairs_first_wins() {
        let obj: DynamicValue = vec![("k", 1i64), ("k", 2i64)].into_iter().collect();
        assert_eq!(obj.get("k"), Some(&DynamicValue::Int64(1)));
        assert_eq!(obj.as_object().map(|o| o.len()), Some(1));
    }
}
