use std::{
    mem,
    ops::{Deref, DerefMut},
};

use indexmap::IndexMap;

use super::{drop, Array, DynamicValue};

/// A mapping of string keys to values.
///
/// Keys keep the order they were inserted in for stable output, but
/// two objects compare equal regardless of their key order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Object {
    /// The members of the object.
    pub inner: IndexMap<String, DynamicValue>,
}

impl Object {
    /// Creates an object from an existing map.
    pub fn new(inner: IndexMap<String, DynamicValue>) -> Self {
        Self { inner }
    }

    /// Builds an object from key/value pairs.
    ///
    /// When a key occurs more than once, its first value is kept and
    /// all later ones are discarded.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, DynamicValue)>,
    {
        let entries = entries.into_iter();

        let mut inner = IndexMap::with_capacity(entries.size_hint().0);
        for (key, value) in entries {
            inner.entry(key).or_insert(value);
        }

        Self { inner }
    }

    /// Consumes the object and returns its members.
    pub fn into_map(mut self) -> IndexMap<String, DynamicValue> {
        mem::take(&mut self.inner)
    }

    /// Gets the member `key` narrowed to a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.inner.get(key).and_then(DynamicValue::as_str)
    }

    /// Gets the member `key` narrowed to a nested object.
    pub fn get_object(&self, key: &str) -> Option<&Object> {
        self.inner.get(key).and_then(DynamicValue::as_object)
    }

    /// Gets the member `key` narrowed to a nested array.
    pub fn get_array(&self, key: &str) -> Option<&Array> {
        self.inner.get(key).and_then(DynamicValue::as_array)
    }
}

impl Drop for Object {
    fn drop(&mut self) {
        for (_, child) in mem::take(&mut self.inner) {
            drop::safely(child);
        }
    }
}

impl Deref for Object {
    type Target = IndexMap<String, DynamicValue>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for Object {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl From<IndexMap<String, DynamicValue>> for Object {
    fn from(inner: IndexMap<String, DynamicValue>) -> Self {
        Self { inner }
    }
}

impl<K, V> FromIterator<(K, V)> for Object
where
    K: Into<String>,
    V: Into<DynamicValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().map(|(k, v)| (k.into(), v.into())))
    }
}

impl IntoIterator for Object {
    type Item = (String, DynamicValue);
    type IntoIter = <IndexMap<String, DynamicValue> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.into_map().into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a DynamicValue);
    type IntoIter = <&'a IndexMap<String, DynamicValue> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Object {
    type Item = (&'a String, &'a mut DynamicValue);
    type IntoIter = <&'a mut IndexMap<String, DynamicValue> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_key_wins() {
        let obj: Object = [("k", 1), ("j", 3), ("k", 2)].into_iter().collect();

        assert_eq!(obj.len(), 2);
        assert_eq!(obj["k"], DynamicValue::Int32(1));
        assert_eq!(obj.keys().collect::<Vec<_>>(), ["k", "j"]);
    }

    #[test]
    fn equality_ignores_order() {
        let a: Object = [("x", true), ("y", false)].into_iter().collect();
        let b: Object = [("y", false), ("x", true)].into_iter().collect();

        assert_eq!(a, b);
    }

    #[test]
    fn narrowing_helpers() {
        let obj: Object = [
            ("name", DynamicValue::from("Alice")),
            ("tags", DynamicValue::from(vec!["a", "b"])),
            ("nested", DynamicValue::from(Object::default())),
        ]
        .into_iter()
        .collect();

        assert_eq!(obj.get_str("name"), Some("Alice"));
        assert_eq!(obj.get_array("tags").map(|a| a.len()), Some(2));
        assert!(obj.get_object("nested").is_some());
        assert_eq!(obj.get_str("tags"), None);
        assert_eq!(obj.get_str("missing"), None);
    }
}
