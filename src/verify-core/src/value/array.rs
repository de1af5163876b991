use std::{
    mem,
    ops::{Deref, DerefMut},
};

use super::{drop, DynamicValue};

/// An ordered sequence of values with a non-recursive drop impl.
///
/// Elements are not required to be of the same type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Array {
    /// The inner [`DynamicValue`]s of the array.
    pub inner: Vec<DynamicValue>,
}

impl Array {
    /// Creates an array from already converted elements.
    pub fn new(inner: Vec<DynamicValue>) -> Self {
        Self { inner }
    }

    /// Consumes the array and returns its elements.
    pub fn into_vec(mut self) -> Vec<DynamicValue> {
        mem::take(&mut self.inner)
    }
}

impl Drop for Array {
    fn drop(&mut self) {
        self.inner.drain(..).for_each(drop::safely);
    }
}

impl Deref for Array {
    type Target = Vec<DynamicValue>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for Array {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl From<Vec<DynamicValue>> for Array {
    fn from(inner: Vec<DynamicValue>) -> Self {
        Self { inner }
    }
}

impl<T: Into<DynamicValue>> FromIterator<T> for Array {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for Array {
    type Item = DynamicValue;
    type IntoIter = <Vec<DynamicValue> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a DynamicValue;
    type IntoIter = <&'a Vec<DynamicValue> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Array {
    type Item = &'a mut DynamicValue;
    type IntoIter = <&'a mut Vec<DynamicValue> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
