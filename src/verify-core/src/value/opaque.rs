use std::{any::Any, fmt, sync::Arc};

use serde::Serialize;

use super::DynamicValue;
use crate::{BoxedNumber, CodingPath, Error, Result};

/// What an opaque value turns into when it is encoded.
pub(crate) enum Lowered {
    Json(serde_json::Value),
    Value(DynamicValue),
}

trait Erased: fmt::Debug + Send + Sync {
    fn lower(&self, path: &CodingPath) -> Result<Lowered>;

    fn as_any(&self) -> &dyn Any;
}

struct Encodable<T>(T);

impl<T: fmt::Debug> fmt::Debug for Encodable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> Erased for Encodable<T>
where
    T: Serialize + fmt::Debug + Send + Sync + 'static,
{
    fn lower(&self, path: &CodingPath) -> Result<Lowered> {
        serde_json::to_value(&self.0).map(Lowered::Json).map_err(|e| {
            log::warn!("Opaque value at {path} failed to serialize: {e}");
            Error::UnsupportedValue {
                description: format!("{:?}", self.0),
                path: path.clone(),
            }
        })
    }

    fn as_any(&self) -> &dyn Any {
        &self.0
    }
}

struct Unencodable<T>(T);

impl<T: fmt::Debug> fmt::Debug for Unencodable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> Erased for Unencodable<T>
where
    T: fmt::Debug + Send + Sync + 'static,
{
    fn lower(&self, path: &CodingPath) -> Result<Lowered> {
        Err(Error::UnsupportedValue {
            description: format!("{:?}", self.0),
            path: path.clone(),
        })
    }

    fn as_any(&self) -> &dyn Any {
        &self.0
    }
}

impl Erased for BoxedNumber {
    fn lower(&self, path: &CodingPath) -> Result<Lowered> {
        self.to_dynamic_at(path).map(Lowered::Value)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An application-supplied value carried inside a [`DynamicValue`]
/// tree without being converted into one.
///
/// Opaque values have no structural identity: they never compare
/// equal to anything, including clones of themselves, and contribute
/// nothing to a value's hash. Decoding never produces them.
#[derive(Clone)]
pub struct Opaque(Arc<dyn Erased>);

impl Opaque {
    /// Wraps a value which encodes through its own [`Serialize`] impl.
    pub fn new<T>(value: T) -> Self
    where
        T: Serialize + fmt::Debug + Send + Sync + 'static,
    {
        Self(Arc::new(Encodable(value)))
    }

    /// Wraps a value which has no serialized form.
    ///
    /// Encoding a tree that contains such a value fails with
    /// [`Error::UnsupportedValue`].
    pub fn unencodable<T>(value: T) -> Self
    where
        T: fmt::Debug + Send + Sync + 'static,
    {
        Self(Arc::new(Unencodable(value)))
    }

    /// Gets a reference to the wrapped value if it is of type `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref()
    }

    pub(crate) fn lower(&self, path: &CodingPath) -> Result<Lowered> {
        self.0.lower(path)
    }
}

impl From<BoxedNumber> for Opaque {
    fn from(value: BoxedNumber) -> Self {
        Self(Arc::new(value))
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opaque({:?})", self.0)
    }
}
