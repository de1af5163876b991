use std::cell::Cell;

use ::serde::ser::{self, Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::{value::Lowered, CodingPath, DynamicValue, Error, PathSegment};

// The position of a value during encoding as a chain of borrowed
// steps, so that a `CodingPath` is only allocated when reporting an
// error.
#[derive(Clone, Copy)]
enum Trail<'a> {
    Root,
    Key(&'a Trail<'a>, &'a str),
    Index(&'a Trail<'a>, usize),
}

impl Trail<'_> {
    fn to_path(&self) -> CodingPath {
        let mut segments = Vec::new();
        let mut current = self;
        loop {
            match current {
                Trail::Root => break,
                Trail::Key(parent, key) => {
                    segments.push(PathSegment::Key((*key).to_owned()));
                    current = parent;
                }
                Trail::Index(parent, idx) => {
                    segments.push(PathSegment::Index(*idx));
                    current = parent;
                }
            }
        }

        segments.into_iter().rev().collect()
    }
}

/// Serializes a [`DynamicValue`] while tracking its position in the
/// tree being encoded.
pub(crate) struct Encode<'a> {
    value: &'a DynamicValue,
    trail: Trail<'a>,
    failure: &'a Cell<Option<Error>>,
}

impl<'a> Encode<'a> {
    pub fn root(value: &'a DynamicValue, failure: &'a Cell<Option<Error>>) -> Self {
        Self {
            value,
            trail: Trail::Root,
            failure,
        }
    }

    fn fail<E: ser::Error>(&self, error: Error) -> E {
        let e = E::custom(&error);
        self.failure.set(Some(error));
        e
    }
}

impl Serialize for Encode<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.value {
            DynamicValue::Null => serializer.serialize_unit(),
            DynamicValue::Bool(v) => serializer.serialize_bool(*v),

            DynamicValue::Int8(v) => serializer.serialize_i8(*v),
            DynamicValue::Int16(v) => serializer.serialize_i16(*v),
            DynamicValue::Int32(v) => serializer.serialize_i32(*v),
            DynamicValue::Int64(v) => serializer.serialize_i64(*v),

            DynamicValue::UInt(v) => serializer.serialize_u64(*v as u64),
            DynamicValue::UInt8(v) => serializer.serialize_u8(*v),
            DynamicValue::UInt16(v) => serializer.serialize_u16(*v),
            DynamicValue::UInt32(v) => serializer.serialize_u32(*v),
            DynamicValue::UInt64(v) => serializer.serialize_u64(*v),

            DynamicValue::Float32(v) => serializer.serialize_f32(*v),
            DynamicValue::Float64(v) => serializer.serialize_f64(*v),

            DynamicValue::String(v) => serializer.serialize_str(v),

            DynamicValue::Array(arr) => {
                log::trace!("Encoding array at {}", self.trail.to_path());

                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for (idx, element) in arr.iter().enumerate() {
                    seq.serialize_element(&Encode {
                        value: element,
                        trail: Trail::Index(&self.trail, idx),
                        failure: self.failure,
                    })?;
                }
                seq.end()
            }

            DynamicValue::Object(obj) => {
                log::trace!("Encoding object at {}", self.trail.to_path());

                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (key, member) in obj.iter() {
                    map.serialize_entry(
                        key,
                        &Encode {
                            value: member,
                            trail: Trail::Key(&self.trail, key),
                            failure: self.failure,
                        },
                    )?;
                }
                map.end()
            }

            DynamicValue::Opaque(opaque) => match opaque.lower(&self.trail.to_path()) {
                Ok(Lowered::Json(json)) => json.serialize(serializer),
                Ok(Lowered::Value(value)) => Encode {
                    value: &value,
                    trail: self.trail,
                    failure: self.failure,
                }
                .serialize(serializer),
                Err(e) => {
                    log::warn!("Cannot encode {opaque:?}: {e}");
                    Err(self.fail(e))
                }
            },
        }
    }
}
