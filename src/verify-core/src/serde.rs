//! Serialization support for dynamic values.
//!
//! [`DynamicValue`] implements [`Deserialize`] and [`Serialize`], so it
//! can be embedded into any serde model. The functions in this module
//! additionally recover the structured, path-carrying [`Error`] when
//! working with JSON text directly.

use std::io;

use ::serde::{de::DeserializeSeed, Deserialize, Deserializer, Serialize, Serializer};

use crate::{DynamicValue, Error, Result};

mod de;
use de::{DecodeState, ValueSeed};

mod ser;
use ser::Encode;

/// Default nesting depth at which decoding gives up.
///
/// JSON entry points disable serde_json's own depth check, so this
/// limit (or the one configured on a [`Decoder`]) is the only one.
pub const DEFAULT_RECURSION_LIMIT: usize = 128;

/// A configurable decoder for [`DynamicValue`] trees.
#[derive(Clone, Copy, Debug)]
pub struct Decoder {
    /// The maximum container nesting depth that will be decoded.
    pub recursion_limit: usize,
}

impl Default for Decoder {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl Decoder {
    /// Creates a decoder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a decoder which fails beyond `limit` nested containers.
    pub fn with_recursion_limit(limit: usize) -> Self {
        Self {
            recursion_limit: limit,
        }
    }

    /// Decodes a single value from any self-describing deserializer.
    ///
    /// Errors raised by the deserializer itself are reported as
    /// [`Error::Custom`]; prefer the JSON-specific methods to keep the
    /// original [`serde_json::Error`].
    pub fn decode<'de, D>(&self, deserializer: D) -> Result<DynamicValue>
    where
        D: Deserializer<'de>,
    {
        self.decode_with(deserializer, |e| Error::Custom(e.to_string()))
    }

    /// Decodes a value from a string of JSON text.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(&self, data: &str) -> Result<DynamicValue> {
        let mut de = serde_json::Deserializer::from_str(data);
        de.disable_recursion_limit();
        let value = self.decode_with(&mut de, Error::from)?;
        de.end()?;

        Ok(value)
    }

    /// Decodes a value from bytes of JSON text.
    pub fn from_slice(&self, data: &[u8]) -> Result<DynamicValue> {
        let mut de = serde_json::Deserializer::from_slice(data);
        de.disable_recursion_limit();
        let value = self.decode_with(&mut de, Error::from)?;
        de.end()?;

        Ok(value)
    }

    /// Decodes a value from a reader of JSON text.
    pub fn from_reader<R: io::Read>(&self, reader: R) -> Result<DynamicValue> {
        let mut de = serde_json::Deserializer::from_reader(reader);
        de.disable_recursion_limit();
        let value = self.decode_with(&mut de, Error::from)?;
        de.end()?;

        Ok(value)
    }

    /// Converts an already parsed [`serde_json::Value`].
    pub fn from_json_value(&self, value: serde_json::Value) -> Result<DynamicValue> {
        self.decode_with(value, Error::from)
    }

    fn decode_with<'de, D, F>(&self, deserializer: D, convert: F) -> Result<DynamicValue>
    where
        D: Deserializer<'de>,
        F: FnOnce(D::Error) -> Error,
    {
        let mut state = DecodeState::new(self.recursion_limit);
        let value = ValueSeed::new(&mut state)
            .deserialize(deserializer)
            .map_err(|e| state.take_failure().unwrap_or_else(|| convert(e)))?;

        log::debug!("Decoded {} value", value.type_name());
        Ok(value)
    }
}

impl<'de> Deserialize<'de> for DynamicValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut state = DecodeState::new(DEFAULT_RECURSION_LIMIT);
        ValueSeed::new(&mut state).deserialize(deserializer)
    }
}

impl Serialize for DynamicValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let failure = Default::default();
        Encode::root(self, &failure).serialize(serializer)
    }
}

/// Decodes a value from a string of JSON text.
pub fn from_str(data: &str) -> Result<DynamicValue> {
    Decoder::default().from_str(data)
}

/// Decodes a value from bytes of JSON text.
pub fn from_slice(data: &[u8]) -> Result<DynamicValue> {
    Decoder::default().from_slice(data)
}

/// Decodes a value from a reader of JSON text.
pub fn from_reader<R: io::Read>(reader: R) -> Result<DynamicValue> {
    Decoder::default().from_reader(reader)
}

/// Converts an already parsed [`serde_json::Value`].
pub fn from_json_value(value: serde_json::Value) -> Result<DynamicValue> {
    Decoder::default().from_json_value(value)
}

fn encode_with<T, F>(value: &DynamicValue, f: F) -> Result<T>
where
    F: FnOnce(&Encode<'_>) -> serde_json::Result<T>,
{
    let failure = Default::default();
    let result = f(&Encode::root(value, &failure));

    if result.is_ok() {
        log::debug!("Encoded {} value", value.type_name());
    }

    // A failure recorded during the walk carries its path; serde_json
    // only saw a stringified copy of it.
    result.map_err(|e| failure.take().unwrap_or_else(|| e.into()))
}

/// Encodes a value as a compact JSON string.
pub fn to_string(value: &DynamicValue) -> Result<String> {
    encode_with(value, |encode| serde_json::to_string(encode))
}

/// Encodes a value as a pretty-printed JSON string.
pub fn to_string_pretty(value: &DynamicValue) -> Result<String> {
    encode_with(value, |encode| serde_json::to_string_pretty(encode))
}

/// Encodes a value as compact JSON bytes.
pub fn to_vec(value: &DynamicValue) -> Result<Vec<u8>> {
    encode_with(value, |encode| serde_json::to_vec(encode))
}

/// Encodes a value as compact JSON into `writer`.
pub fn to_writer<W: io::Write>(writer: W, value: &DynamicValue) -> Result<()> {
    encode_with(value, |encode| serde_json::to_writer(writer, encode))
}

/// Encodes a value into a [`serde_json::Value`].
///
/// `Float32` values are widened to 64 bits in the process.
pub fn to_json_value(value: &DynamicValue) -> Result<serde_json::Value> {
    encode_with(value, |encode| serde_json::to_value(encode))
}
