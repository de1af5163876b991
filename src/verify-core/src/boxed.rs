//! Platform number boxes which carry a runtime type tag.
//!
//! Some foreign runtimes hand numbers over in a generic box that can
//! be read back as any numeric type. Only the single-character type
//! tag attached to the box tells which concrete type it was created
//! from. [`BoxedNumber`] models such a box so that it can be encoded
//! with its original width instead of a guessed one.

use serde::{ser, Serialize, Serializer};

use crate::{CodingPath, DynamicValue, Error, Result};

/// The concrete numeric types a [`BoxedNumber`] may describe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
}

impl NumericKind {
    /// Maps a runtime type tag to its numeric kind.
    ///
    /// Both `long` tags (`l`, `L`) are 32 bits wide.
    pub fn from_tag(tag: char) -> Option<Self> {
        let kind = match tag {
            'B' => Self::Bool,
            'c' => Self::Int8,
            's' => Self::Int16,
            'i' | 'l' => Self::Int32,
            'q' => Self::Int64,
            'C' => Self::UInt8,
            'S' => Self::UInt16,
            'I' | 'L' => Self::UInt32,
            'Q' => Self::UInt64,
            'f' => Self::Float32,
            'd' => Self::Float64,
            _ => return None,
        };

        Some(kind)
    }

    /// The canonical type tag for this kind.
    pub fn tag(self) -> char {
        match self {
            Self::Bool => 'B',
            Self::Int8 => 'c',
            Self::Int16 => 's',
            Self::Int32 => 'i',
            Self::Int64 => 'q',
            Self::UInt8 => 'C',
            Self::UInt16 => 'S',
            Self::UInt32 => 'I',
            Self::UInt64 => 'Q',
            Self::Float32 => 'f',
            Self::Float64 => 'd',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Payload {
    Integer(i128),
    Float(f64),
}

/// A number in a generic box, tagged with the type it was created as.
///
/// The accessors convert the payload like a C cast would: integers
/// wrap to the requested width and floats truncate towards zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxedNumber {
    tag: char,
    payload: Payload,
}

macro_rules! int_accessor {
    ($($name:ident -> $ty:ty),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(&self) -> $ty {
                match self.payload {
                    Payload::Integer(v) => v as $ty,
                    Payload::Float(v) => v as $ty,
                }
            }
        )*
    };
}

impl BoxedNumber {
    /// Boxes an integer payload under the given type tag.
    pub fn from_integer(tag: char, value: i128) -> Self {
        Self {
            tag,
            payload: Payload::Integer(value),
        }
    }

    /// Boxes a floating-point payload under the given type tag.
    pub fn from_float(tag: char, value: f64) -> Self {
        Self {
            tag,
            payload: Payload::Float(value),
        }
    }

    /// The runtime type tag of the box.
    #[inline]
    pub fn tag(&self) -> char {
        self.tag
    }

    /// The numeric kind described by the type tag, if it is known.
    #[inline]
    pub fn kind(&self) -> Option<NumericKind> {
        NumericKind::from_tag(self.tag)
    }

    #[inline]
    pub fn bool_value(&self) -> bool {
        match self.payload {
            Payload::Integer(v) => v != 0,
            Payload::Float(v) => v != 0.0,
        }
    }

    int_accessor! {
        int8_value -> i8,
        int16_value -> i16,
        int32_value -> i32,
        int64_value -> i64,
        uint8_value -> u8,
        uint16_value -> u16,
        uint32_value -> u32,
        uint64_value -> u64,
    }

    #[inline]
    pub fn float_value(&self) -> f32 {
        match self.payload {
            Payload::Integer(v) => v as f32,
            Payload::Float(v) => v as f32,
        }
    }

    #[inline]
    pub fn double_value(&self) -> f64 {
        match self.payload {
            Payload::Integer(v) => v as f64,
            Payload::Float(v) => v,
        }
    }

    /// Converts the box into the [`DynamicValue`] variant matching its
    /// type tag.
    pub fn to_dynamic(&self) -> Result<DynamicValue> {
        self.to_dynamic_at(&CodingPath::root())
    }

    pub(crate) fn to_dynamic_at(&self, path: &CodingPath) -> Result<DynamicValue> {
        let kind = self.kind().ok_or_else(|| Error::UnsupportedBoxedNumericType {
            tag: self.tag,
            path: path.clone(),
        })?;

        let value = match kind {
            NumericKind::Bool => DynamicValue::Bool(self.bool_value()),
            NumericKind::Int8 => DynamicValue::Int8(self.int8_value()),
            NumericKind::Int16 => DynamicValue::Int16(self.int16_value()),
            NumericKind::Int32 => DynamicValue::Int32(self.int32_value()),
            NumericKind::Int64 => DynamicValue::Int64(self.int64_value()),
            NumericKind::UInt8 => DynamicValue::UInt8(self.uint8_value()),
            NumericKind::UInt16 => DynamicValue::UInt16(self.uint16_value()),
            NumericKind::UInt32 => DynamicValue::UInt32(self.uint32_value()),
            NumericKind::UInt64 => DynamicValue::UInt64(self.uint64_value()),
            NumericKind::Float32 => DynamicValue::Float32(self.float_value()),
            NumericKind::Float64 => DynamicValue::Float64(self.double_value()),
        };

        Ok(value)
    }
}

macro_rules! impl_from_native {
    ($($ty:ty => $kind:ident as $ctor:ident($conv:ty)),* $(,)?) => {
        $(
            impl From<$ty> for BoxedNumber {
                fn from(value: $ty) -> Self {
                    Self::$ctor(NumericKind::$kind.tag(), <$conv>::from(value))
                }
            }
        )*
    };
}

impl_from_native! {
    bool => Bool as from_integer(i128),
    i8 => Int8 as from_integer(i128),
    i16 => Int16 as from_integer(i128),
    i32 => Int32 as from_integer(i128),
    i64 => Int64 as from_integer(i128),
    u8 => UInt8 as from_integer(i128),
    u16 => UInt16 as from_integer(i128),
    u32 => UInt32 as from_integer(i128),
    u64 => UInt64 as from_integer(i128),
    f32 => Float32 as from_float(f64),
    f64 => Float64 as from_float(f64),
}

impl TryFrom<BoxedNumber> for DynamicValue {
    type Error = Error;

    fn try_from(value: BoxedNumber) -> Result<Self> {
        value.to_dynamic()
    }
}

impl Serialize for BoxedNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_dynamic()
            .map_err(<S::Error as ser::Error>::custom)?
            .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_select_width() {
        assert_eq!(
            BoxedNumber::from_integer('c', -5).to_dynamic().unwrap(),
            DynamicValue::Int8(-5)
        );
        assert_eq!(
            BoxedNumber::from_integer('L', 7).to_dynamic().unwrap(),
            DynamicValue::UInt32(7)
        );
        assert_eq!(
            BoxedNumber::from_float('f', 0.5).to_dynamic().unwrap(),
            DynamicValue::Float32(0.5)
        );
    }

    #[test]
    fn bool_box_is_not_a_number() {
        let boxed = BoxedNumber::from(true);

        assert_eq!(boxed.tag(), 'B');
        assert_eq!(boxed.to_dynamic().unwrap(), DynamicValue::Bool(true));
    }

    #[test]
    fn payload_wraps_to_tag_width() {
        assert_eq!(
            BoxedNumber::from_integer('c', 300).to_dynamic().unwrap(),
            DynamicValue::Int8(44)
        );
        assert_eq!(BoxedNumber::from_float('i', -2.9).int32_value(), -2);
    }

    #[test]
    fn native_conversions_round_trip() {
        for (boxed, expected) in [
            (BoxedNumber::from(-3i16), DynamicValue::Int16(-3)),
            (BoxedNumber::from(u64::MAX), DynamicValue::UInt64(u64::MAX)),
            (BoxedNumber::from(1.25f64), DynamicValue::Float64(1.25)),
        ] {
            assert_eq!(DynamicValue::try_from(boxed).unwrap(), expected);
        }
    }

    #[test]
    fn unknown_tag() {
        let err = BoxedNumber::from_integer('x', 1).to_dynamic().unwrap_err();

        assert!(matches!(
            err,
            Error::UnsupportedBoxedNumericType { tag: 'x', .. }
        ));
        assert_eq!(err.to_string(), "unsupported boxed numeric type 'x' at $");
    }
}
