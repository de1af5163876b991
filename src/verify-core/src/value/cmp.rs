//! Structural equality and hashing.
//!
//! Two values are only equal when they are of the same variant and
//! hold equal payloads. There is no numeric promotion: `Int32(1)` is
//! not equal to `Int64(1)`, and `Bool(true)` is not equal to any
//! integer.
//!
//! Hashing follows the same split. Scalars feed their variant and
//! payload into the hasher, whereas `Null`, arrays, objects and opaque
//! values contribute nothing. This keeps `a == b => hash(a) == hash(b)`
//! intact, at the cost of every container landing in the same bucket.

use std::{
    hash::{Hash, Hasher},
    mem,
};

use super::DynamicValue;

impl PartialEq for DynamicValue {
    fn eq(&self, other: &Self) -> bool {
        use DynamicValue::*;

        match (self, other) {
            (Null, Null) => true,
            (Bool(a), Bool(b)) => a == b,

            (Int8(a), Int8(b)) => a == b,
            (Int16(a), Int16(b)) => a == b,
            (Int32(a), Int32(b)) => a == b,
            (Int64(a), Int64(b)) => a == b,

            (UInt(a), UInt(b)) => a == b,
            (UInt8(a), UInt8(b)) => a == b,
            (UInt16(a), UInt16(b)) => a == b,
            (UInt32(a), UInt32(b)) => a == b,
            (UInt64(a), UInt64(b)) => a == b,

            (Float32(a), Float32(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Float64(a), Float64(b)) => a == b || (a.is_nan() && b.is_nan()),

            (String(a), String(b)) => a == b,
            (Array(a), Array(b)) => a == b,
            (Object(a), Object(b)) => a == b,

            // Opaque values have no identity, not even with themselves.
            _ => false,
        }
    }
}

// Reflexive for every value that does not contain an opaque one.
impl Eq for DynamicValue {}

impl Hash for DynamicValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let tag = mem::discriminant(self);

        match self {
            Self::Null | Self::Array(..) | Self::Object(..) | Self::Opaque(..) => {}

            Self::Bool(v) => (tag, v).hash(state),

            Self::Int8(v) => (tag, v).hash(state),
            Self::Int16(v) => (tag, v).hash(state),
            Self::Int32(v) => (tag, v).hash(state),
            Self::Int64(v) => (tag, v).hash(state),

            Self::UInt(v) => (tag, v).hash(state),
            Self::UInt8(v) => (tag, v).hash(state),
            Self::UInt16(v) => (tag, v).hash(state),
            Self::UInt32(v) => (tag, v).hash(state),
            Self::UInt64(v) => (tag, v).hash(state),

            Self::Float32(v) => (tag, f32_bits(*v)).hash(state),
            Self::Float64(v) => (tag, f64_bits(*v)).hash(state),

            Self::String(v) => (tag, v).hash(state),
        }
    }
}

// Bit patterns which agree with `==`: both zeros and all NaNs collapse.
#[inline]
fn f32_bits(v: f32) -> u32 {
    if v.is_nan() {
        f32::NAN.to_bits()
    } else if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

#[inline]
fn f64_bits(v: f64) -> u64 {
    if v.is_nan() {
        f64::NAN.to_bits()
    } else if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}
