use std::fmt::{self, Write};

use super::DynamicValue;

impl DynamicValue {
    // Renders the value inside of a container or debug label, where
    // strings need quoting to stay distinguishable from other scalars.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(v) => write!(f, "{v:?}"),
            _ => self.fmt_plain(f),
        }
    }

    fn fmt_plain(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{v}"),

            Self::Int8(v) => write!(f, "{v}"),
            Self::Int16(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),

            Self::UInt(v) => write!(f, "{v}"),
            Self::UInt8(v) => write!(f, "{v}"),
            Self::UInt16(v) => write!(f, "{v}"),
            Self::UInt32(v) => write!(f, "{v}"),
            Self::UInt64(v) => write!(f, "{v}"),

            // Debug keeps the fractional part, so `1.0` does not look
            // like an integer.
            Self::Float32(v) => write!(f, "{v:?}"),
            Self::Float64(v) => write!(f, "{v:?}"),

            Self::String(v) => f.write_str(v),

            Self::Array(arr) => {
                f.write_char('[')?;
                for (idx, child) in arr.iter().enumerate() {
                    if idx != 0 {
                        f.write_str(", ")?;
                    }
                    child.fmt_nested(f)?;
                }
                f.write_char(']')
            }

            Self::Object(obj) => {
                f.write_char('{')?;
                for (idx, (key, child)) in obj.iter().enumerate() {
                    if idx != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: ")?;
                    child.fmt_nested(f)?;
                }
                f.write_char('}')
            }

            Self::Opaque(v) => write!(f, "{v:?}"),
        }
    }
}

/// Renders the value in a human-readable form.
///
/// `Null` renders as `null` and strings render without quotes, while
/// containers render as compact JSON-like text.
impl fmt::Display for DynamicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_plain(f)
    }
}

/// Renders the value as `DynamicValue(<inner>)`, quoting strings.
impl fmt::Debug for DynamicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DynamicValue(")?;
        self.fmt_nested(f)?;
        f.write_char(')')
    }
}
