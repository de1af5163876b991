//! Dynamic JSON values for carrying schema-less payloads through
//! otherwise statically typed serde models.
//!
//! Credential metadata, invitation attributes and similar property
//! bags have no fixed shape. [`DynamicValue`] decodes any single JSON
//! value without knowing its shape up front, encodes it back while
//! keeping track of native numeric widths, and offers structural
//! equality, hashing and human-readable rendering over the whole
//! value space.
//!
//! ```
//! use verify_core::{dynamic, DynamicValue};
//!
//! let value: DynamicValue = verify_core::from_str(r#"{"name": "Alice", "age": 31}"#).unwrap();
//! assert_eq!(value, dynamic!({"name": "Alice", "age": 31}));
//! assert_eq!(value.get("name").and_then(DynamicValue::as_str), Some("Alice"));
//! ```

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod boxed;
pub use boxed::*;

mod error;
pub use error::*;

mod macros;

mod path;
pub use path::*;

pub mod serde;
pub use self::serde::{
    from_json_value, from_reader, from_slice, from_str, to_json_value, to_string,
    to_string_pretty, to_vec, to_writer, Decoder,
};

pub mod value;
pub use value::{Array, DynamicValue, Object, Opaque, Properties};
