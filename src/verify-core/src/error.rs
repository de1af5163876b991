use std::io;

use thiserror::Error;

use crate::CodingPath;

/// Errors that may occur while decoding or encoding dynamic values.
#[derive(Debug, Error)]
pub enum Error {
    /// The input value matched none of the supported primitive or
    /// container shapes.
    #[error("unsupported value shape at {path}")]
    UnsupportedShape { path: CodingPath },

    /// A value has no JSON representation, most commonly an opaque
    /// value that does not know how to serialize itself.
    #[error("value '{description}' at {path} cannot be encoded")]
    UnsupportedValue {
        description: String,
        path: CodingPath,
    },

    /// A boxed platform number carries a runtime type tag outside of
    /// the supported set.
    #[error("unsupported boxed numeric type '{tag}' at {path}")]
    UnsupportedBoxedNumericType { tag: char, path: CodingPath },

    /// Configured recursion limit was exceeded while decoding.
    #[error("recursion limit exceeded at {path}")]
    RecursionLimit { path: CodingPath },

    /// An I/O error occured while reading input or writing output.
    #[error("{0}")]
    Io(#[from] io::Error),

    /// Malformed JSON input or a failure reported by serde_json.
    #[error("{0}")]
    Json(serde_json::Error),

    /// A failure reported by a serde format other than JSON.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// The position at which the error was raised, if it is known.
    pub fn path(&self) -> Option<&CodingPath> {
        match self {
            Self::UnsupportedShape { path }
            | Self::UnsupportedValue { path, .. }
            | Self::UnsupportedBoxedNumericType { path, .. }
            | Self::RecursionLimit { path } => Some(path),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match value.classify() {
            Category::Io => Self::Io(value.into()),
            _ => Self::Json(value),
        }
    }
}

/// A [`Result`](std::result::Result) specialized to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
