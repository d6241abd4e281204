//! Error types for the sequence utilities.
//!
//! Almost every operation in this crate is total: merging, encoding,
//! decoding and deleting accept any input. Errors only surface from the
//! few places where the caller asked for a checked variant or handed over
//! a value of the wrong shape:
//!
//! - **Invalid arguments**: e.g. an odd-length pair list given to
//!   [`ValueMap::build`](crate::ValueMap::build)
//! - **Undefined ordering**: a reference sort met a key that the reference
//!   order does not contain and [`MissingKey::Error`](crate::MissingKey) was requested
//! - **Malformed boundaries**: [`try_decode`](crate::boundary::try_decode) found
//!   an unmatched marker
//! - **Unsupported types**: [`to_value`](crate::to_value) cannot represent the input
//!
//! ## Examples
//!
//! ```rust
//! use seqmerge::{seq, Error, ValueMap, Value};
//!
//! let result = ValueMap::build(&Value::Array(seq!["do", "it", "now"]));
//! assert!(matches!(result, Err(Error::InvalidArgument(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An argument had the wrong structural shape
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A sort key is absent from the reference order
    #[error("Undefined ordering: key {key} is not part of the reference order")]
    UndefinedOrdering { key: String },

    /// A boundary marker has no partner
    #[error("Malformed boundaries: {reason} marker {index}")]
    MalformedBoundaries { index: usize, reason: String },

    /// Unsupported type for value conversion
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid argument error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmerge::Error;
    ///
    /// let err = Error::invalid_argument("odd number of arguments for map");
    /// assert!(err.to_string().contains("odd number"));
    /// ```
    pub fn invalid_argument<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidArgument(msg.to_string())
    }

    /// Creates an undefined ordering error for a key missing from a reference order.
    pub fn undefined_ordering<K: fmt::Debug>(key: &K) -> Self {
        Error::UndefinedOrdering {
            key: format!("{:?}", key),
        }
    }

    /// Creates a malformed boundaries error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmerge::Error;
    ///
    /// let err = Error::malformed_boundaries(3, "unclosed");
    /// assert_eq!(err.to_string(), "Malformed boundaries: unclosed marker 3");
    /// ```
    pub fn malformed_boundaries(index: usize, reason: &str) -> Self {
        Error::MalformedBoundaries {
            index,
            reason: reason.to_string(),
        }
    }

    /// Creates an unsupported type error for types that cannot become a [`Value`](crate::Value).
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
