//! Error types shared across the crate.
//!
//! [`Error`] is the payload carried by every `Err` of the Result family: a
//! message plus an optional source. The enums below describe the failures the
//! crate itself reports and all convert into [`Error`].
//!
//! # Examples
//!
//! ```rust
//! use tagrail::{ContainerError, Error};
//!
//! let error = Error::from(ContainerError::FalsyValue);
//! assert_eq!(error.message(), "just argument is falsy");
//!
//! let error: Error = "boom".into();
//! assert_eq!(error.to_string(), "boom");
//! ```

use std::fmt;
use std::sync::Arc;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// The error value wrapped by every `Err`.
///
/// Two errors are equal when their messages are equal; sources are not
/// compared.
#[derive(Clone)]
pub struct Error {
    message: String,
    source: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    /// Creates an error carrying `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an error from another error, keeping it as the source.
    ///
    /// ```rust
    /// use std::error::Error as _;
    /// use tagrail::Error;
    ///
    /// let io = std::io::Error::other("disk on fire");
    /// let error = Error::wrap(io);
    /// assert_eq!(error.message(), "disk on fire");
    /// assert!(error.source().is_some());
    /// ```
    #[must_use]
    pub fn wrap<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: source.to_string(),
            source: Some(Arc::new(source)),
        }
    }

    /// Returns the message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Error")
            .field("message", &self.message)
            .field("has_source", &self.source.is_some())
            .finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn std::error::Error + 'static))
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for Error {}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Error", 1)?;
        state.serialize_field("message", &self.message)?;
        state.end()
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

// =============================================================================
// Crate failures
// =============================================================================

/// A constructor rejected its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContainerError {
    /// `some` received a nullish value.
    #[error("some value cannot be undefined nor null")]
    NullishValue,
    /// `just` received a falsy value.
    #[error("just argument is falsy")]
    FalsyValue,
    /// `ok` received an [`Error`].
    #[error("ok value must not be an error")]
    ErrorAsOk,
}

/// A cast between tagged families or runtime types failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CastError {
    /// No constructor is registered under the tag.
    #[error("no constructor registered for tag `{0}`")]
    UnknownTag(String),
    /// The target constructor rejected the payload.
    #[error("constructor `{tag}` rejected the value: {source}")]
    Rejected {
        /// The target tag.
        tag: String,
        /// Why the constructor refused.
        source: ContainerError,
    },
    /// The value being cast does not satisfy its own runtime type.
    #[error("Type to cast cannot be casted because is invalid")]
    InvalidSource {
        /// Name of the source runtime type.
        type_name: String,
    },
    /// The value does not satisfy the target runtime type.
    #[error("Invalid cast operation")]
    InvalidCast {
        /// Name of the source runtime type.
        from: String,
        /// Name of the target runtime type.
        to: String,
    },
}

/// Positional access outside of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// The index is past the end of a linked structure.
    #[error("Index {index} is out of range")]
    OutOfRange {
        /// The requested index.
        index: usize,
    },
    /// No element is stored at the index.
    #[error("Item at position {{{index}}} is undefined")]
    Undefined {
        /// The requested index.
        index: usize,
    },
}

impl From<ContainerError> for Error {
    fn from(error: ContainerError) -> Self {
        Self::wrap(error)
    }
}

impl From<CastError> for Error {
    fn from(error: CastError) -> Self {
        Self::wrap(error)
    }
}

impl From<IndexError> for Error {
    fn from(error: IndexError) -> Self {
        Self::wrap(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error as _;

    #[rstest]
    fn error_equality_ignores_source() {
        let plain = Error::new("Index 3 is out of range");
        let wrapped = Error::from(IndexError::OutOfRange { index: 3 });
        assert_eq!(plain, wrapped);
        assert!(plain.source().is_none());
        assert!(wrapped.source().is_some());
    }

    #[rstest]
    #[case(ContainerError::NullishValue, "some value cannot be undefined nor null")]
    #[case(ContainerError::FalsyValue, "just argument is falsy")]
    #[case(ContainerError::ErrorAsOk, "ok value must not be an error")]
    fn container_error_messages(#[case] error: ContainerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn undefined_index_message_keeps_braces() {
        let error = IndexError::Undefined { index: 4 };
        assert_eq!(error.to_string(), "Item at position {4} is undefined");
    }

    #[rstest]
    fn error_serializes_as_message_object() {
        let value = serde_json::to_value(Error::new("boom")).unwrap();
        assert_eq!(value, serde_json::json!({ "message": "boom" }));
    }
}
