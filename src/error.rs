//! Error types for JSON export.
//!
//! ## Error Categories
//!
//! - **Eligibility errors**: the type of a value encountered during the walk
//!   does not carry the exported marker
//! - **Construction errors**: an exported type is neither default-constructible
//!   nor a record
//! - **I/O errors**: writing to a stream or file failed
//! - **Date pattern errors**: a date-format pattern could not be applied
//!
//! Errors always abort the whole encode call: there is no partial-result mode,
//! and the first error encountered in depth-first field-declaration order is
//! the one surfaced to the caller.
//!
//! ## Examples
//!
//! ```rust
//! use json_export::{to_string, Error, Exportable, Field, TypeMeta};
//!
//! struct Hidden;
//!
//! impl Exportable for Hidden {
//!     fn type_meta(&self) -> TypeMeta {
//!         TypeMeta::unexported("Hidden")
//!     }
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         Vec::new()
//!     }
//! }
//!
//! let err = to_string(&Hidden).unwrap_err();
//! assert!(matches!(err, Error::NotExported("Hidden")));
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while exporting a value.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The type lacks the exported marker.
    #[error("the type `{0}` you want to write is not exported")]
    NotExported(&'static str),

    /// The type is exported but is neither a record nor constructible
    /// without arguments.
    #[error("there is no public constructor with no parameters for type `{0}`")]
    Construction(&'static str),

    /// IO error while writing to a stream or file.
    #[error("IO error: {0}")]
    Io(String),

    /// A date-format pattern was invalid or inapplicable to the value.
    #[error("date pattern error: {0}")]
    DatePattern(String),
}

impl Error {
    /// Creates an I/O error for stream/file writing failures.
    ///
    /// The message is captured as a string so the error stays [`Clone`].
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    pub(crate) fn date_pattern(msg: impl Into<String>) -> Self {
        Error::DatePattern(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::NotExported("Secret");
        assert_eq!(
            err.to_string(),
            "the type `Secret` you want to write is not exported"
        );

        let err = Error::Construction("NoCtor");
        assert_eq!(
            err.to_string(),
            "there is no public constructor with no parameters for type `NoCtor`"
        );

        let err = Error::io("disk full");
        assert_eq!(err.to_string(), "IO error: disk full");
    }
}
