//! The eligibility check run before any type is encoded.
//!
//! A type may be encoded only if it carries the exported marker AND is
//! either default-constructible or a fixed-field record. The check runs for
//! the root value's type, for each non-null nested field, and for each
//! non-null element of an object collection. It is a pure function of the
//! metadata; failures abort the whole encode call.

use crate::error::{Error, Result};
use crate::meta::{Construction, TypeMeta};

/// Checks whether a type is eligible for encoding.
///
/// # Errors
///
/// Returns [`Error::NotExported`] when the exported marker is absent, and
/// [`Error::Construction`] when the type is opaque (neither a record nor
/// constructible without arguments). The marker is checked first.
///
/// # Examples
///
/// ```rust
/// use json_export::{validate, Construction, Error, TypeMeta};
///
/// assert!(validate(&TypeMeta::exported("User")).is_ok());
///
/// let err = validate(&TypeMeta::unexported("Secret")).unwrap_err();
/// assert!(matches!(err, Error::NotExported("Secret")));
///
/// let opaque = TypeMeta::exported("Handle").with_construction(Construction::Opaque);
/// assert!(matches!(validate(&opaque), Err(Error::Construction("Handle"))));
/// ```
pub fn validate(meta: &TypeMeta) -> Result<()> {
    if !meta.exported {
        return Err(Error::NotExported(meta.name));
    }

    match meta.construction {
        Construction::ZeroArg | Construction::Record => Ok(()),
        Construction::Opaque => Err(Error::Construction(meta.name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exported_types_pass() {
        assert!(validate(&TypeMeta::exported("T")).is_ok());
        let record = TypeMeta::exported("R").with_construction(Construction::Record);
        assert!(validate(&record).is_ok());
    }

    #[test]
    fn test_missing_marker_fails() {
        let err = validate(&TypeMeta::unexported("T")).unwrap_err();
        assert!(matches!(err, Error::NotExported("T")));
    }

    #[test]
    fn test_opaque_construction_fails() {
        let meta = TypeMeta::exported("T").with_construction(Construction::Opaque);
        let err = validate(&meta).unwrap_err();
        assert!(matches!(err, Error::Construction("T")));
    }

    #[test]
    fn test_marker_checked_before_construction() {
        // An unexported opaque type reports the missing marker, not the
        // missing constructor.
        let meta = TypeMeta::unexported("T").with_construction(Construction::Opaque);
        assert!(matches!(validate(&meta), Err(Error::NotExported("T"))));
    }
}
