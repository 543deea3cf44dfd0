//! Per-type and per-field export metadata.
//!
//! This module holds the declarations the encoder consults while walking a
//! value: the exported marker, the null-handling policy, and per-field
//! configuration (rename, ignore, date-format). It contains no encoding
//! logic of its own.
//!
//! How the metadata is *declared* is up to the caller: hand-written
//! [`Exportable`](crate::Exportable) implementations, generated code, or
//! registration tables all work, because the encoder only ever sees these
//! read-only descriptions.
//!
//! ## Examples
//!
//! ```rust
//! use json_export::{Construction, FieldMeta, NullHandling, TypeMeta};
//!
//! let ty = TypeMeta::exported("User").with_null_handling(NullHandling::Include);
//! assert!(ty.exported);
//! assert!(ty.null_handling.is_included());
//!
//! let field = FieldMeta::new("active").renamed("boolean value");
//! assert_eq!(field.json_name(), "boolean value");
//!
//! let record = TypeMeta::exported("Point").with_construction(Construction::Record);
//! assert_eq!(record.construction, Construction::Record);
//! ```

/// Per-type choice of how null-valued fields are emitted.
///
/// The policy governs only the declaring type's own direct fields. Nested
/// types apply their own declared policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NullHandling {
    /// Null fields are emitted as `"name":null`.
    Include,
    /// Null fields are omitted entirely. This is the default.
    #[default]
    Exclude,
}

impl NullHandling {
    /// Returns `true` if null-valued fields are included in the output.
    #[inline]
    #[must_use]
    pub const fn is_included(&self) -> bool {
        matches!(self, NullHandling::Include)
    }
}

/// How instances of a type come into existence, as far as the eligibility
/// check is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Construction {
    /// The type has a reachable zero-argument constructor.
    #[default]
    ZeroArg,
    /// The type is a fixed-field immutable record whose fields are all set
    /// at construction.
    Record,
    /// Neither of the above. Exporting such a type is a hard error.
    Opaque,
}

/// Type-level export metadata: the exported marker, the simple type name,
/// the null-handling policy, and the construction kind.
///
/// The `name` doubles as the literal object key when instances appear as
/// elements of an exported collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeMeta {
    pub name: &'static str,
    pub exported: bool,
    pub null_handling: NullHandling,
    pub construction: Construction,
}

impl TypeMeta {
    /// Creates metadata for a type carrying the exported marker, with the
    /// default policy (nulls excluded) and a zero-argument constructor.
    #[must_use]
    pub const fn exported(name: &'static str) -> Self {
        TypeMeta {
            name,
            exported: true,
            null_handling: NullHandling::Exclude,
            construction: Construction::ZeroArg,
        }
    }

    /// Creates metadata for a type that does NOT carry the exported marker.
    ///
    /// Any attempt to encode a value of such a type fails with
    /// [`Error::NotExported`](crate::Error::NotExported).
    #[must_use]
    pub const fn unexported(name: &'static str) -> Self {
        TypeMeta {
            name,
            exported: false,
            null_handling: NullHandling::Exclude,
            construction: Construction::ZeroArg,
        }
    }

    /// Sets the null-handling policy for this type's direct fields.
    #[must_use]
    pub const fn with_null_handling(mut self, null_handling: NullHandling) -> Self {
        self.null_handling = null_handling;
        self
    }

    /// Sets the construction kind consulted by the eligibility check.
    #[must_use]
    pub const fn with_construction(mut self, construction: Construction) -> Self {
        self.construction = construction;
        self
    }
}

/// Per-field export metadata: declared name plus the optional rename,
/// ignore, and date-format markers.
///
/// Synthetic and static fields are never encoded, unconditionally; the
/// flags exist so a metadata provider can report every declared field and
/// leave the exclusion to the encoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldMeta {
    pub name: &'static str,
    pub rename: Option<&'static str>,
    pub ignored: bool,
    pub date_format: Option<&'static str>,
    pub synthetic: bool,
    pub is_static: bool,
}

impl FieldMeta {
    /// Creates metadata for a field with no markers attached.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        FieldMeta {
            name,
            rename: None,
            ignored: false,
            date_format: None,
            synthetic: false,
            is_static: false,
        }
    }

    /// Sets the rename marker: the emitted property name becomes `name`
    /// instead of the declared field name.
    #[must_use]
    pub const fn renamed(mut self, name: &'static str) -> Self {
        self.rename = Some(name);
        self
    }

    /// Marks the field as ignored. Ignored fields are skipped before any
    /// policy logic runs.
    #[must_use]
    pub const fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    /// Attaches a date-format pattern. Only date/time leaves honor it.
    #[must_use]
    pub const fn date_format(mut self, pattern: &'static str) -> Self {
        self.date_format = Some(pattern);
        self
    }

    /// Marks the field as compiler-synthesized.
    #[must_use]
    pub const fn synthetic(mut self) -> Self {
        self.synthetic = true;
        self
    }

    /// Marks the field as static.
    #[must_use]
    pub const fn static_field(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Resolves the emitted property name: the rename marker's value if
    /// present, else the declared name.
    #[inline]
    #[must_use]
    pub fn json_name(&self) -> &'static str {
        self.rename.unwrap_or(self.name)
    }
}

impl From<&'static str> for FieldMeta {
    fn from(name: &'static str) -> Self {
        FieldMeta::new(name)
    }
}
