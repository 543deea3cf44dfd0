//! # json_export
//!
//! Metadata-driven JSON export: convert structured values into JSON text
//! using per-type and per-field declarations instead of hand-written
//! serialization code per type.
//!
//! ## How it works
//!
//! A type opts in by implementing [`Exportable`], the metadata-provider
//! capability: it returns its [`TypeMeta`] (the exported marker, the
//! null-handling policy, the construction kind) and its declared fields in
//! declaration order, each paired with per-field markers (rename, ignore,
//! date-format) and a classified runtime value. The engine then:
//!
//! 1. validates the type's eligibility ([`validate`]),
//! 2. recursively walks the fields, appending JSON fragments to a buffer,
//!    re-validating every nested type and collection element it meets,
//! 3. runs a finalizer pass that drops separators left before closing
//!    brackets.
//!
//! ## Quick Start
//!
//! ```rust
//! use json_export::{fields, to_string, Exportable, Field, FieldMeta, FieldValue, TypeMeta};
//!
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! impl Exportable for User {
//!     fn type_meta(&self) -> TypeMeta {
//!         TypeMeta::exported("User")
//!     }
//!
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         fields![
//!             "id" => FieldValue::leaf(self.id),
//!             "name" => FieldValue::leaf(self.name.as_str()),
//!             FieldMeta::new("active").renamed("is_active") => FieldValue::leaf(self.active),
//!         ]
//!     }
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string(), active: true };
//! let json = to_string(&user).unwrap();
//! assert_eq!(json, r#"{"id":123,"name":"Alice","is_active":true}"#);
//! ```
//!
//! ## Null handling
//!
//! Each exported type declares exactly one policy: with
//! [`NullHandling::Include`] a null field emits `"name":null`, with the
//! default [`NullHandling::Exclude`] it is omitted entirely. The policy
//! covers only the declaring type's own fields; nested types bring their
//! own. Nulls *inside* a leaf collection are always emitted.
//!
//! ## Output shape
//!
//! One JSON object literal per root value, fields in declaration order, no
//! whitespace. Text, characters, and pattern-formatted dates are
//! double-quoted (with JSON escaping); numbers, booleans, and enum
//! constants are unquoted. One quirk is contractual: elements of an object
//! collection are emitted as `"TypeName":{...}` pairs inside the array,
//! repeating the key for same-typed elements. Consumers expecting plain
//! JSON arrays of objects should be aware of this shape.
//!
//! Numbers use their natural textual form, so non-finite floats render as
//! the bare tokens `NaN`, `inf`, and `-inf` — strict JSON parsers reject
//! these. Callers who need parseable output for such values should map
//! them to a null leaf (or a quoted text leaf) in their [`Exportable`]
//! implementation before encoding.
//!
//! ## Non-goals
//!
//! No decoding, no schema validation, no streaming output, no
//! pretty-printing, and no cycle detection: a self-referential value graph
//! recurses without bound, so callers must supply acyclic graphs. The
//! engine holds no state between calls and never mutates the input; it is
//! safe to call from multiple threads as long as each call's value graph is
//! not concurrently mutated.

mod date;
pub mod error;
mod finalize;
#[macro_use]
pub mod macros;
pub mod meta;
pub mod validate;
pub mod value;
mod writer;

pub use error::{Error, Result};
pub use meta::{Construction, FieldMeta, NullHandling, TypeMeta};
pub use validate::validate;
pub use value::{Exportable, Field, FieldValue, Leaf};

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Encodes a value as a JSON string.
///
/// Runs the full pipeline: root eligibility check, recursive encode,
/// finalizer pass.
///
/// # Examples
///
/// ```rust
/// use json_export::{fields, to_string, Exportable, Field, FieldValue, TypeMeta};
///
/// struct Point { x: i32, y: i32 }
///
/// impl Exportable for Point {
///     fn type_meta(&self) -> TypeMeta {
///         TypeMeta::exported("Point")
///     }
///     fn fields(&self) -> Vec<Field<'_>> {
///         fields![
///             "x" => FieldValue::leaf(self.x),
///             "y" => FieldValue::leaf(self.y),
///         ]
///     }
/// }
///
/// let json = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(json, r#"{"x":1,"y":2}"#);
/// ```
///
/// # Errors
///
/// Returns [`Error::NotExported`] or [`Error::Construction`] when any type
/// met during the walk fails validation, and [`Error::DatePattern`] when a
/// date-format marker cannot be applied.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(value: &dyn Exportable) -> Result<String> {
    validate(&value.type_meta())?;
    writer::format_object(value)
}

/// Encodes a value and writes the UTF-8 bytes to a sink.
///
/// The value is encoded in full before anything touches the sink, so a
/// validation or encoding failure leaves no partial output behind. The sink
/// is taken by value, flushed after the write, and dropped (closed) on
/// every exit path.
///
/// # Errors
///
/// Returns the same errors as [`to_string`], plus [`Error::Io`] when the
/// write or flush fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: io::Write>(mut writer: W, value: &dyn Exportable) -> Result<()> {
    let json = to_string(value)?;
    writer
        .write_all(json.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    writer.flush().map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Encodes a value and writes it to a file at `path`.
///
/// The value is encoded first; only then is the file created (truncating
/// any existing content), so a failed encode never leaves an empty or
/// half-written file behind. The handle is scoped to this call and released
/// on every exit path.
///
/// # Errors
///
/// Returns the same errors as [`to_string`], plus [`Error::Io`] when the
/// file cannot be created or written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_file<P: AsRef<Path>>(path: P, value: &dyn Exportable) -> Result<()> {
    let json = to_string(value)?;
    let mut file = File::create(path).map_err(|e| Error::io(&e.to_string()))?;
    file.write_all(json.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    file.flush().map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
