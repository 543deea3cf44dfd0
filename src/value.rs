//! The runtime value surface seen by the encoder.
//!
//! A metadata provider hands the encoder a list of [`Field`]s per value.
//! Each field pairs its [`FieldMeta`](crate::FieldMeta) with a
//! [`FieldValue`]: a tagged classification into exactly one of the four
//! buckets the encoder knows how to format (leaf, collection of leaves,
//! collection of objects, nested object). Classification happens once,
//! here, instead of through scattered type checks during formatting.
//!
//! ## Core Types
//!
//! - [`Leaf`]: the closed enumeration of leaf kinds (numeric, boolean,
//!   character, text, enum, and the three date/time kinds)
//! - [`FieldValue`]: a classified, possibly-null field value
//! - [`Field`]: field metadata plus its classified runtime value
//! - [`Exportable`]: the capability a type implements so the encoder can
//!   read its metadata and fields
//!
//! ## Examples
//!
//! ```rust
//! use json_export::{fields, Exportable, Field, FieldValue, Leaf, TypeMeta};
//!
//! struct User {
//!     id: u32,
//!     nickname: Option<String>,
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
//!             "nickname" => FieldValue::opt_leaf(self.nickname.as_deref()),
//!         ]
//!     }
//! }
//!
//! let user = User { id: 7, nickname: None };
//! assert_eq!(json_export::to_string(&user).unwrap(), r#"{"id":7}"#);
//! ```

use crate::meta::{FieldMeta, TypeMeta};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A value with a direct textual representation, requiring no recursive
/// field walk.
///
/// This is a closed set checked by variant, never by type-name comparison.
#[derive(Clone, Debug, PartialEq)]
pub enum Leaf {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Text(String),
    /// An enum constant, emitted unquoted using its name.
    Enum(&'static str),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
}

impl Leaf {
    /// Returns `true` for the three date/time kinds.
    #[inline]
    #[must_use]
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Leaf::Date(_) | Leaf::Time(_) | Leaf::DateTime(_))
    }
}

macro_rules! leaf_from {
    ($($ty:ty => $variant:ident as $target:ty),* $(,)?) => {
        $(
            impl From<$ty> for Leaf {
                fn from(v: $ty) -> Self {
                    Leaf::$variant(v as $target)
                }
            }
        )*
    };
}

leaf_from! {
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    i64 => Int as i64,
    u8 => UInt as u64,
    u16 => UInt as u64,
    u32 => UInt as u64,
    u64 => UInt as u64,
    f32 => Float as f64,
    f64 => Float as f64,
}

impl From<bool> for Leaf {
    fn from(v: bool) -> Self {
        Leaf::Bool(v)
    }
}

impl From<char> for Leaf {
    fn from(v: char) -> Self {
        Leaf::Char(v)
    }
}

impl From<&str> for Leaf {
    fn from(v: &str) -> Self {
        Leaf::Text(v.to_string())
    }
}

impl From<String> for Leaf {
    fn from(v: String) -> Self {
        Leaf::Text(v)
    }
}

impl From<NaiveDate> for Leaf {
    fn from(v: NaiveDate) -> Self {
        Leaf::Date(v)
    }
}

impl From<NaiveTime> for Leaf {
    fn from(v: NaiveTime) -> Self {
        Leaf::Time(v)
    }
}

impl From<NaiveDateTime> for Leaf {
    fn from(v: NaiveDateTime) -> Self {
        Leaf::DateTime(v)
    }
}

/// A field's runtime value, classified into exactly one encoding bucket.
///
/// `None` at the outer level means the field (or the collection reference
/// itself) is null; whether that emits `"name":null` or nothing is decided
/// by the owning type's null-handling policy. `None` *elements* inside a
/// [`FieldValue::LeafList`] always emit `null`, regardless of policy.
pub enum FieldValue<'a> {
    /// A single leaf value.
    Leaf(Option<Leaf>),
    /// An ordered collection of leaf values.
    LeafList(Option<Vec<Option<Leaf>>>),
    /// A collection of exportable objects.
    ObjectList(Option<Vec<Option<&'a dyn Exportable>>>),
    /// A nested exportable object.
    Object(Option<&'a dyn Exportable>),
}

impl<'a> FieldValue<'a> {
    /// Classifies a non-null leaf value.
    pub fn leaf(value: impl Into<Leaf>) -> Self {
        FieldValue::Leaf(Some(value.into()))
    }

    /// Classifies a nullable leaf value.
    pub fn opt_leaf<T: Into<Leaf>>(value: Option<T>) -> Self {
        FieldValue::Leaf(value.map(Into::into))
    }

    /// Classifies a non-null collection of non-null leaves, in iteration
    /// order.
    pub fn leaf_list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Leaf>,
    {
        FieldValue::LeafList(Some(items.into_iter().map(|v| Some(v.into())).collect()))
    }

    /// Classifies a non-null nested object.
    pub fn object(value: &'a dyn Exportable) -> Self {
        FieldValue::Object(Some(value))
    }

    /// Classifies a nullable nested object.
    pub fn opt_object(value: Option<&'a dyn Exportable>) -> Self {
        FieldValue::Object(value)
    }

    /// Classifies a non-null collection of non-null objects, in iteration
    /// order.
    pub fn object_list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a dyn Exportable>,
    {
        FieldValue::ObjectList(Some(items.into_iter().map(Some).collect()))
    }
}

/// A field descriptor paired with its classified runtime value.
pub struct Field<'a> {
    pub meta: FieldMeta,
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    pub fn new(meta: impl Into<FieldMeta>, value: FieldValue<'a>) -> Self {
        Field {
            meta: meta.into(),
            value,
        }
    }
}

/// The metadata-provider capability: a type that can describe itself for
/// export.
///
/// Implementations return the type-level metadata and the declared fields
/// in declaration order, with every field's value already lifted into a
/// [`FieldValue`]. The trait grants the encoder read access to all declared
/// fields regardless of their normal visibility, because the implementation
/// lives alongside the type.
///
/// Neither method may mutate the value; an encode call treats the whole
/// value graph as read-only, so encoding the same unmutated graph twice
/// yields byte-identical output.
pub trait Exportable {
    /// The type-level export metadata.
    fn type_meta(&self) -> TypeMeta;

    /// The declared fields, in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}
