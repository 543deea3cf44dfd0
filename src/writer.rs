//! The recursive encoding engine.
//!
//! Walks a value's fields in declaration order, consults the attached
//! metadata, and appends formatted fragments to a growing buffer. Every
//! emitted field and element is followed by a `,`; the finalizer pass
//! reconciles that with valid syntax afterwards.
//!
//! Recursion happens only through nested objects and object collections,
//! and terminates at leaves. No cycle detection is performed: callers must
//! supply acyclic value graphs.

use crate::date::format_pattern;
use crate::error::Result;
use crate::finalize::strip_trailing_separators;
use crate::meta::NullHandling;
use crate::validate::validate;
use crate::value::{Exportable, FieldValue, Leaf};

/// Encodes a single root value as a JSON object literal.
///
/// The root type must already have passed validation.
pub(crate) fn format_object(value: &dyn Exportable) -> Result<String> {
    let mut out = String::with_capacity(256);
    out.push('{');
    write_fields(&mut out, value)?;
    out.push('}');
    Ok(strip_trailing_separators(&out))
}

fn write_fields(out: &mut String, value: &dyn Exportable) -> Result<()> {
    let policy = value.type_meta().null_handling;

    for field in value.fields() {
        // Unconditional exclusions, checked before any policy logic.
        if field.meta.synthetic || field.meta.is_static || field.meta.ignored {
            continue;
        }

        let name = field.meta.json_name();
        match &field.value {
            FieldValue::Leaf(leaf) => {
                write_leaf_field(out, name, leaf.as_ref(), field.meta.date_format, policy)?;
            }
            FieldValue::LeafList(items) => {
                write_leaf_list(out, name, items.as_deref(), field.meta.date_format, policy)?;
            }
            FieldValue::ObjectList(items) => {
                write_object_list(out, name, items.as_deref(), policy)?;
            }
            FieldValue::Object(object) => {
                write_nested(out, name, *object, policy)?;
            }
        }
    }

    Ok(())
}

fn write_leaf_field(
    out: &mut String,
    name: &str,
    leaf: Option<&Leaf>,
    pattern: Option<&str>,
    policy: NullHandling,
) -> Result<()> {
    match leaf {
        None => {
            if policy.is_included() {
                write_null_field(out, name);
            }
        }
        Some(leaf) => {
            write_escaped(out, name);
            out.push(':');
            write_leaf(out, leaf, pattern)?;
            out.push(',');
        }
    }
    Ok(())
}

fn write_leaf_list(
    out: &mut String,
    name: &str,
    items: Option<&[Option<Leaf>]>,
    pattern: Option<&str>,
    policy: NullHandling,
) -> Result<()> {
    let Some(items) = items else {
        if policy.is_included() {
            write_null_field(out, name);
        }
        return Ok(());
    };

    write_escaped(out, name);
    out.push_str(":[");
    for item in items {
        match item {
            // Element nulls are always included, whatever the policy says.
            None => out.push_str("null"),
            Some(leaf) => write_leaf(out, leaf, pattern)?,
        }
        out.push(',');
    }
    out.push_str("],");
    Ok(())
}

fn write_object_list(
    out: &mut String,
    name: &str,
    items: Option<&[Option<&dyn Exportable>]>,
    policy: NullHandling,
) -> Result<()> {
    let Some(items) = items else {
        if policy.is_included() {
            write_null_field(out, name);
        }
        return Ok(());
    };

    write_escaped(out, name);
    out.push_str(":[");
    for item in items {
        match item {
            None => {
                if policy.is_included() {
                    out.push_str("null,");
                }
            }
            Some(element) => {
                let meta = element.type_meta();
                validate(&meta)?;
                // Each element is tagged by its simple type name as a
                // literal key. Repeated keys for same-typed elements are
                // the contractual output shape, not an accident here.
                write_escaped(out, meta.name);
                out.push_str(":{");
                write_fields(out, *element)?;
                out.push_str("},");
            }
        }
    }
    out.push_str("],");
    Ok(())
}

fn write_nested(
    out: &mut String,
    name: &str,
    object: Option<&dyn Exportable>,
    policy: NullHandling,
) -> Result<()> {
    match object {
        None => {
            if policy.is_included() {
                write_null_field(out, name);
            }
        }
        Some(object) => {
            validate(&object.type_meta())?;
            write_escaped(out, name);
            out.push_str(":{");
            // The nested type's own declared policy applies to its fields,
            // not the parent's.
            write_fields(out, object)?;
            out.push_str("},");
        }
    }
    Ok(())
}

fn write_null_field(out: &mut String, name: &str) {
    write_escaped(out, name);
    out.push_str(":null,");
}

fn write_leaf(out: &mut String, leaf: &Leaf, pattern: Option<&str>) -> Result<()> {
    if let Some(pattern) = pattern {
        if leaf.is_temporal() {
            let formatted = format_pattern(leaf, pattern)?;
            write_escaped(out, &formatted);
            return Ok(());
        }
    }

    match leaf {
        Leaf::Bool(v) => out.push_str(if *v { "true" } else { "false" }),
        Leaf::Int(v) => out.push_str(&v.to_string()),
        Leaf::UInt(v) => out.push_str(&v.to_string()),
        Leaf::Float(v) => out.push_str(&v.to_string()),
        Leaf::Char(v) => write_escaped(out, &v.to_string()),
        Leaf::Text(v) => write_escaped(out, v),
        Leaf::Enum(name) => out.push_str(name),
        Leaf::Date(v) => out.push_str(&v.to_string()),
        Leaf::Time(v) => out.push_str(&v.to_string()),
        Leaf::DateTime(v) => out.push_str(&v.to_string()),
    }
    Ok(())
}

fn write_escaped(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escaping() {
        let mut out = String::new();
        write_escaped(&mut out, "a\"b\\c\nd\u{0001}");
        assert_eq!(out, r#""a\"b\\c\nd\u0001""#);
    }

    #[test]
    fn test_leaf_quoting_rules() {
        let mut out = String::new();
        write_leaf(&mut out, &Leaf::Text("hi".to_string()), None).unwrap();
        out.push(' ');
        write_leaf(&mut out, &Leaf::Int(-5), None).unwrap();
        out.push(' ');
        write_leaf(&mut out, &Leaf::Bool(false), None).unwrap();
        out.push(' ');
        write_leaf(&mut out, &Leaf::Enum("RED"), None).unwrap();
        out.push(' ');
        write_leaf(&mut out, &Leaf::Char('q'), None).unwrap();
        assert_eq!(out, r#""hi" -5 false RED "q""#);
    }

    #[test]
    fn test_non_finite_floats_render_bare_tokens() {
        let mut out = String::new();
        write_leaf(&mut out, &Leaf::Float(f64::NAN), None).unwrap();
        out.push(' ');
        write_leaf(&mut out, &Leaf::Float(f64::INFINITY), None).unwrap();
        out.push(' ');
        write_leaf(&mut out, &Leaf::Float(f64::NEG_INFINITY), None).unwrap();
        assert_eq!(out, "NaN inf -inf");
    }

    #[test]
    fn test_pattern_ignored_for_non_temporal_leaves() {
        let mut out = String::new();
        write_leaf(&mut out, &Leaf::Int(7), Some("yyyy")).unwrap();
        assert_eq!(out, "7");
    }
}
