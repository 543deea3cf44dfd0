//! Property-based tests over generated field contents.
//!
//! The duplicate-key object-collection shape is deliberately not checked
//! here (it is not plain JSON); these properties stick to outputs that
//! ordinary JSON parsers accept and verify escaping, numeric rendering,
//! and idempotence across a wide range of inputs.

use json_export::{fields, to_string, Exportable, Field, FieldValue, TypeMeta};
use proptest::prelude::*;

struct Doc {
    text: String,
    num: i64,
    flag: bool,
}

impl Exportable for Doc {
    fn type_meta(&self) -> TypeMeta {
        TypeMeta::exported("Doc")
    }

    fn fields(&self) -> Vec<Field<'_>> {
        fields![
            "text" => FieldValue::leaf(self.text.as_str()),
            "num" => FieldValue::leaf(self.num),
            "flag" => FieldValue::leaf(self.flag),
        ]
    }
}

struct Numbers {
    values: Vec<i64>,
}

impl Exportable for Numbers {
    fn type_meta(&self) -> TypeMeta {
        TypeMeta::exported("Numbers")
    }

    fn fields(&self) -> Vec<Field<'_>> {
        fields!["values" => FieldValue::leaf_list(self.values.iter().copied())]
    }
}

proptest! {
    #[test]
    fn prop_string_escaping_parses_back(text in ".*", num in any::<i64>(), flag in any::<bool>()) {
        let doc = Doc { text: text.clone(), num, flag };
        let json = to_string(&doc).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed["text"].as_str(), Some(text.as_str()));
        prop_assert_eq!(parsed["num"].as_i64(), Some(num));
        prop_assert_eq!(parsed["flag"].as_bool(), Some(flag));
    }

    #[test]
    fn prop_encoding_is_idempotent(text in ".*", num in any::<i64>(), flag in any::<bool>()) {
        let doc = Doc { text, num, flag };
        prop_assert_eq!(to_string(&doc).unwrap(), to_string(&doc).unwrap());
    }

    #[test]
    fn prop_leaf_lists_preserve_values(values in prop::collection::vec(any::<i64>(), 0..20)) {
        let json = to_string(&Numbers { values: values.clone() }).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let back: Vec<i64> = parsed["values"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_i64().unwrap())
            .collect();
        prop_assert_eq!(back, values);
    }
}
