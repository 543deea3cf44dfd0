//! Post-pass over the assembled buffer.
//!
//! The encoder appends a separator after every field and element it emits;
//! this single left-to-right pass drops each separator that ends up
//! immediately before a closing `}` or `]`, which is what makes the final
//! text syntactically valid.
//!
//! The pass tracks string-literal state so separators inside quoted text
//! (a `,}` in a field value, say) are never touched: only separators the
//! encoder itself emitted are candidates for removal.

/// Removes every structural `,` that immediately precedes a closing brace
/// or bracket. Commas inside string literals are left alone.
pub(crate) fn strip_trailing_separators(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_string = false;
    let mut escaped = false;

    for ch in raw.chars() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            out.push(ch);
            continue;
        }

        match ch {
            '"' => {
                in_string = true;
                out.push(ch);
            }
            // A structural closer: any trailing comma here was emitted by
            // the encoder, since in-string commas were consumed above.
            '}' | ']' if out.ends_with(',') => {
                out.pop();
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_comma_before_closers() {
        assert_eq!(strip_trailing_separators(r#"{"a":1,}"#), r#"{"a":1}"#);
        assert_eq!(strip_trailing_separators(r#"{"a":[1,2,],}"#), r#"{"a":[1,2]}"#);
    }

    #[test]
    fn test_nested_closers() {
        assert_eq!(
            strip_trailing_separators(r#"{"a":{"b":2,},}"#),
            r#"{"a":{"b":2}}"#
        );
        assert_eq!(strip_trailing_separators(r#"{"a":[],}"#), r#"{"a":[]}"#);
    }

    #[test]
    fn test_interior_commas_survive() {
        assert_eq!(
            strip_trailing_separators(r#"{"a":1,"b":2,}"#),
            r#"{"a":1,"b":2}"#
        );
        assert_eq!(strip_trailing_separators("{}"), "{}");
        assert_eq!(strip_trailing_separators(""), "");
    }

    #[test]
    fn test_commas_inside_strings_survive() {
        assert_eq!(
            strip_trailing_separators(r#"{"a":"x,}y",}"#),
            r#"{"a":"x,}y"}"#
        );
        assert_eq!(
            strip_trailing_separators(r#"{"odd,]name":[1,],}"#),
            r#"{"odd,]name":[1]}"#
        );
    }

    #[test]
    fn test_escaped_quote_does_not_end_string() {
        // The \" stays inside the literal, so the ,} after it is string
        // content, while the final ,} is structural.
        assert_eq!(
            strip_trailing_separators(r#"{"a":"q\",}r",}"#),
            r#"{"a":"q\",}r"}"#
        );
        assert_eq!(
            strip_trailing_separators(r#"{"a":"back\\",}"#),
            r#"{"a":"back\\"}"#
        );
    }
}
