use crate::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;

/// Render a value in the canonical form the store receives: two-space
/// indentation, non-ASCII characters kept literal. Equal inputs always
/// produce byte-identical output.
pub fn canonical_json<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string_pretty(value)?)
}

/// Standard padded base64 of the UTF-8 bytes of the canonical rendering.
pub fn encode_content<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(STANDARD.encode(canonical_json(value)?.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_json_uses_two_space_indent() {
        let text = canonical_json(&json!({"x": 1})).unwrap();
        assert_eq!(text, "{\n  \"x\": 1\n}");
    }

    #[test]
    fn test_canonical_json_empty_object() {
        assert_eq!(canonical_json(&json!({})).unwrap(), "{}");
    }

    #[test]
    fn test_canonical_json_keeps_non_ascii_literal() {
        let text = canonical_json(&json!({"name": "café"})).unwrap();
        assert!(text.contains("café"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn test_canonical_json_is_deterministic() {
        let value = json!({"b": [1, 2, 3], "a": {"nested": true}});
        assert_eq!(
            canonical_json(&value).unwrap(),
            canonical_json(&value).unwrap()
        );
    }

    #[test]
    fn test_encoded_content_decodes_to_canonical_json() {
        let value = json!({"x": 1, "tags": ["a", "b"]});
        let encoded = encode_content(&value).unwrap();

        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(
            String::from_utf8(decoded).unwrap(),
            canonical_json(&value).unwrap()
        );
    }

    #[test]
    fn test_encoding_is_standard_alphabet_with_padding() {
        // "{}" encodes to "e30=" under standard padded base64.
        assert_eq!(encode_content(&json!({})).unwrap(), "e30=");
    }
}
