//! Persisted Form
//!
//! The list is stored as a JSON array of strings.

use crate::error::StoreResult;

/// Serialize item texts to the stored JSON form
pub fn encode_items<S: AsRef<str>>(texts: &[S]) -> StoreResult<String> {
    let texts: Vec<&str> = texts.iter().map(AsRef::as_ref).collect();
    Ok(serde_json::to_string(&texts)?)
}

/// Parse the stored JSON form back into item texts
pub fn decode_items(raw: &str) -> StoreResult<Vec<String>> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    #[test]
    fn test_encode_is_json_array() {
        let raw = encode_items(&["a", "b \"quoted\""]).expect("Encode failed");
        assert_eq!(raw, r#"["a","b \"quoted\""]"#);
    }

    #[test]
    fn test_encode_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(encode_items(&empty).expect("Encode failed"), "[]");
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(matches!(decode_items("not json"), Err(StoreError::Codec(_))));
        assert!(matches!(decode_items(r#"{"a":1}"#), Err(StoreError::Codec(_))));
        assert!(matches!(decode_items("[1, 2]"), Err(StoreError::Codec(_))));
    }

    #[test]
    fn test_round_trip() {
        let texts = vec!["c".to_string(), "ünïcödé 🎈".to_string(), String::new()];
        let raw = encode_items(&texts).expect("Encode failed");
        assert_eq!(decode_items(&raw).expect("Decode failed"), texts);
    }
}
