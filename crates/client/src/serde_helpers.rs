//! Serde helpers for Loggly's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Accept either JSON numbers or strings for identifier fields.
//! - Read lenient integers out of attribute bags.
//!
//! Invariants / assumptions:
//! - Loggly may return ids and counts as `"123"` strings or as `123` numbers.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
}

pub fn opt_string_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(StringOrNumber::String(s)) => Ok(Some(s)),
        Some(StringOrNumber::U64(v)) => Ok(Some(v.to_string())),
        Some(StringOrNumber::I64(v)) => Ok(Some(v.to_string())),
        Some(StringOrNumber::F64(v)) => Ok(Some(v.to_string())),
    }
}

/// Read a non-negative integer from a JSON number or numeric string.
pub fn value_as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "opt_string_from_number_or_string")]
        id: Option<String>,
    }

    #[test]
    fn test_id_from_number_or_string() {
        let h: Holder = serde_json::from_value(json!({"id": 42})).unwrap();
        assert_eq!(h.id.as_deref(), Some("42"));

        let h: Holder = serde_json::from_value(json!({"id": "abc"})).unwrap();
        assert_eq!(h.id.as_deref(), Some("abc"));

        let h: Holder = serde_json::from_value(json!({"id": null})).unwrap();
        assert_eq!(h.id, None);

        let h: Holder = serde_json::from_value(json!({})).unwrap();
        assert_eq!(h.id, None);
    }

    #[test]
    fn test_value_as_u64() {
        assert_eq!(value_as_u64(&json!(10)), Some(10));
        assert_eq!(value_as_u64(&json!("25")), Some(25));
        assert_eq!(value_as_u64(&json!(-1)), None);
        assert_eq!(value_as_u64(&json!("ten")), None);
        assert_eq!(value_as_u64(&json!(null)), None);
    }
}
