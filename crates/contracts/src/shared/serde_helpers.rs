//! Small deserializers for repository quirks.
//!
//! Version stamps and counters come back either as JSON numbers or as
//! strings depending on how the node was written, so both are accepted.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Accepts `"3"`, `3` or `null`.
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_string))
}

/// Accepts `"true"`/`"false"` as well as real booleans.
pub fn bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "opt_string_or_number")]
        version: Option<String>,
        #[serde(default, deserialize_with = "bool_or_string")]
        enabled: bool,
    }

    #[test]
    fn test_number_and_string_versions() {
        let p: Sample = serde_json::from_str(r#"{"version": 3, "enabled": "true"}"#).unwrap();
        assert_eq!(p.version.as_deref(), Some("3"));
        assert!(p.enabled);

        let p: Sample = serde_json::from_str(r#"{"version": "2.1", "enabled": false}"#).unwrap();
        assert_eq!(p.version.as_deref(), Some("2.1"));
        assert!(!p.enabled);
    }

    #[test]
    fn test_missing_fields() {
        let p: Sample = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(p.version, None);
        assert!(!p.enabled);
    }
}
