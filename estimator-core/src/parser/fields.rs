//! Lenient field decoders for logged submissions.
//!
//! Logged form submissions are loosely typed: numbers arrive as strings,
//! checkboxes as "Yes", and blank cells as null. These decoders never fail
//! on a scalar; anything unusable becomes the field's zero value.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::config::TimeUnit;

/// Read a number from a JSON value. Non-numeric values are 0.
pub fn number_from_value(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Read a flag from a JSON value.
pub fn bool_from_value(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => matches!(
            s.trim().to_lowercase().as_str(),
            "true" | "yes" | "on" | "y" | "1"
        ),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}

/// Read a string from a JSON value. Numbers are rendered, null is empty.
pub fn string_from_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// `deserialize_with` adapter for numeric fields.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(number_from_value).unwrap_or(0.0))
}

/// `deserialize_with` adapter for flag fields.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().is_some_and(bool_from_value))
}

/// `deserialize_with` adapter for text fields.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(string_from_value).unwrap_or_default())
}

/// `deserialize_with` adapter for optional text fields. Blank is `None`.
pub fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = lenient_string(deserializer)?;
    let trimmed = s.trim();
    Ok(if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    })
}

/// `deserialize_with` adapter for nested groups and lists. Null is the default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `deserialize_with` adapter for tag lists.
///
/// Accepts an array or a single value; blank tags are dropped.
pub fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items,
        Some(value) => vec![value],
        None => Vec::new(),
    };
    Ok(values
        .iter()
        .map(string_from_value)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

/// `deserialize_with` adapter for time unit labels.
pub fn lenient_time_unit<'de, D>(deserializer: D) -> Result<TimeUnit, D::Error>
where
    D: Deserializer<'de>,
{
    let s = lenient_string(deserializer)?;
    Ok(TimeUnit::from_label(&s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ==================== number_from_value tests ====================

    #[test]
    fn test_number_from_number() {
        assert_eq!(number_from_value(&json!(12.5)), 12.5);
        assert_eq!(number_from_value(&json!(3)), 3.0);
    }

    #[test]
    fn test_number_from_numeric_string() {
        assert_eq!(number_from_value(&json!(" 24 ")), 24.0);
    }

    #[test]
    fn test_number_from_garbage() {
        assert_eq!(number_from_value(&json!("twelve")), 0.0);
        assert_eq!(number_from_value(&json!(null)), 0.0);
        assert_eq!(number_from_value(&json!([1, 2])), 0.0);
        assert_eq!(number_from_value(&json!("NaN")), 0.0);
    }

    // ==================== bool_from_value tests ====================

    #[test]
    fn test_bool_from_value() {
        assert!(bool_from_value(&json!(true)));
        assert!(bool_from_value(&json!("Yes")));
        assert!(bool_from_value(&json!("on")));
        assert!(!bool_from_value(&json!("No")));
        assert!(!bool_from_value(&json!(null)));
        assert!(bool_from_value(&json!(1)));
    }

    // ==================== string_from_value tests ====================

    #[test]
    fn test_string_from_value() {
        assert_eq!(string_from_value(&json!("Vinyl")), "Vinyl");
        assert_eq!(string_from_value(&json!(42)), "42");
        assert_eq!(string_from_value(&json!(null)), "");
    }

    // ==================== adapter tests ====================

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Row {
        #[serde(deserialize_with = "null_as_default")]
        sizes: Vec<f64>,
        #[serde(deserialize_with = "lenient_string_list")]
        tags: Vec<String>,
    }

    #[test]
    fn test_null_as_default() {
        let row: Row = serde_json::from_value(json!({"sizes": null})).unwrap();
        assert!(row.sizes.is_empty());
        let row: Row = serde_json::from_value(json!({"sizes": [1, 2.5]})).unwrap();
        assert_eq!(row.sizes, vec![1.0, 2.5]);
    }

    #[test]
    fn test_lenient_string_list() {
        let row: Row = serde_json::from_value(json!({"tags": "Print"})).unwrap();
        assert_eq!(row.tags, vec!["Print".to_string()]);
        let row: Row = serde_json::from_value(json!({"tags": ["Print", " ", null, "Fabrication "]})).unwrap();
        assert_eq!(row.tags, vec!["Print".to_string(), "Fabrication".to_string()]);
        let row: Row = serde_json::from_value(json!({"tags": null})).unwrap();
        assert!(row.tags.is_empty());
    }
}
