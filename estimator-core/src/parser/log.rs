//! Submission log snapshot.
//!
//! A log snapshot maps each job category to the submissions logged for it.
//! Entries are opaque until decoded: they may be JSON objects, or strings
//! holding a JSON object as stored in a log cell.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{EstimateError, Result};
use crate::model::{Category, LineItem};

/// A decoded log entry: the typed request plus any explicit line items.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedEntry<T> {
    pub request: T,
    pub line_items: Vec<LineItem>,
}

/// Read-only snapshot of the submission logs.
#[derive(Debug, Clone, Default)]
pub struct LogSnapshot {
    entries: BTreeMap<Category, Vec<Value>>,
}

impl LogSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw entry to a category.
    pub fn push(&mut self, category: Category, entry: Value) {
        self.entries.entry(category).or_default().push(entry);
    }

    /// Parse a log snapshot: `{"print": [...], "apparel": [...], "fabrication": [...]}`.
    ///
    /// Unknown category keys are ignored. A known key whose value is not an
    /// array makes the whole snapshot invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(json)?;
        let Value::Object(map) = root else {
            return Err(EstimateError::InvalidSnapshot {
                message: "log snapshot must be a JSON object".to_string(),
            });
        };

        let mut snapshot = Self::new();
        for (key, value) in map {
            let Some(category) = Category::from_key(&key) else {
                debug!("Ignoring unknown log category '{}'", key);
                continue;
            };
            let Value::Array(items) = value else {
                return Err(EstimateError::InvalidSnapshot {
                    message: format!("log category '{}' must be an array", key),
                });
            };
            snapshot.entries.entry(category).or_default().extend(items);
        }
        Ok(snapshot)
    }

    /// Load a log snapshot from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(EstimateError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Raw entries for a category.
    pub fn entries(&self, category: Category) -> &[Value] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of raw entries.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Check if the snapshot has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolve an entry to its JSON object, unwrapping string-encoded entries.
fn entry_object(entry: &Value) -> Option<Map<String, Value>> {
    match entry {
        Value::Object(map) => Some(map.clone()),
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(Value::Object(map)) => Some(map),
            _ => None,
        },
        _ => None,
    }
}

/// Decode one log entry. Returns `None` for malformed entries.
pub fn decode_entry<T: DeserializeOwned>(entry: &Value) -> Option<DecodedEntry<T>> {
    let mut object = entry_object(entry)?;

    let line_items = match object.remove("lineItems") {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<LineItem>(item) {
                Ok(line) => Some(line),
                Err(e) => {
                    warn!("Ignoring malformed line item: {}", e);
                    None
                }
            })
            .collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            warn!("Ignoring lineItems that is not an array: {}", other);
            Vec::new()
        }
    };

    match serde_json::from_value::<T>(Value::Object(object)) {
        Ok(request) => Some(DecodedEntry {
            request,
            line_items,
        }),
        Err(e) => {
            debug!("Malformed log entry: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ApparelJobRequest, PrintJobRequest};
    use serde_json::json;

    // ==================== LogSnapshot tests ====================

    #[test]
    fn test_from_json_categories() {
        let log = LogSnapshot::from_json(
            r#"{"Print": [{"quantity": 1}], "apparel": [{}, {}], "signage": [{}]}"#,
        )
        .unwrap();
        assert_eq!(log.entries(Category::Print).len(), 1);
        assert_eq!(log.entries(Category::Apparel).len(), 2);
        assert!(log.entries(Category::Fabrication).is_empty());
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_from_json_not_object() {
        let result = LogSnapshot::from_json("[1, 2, 3]");
        assert!(matches!(result, Err(EstimateError::InvalidSnapshot { .. })));
    }

    #[test]
    fn test_from_json_category_not_array() {
        let result = LogSnapshot::from_json(r#"{"print": {"quantity": 1}}"#);
        assert!(matches!(result, Err(EstimateError::InvalidSnapshot { .. })));
    }

    #[test]
    fn test_from_json_invalid_json() {
        let result = LogSnapshot::from_json("{not json");
        assert!(matches!(result, Err(EstimateError::Json(_))));
    }

    // ==================== decode_entry tests ====================

    #[test]
    fn test_decode_object_entry() {
        let entry = json!({"quantity": 5, "artWidth": 12, "artHeight": 18, "materialName": "Vinyl"});
        let decoded = decode_entry::<PrintJobRequest>(&entry).unwrap();
        assert_eq!(decoded.request.quantity, 5.0);
        assert_eq!(decoded.request.material_name, "Vinyl");
        assert!(decoded.line_items.is_empty());
    }

    #[test]
    fn test_decode_string_encoded_entry() {
        let entry = json!(r#"{"quantity": "24", "garmentUnitCost": 5}"#);
        let decoded = decode_entry::<ApparelJobRequest>(&entry).unwrap();
        assert_eq!(decoded.request.quantity, 24.0);
    }

    #[test]
    fn test_decode_malformed_entries() {
        assert!(decode_entry::<PrintJobRequest>(&json!(42)).is_none());
        assert!(decode_entry::<PrintJobRequest>(&json!(null)).is_none());
        assert!(decode_entry::<PrintJobRequest>(&json!("{broken")).is_none());
        assert!(decode_entry::<PrintJobRequest>(&json!("[1]")).is_none());
        assert!(decode_entry::<ApparelJobRequest>(&json!({"additionalLocations": "front"})).is_none());
    }

    #[test]
    fn test_decode_line_items() {
        let entry = json!({
            "lineItems": [
                {"description": "Rivets", "quantity": "200", "unitOfMeasure": "Each", "vendor": "Fastenal"},
                "garbage"
            ]
        });
        let decoded = decode_entry::<crate::model::FabricationCostBreakdown>(&entry).unwrap();
        assert_eq!(decoded.line_items.len(), 1);
        assert_eq!(decoded.line_items[0].quantity, 200.0);
        assert_eq!(decoded.line_items[0].vendor, "Fastenal");
    }
}
