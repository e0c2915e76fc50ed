//! Bill of materials line item.

use serde::{Deserialize, Serialize};

use crate::parser::fields::{lenient_f64, lenient_string};

/// One consumed good in a bill of materials.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineItem {
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub quantity: f64,
    #[serde(deserialize_with = "lenient_string")]
    pub unit_of_measure: String,
    #[serde(deserialize_with = "lenient_string")]
    pub vendor: String,
    #[serde(deserialize_with = "lenient_string")]
    pub status: String,
}

impl LineItem {
    /// Create a line item with no vendor or status.
    pub fn new(description: impl Into<String>, quantity: f64, unit_of_measure: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_of_measure: unit_of_measure.into(),
            ..Default::default()
        }
    }

    /// Set the vendor.
    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = vendor.into();
        self
    }

    /// Set the status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}
