//! Material definition resolved from the catalog.

use serde::{Deserialize, Serialize};

/// How a material is stocked and sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaterialKind {
    /// Flat stock sold by sheet count.
    #[default]
    Sheet,
    /// Continuous stock sold by length.
    Roll,
}

impl MaterialKind {
    /// Parse a catalog type label ("Sheet", "ROLL", ...).
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sheet" => Some(MaterialKind::Sheet),
            "roll" => Some(MaterialKind::Roll),
            _ => None,
        }
    }
}

impl std::fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialKind::Sheet => write!(f, "SHEET"),
            MaterialKind::Roll => write!(f, "ROLL"),
        }
    }
}

/// A stock material with its physical and costing attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// Catalog name (trimmed).
    pub name: String,
    /// Sheet or roll stock.
    pub kind: MaterialKind,
    /// Sheet width, or roll cross-web width (inches).
    pub width: f64,
    /// Sheet height in inches, or sellable roll length in feet.
    pub height_or_length: f64,
    /// Cost of one sheet or one roll.
    pub unit_cost: f64,
    /// Roll cost per linear foot; zero for sheets.
    pub cost_per_linear_foot: f64,
    /// Preferred vendor, if known.
    pub vendor: Option<String>,
}

impl Material {
    /// Create a sheet material.
    pub fn sheet(name: impl Into<String>, width: f64, height: f64, unit_cost: f64) -> Self {
        Self {
            name: name.into(),
            kind: MaterialKind::Sheet,
            width,
            height_or_length: height,
            unit_cost,
            cost_per_linear_foot: 0.0,
            vendor: None,
        }
    }

    /// Create a roll material. `length_feet` is the sellable roll length.
    pub fn roll(name: impl Into<String>, width: f64, length_feet: f64, unit_cost: f64) -> Self {
        let cost_per_linear_foot = if length_feet > 0.0 {
            unit_cost / length_feet
        } else {
            0.0
        };
        Self {
            name: name.into(),
            kind: MaterialKind::Roll,
            width,
            height_or_length: length_feet,
            unit_cost,
            cost_per_linear_foot,
            vendor: None,
        }
    }

    /// Attach a vendor.
    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    /// Check if this is roll stock.
    pub fn is_roll(&self) -> bool {
        self.kind == MaterialKind::Roll
    }

    /// Check if this is sheet stock.
    pub fn is_sheet(&self) -> bool {
        self.kind == MaterialKind::Sheet
    }
}
