//! Material catalog snapshot and lookup.

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{EstimateError, Result};
use crate::model::{Material, MaterialKind};
use crate::parser::fields::{lenient_f64, lenient_string, lenient_string_list};

/// Category tag for materials offered on print estimates.
pub const PRINT_CATEGORY: &str = "Print";

/// A catalog material with its usage tags.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub material: Material,
    pub categories: Vec<String>,
}

impl CatalogEntry {
    /// Check if this entry is tagged with `category` (case-insensitive).
    pub fn has_category(&self, category: &str) -> bool {
        let category = category.trim();
        self.categories
            .iter()
            .any(|c| c.trim().eq_ignore_ascii_case(category))
    }
}

/// Catalog row as stored in the materials sheet.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CatalogRecord {
    #[serde(deserialize_with = "lenient_string")]
    name: String,
    #[serde(alias = "kind", deserialize_with = "lenient_string")]
    r#type: String,
    #[serde(deserialize_with = "lenient_f64")]
    width: f64,
    #[serde(alias = "height", alias = "length", deserialize_with = "lenient_f64")]
    height_or_length: f64,
    #[serde(deserialize_with = "lenient_f64")]
    unit_cost: f64,
    #[serde(deserialize_with = "lenient_string")]
    vendor: String,
    #[serde(deserialize_with = "lenient_string_list")]
    categories: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Wrapped { materials: Vec<serde_json::Value> },
    Bare(Vec<serde_json::Value>),
}

/// Read-only snapshot of the material catalog.
#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    entries: Vec<CatalogEntry>,
}

impl MaterialCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material. The name is trimmed.
    pub fn push(&mut self, mut material: Material, categories: &[&str]) {
        material.name = material.name.trim().to_string();
        self.entries.push(CatalogEntry {
            material,
            categories: categories.iter().map(|c| c.to_string()).collect(),
        });
    }

    /// Parse a catalog snapshot.
    ///
    /// Accepts either `{"materials": [...]}` or a bare array of rows. Rows
    /// without a name or with an unknown type are skipped.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|e| EstimateError::InvalidSnapshot {
                message: format!("catalog: {}", e),
            })?;
        let rows = match document {
            CatalogDocument::Wrapped { materials } => materials,
            CatalogDocument::Bare(rows) => rows,
        };

        let mut catalog = Self::new();
        for (idx, row) in rows.into_iter().enumerate() {
            let record: CatalogRecord = match serde_json::from_value(row) {
                Ok(record) => record,
                Err(e) => {
                    warn!("Catalog row {}: skipped ({})", idx + 1, e);
                    continue;
                }
            };
            let name = record.name.trim();
            if name.is_empty() {
                warn!("Catalog row {}: skipped (no name)", idx + 1);
                continue;
            }
            let Some(kind) = MaterialKind::from_label(&record.r#type) else {
                warn!(
                    "Catalog row {}: skipped '{}' (unknown type '{}')",
                    idx + 1,
                    name,
                    record.r#type
                );
                continue;
            };

            let mut material = match kind {
                MaterialKind::Sheet => Material::sheet(
                    name,
                    record.width,
                    record.height_or_length,
                    record.unit_cost,
                ),
                MaterialKind::Roll => Material::roll(
                    name,
                    record.width,
                    record.height_or_length,
                    record.unit_cost,
                ),
            };
            if !record.vendor.trim().is_empty() {
                material.vendor = Some(record.vendor.trim().to_string());
            }
            catalog.entries.push(CatalogEntry {
                material,
                categories: record.categories,
            });
        }

        debug!("Loaded {} catalog material(s)", catalog.len());
        Ok(catalog)
    }

    /// Load a catalog snapshot from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(EstimateError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Resolve a material by exact (case-sensitive) name.
    ///
    /// With a category filter only entries tagged with it are considered.
    /// The first matching entry wins.
    pub fn lookup(&self, name: &str, category: Option<&str>) -> Option<&Material> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .filter(|entry| category.map_or(true, |c| entry.has_category(c)))
            .find(|entry| entry.material.name == name)
            .map(|entry| &entry.material)
    }

    /// Number of materials.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog has no materials.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over catalog entries.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> MaterialCatalog {
        MaterialCatalog::from_json(
            r#"{"materials": [
                {"name": " Banner 13oz ", "type": "Roll", "width": 60, "length": 150, "unitCost": 225, "categories": ["Print"]},
                {"name": "Coroplast 4mm", "type": "Sheet", "width": 48, "height": 96, "unitCost": "18.50", "vendor": "Piedmont", "categories": ["print", "Fabrication"]},
                {"name": "Aluminum Tube", "type": "Sheet", "width": 1, "height": 96, "unitCost": 40, "categories": ["Fabrication"]},
                {"name": "", "type": "Sheet"},
                {"name": "Mystery", "type": "Blob"}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_from_json_skips_bad_rows() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_from_json_bare_array() {
        let catalog =
            MaterialCatalog::from_json(r#"[{"name": "Vinyl", "kind": "ROLL", "width": 54, "length": 50, "unitCost": 100}]"#)
                .unwrap();
        let vinyl = catalog.lookup("Vinyl", None).unwrap();
        assert!(vinyl.is_roll());
        assert_eq!(vinyl.cost_per_linear_foot, 2.0);
    }

    #[test]
    fn test_from_json_not_a_catalog() {
        let result = MaterialCatalog::from_json(r#""hello""#);
        assert!(matches!(result, Err(EstimateError::InvalidSnapshot { .. })));
    }

    #[test]
    fn test_lookup_trims_catalog_names() {
        let catalog = sample_catalog();
        let banner = catalog.lookup("Banner 13oz", Some(PRINT_CATEGORY)).unwrap();
        assert_eq!(banner.name, "Banner 13oz");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = sample_catalog();
        assert!(catalog.lookup("banner 13oz", None).is_none());
    }

    #[test]
    fn test_lookup_category_filter() {
        let catalog = sample_catalog();
        assert!(catalog.lookup("Aluminum Tube", Some(PRINT_CATEGORY)).is_none());
        assert!(catalog.lookup("Aluminum Tube", Some("Fabrication")).is_some());
        let coro = catalog.lookup("Coroplast 4mm", Some(PRINT_CATEGORY)).unwrap();
        assert_eq!(coro.unit_cost, 18.5);
        assert_eq!(coro.vendor.as_deref(), Some("Piedmont"));
    }

    #[test]
    fn test_lookup_first_entry_wins() {
        let mut catalog = MaterialCatalog::new();
        catalog.push(Material::sheet("PVC 3mm", 48.0, 96.0, 30.0), &["Print"]);
        catalog.push(Material::sheet("PVC 3mm", 48.0, 96.0, 99.0), &["Print"]);
        assert_eq!(catalog.lookup("PVC 3mm", None).unwrap().unit_cost, 30.0);
    }

    #[test]
    fn test_lookup_empty_name() {
        let catalog = sample_catalog();
        assert!(catalog.lookup("  ", None).is_none());
    }

    #[test]
    fn test_from_json_loose_categories() {
        let catalog = MaterialCatalog::from_json(
            r#"[
                {"name": "Vinyl", "type": "Roll", "width": 54, "length": 50, "unitCost": 100, "categories": "Print"},
                {"name": "Acrylic", "type": "Sheet", "width": 48, "height": 96, "unitCost": 80, "categories": null}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.lookup("Vinyl", Some(PRINT_CATEGORY)).is_some());
        assert!(catalog.lookup("Acrylic", Some(PRINT_CATEGORY)).is_none());
        assert!(catalog.lookup("Acrylic", None).is_some());
    }

    #[test]
    fn test_from_path_missing() {
        let result = MaterialCatalog::from_path(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(EstimateError::FileNotFound { .. })));
    }
}
