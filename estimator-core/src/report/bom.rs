//! Bill of materials quantities and line item merging.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::config::float_cmp::non_negative;
use crate::config::PricingConfig;
use crate::layout::Layout;
use crate::model::{ApparelJobRequest, Category, LineItem, Material};

/// Unit of measure for sheet stock.
pub const UNIT_SHEETS: &str = "Sheets";

/// Unit of measure for roll stock.
pub const UNIT_LINEAR_FEET: &str = "Linear Feet";

/// Unit of measure for counted goods.
pub const UNIT_EACH: &str = "Each";

/// Material consumed by a priced print job, from the layout it was priced on.
///
/// Sheets are whole sheets; rolls are the nested length plus the roll
/// buffer, rounded up to whole feet.
pub fn material_line_item(config: &PricingConfig, material: &Material, layout: &Layout) -> LineItem {
    let (quantity, unit) = match layout {
        Layout::Sheet(sheet) => (sheet.sheets_needed as f64, UNIT_SHEETS),
        Layout::Roll(roll) => ((roll.linear_feet + config.roll_buffer_feet).ceil(), UNIT_LINEAR_FEET),
    };

    let mut item = LineItem::new(material.name.clone(), quantity, unit);
    if let Some(vendor) = &material.vendor {
        item.vendor = vendor.clone();
    }
    item
}

/// Garments consumed by an apparel job, if the garment is named.
pub fn garment_line_item(request: &ApparelJobRequest) -> Option<LineItem> {
    let garment = request.garment.as_deref()?;
    Some(LineItem::new(
        garment,
        non_negative(request.quantity),
        UNIT_EACH,
    ))
}

/// Merge line items with identical descriptions by summing quantities.
///
/// Order of first appearance is kept. Unit, vendor and status come from
/// the first occurrence. Items without a description are dropped.
pub fn merge_line_items<I>(items: I) -> Vec<LineItem>
where
    I: IntoIterator<Item = LineItem>,
{
    let mut merged: Vec<LineItem> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for mut item in items {
        if item.description.trim().is_empty() {
            continue;
        }
        item.quantity = non_negative(item.quantity);
        match index.get(&item.description) {
            Some(&pos) => merged[pos].quantity += item.quantity,
            None => {
                index.insert(item.description.clone(), merged.len());
                merged.push(item);
            }
        }
    }

    merged
}

/// Merged line items for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BomSection {
    pub category: Category,
    pub items: Vec<LineItem>,
}

/// Bill of materials across categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BillOfMaterials {
    pub sections: Vec<BomSection>,
}

impl BillOfMaterials {
    /// Merge raw line items per category. Empty categories are omitted.
    pub fn from_items(items: BTreeMap<Category, Vec<LineItem>>) -> Self {
        let sections = items
            .into_iter()
            .map(|(category, items)| BomSection {
                category,
                items: merge_line_items(items),
            })
            .filter(|section| !section.items.is_empty())
            .collect();
        Self { sections }
    }

    /// Section for a category.
    pub fn section(&self, category: Category) -> Option<&BomSection> {
        self.sections.iter().find(|s| s.category == category)
    }

    /// Find a merged line item by category and description.
    pub fn find(&self, category: Category, description: &str) -> Option<&LineItem> {
        self.section(category)?
            .items
            .iter()
            .find(|item| item.description == description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;
    use crate::model::PrintJobRequest;
    use pretty_assertions::assert_eq;

    // ==================== material_line_item tests ====================

    fn layout_for(material: &Material, request: &PrintJobRequest) -> Layout {
        compute_layout(
            material,
            request.art_width,
            request.art_height,
            request.quantity,
            &PricingConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_sheet_line_item() {
        let material = Material::sheet("Coroplast 4mm", 48.0, 96.0, 18.0).with_vendor("Piedmont");
        let request = PrintJobRequest::new("Coroplast 4mm", 40.0, 12.0, 12.0);
        let layout = layout_for(&material, &request);
        let item = material_line_item(&PricingConfig::default(), &material, &layout);
        assert_eq!(
            item,
            LineItem::new("Coroplast 4mm", 2.0, UNIT_SHEETS).with_vendor("Piedmont")
        );
    }

    #[test]
    fn test_roll_line_item_rounds_up_with_buffer() {
        let material = Material::roll("Banner 13oz", 60.0, 150.0, 225.0);
        let request = PrintJobRequest::new("Banner 13oz", 10.0, 10.0, 10.0);
        let layout = layout_for(&material, &request);
        let item = material_line_item(&PricingConfig::default(), &material, &layout);
        // 1.73 ft nested + 2.5 ft buffer
        assert_eq!(item.quantity, 5.0);
        assert_eq!(item.unit_of_measure, UNIT_LINEAR_FEET);
    }

    #[test]
    fn test_garment_line_item() {
        let mut request = ApparelJobRequest::new(24.0, 5.0, 2.0, 1.0);
        assert!(garment_line_item(&request).is_none());
        request.garment = Some("Gildan 5000 Black".into());
        let item = garment_line_item(&request).unwrap();
        assert_eq!(item.quantity, 24.0);
        assert_eq!(item.unit_of_measure, UNIT_EACH);
    }

    // ==================== merge_line_items tests ====================

    #[test]
    fn test_merge_sums_identical_descriptions() {
        let merged = merge_line_items(vec![
            LineItem::new("Rivets", 100.0, "Each").with_vendor("Fastenal"),
            LineItem::new("Angle Iron", 4.0, "Sticks"),
            LineItem::new("Rivets", 50.0, "Box").with_vendor("Grainger"),
        ]);
        assert_eq!(
            merged,
            vec![
                LineItem::new("Rivets", 150.0, "Each").with_vendor("Fastenal"),
                LineItem::new("Angle Iron", 4.0, "Sticks"),
            ]
        );
    }

    #[test]
    fn test_merge_is_exact_match() {
        let merged = merge_line_items(vec![
            LineItem::new("Rivets", 1.0, "Each"),
            LineItem::new("rivets", 1.0, "Each"),
            LineItem::new("Rivets ", 1.0, "Each"),
        ]);
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_merge_drops_blank_descriptions() {
        let merged = merge_line_items(vec![LineItem::new("  ", 3.0, "Each")]);
        assert!(merged.is_empty());
    }

    // ==================== BillOfMaterials tests ====================

    #[test]
    fn test_from_items_merges_within_category_only() {
        let mut items = BTreeMap::new();
        items.insert(Category::Print, vec![LineItem::new("Vinyl", 5.0, UNIT_LINEAR_FEET)]);
        items.insert(
            Category::Fabrication,
            vec![
                LineItem::new("Vinyl", 2.0, UNIT_LINEAR_FEET),
                LineItem::new("Vinyl", 3.0, UNIT_LINEAR_FEET),
            ],
        );
        items.insert(Category::Apparel, Vec::new());

        let bom = BillOfMaterials::from_items(items);
        assert_eq!(bom.sections.len(), 2);
        assert_eq!(bom.find(Category::Print, "Vinyl").map(|i| i.quantity), Some(5.0));
        assert_eq!(bom.find(Category::Fabrication, "Vinyl").map(|i| i.quantity), Some(5.0));
        assert!(bom.section(Category::Apparel).is_none());
    }
}
