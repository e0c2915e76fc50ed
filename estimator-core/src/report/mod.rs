//! Report aggregation over logged submissions.

mod aggregate;
mod bom;
mod pnl;
mod render;

pub use aggregate::{aggregate, CategoryTotals};
pub use bom::{
    garment_line_item, material_line_item, merge_line_items, BillOfMaterials, BomSection,
    UNIT_EACH, UNIT_LINEAR_FEET, UNIT_SHEETS,
};
pub use pnl::{
    apparel_section, fabrication_section, print_section, PnlSection, ProfitAndLoss, ReportLine,
    APPAREL_LINES, FABRICATION_LINES, PRINT_LINES,
};
pub use render::{render_bom, render_pnl, render_report};

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::catalog::{MaterialCatalog, PRINT_CATEGORY};
use crate::config::PricingConfig;
use crate::estimate::{estimate_apparel_cost_with, estimate_print_from_catalog_with};
use crate::model::{
    ApparelCostBreakdown, ApparelJobRequest, Category, FabricationCostBreakdown, LineItem,
    PrintCostBreakdown, PrintJobRequest,
};
use crate::parser::{decode_entry, LogSnapshot};

/// Totals and line items derived from one log snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub print: CategoryTotals<PrintCostBreakdown>,
    pub fabrication: CategoryTotals<FabricationCostBreakdown>,
    pub apparel: CategoryTotals<ApparelCostBreakdown>,
    pub profit_and_loss: ProfitAndLoss,
    pub bill_of_materials: BillOfMaterials,
    /// Malformed entries that could not be decoded.
    pub skipped: usize,
    /// Decoded entries whose estimate was zeroed.
    pub zeroed: usize,
}

/// Build the report with the default rates.
pub fn build_report(catalog: &MaterialCatalog, log: &LogSnapshot) -> Report {
    build_report_with(&PricingConfig::default(), catalog, log)
}

/// Build the report from read-only catalog and log snapshots.
///
/// Malformed entries are skipped and counted; they never abort the report.
pub fn build_report_with(config: &PricingConfig, catalog: &MaterialCatalog, log: &LogSnapshot) -> Report {
    let mut print = CategoryTotals::default();
    let mut fabrication = CategoryTotals::default();
    let mut apparel = CategoryTotals::default();
    let mut line_items: BTreeMap<Category, Vec<LineItem>> = BTreeMap::new();
    let mut skipped = 0;
    let mut zeroed = 0;

    for (idx, entry) in log.entries(Category::Print).iter().enumerate() {
        let Some(decoded) = decode_entry::<PrintJobRequest>(entry) else {
            warn!("Print entry {}: malformed, skipped", idx + 1);
            skipped += 1;
            continue;
        };
        let request = &decoded.request;

        let estimate = estimate_print_from_catalog_with(config, catalog, request);
        if !estimate.is_priced() {
            zeroed += 1;
        }
        print.add(estimate.breakdown);

        let items = line_items.entry(Category::Print).or_default();
        match (&estimate.layout, catalog.lookup(&request.material_name, Some(PRINT_CATEGORY))) {
            (Some(layout), Some(material)) if estimate.is_priced() => {
                items.push(material_line_item(config, material, layout));
            }
            _ => debug!("Print entry {}: no material consumed", idx + 1),
        }
        items.extend(decoded.line_items);
    }

    for (idx, entry) in log.entries(Category::Fabrication).iter().enumerate() {
        let Some(decoded) = decode_entry::<FabricationCostBreakdown>(entry) else {
            warn!("Fabrication entry {}: malformed, skipped", idx + 1);
            skipped += 1;
            continue;
        };
        fabrication.add(decoded.request.clamped());
        line_items
            .entry(Category::Fabrication)
            .or_default()
            .extend(decoded.line_items);
    }

    for (idx, entry) in log.entries(Category::Apparel).iter().enumerate() {
        let Some(decoded) = decode_entry::<ApparelJobRequest>(entry) else {
            warn!("Apparel entry {}: malformed, skipped", idx + 1);
            skipped += 1;
            continue;
        };
        let estimate = estimate_apparel_cost_with(config, &decoded.request);
        if !estimate.is_priced() {
            zeroed += 1;
        }
        apparel.add(estimate.breakdown);

        let items = line_items.entry(Category::Apparel).or_default();
        if estimate.is_priced() {
            items.extend(garment_line_item(&decoded.request));
        }
        items.extend(decoded.line_items);
    }

    if skipped > 0 {
        warn!("Skipped {} malformed log entr(ies)", skipped);
    }
    info!(
        "Aggregated {} print, {} fabrication, {} apparel entr(ies)",
        print.count, fabrication.count, apparel.count
    );

    Report {
        profit_and_loss: ProfitAndLoss::from_totals(&print, &fabrication, &apparel),
        bill_of_materials: BillOfMaterials::from_items(line_items),
        print,
        fabrication,
        apparel,
        skipped,
        zeroed,
    }
}
