//! Profit and loss cost lines.

use serde::Serialize;

use super::CategoryTotals;
use crate::model::{
    ApparelCostBreakdown, Category, FabricationCostBreakdown, PrintCostBreakdown,
};

/// Fixed line labels of the print section, in report order.
pub const PRINT_LINES: [&str; 5] = ["Material", "Ink", "Equipment", "Operator", "Design"];

/// Fixed line labels of the fabrication section, in report order.
pub const FABRICATION_LINES: [&str; 3] = ["Materials", "Labor", "Components"];

/// Fixed line labels of the apparel section, in report order.
pub const APPAREL_LINES: [&str; 3] = ["Garments", "Print & Screen Setup", "Labor"];

/// One cost line on the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    pub label: &'static str,
    pub amount: f64,
}

/// Cost lines for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PnlSection {
    pub category: Category,
    /// Number of logged items in the category.
    pub items: usize,
    pub lines: Vec<ReportLine>,
    pub total: f64,
}

impl PnlSection {
    fn new(category: Category, items: usize, labels: &[&'static str], amounts: &[f64]) -> Self {
        let lines: Vec<ReportLine> = labels
            .iter()
            .zip(amounts)
            .map(|(&label, &amount)| ReportLine { label, amount })
            .collect();
        let total = lines.iter().map(|l| l.amount).sum();
        Self {
            category,
            items,
            lines,
            total,
        }
    }

    /// Amount on the line labelled `label`.
    pub fn line(&self, label: &str) -> Option<f64> {
        self.lines.iter().find(|l| l.label == label).map(|l| l.amount)
    }
}

/// Cost side of the profit and loss report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitAndLoss {
    pub sections: Vec<PnlSection>,
    pub total_costs: f64,
}

/// Report lines for print totals.
///
/// Lamination is reported with material and cutting with operator time.
pub fn print_section(totals: &CategoryTotals<PrintCostBreakdown>) -> PnlSection {
    let t = &totals.totals;
    PnlSection::new(
        Category::Print,
        totals.count,
        &PRINT_LINES,
        &[
            t.material_cost + t.lamination_cost,
            t.ink_cost,
            t.equipment_cost,
            t.operator_cost + t.cutting_cost,
            t.design_cost,
        ],
    )
}

/// Report lines for fabrication totals.
pub fn fabrication_section(totals: &CategoryTotals<FabricationCostBreakdown>) -> PnlSection {
    let t = &totals.totals;
    PnlSection::new(
        Category::Fabrication,
        totals.count,
        &FABRICATION_LINES,
        &[t.materials_cost, t.labor_cost, t.components_cost],
    )
}

/// Report lines for apparel totals.
pub fn apparel_section(totals: &CategoryTotals<ApparelCostBreakdown>) -> PnlSection {
    let t = &totals.totals;
    PnlSection::new(
        Category::Apparel,
        totals.count,
        &APPAREL_LINES,
        &[
            t.garment_total,
            t.total_print_costs + t.screen_setup_costs,
            t.additional_options_costs,
        ],
    )
}

impl ProfitAndLoss {
    /// Build the report from category totals.
    pub fn from_totals(
        print: &CategoryTotals<PrintCostBreakdown>,
        fabrication: &CategoryTotals<FabricationCostBreakdown>,
        apparel: &CategoryTotals<ApparelCostBreakdown>,
    ) -> Self {
        let sections = vec![
            print_section(print),
            fabrication_section(fabrication),
            apparel_section(apparel),
        ];
        let total_costs = print.total() + fabrication.total() + apparel.total();
        Self {
            sections,
            total_costs,
        }
    }

    /// Section for a category.
    pub fn section(&self, category: Category) -> Option<&PnlSection> {
        self.sections.iter().find(|s| s.category == category)
    }
}
