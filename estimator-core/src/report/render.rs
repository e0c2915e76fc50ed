//! Plain-text rendering of reports.

use super::{BillOfMaterials, ProfitAndLoss, Report};

/// Format a quantity: whole numbers without decimals.
fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        format!("{:.2}", quantity)
    }
}

/// Render the cost lines of the profit and loss report.
pub fn render_pnl(pnl: &ProfitAndLoss) -> String {
    let mut lines = vec!["PROFIT & LOSS".to_string()];
    for section in &pnl.sections {
        lines.push(format!("{} ({} items)", section.category, section.items));
        for line in &section.lines {
            lines.push(format!("  {}: {:.2}", line.label, line.amount));
        }
        lines.push(format!("  Total: {:.2}", section.total));
    }
    lines.push(format!("Total costs: {:.2}", pnl.total_costs));
    lines.join("\n")
}

/// Render the bill of materials, one merged item per line.
pub fn render_bom(bom: &BillOfMaterials) -> String {
    let mut lines = vec!["BILL OF MATERIALS".to_string()];
    for section in &bom.sections {
        lines.push(section.category.to_string());
        for item in &section.items {
            let mut parts = vec![
                item.description.clone(),
                format!("{} {}", format_quantity(item.quantity), item.unit_of_measure)
                    .trim_end()
                    .to_string(),
            ];
            if !item.vendor.is_empty() {
                parts.push(item.vendor.clone());
            }
            if !item.status.is_empty() {
                parts.push(item.status.clone());
            }
            lines.push(format!("  {}", parts.join(" | ")));
        }
    }
    lines.join("\n")
}

/// Render the full report.
pub fn render_report(report: &Report) -> String {
    let mut out = render_pnl(&report.profit_and_loss);
    out.push_str("\n\n");
    out.push_str(&render_bom(&report.bill_of_materials));
    if report.skipped > 0 || report.zeroed > 0 {
        out.push_str(&format!(
            "\n\nSkipped entries: {}\nZeroed estimates: {}",
            report.skipped, report.zeroed
        ));
    }
    out
}
