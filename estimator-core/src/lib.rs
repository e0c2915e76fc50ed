//! estimator-core - Core library for production cost estimates.
//!
//! This library nests artwork on sheet and roll stock, prices print and
//! apparel jobs, and folds logged jobs into profit and loss and bill of
//! materials totals. Catalog and log data are passed in as read-only
//! snapshots; nothing here talks to the spreadsheet host.
//!
//! # Example
//!
//! ```
//! use estimator_core::{estimate_print_cost, Material, PrintJobRequest};
//!
//! let banner = Material::roll("Banner 13oz", 60.0, 150.0, 225.0);
//! let request = PrintJobRequest::new("Banner 13oz", 10.0, 10.0, 10.0);
//! let estimate = estimate_print_cost(&banner, &request);
//! assert!(estimate.is_priced());
//! println!("{:.2}", estimate.total());
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod estimate;
pub mod layout;
pub mod model;
pub mod parser;
pub mod report;
pub mod validation;

// Re-exports for convenience
pub use catalog::{CatalogEntry, MaterialCatalog, PRINT_CATEGORY};
pub use config::{PricingConfig, TimeUnit};
pub use error::{ErrorCode, EstimateError, Result};
pub use estimate::{
    estimate_apparel_cost, estimate_apparel_cost_with, estimate_print_cost,
    estimate_print_cost_with, estimate_print_from_catalog, estimate_print_from_catalog_with,
    ApparelEstimate, Estimate, PrintEstimate,
};
pub use layout::{compute_layout, Layout, Orientation};
pub use model::{
    ApparelCostBreakdown, ApparelJobRequest, Category, CostBreakdown, FabricationCostBreakdown,
    LineItem, Material, MaterialKind, PrintCostBreakdown, PrintJobRequest,
};
pub use parser::LogSnapshot;
pub use report::{
    aggregate, build_report, build_report_with, render_report, BillOfMaterials, CategoryTotals,
    ProfitAndLoss, Report,
};
pub use validation::ValidationResult;

/// Build a report from catalog and log snapshot files.
///
/// Both files are read once up front, so the whole report sees one
/// consistent snapshot.
pub fn report_from_files(
    catalog_path: &std::path::Path,
    log_path: &std::path::Path,
    config: &PricingConfig,
) -> Result<Report> {
    let catalog = MaterialCatalog::from_path(catalog_path)?;
    let log = LogSnapshot::from_path(log_path)?;
    Ok(build_report_with(config, &catalog, &log))
}
