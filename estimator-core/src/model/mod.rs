//! Data model types for estimates and reports.

mod apparel_job;
mod breakdown;
mod category;
mod fabrication;
mod line_item;
mod material;
mod print_job;

pub use apparel_job::{
    AdditionalOptions, ApparelCostBreakdown, ApparelJobRequest, ColorChange, DesignLabor,
    PrintLocation,
};
pub use breakdown::CostBreakdown;
pub use category::Category;
pub use fabrication::FabricationCostBreakdown;
pub use line_item::LineItem;
pub use material::{Material, MaterialKind};
pub use print_job::{PrintCostBreakdown, PrintJobRequest};
