//! Cost estimators for print and apparel jobs.
//!
//! Estimators never fail: a request that cannot be priced yields an
//! all-zero breakdown with the reason recorded in [`Estimate::failure`].

mod apparel;
mod print;

pub use apparel::{estimate_apparel_cost, estimate_apparel_cost_with};
pub use print::{
    estimate_print_cost, estimate_print_cost_with, estimate_print_from_catalog,
    estimate_print_from_catalog_with, print_metrics, PrintMetrics,
};

use serde::{Serialize, Serializer};
use tracing::{error, warn};

use crate::error::EstimateError;
use crate::layout::Layout;
use crate::model::{ApparelCostBreakdown, CostBreakdown, PrintCostBreakdown};

/// Result of pricing one job.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate<B> {
    pub breakdown: B,
    /// Nesting result, for jobs priced on stock material.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    /// Why the breakdown is zeroed, if it is.
    #[serde(serialize_with = "serialize_failure")]
    pub failure: Option<EstimateError>,
    /// Non-fatal notes about the request.
    pub warnings: Vec<String>,
}

/// Estimate of a print job.
pub type PrintEstimate = Estimate<PrintCostBreakdown>;

/// Estimate of an apparel job.
pub type ApparelEstimate = Estimate<ApparelCostBreakdown>;

impl<B: CostBreakdown> Estimate<B> {
    /// A priced estimate.
    pub fn priced(breakdown: B, layout: Option<Layout>, warnings: Vec<String>) -> Self {
        Self {
            breakdown,
            layout,
            failure: None,
            warnings,
        }
    }

    /// A zeroed estimate for a request that could not be priced.
    pub fn zeroed(failure: EstimateError, warnings: Vec<String>) -> Self {
        if failure.is_soft() {
            warn!("Estimate zeroed: {}", failure);
        } else {
            error!("Estimate zeroed: {}", failure);
        }
        Self {
            breakdown: B::default(),
            layout: None,
            failure: Some(failure),
            warnings,
        }
    }

    /// Check if the request was priced.
    pub fn is_priced(&self) -> bool {
        self.failure.is_none()
    }

    /// Total cost of the job.
    pub fn total(&self) -> f64 {
        self.breakdown.total()
    }
}

fn serialize_failure<S>(failure: &Option<EstimateError>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    failure
        .as_ref()
        .map(|e| e.to_string())
        .serialize(serializer)
}
