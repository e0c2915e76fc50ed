//! Request validation ahead of costing.

use crate::config::float_cmp::{approx_zero, is_positive};
use crate::model::{ApparelJobRequest, Material, PrintJobRequest};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }

    /// All errors joined into one message.
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// Validate a print request against its resolved material.
pub fn validate_print_request(request: &PrintJobRequest, material: &Material) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if !is_positive(request.quantity) {
        result.add_error(format!(
            "Quantity must be positive (got {})",
            request.quantity
        ));
    } else if !approx_zero(request.quantity.fract()) {
        result.add_warning(format!(
            "Quantity {} is not a whole number",
            request.quantity
        ));
    }

    if !is_positive(request.art_width) || !is_positive(request.art_height) {
        result.add_error(format!(
            "Artwork dimensions must be positive (got {} x {})",
            request.art_width, request.art_height
        ));
    }

    result.merge(validate_material(material));
    result
}

/// Validate catalog attributes that costing depends on.
pub fn validate_material(material: &Material) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if !is_positive(material.width) || !is_positive(material.height_or_length) {
        result.add_error(format!(
            "Material '{}': Invalid dimensions ({} x {})",
            material.name, material.width, material.height_or_length
        ));
    }

    if !is_positive(material.unit_cost) {
        result.add_warning(format!(
            "Material '{}': Missing or zero unit cost",
            material.name
        ));
    }

    result
}

/// Validate an apparel request.
pub fn validate_apparel_request(request: &ApparelJobRequest) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if !is_positive(request.quantity) {
        result.add_error(format!(
            "Quantity must be positive (got {})",
            request.quantity
        ));
    }

    if !is_positive(request.garment_unit_cost) {
        result.add_warning("Missing or zero garment unit cost");
    }

    if !is_positive(request.total_colors()) {
        result.add_warning("No print colors specified");
    }

    let options = &request.additional_options;
    if options.color_change.enabled && !is_positive(options.color_change.quantity) {
        result.add_warning("Color change enabled with no quantity");
    }
    if options.design_labor.enabled && !is_positive(options.design_labor.quantity) {
        result.add_warning("Design labor enabled with no time");
    }

    result
}
