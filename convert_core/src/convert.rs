//! # Conversion Engine
//!
//! Converts values between two unit ids of the same dimension by routing
//! through the dimension's base unit:
//!
//! ```text
//! value ──to_base──▶ base value ──from_base──▶ result
//! ```
//!
//! One factor per unit replaces a full unit-to-unit factor matrix.
//!
//! ## Failure Contracts
//!
//! | Operation              | Unknown / cross-dimension ids        |
//! |------------------------|--------------------------------------|
//! | [`convert`]            | `Err(IncompatibleOrUnknownUnits)`    |
//! | [`are_units_compatible`] | `false`                            |
//! | [`unit_dimension`]     | `None`                               |
//! | [`relative_scale`]     | `0.0`                                |
//! | [`conversion_formula`] | `"Unknown conversion"`               |
//!
//! `convert` succeeds exactly when `are_units_compatible` is true.
//!
//! ## Example
//!
//! ```rust
//! use convert_core::convert::{convert, conversion_formula, relative_scale};
//!
//! let feet = convert(1.0, "meter", "foot").unwrap();
//! assert!((feet - 3.28084).abs() < 1e-4);
//!
//! assert!(convert(5.0, "liter", "meter").is_err());
//! assert_eq!(relative_scale("liter", "meter"), 0.0);
//! assert_eq!(conversion_formula("kilometer", "meter"), "Multiply by 1000");
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::errors::{ConvertError, ConvertResult};
use crate::format::format_number;
use crate::registry::{UnitRegistry, REGISTRY};
use crate::units::{Dimension, Unit};

/// Sentinel returned by [`conversion_formula`] for an unusable pair
pub const UNKNOWN_CONVERSION: &str = "Unknown conversion";

/// A single conversion to perform.
///
/// Built per user action and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Quantity in the source unit
    pub value: f64,
    /// Source unit id
    pub from_unit_id: String,
    /// Target unit id
    pub to_unit_id: String,
}

impl ConversionRequest {
    pub fn new(value: f64, from_unit_id: impl Into<String>, to_unit_id: impl Into<String>) -> Self {
        ConversionRequest {
            value,
            from_unit_id: from_unit_id.into(),
            to_unit_id: to_unit_id.into(),
        }
    }

    /// Same request with source and target swapped
    pub fn swapped(&self) -> Self {
        ConversionRequest {
            value: self.value,
            from_unit_id: self.to_unit_id.clone(),
            to_unit_id: self.from_unit_id.clone(),
        }
    }

    /// Run the request against the global registry
    pub fn execute(&self) -> ConvertResult<f64> {
        convert(self.value, &self.from_unit_id, &self.to_unit_id)
    }
}

impl UnitRegistry {
    /// Resolve both ids within one dimension.
    ///
    /// Returns `None` if either id is unknown or the ids belong to different
    /// dimensions.
    pub fn resolve_pair(&self, from_unit_id: &str, to_unit_id: &str) -> Option<(&Unit, &Unit)> {
        let from = self.get(from_unit_id)?;
        let to = self.get(to_unit_id)?;
        (from.dimension == to.dimension).then_some((from, to))
    }

    /// Convert `value` from one unit to another.
    ///
    /// Converting a unit to itself returns `value` unchanged. No rounding or
    /// clamping is applied; negative values pass through.
    pub fn convert(&self, value: f64, from_unit_id: &str, to_unit_id: &str) -> ConvertResult<f64> {
        let (from, to) = self
            .resolve_pair(from_unit_id, to_unit_id)
            .ok_or_else(|| ConvertError::incompatible(from_unit_id, to_unit_id))?;

        if from.id == to.id {
            return Ok(value);
        }

        let result = to.from_base(from.to_base(value));
        trace!(value, from = from.id, to = to.id, result, "converted");
        Ok(result)
    }

    /// True iff both ids are known and share a dimension
    pub fn are_units_compatible(&self, from_unit_id: &str, to_unit_id: &str) -> bool {
        self.resolve_pair(from_unit_id, to_unit_id).is_some()
    }

    /// `convert(1, from, to)`, or `0.0` when the pair cannot be converted
    pub fn relative_scale(&self, from_unit_id: &str, to_unit_id: &str) -> f64 {
        self.convert(1.0, from_unit_id, to_unit_id).unwrap_or_else(|e| {
            debug!(error = %e, "relative scale unavailable");
            0.0
        })
    }

    /// Describe the conversion as scalar steps relative to the base unit.
    ///
    /// - from the base unit: `"Divide by K_to"`
    /// - into the base unit: `"Multiply by K_from"`
    /// - otherwise: `"Multiply by K_from then divide by K_to"`
    ///
    /// where `K = to_base(1)`. An unusable pair yields [`UNKNOWN_CONVERSION`].
    pub fn conversion_formula(&self, from_unit_id: &str, to_unit_id: &str) -> String {
        let Some((from, to)) = self.resolve_pair(from_unit_id, to_unit_id) else {
            debug!(from = from_unit_id, to = to_unit_id, "formula unavailable");
            return UNKNOWN_CONVERSION.to_string();
        };

        let from_factor = format_number(from.to_base(1.0));
        let to_factor = format_number(to.to_base(1.0));

        match (from.is_base(), to.is_base()) {
            (true, false) => format!("Divide by {}", to_factor),
            (false, true) => format!("Multiply by {}", from_factor),
            _ => format!("Multiply by {} then divide by {}", from_factor, to_factor),
        }
    }
}

/// Convert `value` between two unit ids of the same dimension.
///
/// Fails with `IncompatibleOrUnknownUnits` when either id is unknown or the
/// ids span different dimensions.
pub fn convert(value: f64, from_unit_id: &str, to_unit_id: &str) -> ConvertResult<f64> {
    REGISTRY.convert(value, from_unit_id, to_unit_id)
}

/// True iff [`convert`] would succeed for this pair
pub fn are_units_compatible(from_unit_id: &str, to_unit_id: &str) -> bool {
    REGISTRY.are_units_compatible(from_unit_id, to_unit_id)
}

/// Dimension of a unit id, `None` when unknown
pub fn unit_dimension(unit_id: &str) -> Option<Dimension> {
    REGISTRY.dimension_of(unit_id)
}

/// Size of one `from` unit expressed in `to` units; `0.0` if not convertible.
///
/// Unlike [`convert`] this never fails, so rendering code can call it
/// without handling errors.
pub fn relative_scale(from_unit_id: &str, to_unit_id: &str) -> f64 {
    REGISTRY.relative_scale(from_unit_id, to_unit_id)
}

/// Human-readable formula; `"Unknown conversion"` if not convertible
pub fn conversion_formula(from_unit_id: &str, to_unit_id: &str) -> String {
    REGISTRY.conversion_formula(from_unit_id, to_unit_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {} within {} of {}",
            actual,
            tol,
            expected
        );
    }

    #[test]
    fn test_base_unit_centrality() {
        assert_eq!(convert(7.25, "meter", "meter").unwrap(), 7.25);
        assert_eq!(convert(1.0, "kilometer", "meter").unwrap(), 1000.0);
        assert_eq!(convert(1.0, "meter", "kilometer").unwrap(), 0.001);
    }

    #[test]
    fn test_length_scenario() {
        assert_close(convert(1.0, "meter", "foot").unwrap(), 3.28084, 1e-4);
        assert_close(convert(1.0, "mile", "kilometer").unwrap(), 1.609344, 1e-9);
        assert_close(convert(12.0, "inch", "foot").unwrap(), 1.0, 1e-12);
    }

    #[test]
    fn test_area_scenario() {
        assert_close(convert(1.0, "square-meter", "square-foot").unwrap(), 10.7639, 1e-3);
        assert_close(convert(1.0, "hectare", "acre").unwrap(), 2.47105, 1e-4);
    }

    #[test]
    fn test_volume_scenario() {
        assert_close(convert(1.0, "us-gallon", "liter").unwrap(), 3.78541, 1e-4);
        assert_close(convert(1.0, "liter", "milliliter").unwrap(), 1000.0, 1e-9);
    }

    #[test]
    fn test_negative_and_zero_pass_through() {
        assert_eq!(convert(0.0, "foot", "meter").unwrap(), 0.0);
        assert_close(convert(-2.0, "kilometer", "meter").unwrap(), -2000.0, 1e-9);
    }

    #[test]
    fn test_incompatible_scenario() {
        let err = convert(5.0, "liter", "meter").unwrap_err();
        assert_eq!(err, ConvertError::incompatible("liter", "meter"));
        assert_eq!(relative_scale("liter", "meter"), 0.0);
        assert_eq!(conversion_formula("liter", "meter"), "Unknown conversion");
    }

    #[test]
    fn test_cross_dimension_rejection() {
        assert!(convert(1.0, "meter", "square-meter").is_err());
        assert!(!are_units_compatible("meter", "square-meter"));
    }

    #[test]
    fn test_unknown_units_rejected() {
        assert!(convert(1.0, "furlong", "meter").is_err());
        assert!(convert(1.0, "meter", "furlong").is_err());
        assert!(!are_units_compatible("furlong", "meter"));
        // Two unknown ids are not "compatible" with each other either.
        assert!(!are_units_compatible("furlong", "chain"));
        assert!(convert(1.0, "furlong", "chain").is_err());
    }

    #[test]
    fn test_unit_dimension() {
        assert_eq!(unit_dimension("fathom"), Some(Dimension::Length));
        assert_eq!(unit_dimension("acre"), Some(Dimension::Area));
        assert_eq!(unit_dimension("barrel"), Some(Dimension::Volume));
        assert_eq!(unit_dimension("furlong"), None);
    }

    #[test]
    fn test_relative_scale() {
        assert_eq!(relative_scale("kilometer", "meter"), 1000.0);
        assert_close(relative_scale("foot", "inch"), 12.0, 1e-9);
    }

    #[test]
    fn test_formula_from_base() {
        assert_eq!(conversion_formula("meter", "foot"), "Divide by 0.3048");
        assert_eq!(conversion_formula("square-meter", "hectare"), "Divide by 10000");
    }

    #[test]
    fn test_formula_into_base() {
        assert_eq!(conversion_formula("kilometer", "meter"), "Multiply by 1000");
        assert_eq!(conversion_formula("liter", "cubic-meter"), "Multiply by 0.001");
    }

    #[test]
    fn test_formula_small_factors_use_exponent() {
        assert_eq!(conversion_formula("nanometer", "meter"), "Multiply by 1e-9");
        assert_eq!(conversion_formula("meter", "nanometer"), "Divide by 1e-9");
        assert_eq!(
            conversion_formula("cubic-millimeter", "liter"),
            "Multiply by 1e-9 then divide by 0.001"
        );
        assert_eq!(conversion_formula("milliliter", "cubic-meter"), "Multiply by 0.000001");
        assert_eq!(conversion_formula("light-year", "meter"), "Multiply by 9461000000000000");
    }

    #[test]
    fn test_formula_between_non_base_units() {
        assert_eq!(
            conversion_formula("foot", "inch"),
            "Multiply by 0.3048 then divide by 0.0254"
        );
        assert_eq!(
            conversion_formula("meter", "meter"),
            "Multiply by 1 then divide by 1"
        );
    }

    #[test]
    fn test_request_execute_and_swap() {
        let request = ConversionRequest::new(1.0, "kilometer", "meter");
        assert_eq!(request.execute().unwrap(), 1000.0);

        let back = request.swapped();
        assert_eq!(back.from_unit_id, "meter");
        assert_eq!(back.to_unit_id, "kilometer");
        assert_eq!(back.execute().unwrap(), 0.001);
    }

    #[test]
    fn test_request_serialization() {
        let request = ConversionRequest::new(2.5, "acre", "hectare");
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"from_unit_id\":\"acre\""));

        let roundtrip: ConversionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, request);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_unit() -> impl Strategy<Value = &'static Unit> {
        let count = REGISTRY.len();
        (0..count).prop_map(|i| &REGISTRY.all_units()[i])
    }

    fn any_id() -> impl Strategy<Value = String> {
        prop_oneof![
            any_unit().prop_map(|u| u.id.to_string()),
            "[a-z-]{1,12}",
        ]
    }

    proptest! {
        #[test]
        fn base_round_trip(unit in any_unit(), x in -1e12_f64..1e12_f64) {
            let back = unit.from_base(unit.to_base(x));
            prop_assert!((back - x).abs() <= 1e-9 * x.abs().max(1.0));
        }

        #[test]
        fn identity_conversion_is_exact(unit in any_unit(), x in -1e15_f64..1e15_f64) {
            prop_assert_eq!(convert(x, unit.id, unit.id).unwrap(), x);
        }

        #[test]
        fn compatibility_is_symmetric(a in any_id(), b in any_id()) {
            prop_assert_eq!(are_units_compatible(&a, &b), are_units_compatible(&b, &a));
        }

        #[test]
        fn convert_agrees_with_compatibility(a in any_id(), b in any_id(), x in -1e6_f64..1e6_f64) {
            prop_assert_eq!(convert(x, &a, &b).is_ok(), are_units_compatible(&a, &b));
        }

        #[test]
        fn there_and_back(unit in any_unit(), x in -1e9_f64..1e9_f64) {
            let base = REGISTRY.base_unit(unit.dimension);
            let out = convert(x, unit.id, base.id).unwrap();
            let back = convert(out, base.id, unit.id).unwrap();
            prop_assert!((back - x).abs() <= 1e-9 * x.abs().max(1.0));
        }
    }
}
