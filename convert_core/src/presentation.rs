//! # Presentation Helpers
//!
//! Ready-to-render views built on the engine: comparison tables, one-to-many
//! conversion, the quick-convert shortlist, and the default unit pair per
//! dimension.
//!
//! ## Example
//!
//! ```rust
//! use convert_core::presentation::comparison_table;
//!
//! let rows = comparison_table(1.0, "meter", 2).unwrap();
//! let foot = rows.iter().find(|r| r.unit_id == "foot").unwrap();
//! assert_eq!(foot.formatted, "3.28");
//! assert!(rows.iter().all(|r| r.unit_id != "meter"));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ConvertError, ConvertResult};
use crate::format::format_value;
use crate::registry::REGISTRY;
use crate::units::Dimension;

// ============================================================================
// Unit Pairs
// ============================================================================

/// An ordered (from, to) pair of unit ids
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitPair {
    pub from: String,
    pub to: String,
}

impl UnitPair {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        UnitPair {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Pair preselected when a dimension is first shown
    pub fn default_for(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Length => UnitPair::new("meter", "foot"),
            Dimension::Area => UnitPair::new("square-meter", "square-foot"),
            Dimension::Volume => UnitPair::new("cubic-meter", "cubic-foot"),
        }
    }

    /// Same pair in the other direction
    pub fn reversed(&self) -> Self {
        UnitPair::new(self.to.clone(), self.from.clone())
    }

    /// True if both ids resolve within one dimension
    pub fn is_compatible(&self) -> bool {
        REGISTRY.are_units_compatible(&self.from, &self.to)
    }
}

// ============================================================================
// Comparison Table
// ============================================================================

/// One row of a comparison table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub unit_id: String,
    pub name: String,
    pub abbreviation: String,
    pub value: f64,
    pub formatted: String,
}

/// Express `value` (in `from_unit_id`) in every other unit of its dimension.
///
/// Rows follow table order and omit the source unit. Fails with
/// `UnknownUnit` if the source id is not registered.
pub fn comparison_table(value: f64, from_unit_id: &str, precision: usize) -> ConvertResult<Vec<ComparisonRow>> {
    let source = REGISTRY
        .get(from_unit_id)
        .ok_or_else(|| ConvertError::unknown_unit(from_unit_id))?;

    REGISTRY
        .units_for_dimension(source.dimension)
        .into_iter()
        .filter(|unit| unit.id != source.id)
        .map(|unit| {
            let converted = REGISTRY.convert(value, source.id, unit.id)?;
            Ok(ComparisonRow {
                unit_id: unit.id.to_string(),
                name: unit.name.to_string(),
                abbreviation: unit.abbreviation.to_string(),
                value: converted,
                formatted: format_value(converted, precision),
            })
        })
        .collect()
}

// ============================================================================
// One-to-Many Conversion
// ============================================================================

/// Result for one target of [`convert_many`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetResult {
    pub unit_id: String,
    /// `None` when this target cannot be reached from the source unit
    pub value: Option<f64>,
}

/// Convert one value into several targets.
///
/// Each target fails independently; an incompatible target yields
/// `value: None` without affecting the others.
pub fn convert_many<S: AsRef<str>>(value: f64, from_unit_id: &str, targets: &[S]) -> Vec<TargetResult> {
    targets
        .iter()
        .map(|target| {
            let target = target.as_ref();
            TargetResult {
                unit_id: target.to_string(),
                value: REGISTRY.convert(value, from_unit_id, target).ok(),
            }
        })
        .collect()
}

/// First unit of the source's dimension not already among `existing`.
///
/// Used to grow a one-to-many target list. `None` when the source is unknown
/// or every unit is already listed.
pub fn next_target<S: AsRef<str>>(from_unit_id: &str, existing: &[S]) -> Option<&'static str> {
    let dimension = REGISTRY.dimension_of(from_unit_id)?;
    REGISTRY
        .units_for_dimension(dimension)
        .into_iter()
        .map(|u| u.id)
        .find(|id| !existing.iter().any(|e| e.as_ref() == *id))
}

// ============================================================================
// Quick Convert
// ============================================================================

/// A common conversion shown as a one-click shortcut
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuickPair {
    pub from: &'static str,
    pub to: &'static str,
    pub from_label: &'static str,
    pub to_label: &'static str,
    /// Sample amount shown on the shortcut
    pub value: f64,
}

/// The quick-convert shortlist
pub const QUICK_PAIRS: [QuickPair; 6] = [
    QuickPair { from: "meter", to: "foot", from_label: "Meters", to_label: "Feet", value: 1.0 },
    QuickPair { from: "kilometer", to: "mile", from_label: "Kilometers", to_label: "Miles", value: 1.0 },
    QuickPair { from: "inch", to: "centimeter", from_label: "Inches", to_label: "Centimeters", value: 1.0 },
    QuickPair { from: "yard", to: "meter", from_label: "Yards", to_label: "Meters", value: 1.0 },
    QuickPair { from: "millimeter", to: "inch", from_label: "Millimeters", to_label: "Inches", value: 10.0 },
    QuickPair { from: "foot", to: "centimeter", from_label: "Feet", to_label: "Centimeters", value: 1.0 },
];

/// A quick pair with its sample value converted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickResult {
    pub pair: QuickPair,
    pub result: f64,
    pub formatted: String,
}

impl QuickPair {
    /// Convert the sample value
    pub fn evaluate(&self, precision: usize) -> ConvertResult<QuickResult> {
        let result = REGISTRY.convert(self.value, self.from, self.to)?;
        Ok(QuickResult {
            pair: *self,
            result,
            formatted: format_value(result, precision),
        })
    }
}

/// Evaluate every quick pair
pub fn quick_conversions(precision: usize) -> ConvertResult<Vec<QuickResult>> {
    QUICK_PAIRS.iter().map(|p| p.evaluate(precision)).collect()
}
