//! # Unit Definitions
//!
//! Core value types for the conversion engine: the [`Dimension`] a unit
//! measures, the measurement-system [`UnitGroup`] it is listed under, and the
//! [`Unit`] record itself.
//!
//! ## Linear Units
//!
//! Every unit in the reference tables is a pure scale of its dimension's base
//! unit (meter, square meter, cubic meter), so a unit is fully described by
//! one factor:
//!
//! - `to_base(x)   = x * factor`
//! - `from_base(x) = x / factor`
//!
//! Base units have `factor == 1.0`, making both mappings the identity.
//!
//! ## Example
//!
//! ```rust
//! use convert_core::units::{Dimension, LENGTH_UNITS};
//!
//! let foot = LENGTH_UNITS.iter().find(|u| u.id == "foot").unwrap();
//! assert_eq!(foot.dimension, Dimension::Length);
//! assert_eq!(foot.to_base(1.0), 0.3048);
//! assert!((foot.from_base(1.0) - 3.28084).abs() < 1e-4);
//! ```

pub mod area;
pub mod length;
pub mod volume;

pub use area::AREA_UNITS;
pub use length::LENGTH_UNITS;
pub use volume::VOLUME_UNITS;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConvertError;

// ============================================================================
// Dimension
// ============================================================================

/// Category of physical quantity whose units are mutually convertible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Length,
    Area,
    Volume,
}

impl Dimension {
    /// All dimensions in registry order
    pub const ALL: [Dimension; 3] = [Dimension::Length, Dimension::Area, Dimension::Volume];

    /// Lowercase identifier ("length", "area", "volume")
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Area => "area",
            Dimension::Volume => "volume",
        }
    }

    /// Display name for headers
    pub fn display_name(&self) -> &'static str {
        match self {
            Dimension::Length => "Length",
            Dimension::Area => "Area",
            Dimension::Volume => "Volume",
        }
    }

    /// Id of the reference unit all conversions in this dimension route through
    pub fn base_unit_id(&self) -> &'static str {
        match self {
            Dimension::Length => "meter",
            Dimension::Area => "square-meter",
            Dimension::Volume => "cubic-meter",
        }
    }

    /// The reference table for this dimension
    pub fn table(&self) -> &'static [Unit] {
        match self {
            Dimension::Length => &LENGTH_UNITS,
            Dimension::Area => &AREA_UNITS,
            Dimension::Volume => &VOLUME_UNITS,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dimension {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "length" => Ok(Dimension::Length),
            "area" => Ok(Dimension::Area),
            "volume" => Ok(Dimension::Volume),
            other => Err(ConvertError::UnknownDimension {
                name: other.to_string(),
            }),
        }
    }
}

// ============================================================================
// Unit Group
// ============================================================================

/// Measurement-system classification.
///
/// Used only to organize unit pickers; it never affects conversion math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitGroup {
    Metric,
    Imperial,
    Us,
    Ancient,
    Astronomical,
    Maritime,
    Other,
}

impl UnitGroup {
    /// All groups in display order
    pub const ALL: [UnitGroup; 7] = [
        UnitGroup::Metric,
        UnitGroup::Imperial,
        UnitGroup::Us,
        UnitGroup::Ancient,
        UnitGroup::Astronomical,
        UnitGroup::Maritime,
        UnitGroup::Other,
    ];

    /// Lowercase identifier
    pub fn name(&self) -> &'static str {
        match self {
            UnitGroup::Metric => "metric",
            UnitGroup::Imperial => "imperial",
            UnitGroup::Us => "us",
            UnitGroup::Ancient => "ancient",
            UnitGroup::Astronomical => "astronomical",
            UnitGroup::Maritime => "maritime",
            UnitGroup::Other => "other",
        }
    }

    /// Display name for group headers
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitGroup::Metric => "Metric",
            UnitGroup::Imperial => "Imperial",
            UnitGroup::Us => "US",
            UnitGroup::Ancient => "Ancient",
            UnitGroup::Astronomical => "Astronomical",
            UnitGroup::Maritime => "Maritime",
            UnitGroup::Other => "Other",
        }
    }
}

impl fmt::Display for UnitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Unit
// ============================================================================

/// One convertible unit.
///
/// Units are static data: they are defined in the per-dimension tables and
/// never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    /// Stable key, unique across all dimensions (e.g. "square-foot")
    pub id: &'static str,
    /// Human-readable name (e.g. "Square Foot")
    pub name: &'static str,
    /// Short symbol (e.g. "ft²")
    pub abbreviation: &'static str,
    /// Measurement-system group
    pub group: UnitGroup,
    /// Dimension this unit measures
    pub dimension: Dimension,
    /// Quantity of the base unit in one of this unit (`to_base(1)`)
    pub factor: f64,
}

impl Unit {
    /// Define a linear unit
    pub const fn new(
        id: &'static str,
        name: &'static str,
        abbreviation: &'static str,
        group: UnitGroup,
        dimension: Dimension,
        factor: f64,
    ) -> Self {
        Unit {
            id,
            name,
            abbreviation,
            group,
            dimension,
            factor,
        }
    }

    /// Map a quantity in this unit to the dimension's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.factor
    }

    /// Map a quantity in the base unit to this unit
    pub fn from_base(&self, value: f64) -> f64 {
        value / self.factor
    }

    /// True if this is the dimension's reference unit
    pub fn is_base(&self) -> bool {
        self.id == self.dimension.base_unit_id()
    }

    /// Label used in pickers, e.g. "Foot (ft)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.abbreviation)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_parse() {
        assert_eq!("length".parse::<Dimension>().unwrap(), Dimension::Length);
        assert_eq!("volume".parse::<Dimension>().unwrap(), Dimension::Volume);

        let err = "mass".parse::<Dimension>().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_DIMENSION");
    }

    #[test]
    fn test_dimension_serialization() {
        let json = serde_json::to_string(&Dimension::Area).unwrap();
        assert_eq!(json, "\"area\"");

        let roundtrip: Dimension = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Dimension::Area);
    }

    #[test]
    fn test_group_serialization() {
        let json = serde_json::to_string(&UnitGroup::Us).unwrap();
        assert_eq!(json, "\"us\"");
        assert_eq!(UnitGroup::Us.display_name(), "US");
    }

    #[test]
    fn test_base_units_are_identity() {
        for dimension in Dimension::ALL {
            let base = dimension
                .table()
                .iter()
                .find(|u| u.is_base())
                .expect("every table lists its base unit");
            assert_eq!(base.id, dimension.base_unit_id());
            assert_eq!(base.to_base(42.5), 42.5);
            assert_eq!(base.from_base(42.5), 42.5);
        }
    }

    #[test]
    fn test_tables_tag_their_dimension() {
        for dimension in Dimension::ALL {
            assert!(dimension.table().iter().all(|u| u.dimension == dimension));
        }
    }

    #[test]
    fn test_unit_label() {
        let foot = LENGTH_UNITS.iter().find(|u| u.id == "foot").unwrap();
        assert_eq!(foot.label(), "Foot (ft)");
        assert_eq!(foot.to_string(), "ft");
    }
}
