//! # Unit Registry
//!
//! Immutable catalogue of every convertible unit, partitioned by dimension.
//!
//! ## Layout
//!
//! ```text
//! UnitRegistry
//! ├── units: Vec<Unit>                    (arena, length → area → volume)
//! ├── index: HashMap<id, arena index>     (O(1) lookup by id)
//! ├── by_dimension: [Vec<arena index>; 3] (table order per dimension)
//! └── bases: [arena index; 3]             (meter, square-meter, cubic-meter)
//! ```
//!
//! Unit ids are unique across *all* dimensions. A collision is rejected when
//! the registry is built, so an id always names exactly one unit and one
//! dimension.
//!
//! The process-wide [`REGISTRY`] is built on first use from the reference
//! tables. A malformed table is a programming error and aborts startup.
//!
//! ## Example
//!
//! ```rust
//! use convert_core::registry::REGISTRY;
//! use convert_core::units::{Dimension, UnitGroup};
//!
//! let length = REGISTRY.units_for_dimension(Dimension::Length);
//! assert_eq!(length[0].id, "nanometer");
//!
//! let grouped = REGISTRY.grouped_units_for_dimension(Dimension::Length);
//! assert_eq!(grouped[&UnitGroup::Maritime].len(), 2);
//! assert!(grouped[&UnitGroup::Us].is_empty());
//! ```

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::errors::{ConvertError, ConvertResult};
use crate::units::{Dimension, Unit, UnitGroup, AREA_UNITS, LENGTH_UNITS, VOLUME_UNITS};

/// Global unit registry, built from the reference tables on first access
pub static REGISTRY: Lazy<UnitRegistry> = Lazy::new(|| {
    UnitRegistry::from_tables(&[&LENGTH_UNITS, &AREA_UNITS, &VOLUME_UNITS])
        .unwrap_or_else(|e| panic!("unit registry failed to build: {e}"))
});

/// Units grouped by measurement system, every group present.
pub type GroupedUnits<'a> = BTreeMap<UnitGroup, Vec<&'a Unit>>;

/// Registry of all known units
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    units: Vec<Unit>,
    index: HashMap<&'static str, usize>,
    by_dimension: [Vec<usize>; 3],
    bases: [usize; 3],
}

fn slot(dimension: Dimension) -> usize {
    match dimension {
        Dimension::Length => 0,
        Dimension::Area => 1,
        Dimension::Volume => 2,
    }
}

impl UnitRegistry {
    /// Build a registry from unit tables.
    ///
    /// Tables are concatenated in the given order; each unit is filed under
    /// its own `dimension`. Fails on a duplicate id, a factor that is not a
    /// positive finite number, a dimension with no units, or a dimension
    /// whose base unit is missing or not an identity mapping.
    pub fn from_tables(tables: &[&[Unit]]) -> ConvertResult<Self> {
        let mut units = Vec::new();
        let mut index: HashMap<&'static str, usize> = HashMap::new();
        let mut by_dimension: [Vec<usize>; 3] = [Vec::new(), Vec::new(), Vec::new()];

        for unit in tables.iter().flat_map(|t| t.iter()) {
            if !unit.factor.is_finite() || unit.factor <= 0.0 {
                return Err(ConvertError::InvalidFactor {
                    unit_id: unit.id.to_string(),
                    factor: unit.factor,
                });
            }

            if let Some(&existing) = index.get(unit.id) {
                let first: &Unit = &units[existing];
                return Err(ConvertError::DuplicateUnitId {
                    unit_id: unit.id.to_string(),
                    first: first.dimension.name().to_string(),
                    second: unit.dimension.name().to_string(),
                });
            }

            let position = units.len();
            units.push(*unit);
            index.insert(unit.id, position);
            by_dimension[slot(unit.dimension)].push(position);
        }

        let mut bases = [0usize; 3];
        for dimension in Dimension::ALL {
            if by_dimension[slot(dimension)].is_empty() {
                return Err(ConvertError::EmptyDimension {
                    dimension: dimension.name().to_string(),
                });
            }

            let base_id = dimension.base_unit_id();
            let base = match index.get(base_id) {
                Some(&i) if units[i].dimension == dimension => i,
                _ => {
                    return Err(ConvertError::InvalidBaseUnit {
                        dimension: dimension.name().to_string(),
                        reason: format!("'{}' is not listed", base_id),
                    })
                }
            };
            if units[base].factor != 1.0 {
                return Err(ConvertError::InvalidBaseUnit {
                    dimension: dimension.name().to_string(),
                    reason: format!("'{}' has factor {}, expected 1", base_id, units[base].factor),
                });
            }
            bases[slot(dimension)] = base;
        }

        debug!(
            length = by_dimension[0].len(),
            area = by_dimension[1].len(),
            volume = by_dimension[2].len(),
            "unit registry built"
        );

        Ok(UnitRegistry {
            units,
            index,
            by_dimension,
            bases,
        })
    }

    /// Get a unit by id
    pub fn get(&self, id: &str) -> Option<&Unit> {
        self.index.get(id).map(|&i| &self.units[i])
    }

    /// Dimension containing the id, or `None` if no table lists it
    pub fn dimension_of(&self, id: &str) -> Option<Dimension> {
        self.get(id).map(|u| u.dimension)
    }

    /// Display name for an id, falling back to the id itself when unknown
    pub fn unit_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map(|u| u.name).unwrap_or(id)
    }

    /// Ordered units of one dimension (never empty)
    pub fn units_for_dimension(&self, dimension: Dimension) -> Vec<&Unit> {
        self.by_dimension[slot(dimension)]
            .iter()
            .map(|&i| &self.units[i])
            .collect()
    }

    /// Ordered units of a dimension given by name.
    ///
    /// Fails with `UnknownDimension` for anything but "length", "area" or
    /// "volume".
    pub fn units_for_dimension_name(&self, name: &str) -> ConvertResult<Vec<&Unit>> {
        let dimension: Dimension = name.parse()?;
        Ok(self.units_for_dimension(dimension))
    }

    /// Units of one dimension keyed by group.
    ///
    /// All seven groups are always present, in display order, so pickers can
    /// render consistent headers; groups without members map to an empty list.
    pub fn grouped_units_for_dimension(&self, dimension: Dimension) -> GroupedUnits<'_> {
        let mut grouped: GroupedUnits<'_> = UnitGroup::ALL.iter().map(|&g| (g, Vec::new())).collect();
        for unit in self.units_for_dimension(dimension) {
            grouped.entry(unit.group).or_default().push(unit);
        }
        grouped
    }

    /// Every unit across all dimensions (length, then area, then volume)
    pub fn all_units(&self) -> &[Unit] {
        &self.units
    }

    /// Reference unit of a dimension
    pub fn base_unit(&self, dimension: Dimension) -> &Unit {
        &self.units[self.bases[slot(dimension)]]
    }

    /// Number of registered units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// True if no units are registered (never the case for a built registry)
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
