//! Area units (base unit: square meter)

use super::{Dimension, Unit, UnitGroup};

const fn area(id: &'static str, name: &'static str, abbreviation: &'static str, group: UnitGroup, factor: f64) -> Unit {
    Unit::new(id, name, abbreviation, group, Dimension::Area, factor)
}

/// Area units in picker order
pub static AREA_UNITS: [Unit; 10] = [
    // Metric
    area("square-millimeter", "Square Millimeter", "mm²", UnitGroup::Metric, 1e-6),
    area("square-centimeter", "Square Centimeter", "cm²", UnitGroup::Metric, 1e-4),
    area("square-meter", "Square Meter", "m²", UnitGroup::Metric, 1.0),
    area("hectare", "Hectare", "ha", UnitGroup::Metric, 10_000.0),
    area("square-kilometer", "Square Kilometer", "km²", UnitGroup::Metric, 1e6),
    // Imperial
    area("square-inch", "Square Inch", "in²", UnitGroup::Imperial, 0.00064516),
    area("square-foot", "Square Foot", "ft²", UnitGroup::Imperial, 0.092903),
    area("square-yard", "Square Yard", "yd²", UnitGroup::Imperial, 0.836127),
    area("acre", "Acre", "ac", UnitGroup::Imperial, 4046.86),
    area("square-mile", "Square Mile", "mi²", UnitGroup::Imperial, 2589988.11),
];
