//! Length units (base unit: meter)

use super::{Dimension, Unit, UnitGroup};

const fn length(id: &'static str, name: &'static str, abbreviation: &'static str, group: UnitGroup, factor: f64) -> Unit {
    Unit::new(id, name, abbreviation, group, Dimension::Length, factor)
}

/// Length units in picker order
pub static LENGTH_UNITS: [Unit; 17] = [
    // Metric
    length("nanometer", "Nanometer", "nm", UnitGroup::Metric, 1e-9),
    length("micrometer", "Micrometer", "µm", UnitGroup::Metric, 1e-6),
    length("millimeter", "Millimeter", "mm", UnitGroup::Metric, 0.001),
    length("centimeter", "Centimeter", "cm", UnitGroup::Metric, 0.01),
    length("meter", "Meter", "m", UnitGroup::Metric, 1.0),
    length("kilometer", "Kilometer", "km", UnitGroup::Metric, 1000.0),
    // Imperial
    length("inch", "Inch", "in", UnitGroup::Imperial, 0.0254),
    length("foot", "Foot", "ft", UnitGroup::Imperial, 0.3048),
    length("yard", "Yard", "yd", UnitGroup::Imperial, 0.9144),
    length("mile", "Mile", "mi", UnitGroup::Imperial, 1609.344),
    // Maritime
    length("nautical-mile", "Nautical Mile", "nmi", UnitGroup::Maritime, 1852.0),
    length("fathom", "Fathom", "ftm", UnitGroup::Maritime, 1.8288),
    // Ancient
    length("cubit", "Cubit", "cubit", UnitGroup::Ancient, 0.45),
    length("league", "League", "lea", UnitGroup::Ancient, 4828.032),
    // Astronomical
    length("astronomical-unit", "Astronomical Unit", "AU", UnitGroup::Astronomical, 1.496e11),
    length("light-year", "Light Year", "ly", UnitGroup::Astronomical, 9.461e15),
    length("parsec", "Parsec", "pc", UnitGroup::Astronomical, 3.086e16),
];
