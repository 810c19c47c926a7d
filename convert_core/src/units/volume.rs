//! Volume units (base unit: cubic meter)
//!
//! Milliliter and cubic centimeter share a factor but stay separate entries;
//! both names are in common use.

use super::{Dimension, Unit, UnitGroup};

const fn volume(id: &'static str, name: &'static str, abbreviation: &'static str, group: UnitGroup, factor: f64) -> Unit {
    Unit::new(id, name, abbreviation, group, Dimension::Volume, factor)
}

/// Volume units in picker order
pub static VOLUME_UNITS: [Unit; 10] = [
    // Metric
    volume("cubic-millimeter", "Cubic Millimeter", "mm³", UnitGroup::Metric, 1e-9),
    volume("cubic-centimeter", "Cubic Centimeter", "cm³", UnitGroup::Metric, 1e-6),
    volume("milliliter", "Milliliter", "mL", UnitGroup::Metric, 1e-6),
    volume("liter", "Liter", "L", UnitGroup::Metric, 0.001),
    volume("cubic-meter", "Cubic Meter", "m³", UnitGroup::Metric, 1.0),
    // Imperial & US
    volume("cubic-inch", "Cubic Inch", "in³", UnitGroup::Imperial, 1.6387e-5),
    volume("cubic-foot", "Cubic Foot", "ft³", UnitGroup::Imperial, 0.0283168),
    volume("us-gallon", "US Gallon", "gal", UnitGroup::Us, 0.00378541),
    volume("imperial-gallon", "Imperial Gallon", "imp gal", UnitGroup::Imperial, 0.00454609),
    volume("barrel", "Oil Barrel", "bbl", UnitGroup::Us, 0.158987),
];
