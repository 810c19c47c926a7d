//! # convert_core - Unit Conversion Engine
//!
//! `convert_core` converts quantities between units of length, area and
//! volume. Units are grouped by measurement system (metric, imperial, US,
//! ancient, astronomical, maritime, other) and every unit is a linear scale
//! of its dimension's base unit. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: The registry is built once and read-only afterwards
//! - **JSON-First**: Results, errors and settings implement Serialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Two failure styles**: `convert` errors, helpers like `relative_scale`
//!   fall back to sentinel values
//!
//! ## Quick Start
//!
//! ```rust
//! use convert_core::{convert, conversion_formula, format_value};
//!
//! let feet = convert(1.0, "meter", "foot").unwrap();
//! assert_eq!(format_value(feet, 4), "3.2808");
//!
//! assert_eq!(conversion_formula("meter", "foot"), "Divide by 0.3048");
//! assert!(convert(1.0, "meter", "liter").is_err());
//! ```
//!
//! ## Modules
//!
//! - [`units`] - Dimensions, groups and the reference unit tables
//! - [`registry`] - Indexed lookup over the unit tables
//! - [`convert`] - Conversion, compatibility, scale and formula text
//! - [`format`] - Display formatting of numeric results
//! - [`suggest`] - Readable length unit for a magnitude
//! - [`presentation`] - Comparison tables, multi-target and quick conversions
//! - [`record`] - Timestamped conversion records
//! - [`settings`] - Front-end preferences with atomic saves
//! - [`errors`] - Structured error types

pub mod convert;
pub mod errors;
pub mod format;
pub mod presentation;
pub mod record;
pub mod registry;
pub mod settings;
pub mod suggest;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use convert::{
    are_units_compatible, conversion_formula, convert, relative_scale, unit_dimension, ConversionRequest,
};
pub use errors::{ConvertError, ConvertResult};
pub use format::{format_value, DEFAULT_PRECISION, MAX_PRECISION};
pub use registry::{UnitRegistry, REGISTRY};
pub use settings::Settings;
pub use suggest::suggest_unit;
pub use units::{Dimension, Unit, UnitGroup};
