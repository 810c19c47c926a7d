//! # Settings
//!
//! User preferences for front ends: display precision and the unit pair
//! preselected for each dimension. Settings serialize to a small JSON file.
//!
//! ## Saving
//!
//! [`Settings::save`] writes atomically:
//! 1. Serialize to JSON
//! 2. Write to a temporary file (`.tmp`)
//! 3. Sync to disk (fsync)
//! 4. Rename over the target
//!
//! ## Example
//!
//! ```rust
//! use convert_core::settings::Settings;
//! use convert_core::units::Dimension;
//!
//! let settings = Settings::default();
//! assert_eq!(settings.precision, 4);
//! assert_eq!(settings.pair(Dimension::Area).to, "square-foot");
//! assert!(settings.validate().is_ok());
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{ConvertError, ConvertResult};
use crate::format::{DEFAULT_PRECISION, MAX_PRECISION};
use crate::presentation::UnitPair;
use crate::registry::REGISTRY;
use crate::units::Dimension;

/// Current schema version for settings files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Front-end preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version (for migration compatibility)
    #[serde(default = "schema_version")]
    pub version: String,

    /// Decimal places for displayed results (0 to 10)
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Preselected length pair
    #[serde(default = "default_length")]
    pub length: UnitPair,

    /// Preselected area pair
    #[serde(default = "default_area")]
    pub area: UnitPair,

    /// Preselected volume pair
    #[serde(default = "default_volume")]
    pub volume: UnitPair,
}

fn schema_version() -> String {
    SCHEMA_VERSION.to_string()
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

fn default_length() -> UnitPair {
    UnitPair::default_for(Dimension::Length)
}

fn default_area() -> UnitPair {
    UnitPair::default_for(Dimension::Area)
}

fn default_volume() -> UnitPair {
    UnitPair::default_for(Dimension::Volume)
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: schema_version(),
            precision: default_precision(),
            length: default_length(),
            area: default_area(),
            volume: default_volume(),
        }
    }
}

impl Settings {
    /// Preselected pair for a dimension
    pub fn pair(&self, dimension: Dimension) -> &UnitPair {
        match dimension {
            Dimension::Length => &self.length,
            Dimension::Area => &self.area,
            Dimension::Volume => &self.volume,
        }
    }

    /// Return a copy with a different precision, validated
    pub fn with_precision(mut self, precision: usize) -> ConvertResult<Self> {
        self.precision = precision;
        self.validate()?;
        Ok(self)
    }

    /// Check precision range and that every pair belongs to its dimension
    pub fn validate(&self) -> ConvertResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(ConvertError::invalid_input(
                "precision",
                self.precision.to_string(),
                format!("Precision must be between 0 and {}", MAX_PRECISION),
            ));
        }

        for dimension in Dimension::ALL {
            let pair = self.pair(dimension);
            for id in [&pair.from, &pair.to] {
                if REGISTRY.dimension_of(id) != Some(dimension) {
                    return Err(ConvertError::invalid_input(
                        dimension.name(),
                        id.clone(),
                        format!("Not a {} unit", dimension.name()),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> ConvertResult<Self> {
        let settings: Settings = serde_json::from_str(json).map_err(|e| ConvertError::SerializationError {
            reason: e.to_string(),
        })?;
        validate_version(&settings.version)?;
        settings.validate().map_err(|e| {
            warn!(error = %e, "rejected settings");
            e
        })?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> ConvertResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ConvertError::file_error("read", path.display().to_string(), e.to_string()))?;

        Settings::from_json(&contents).map_err(|e| match e {
            ConvertError::SerializationError { reason } => ConvertError::SerializationError {
                reason: format!("Invalid JSON in {}: {}", path.display(), reason),
            },
            other => other,
        })
    }

    /// Load settings if the file exists, otherwise use defaults
    pub fn load_or_default(path: &Path) -> ConvertResult<Self> {
        if path.exists() {
            Settings::load(path)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings with atomic write semantics
    pub fn save(&self, path: &Path) -> ConvertResult<()> {
        self.validate()?;

        let json = serde_json::to_string_pretty(self).map_err(|e| ConvertError::SerializationError {
            reason: e.to_string(),
        })?;

        let tmp_path = path.with_extension("json.tmp");

        let mut tmp_file = File::create(&tmp_path).map_err(|e| {
            ConvertError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        tmp_file.write_all(json.as_bytes()).map_err(|e| {
            ConvertError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        tmp_file.sync_all().map_err(|e| {
            ConvertError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        fs::rename(&tmp_path, path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            ConvertError::file_error("rename to final", path.display().to_string(), e.to_string())
        })?;

        Ok(())
    }
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> ConvertResult<()> {
    let mismatch = || ConvertError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version.split('.').filter_map(|p| p.parse().ok()).collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION.split('.').filter_map(|p| p.parse().ok()).collect();

    if file_parts.is_empty() || file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // 0.x: a newer minor may add fields we would silently drop
    if current_parts[0] == 0 && file_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}
