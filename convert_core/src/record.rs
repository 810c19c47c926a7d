//! # Conversion Records
//!
//! A [`ConversionRecord`] captures one completed conversion for display in a
//! history list or for copying as text. Records hold display names rather
//! than ids, so they stay readable even if shown out of context.
//!
//! Storing and pruning records is left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use convert_core::convert::ConversionRequest;
//! use convert_core::record::ConversionRecord;
//!
//! let request = ConversionRequest::new(1.0, "kilometer", "meter");
//! let record = ConversionRecord::from_request(&request).unwrap();
//!
//! assert_eq!(record.to_value, 1000.0);
//! assert_eq!(record.summary(2), "1.00 Kilometer = 1000.00 Meter");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::convert::ConversionRequest;
use crate::errors::ConvertResult;
use crate::format::format_value;
use crate::registry::REGISTRY;

/// One completed conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    /// Unique record id
    pub id: Uuid,
    /// When the conversion was performed
    pub timestamp: DateTime<Utc>,
    /// Input quantity
    pub from_value: f64,
    /// Display name of the source unit
    pub from_unit: String,
    /// Display name of the target unit
    pub to_unit: String,
    /// Converted quantity
    pub to_value: f64,
}

impl ConversionRecord {
    /// Execute a request and record the outcome.
    ///
    /// Fails exactly when [`ConversionRequest::execute`] fails; nothing is
    /// recorded for a failed conversion.
    pub fn from_request(request: &ConversionRequest) -> ConvertResult<Self> {
        let to_value = request.execute()?;
        Ok(ConversionRecord {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            from_value: request.value,
            from_unit: REGISTRY.unit_name(&request.from_unit_id).to_string(),
            to_unit: REGISTRY.unit_name(&request.to_unit_id).to_string(),
            to_value,
        })
    }

    /// One-line text form, e.g. "1.0000 Meter = 3.2808 Foot"
    pub fn summary(&self, precision: usize) -> String {
        format!(
            "{} {} = {} {}",
            format_value(self.from_value, precision),
            self.from_unit,
            format_value(self.to_value, precision),
            self.to_unit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_uses_display_names() {
        let request = ConversionRequest::new(1.0, "us-gallon", "liter");
        let record = ConversionRecord::from_request(&request).unwrap();
        assert_eq!(record.from_unit, "US Gallon");
        assert_eq!(record.to_unit, "Liter");
        assert!((record.to_value - 3.78541).abs() < 1e-4);
    }

    #[test]
    fn test_failed_conversion_not_recorded() {
        let request = ConversionRequest::new(5.0, "liter", "meter");
        let err = ConversionRecord::from_request(&request).unwrap_err();
        assert_eq!(err.error_code(), "INCOMPATIBLE_OR_UNKNOWN_UNITS");
    }

    #[test]
    fn test_records_get_distinct_ids() {
        let request = ConversionRequest::new(1.0, "meter", "foot");
        let a = ConversionRecord::from_request(&request).unwrap();
        let b = ConversionRecord::from_request(&request).unwrap();
        assert_ne!(a.id, b.id);
        assert!(b.timestamp >= a.timestamp);
    }

    #[test]
    fn test_summary() {
        let request = ConversionRequest::new(1.0, "meter", "foot");
        let record = ConversionRecord::from_request(&request).unwrap();
        assert_eq!(record.summary(4), "1.0000 Meter = 3.2808 Foot");
    }

    #[test]
    fn test_record_serialization() {
        let request = ConversionRequest::new(2.0, "acre", "hectare");
        let record = ConversionRecord::from_request(&request).unwrap();

        let json = serde_json::to_string_pretty(&record).unwrap();
        assert!(json.contains("\"from_unit\": \"Acre\""));

        let roundtrip: ConversionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.id, record.id);
        assert_eq!(roundtrip.timestamp, record.timestamp);
        assert_eq!(roundtrip.to_unit, "Hectare");
        assert!((roundtrip.to_value - record.to_value).abs() < 1e-12);
    }
}
