//! Display-unit suggestion for length magnitudes.
//!
//! Thresholds exist for length only. Area and volume magnitudes scale by the
//! square and cube of length, so these thresholds do not carry over.

/// Suggest a readable length unit for a magnitude given in meters.
///
/// The sign is ignored. Zero suggests "meter".
///
/// ```rust
/// use convert_core::suggest::suggest_unit;
///
/// assert_eq!(suggest_unit(2_500.0), "kilometer");
/// assert_eq!(suggest_unit(0.004), "millimeter");
/// ```
pub fn suggest_unit(meters: f64) -> &'static str {
    let magnitude = meters.abs();

    if magnitude == 0.0 {
        return "meter";
    }

    match magnitude {
        m if m >= 1e15 => "light-year",
        m if m >= 1e10 => "astronomical-unit",
        m if m >= 1000.0 => "kilometer",
        m if m >= 1.0 => "meter",
        m if m >= 0.01 => "centimeter",
        m if m >= 0.001 => "millimeter",
        m if m >= 1e-6 => "micrometer",
        _ => "nanometer",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::unit_dimension;
    use crate::units::Dimension;

    #[test]
    fn test_thresholds() {
        assert_eq!(suggest_unit(2e15), "light-year");
        assert_eq!(suggest_unit(1e15), "light-year");
        assert_eq!(suggest_unit(5e10), "astronomical-unit");
        assert_eq!(suggest_unit(1000.0), "kilometer");
        assert_eq!(suggest_unit(999.0), "meter");
        assert_eq!(suggest_unit(1.0), "meter");
        assert_eq!(suggest_unit(0.5), "centimeter");
        assert_eq!(suggest_unit(0.001), "millimeter");
        assert_eq!(suggest_unit(2e-6), "micrometer");
        assert_eq!(suggest_unit(3e-9), "nanometer");
    }

    #[test]
    fn test_zero_and_negative() {
        assert_eq!(suggest_unit(0.0), "meter");
        assert_eq!(suggest_unit(-2500.0), "kilometer");
    }

    #[test]
    fn test_suggestions_are_registered_length_units() {
        for meters in [2e15, 5e10, 2e3, 2.0, 0.5, 0.002, 2e-6, 2e-9] {
            let id = suggest_unit(meters);
            assert_eq!(unit_dimension(id), Some(Dimension::Length), "{}", id);
        }
    }
}
