//! # Field Parsing Helpers
//!
//! The single validation path between a form boundary (which collects raw
//! strings) and the typed calculator inputs. Every calculator uses these
//! helpers; no module does its own ad hoc parsing.
//!
//! A blank required field rejects with `MissingInput`, a non-numeric or
//! non-finite value with `InvalidNumeric`, and a zero/negative value on a
//! positivity-constrained field with `OutOfRange`.
//!
//! ## Example
//!
//! ```rust
//! use press_core::fields;
//!
//! let diameter = fields::parse_positive("tie_rod_diameter_cm", "10").unwrap();
//! assert_eq!(diameter, 10.0);
//!
//! assert!(fields::parse_positive("tie_rod_diameter_cm", "").is_err());
//! assert!(fields::parse_positive("tie_rod_diameter_cm", "-3").is_err());
//! ```

use crate::errors::{CalcError, CalcResult};

/// Parse a required field. Rejects blank and non-numeric values.
pub fn parse_required(field: &str, raw: &str) -> CalcResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CalcError::missing_input(field));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| CalcError::invalid_numeric(field, trimmed))?;
    require_finite(field, value)
}

/// Parse a required field that must be strictly positive.
pub fn parse_positive(field: &str, raw: &str) -> CalcResult<f64> {
    let value = parse_required(field, raw)?;
    require_positive(field, value)
}

/// Parse an optional field. Blank maps to `None`; a present value must
/// still parse to a finite number.
pub fn parse_optional(field: &str, raw: &str) -> CalcResult<Option<f64>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_required(field, raw).map(Some)
}

/// Parse an optional field that must be strictly positive when present.
pub fn parse_optional_positive(field: &str, raw: &str) -> CalcResult<Option<f64>> {
    match parse_optional(field, raw)? {
        Some(value) => require_positive(field, value).map(Some),
        None => Ok(None),
    }
}

/// Parse an optional field, substituting `default` when blank.
pub fn parse_optional_or(field: &str, raw: &str, default: f64) -> CalcResult<f64> {
    Ok(parse_optional(field, raw)?.unwrap_or(default))
}

/// Reject non-finite values (NaN, infinities) on an already-typed field.
pub fn require_finite(field: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_numeric(field, value.to_string()));
    }
    Ok(value)
}

/// Reject zero or negative values on an already-typed field.
pub fn require_positive(field: &str, value: f64) -> CalcResult<f64> {
    let value = require_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::out_of_range(
            field,
            value.to_string(),
            "Must be positive",
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_required_accepts_numbers() {
        assert_eq!(parse_required("d", "12.5").unwrap(), 12.5);
        assert_eq!(parse_required("d", "  7 ").unwrap(), 7.0);
        assert_eq!(parse_required("d", "-3.2").unwrap(), -3.2);
    }

    #[test]
    fn test_parse_required_rejects_blank() {
        let err = parse_required("working_stress", "").unwrap_err();
        assert_eq!(err.error_code(), "MISSING_INPUT");
        let err = parse_required("working_stress", "   ").unwrap_err();
        assert_eq!(err.error_code(), "MISSING_INPUT");
    }

    #[test]
    fn test_parse_required_rejects_garbage() {
        let err = parse_required("speed", "fast").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_NUMERIC");
        let err = parse_required("speed", "1.2.3").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_NUMERIC");
    }

    #[test]
    fn test_parse_required_rejects_non_finite() {
        // "inf" and "NaN" parse as f64 but are not usable inputs
        assert_eq!(
            parse_required("load", "inf").unwrap_err().error_code(),
            "INVALID_NUMERIC"
        );
        assert_eq!(
            parse_required("load", "NaN").unwrap_err().error_code(),
            "INVALID_NUMERIC"
        );
    }

    #[test]
    fn test_parse_positive_rejects_zero_and_negative() {
        assert_eq!(
            parse_positive("fos", "0").unwrap_err().error_code(),
            "OUT_OF_RANGE"
        );
        assert_eq!(
            parse_positive("fos", "-2").unwrap_err().error_code(),
            "OUT_OF_RANGE"
        );
        assert_eq!(parse_positive("fos", "2").unwrap(), 2.0);
    }

    #[test]
    fn test_parse_optional_blank_is_none() {
        assert_eq!(parse_optional("area", "").unwrap(), None);
        assert_eq!(parse_optional("area", "  ").unwrap(), None);
        assert_eq!(parse_optional("area", "78.54").unwrap(), Some(78.54));
    }

    #[test]
    fn test_parse_optional_garbage_still_rejects() {
        let err = parse_optional("area", "abc").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_NUMERIC");
    }

    #[test]
    fn test_parse_optional_or_substitutes_default() {
        assert_eq!(
            parse_optional_or("steel_specific_weight", "", 7.85).unwrap(),
            7.85
        );
        assert_eq!(
            parse_optional_or("steel_specific_weight", "8.0", 7.85).unwrap(),
            8.0
        );
    }

    #[test]
    fn test_require_positive_on_typed_values() {
        assert!(require_positive("width_cm", 40.0).is_ok());
        assert!(require_positive("width_cm", 0.0).is_err());
        assert!(require_positive("width_cm", f64::NAN).is_err());
    }
}
