//! # Press Tonnage Calculation
//!
//! Rated output force of a press from its main cylinder bore and system
//! pressure:
//!
//! ```text
//! A = π × (d/2)²          (cm²)
//! F = A × p               (kgf)
//! tonnage = F / 1000      (tons)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use press_core::calculators::tonnage::{calculate, TonnageInput};
//!
//! let input = TonnageInput {
//!     cylinder_diameter_cm: 40.0,
//!     system_pressure_kg_cm2: 250.0,
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.tonnage_tons - 314.159).abs() < 0.001);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::fields;
use crate::geometry::circle_area;
use crate::units;

/// Raw field strings for a tonnage calculation, as collected by a form
/// boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TonnageForm {
    pub cylinder_diameter: String,
    pub system_pressure: String,
}

impl TonnageForm {
    /// Parse and validate the raw fields into a typed input.
    pub fn parse(&self) -> CalcResult<TonnageInput> {
        Ok(TonnageInput {
            cylinder_diameter_cm: fields::parse_positive(
                "cylinder_diameter_cm",
                &self.cylinder_diameter,
            )?,
            system_pressure_kg_cm2: fields::parse_positive(
                "system_pressure_kg_cm2",
                &self.system_pressure,
            )?,
        })
    }
}

/// Input parameters for a press tonnage calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cylinder_diameter_cm": 40.0,
///   "system_pressure_kg_cm2": 250.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TonnageInput {
    /// Main cylinder bore diameter in cm
    pub cylinder_diameter_cm: f64,

    /// System working pressure in kg/cm²
    pub system_pressure_kg_cm2: f64,
}

impl TonnageInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        fields::require_positive("cylinder_diameter_cm", self.cylinder_diameter_cm)?;
        fields::require_positive("system_pressure_kg_cm2", self.system_pressure_kg_cm2)?;
        Ok(())
    }
}

/// Results from a press tonnage calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TonnageResult {
    /// Bore area in cm²
    pub bore_area_cm2: f64,

    /// Cylinder force in kgf
    pub force_kgf: f64,

    /// Rated tonnage in metric tons
    pub tonnage_tons: f64,
}

/// Calculate press tonnage.
///
/// # Arguments
///
/// * `input` - Cylinder bore and system pressure
///
/// # Returns
///
/// * `Ok(TonnageResult)` - Calculation results
/// * `Err(CalcError)` - If inputs are invalid
pub fn calculate(input: &TonnageInput) -> CalcResult<TonnageResult> {
    input.validate()?;

    let bore_area_cm2 = circle_area(input.cylinder_diameter_cm);
    let force_kgf = bore_area_cm2 * input.system_pressure_kg_cm2;

    Ok(TonnageResult {
        bore_area_cm2,
        force_kgf,
        tonnage_tons: units::kgf_to_tons(force_kgf),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> TonnageInput {
        TonnageInput {
            cylinder_diameter_cm: 40.0,
            system_pressure_kg_cm2: 250.0,
        }
    }

    #[test]
    fn test_tonnage_calculation() {
        let result = calculate(&test_input()).unwrap();

        // A = π × 400 = 1256.637 cm²
        assert!((result.bore_area_cm2 - 1256.637).abs() < 0.001);
        // F = 1256.637 × 250 = 314159.27 kgf → 314.159 tons
        assert!((result.force_kgf - 314_159.27).abs() < 0.01);
        assert!((result.tonnage_tons - 314.159).abs() < 0.001);
    }

    #[test]
    fn test_tonnage_is_idempotent() {
        let input = test_input();
        let first = calculate(&input).unwrap();
        let second = calculate(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_form_parse() {
        let form = TonnageForm {
            cylinder_diameter: "40".to_string(),
            system_pressure: "250".to_string(),
        };
        assert_eq!(form.parse().unwrap(), test_input());
    }

    #[test]
    fn test_form_rejects_blank_diameter() {
        let form = TonnageForm {
            cylinder_diameter: "".to_string(),
            system_pressure: "250".to_string(),
        };
        assert_eq!(form.parse().unwrap_err().error_code(), "MISSING_INPUT");
    }

    #[test]
    fn test_form_rejects_non_numeric_pressure() {
        let form = TonnageForm {
            cylinder_diameter: "40".to_string(),
            system_pressure: "high".to_string(),
        };
        assert_eq!(form.parse().unwrap_err().error_code(), "INVALID_NUMERIC");
    }

    #[test]
    fn test_zero_diameter_rejected() {
        let mut input = test_input();
        input.cylinder_diameter_cm = 0.0;
        assert_eq!(
            calculate(&input).unwrap_err().error_code(),
            "OUT_OF_RANGE"
        );
    }

    #[test]
    fn test_serialization() {
        let input = test_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: TonnageInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
