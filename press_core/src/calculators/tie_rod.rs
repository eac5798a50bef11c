//! # Tie-Rod & Thread Load Calculation
//!
//! Safe working load of a press tie rod at its working stress:
//!
//! ```text
//! Load (Tons) = (Area × Working Stress) / (FOS × 1000)
//! ```
//!
//! The cross-sectional area may be entered directly (threads and steps
//! reduce the nominal section) or derived from the rod diameter.
//! Resolution order: a supplied area wins; otherwise the area comes from
//! the diameter; with neither, the input is rejected.
//!
//! ## Example
//!
//! ```rust
//! use press_core::calculators::tie_rod::{calculate, TieRodInput};
//!
//! let input = TieRodInput {
//!     tie_rod_diameter_cm: Some(10.0),
//!     area_cm2: None,
//!     working_stress_kg_cm2: 1500.0,
//!     factor_of_safety: 2.0,
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.load_tons - 58.9049).abs() < 0.0001);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::fields;
use crate::geometry::circle_area;
use crate::units::KGF_PER_TON;

/// Raw field strings for a tie-rod calculation. Either the diameter or
/// the area must be filled in; the area field wins when both are.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TieRodForm {
    pub tie_rod_diameter: String,
    pub area: String,
    pub working_stress: String,
    pub fos: String,
}

impl TieRodForm {
    /// Parse and validate the raw fields into a typed input.
    pub fn parse(&self) -> CalcResult<TieRodInput> {
        Ok(TieRodInput {
            tie_rod_diameter_cm: fields::parse_optional_positive(
                "tie_rod_diameter_cm",
                &self.tie_rod_diameter,
            )?,
            area_cm2: fields::parse_optional_positive("area_cm2", &self.area)?,
            working_stress_kg_cm2: fields::parse_positive(
                "working_stress_kg_cm2",
                &self.working_stress,
            )?,
            factor_of_safety: fields::parse_positive("factor_of_safety", &self.fos)?,
        })
    }
}

/// Input parameters for a tie-rod load calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "tie_rod_diameter_cm": 10.0,
///   "area_cm2": null,
///   "working_stress_kg_cm2": 1500.0,
///   "factor_of_safety": 2.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieRodInput {
    /// Tie rod diameter in cm; optional when the area is given directly
    #[serde(default)]
    pub tie_rod_diameter_cm: Option<f64>,

    /// Cross-sectional area in cm²; overrides the diameter-derived area
    #[serde(default)]
    pub area_cm2: Option<f64>,

    /// Allowable working stress in kg/cm²
    pub working_stress_kg_cm2: f64,

    /// Factor of safety (must be > 0)
    pub factor_of_safety: f64,
}

impl TieRodInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.tie_rod_diameter_cm.is_none() && self.area_cm2.is_none() {
            return Err(CalcError::missing_input("tie_rod_diameter_cm"));
        }
        if let Some(diameter) = self.tie_rod_diameter_cm {
            fields::require_positive("tie_rod_diameter_cm", diameter)?;
        }
        if let Some(area) = self.area_cm2 {
            fields::require_positive("area_cm2", area)?;
        }
        fields::require_positive("working_stress_kg_cm2", self.working_stress_kg_cm2)?;
        fields::require_positive("factor_of_safety", self.factor_of_safety)?;
        Ok(())
    }

    /// The area the load formula uses: supplied value wins, else derived
    /// from the diameter.
    pub fn resolved_area_cm2(&self) -> CalcResult<f64> {
        if let Some(area) = self.area_cm2 {
            return Ok(area);
        }
        match self.tie_rod_diameter_cm {
            Some(diameter) => Ok(circle_area(diameter)),
            None => Err(CalcError::missing_input("tie_rod_diameter_cm")),
        }
    }
}

/// Results from a tie-rod load calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieRodResult {
    /// Area used by the load formula, in cm²
    pub area_cm2: f64,

    /// Safe working load in tons
    pub load_tons: f64,
}

/// Calculate the tie-rod safe working load.
///
/// # Arguments
///
/// * `input` - Rod section, working stress, and factor of safety
///
/// # Returns
///
/// * `Ok(TieRodResult)` - Calculation results
/// * `Err(CalcError)` - If inputs are invalid
pub fn calculate(input: &TieRodInput) -> CalcResult<TieRodResult> {
    input.validate()?;

    let area_cm2 = input.resolved_area_cm2()?;
    let load_tons =
        (area_cm2 * input.working_stress_kg_cm2) / (input.factor_of_safety * KGF_PER_TON);

    Ok(TieRodResult {
        area_cm2,
        load_tons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> TieRodInput {
        TieRodInput {
            tie_rod_diameter_cm: Some(10.0),
            area_cm2: None,
            working_stress_kg_cm2: 1500.0,
            factor_of_safety: 2.0,
        }
    }

    #[test]
    fn test_load_from_diameter() {
        let result = calculate(&test_input()).unwrap();

        // A = π × 25 = 78.5398 cm²
        assert!((result.area_cm2 - 78.5398).abs() < 0.0001);
        // Load = 78.5398 × 1500 / (2 × 1000) = 58.9049 tons
        assert!((result.load_tons - 58.9049).abs() < 0.0001);
    }

    #[test]
    fn test_explicit_area_overrides_diameter() {
        let mut input = test_input();
        input.area_cm2 = Some(60.0);
        let result = calculate(&input).unwrap();

        assert_eq!(result.area_cm2, 60.0);
        // Load = 60 × 1500 / 2000 = 45 tons
        assert!((result.load_tons - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_area_alone_is_sufficient() {
        let input = TieRodInput {
            tie_rod_diameter_cm: None,
            area_cm2: Some(78.5398),
            working_stress_kg_cm2: 1500.0,
            factor_of_safety: 2.0,
        };
        let result = calculate(&input).unwrap();
        assert!((result.load_tons - 58.9049).abs() < 0.001);
    }

    #[test]
    fn test_neither_diameter_nor_area_rejected() {
        let input = TieRodInput {
            tie_rod_diameter_cm: None,
            area_cm2: None,
            working_stress_kg_cm2: 1500.0,
            factor_of_safety: 2.0,
        };
        assert_eq!(
            calculate(&input).unwrap_err().error_code(),
            "MISSING_INPUT"
        );
    }

    #[test]
    fn test_zero_fos_rejected() {
        let mut input = test_input();
        input.factor_of_safety = 0.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE");
        assert_eq!(err.field(), Some("factor_of_safety"));
    }

    #[test]
    fn test_form_parse_with_blank_area() {
        let form = TieRodForm {
            tie_rod_diameter: "10".to_string(),
            area: "".to_string(),
            working_stress: "1500".to_string(),
            fos: "2".to_string(),
        };
        assert_eq!(form.parse().unwrap(), test_input());
    }

    #[test]
    fn test_form_rejects_non_numeric_fos() {
        let form = TieRodForm {
            tie_rod_diameter: "10".to_string(),
            area: "".to_string(),
            working_stress: "1500".to_string(),
            fos: "two".to_string(),
        };
        assert_eq!(form.parse().unwrap_err().error_code(), "INVALID_NUMERIC");
    }

    #[test]
    fn test_idempotent() {
        let input = test_input();
        assert_eq!(calculate(&input).unwrap(), calculate(&input).unwrap());
    }

    #[test]
    fn test_serialization() {
        let input = test_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: TieRodInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
