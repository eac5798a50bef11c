//! # Pump Flow & Motor Power Calculation
//!
//! Sizes the pump and drive motor for a cylinder duty:
//!
//! ```text
//! Q_in  = A_bore × v / 10           (LPM)
//! Q_out = A_annulus × v / 10        (LPM, rod-side return)
//! P     = p × Q_in / 450            (metric hp)
//! ```
//!
//! The rod diameter is optional. Without it there is no differential
//! area and the return flow equals the inlet flow.
//!
//! ## Example
//!
//! ```rust
//! use press_core::calculators::pump_flow::{calculate, PumpFlowInput};
//!
//! let input = PumpFlowInput {
//!     cylinder_diameter_cm: 20.0,
//!     rod_diameter_cm: Some(14.0),
//!     stroke_speed_m_min: 5.0,
//!     system_pressure_kg_cm2: 200.0,
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.inlet_flow_lpm - 157.08).abs() < 0.01);
//! assert!((result.motor_power_hp - 69.81).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::fields;
use crate::geometry::{annulus_area, circle_area};
use crate::units;

/// Raw field strings for a pump flow calculation. The rod diameter may
/// be left blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PumpFlowForm {
    pub cylinder_diameter: String,
    pub rod_diameter: String,
    pub stroke_speed: String,
    pub system_pressure: String,
}

impl PumpFlowForm {
    /// Parse and validate the raw fields into a typed input.
    pub fn parse(&self) -> CalcResult<PumpFlowInput> {
        Ok(PumpFlowInput {
            cylinder_diameter_cm: fields::parse_positive(
                "cylinder_diameter_cm",
                &self.cylinder_diameter,
            )?,
            rod_diameter_cm: fields::parse_optional_positive(
                "rod_diameter_cm",
                &self.rod_diameter,
            )?,
            stroke_speed_m_min: fields::parse_positive("stroke_speed_m_min", &self.stroke_speed)?,
            system_pressure_kg_cm2: fields::parse_positive(
                "system_pressure_kg_cm2",
                &self.system_pressure,
            )?,
        })
    }
}

/// Input parameters for pump flow and motor power sizing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cylinder_diameter_cm": 20.0,
///   "rod_diameter_cm": 14.0,
///   "stroke_speed_m_min": 5.0,
///   "system_pressure_kg_cm2": 200.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpFlowInput {
    /// Cylinder bore diameter in cm
    pub cylinder_diameter_cm: f64,

    /// Piston rod diameter in cm; `None` means no differential area
    #[serde(default)]
    pub rod_diameter_cm: Option<f64>,

    /// Stroke speed in m/min
    pub stroke_speed_m_min: f64,

    /// System working pressure in kg/cm²
    pub system_pressure_kg_cm2: f64,
}

impl PumpFlowInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        fields::require_positive("cylinder_diameter_cm", self.cylinder_diameter_cm)?;
        fields::require_positive("stroke_speed_m_min", self.stroke_speed_m_min)?;
        fields::require_positive("system_pressure_kg_cm2", self.system_pressure_kg_cm2)?;
        if let Some(rod) = self.rod_diameter_cm {
            fields::require_positive("rod_diameter_cm", rod)?;
            if rod >= self.cylinder_diameter_cm {
                return Err(CalcError::out_of_range(
                    "rod_diameter_cm",
                    rod.to_string(),
                    "Rod diameter must be smaller than the bore diameter",
                ));
            }
        }
        Ok(())
    }

    /// Rod-side return area: annulus when a rod is given, else the full
    /// bore.
    pub fn return_area_cm2(&self) -> f64 {
        match self.rod_diameter_cm {
            Some(rod) => annulus_area(self.cylinder_diameter_cm, rod),
            None => circle_area(self.cylinder_diameter_cm),
        }
    }
}

/// Results from pump flow and motor power sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpFlowResult {
    /// Bore area in cm²
    pub bore_area_cm2: f64,

    /// Rod-side return area in cm²
    pub annulus_area_cm2: f64,

    /// Pump delivery to the bore side in LPM
    pub inlet_flow_lpm: f64,

    /// Rod-side return flow in LPM
    pub outlet_flow_lpm: f64,

    /// Required motor power in metric hp
    pub motor_power_hp: f64,
}

/// Calculate pump flow and motor power.
///
/// # Arguments
///
/// * `input` - Cylinder geometry, stroke speed, and system pressure
///
/// # Returns
///
/// * `Ok(PumpFlowResult)` - Calculation results
/// * `Err(CalcError)` - If inputs are invalid
pub fn calculate(input: &PumpFlowInput) -> CalcResult<PumpFlowResult> {
    input.validate()?;

    let bore_area_cm2 = circle_area(input.cylinder_diameter_cm);
    let annulus_area_cm2 = input.return_area_cm2();
    let inlet_flow_lpm = units::cylinder_flow_lpm(bore_area_cm2, input.stroke_speed_m_min);
    let outlet_flow_lpm = units::cylinder_flow_lpm(annulus_area_cm2, input.stroke_speed_m_min);

    Ok(PumpFlowResult {
        bore_area_cm2,
        annulus_area_cm2,
        inlet_flow_lpm,
        outlet_flow_lpm,
        motor_power_hp: units::hydraulic_horsepower(input.system_pressure_kg_cm2, inlet_flow_lpm),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> PumpFlowInput {
        PumpFlowInput {
            cylinder_diameter_cm: 20.0,
            rod_diameter_cm: Some(14.0),
            stroke_speed_m_min: 5.0,
            system_pressure_kg_cm2: 200.0,
        }
    }

    #[test]
    fn test_flow_calculation() {
        let result = calculate(&test_input()).unwrap();

        // A_bore = π × 100 = 314.159 cm², Q_in = 314.159 × 5 / 10 = 157.08
        assert!((result.bore_area_cm2 - 314.159).abs() < 0.001);
        assert!((result.inlet_flow_lpm - 157.0796).abs() < 0.001);

        // A_annulus = π(100 − 49) = 160.221 cm², Q_out = 80.11
        assert!((result.annulus_area_cm2 - 160.221).abs() < 0.001);
        assert!((result.outlet_flow_lpm - 80.1106).abs() < 0.001);
    }

    #[test]
    fn test_motor_power() {
        let result = calculate(&test_input()).unwrap();
        // P = 200 × 157.0796 / 450 = 69.813 hp
        assert!((result.motor_power_hp - 69.8132).abs() < 0.001);
    }

    #[test]
    fn test_no_rod_means_symmetric_flow() {
        let mut input = test_input();
        input.rod_diameter_cm = None;
        let result = calculate(&input).unwrap();
        assert_eq!(result.inlet_flow_lpm, result.outlet_flow_lpm);
        assert_eq!(result.bore_area_cm2, result.annulus_area_cm2);
    }

    #[test]
    fn test_rod_must_fit_in_bore() {
        let mut input = test_input();
        input.rod_diameter_cm = Some(20.0);
        assert_eq!(calculate(&input).unwrap_err().error_code(), "OUT_OF_RANGE");
    }

    #[test]
    fn test_form_blank_rod_is_accepted() {
        let form = PumpFlowForm {
            cylinder_diameter: "20".to_string(),
            rod_diameter: "".to_string(),
            stroke_speed: "5".to_string(),
            system_pressure: "200".to_string(),
        };
        let input = form.parse().unwrap();
        assert_eq!(input.rod_diameter_cm, None);
    }

    #[test]
    fn test_form_rejects_blank_speed() {
        let form = PumpFlowForm {
            cylinder_diameter: "20".to_string(),
            rod_diameter: "14".to_string(),
            stroke_speed: "  ".to_string(),
            system_pressure: "200".to_string(),
        };
        assert_eq!(form.parse().unwrap_err().error_code(), "MISSING_INPUT");
    }

    #[test]
    fn test_serialization() {
        let input = test_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: PumpFlowInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
