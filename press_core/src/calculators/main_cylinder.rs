//! # Main Cylinder Assembly Calculation
//!
//! Works a main press cylinder through its three motion phases and sizes
//! the components around it. Fast approach and pressing drive the bore
//! side; reverse drives the rod-side annulus. The bore fills and
//! exhausts through the prefill valve during fast approach and reverse,
//! so the prefill valve is sized on the peak bore-side flow while the
//! ports see the remaining flows.
//!
//! ## Example
//!
//! ```rust
//! use press_core::calculators::main_cylinder::{calculate, MainCylinderInput};
//! use press_core::sizing;
//!
//! let input = MainCylinderInput {
//!     bore_diameter_cm: 40.0,
//!     rod_diameter_cm: 28.0,
//!     fast_approach_speed_m_min: 8.0,
//!     pressing_speed_m_min: 1.2,
//!     reverse_speed_m_min: 6.0,
//!     fast_approach_pressure_kg_cm2: 40.0,
//!     pressing_pressure_kg_cm2: 250.0,
//!     reverse_pressure_kg_cm2: 140.0,
//! };
//! let result = calculate(&input, sizing::reference_policy()).unwrap();
//! assert!((result.pressing.force_tons - 314.159).abs() < 0.001);
//! assert_eq!(result.prefill_valve_size, "DN 100");
//! ```

use serde::{Deserialize, Serialize};

use crate::calculators::phases::CylinderPhase;
use crate::errors::{CalcError, CalcResult};
use crate::fields;
use crate::geometry::{annulus_area, circle_area};
use crate::sizing::SizingPolicy;

/// Raw field strings for a main cylinder calculation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MainCylinderForm {
    pub bore_diameter: String,
    pub rod_diameter: String,
    pub fast_approach_speed: String,
    pub pressing_speed: String,
    pub reverse_speed: String,
    pub fast_approach_pressure: String,
    pub pressing_pressure: String,
    pub reverse_pressure: String,
}

impl MainCylinderForm {
    /// Parse and validate the raw fields into a typed input.
    pub fn parse(&self) -> CalcResult<MainCylinderInput> {
        Ok(MainCylinderInput {
            bore_diameter_cm: fields::parse_positive("bore_diameter_cm", &self.bore_diameter)?,
            rod_diameter_cm: fields::parse_positive("rod_diameter_cm", &self.rod_diameter)?,
            fast_approach_speed_m_min: fields::parse_positive(
                "fast_approach_speed_m_min",
                &self.fast_approach_speed,
            )?,
            pressing_speed_m_min: fields::parse_positive(
                "pressing_speed_m_min",
                &self.pressing_speed,
            )?,
            reverse_speed_m_min: fields::parse_positive(
                "reverse_speed_m_min",
                &self.reverse_speed,
            )?,
            fast_approach_pressure_kg_cm2: fields::parse_positive(
                "fast_approach_pressure_kg_cm2",
                &self.fast_approach_pressure,
            )?,
            pressing_pressure_kg_cm2: fields::parse_positive(
                "pressing_pressure_kg_cm2",
                &self.pressing_pressure,
            )?,
            reverse_pressure_kg_cm2: fields::parse_positive(
                "reverse_pressure_kg_cm2",
                &self.reverse_pressure,
            )?,
        })
    }
}

/// Input parameters for a main cylinder assembly calculation: one shared
/// cylinder geometry plus per-phase speeds and pressures.
///
/// ## JSON Example
///
/// ```json
/// {
///   "bore_diameter_cm": 40.0,
///   "rod_diameter_cm": 28.0,
///   "fast_approach_speed_m_min": 8.0,
///   "pressing_speed_m_min": 1.2,
///   "reverse_speed_m_min": 6.0,
///   "fast_approach_pressure_kg_cm2": 40.0,
///   "pressing_pressure_kg_cm2": 250.0,
///   "reverse_pressure_kg_cm2": 140.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainCylinderInput {
    /// Cylinder bore diameter in cm
    pub bore_diameter_cm: f64,

    /// Piston rod diameter in cm (must be smaller than the bore)
    pub rod_diameter_cm: f64,

    /// Fast approach speed in m/min
    pub fast_approach_speed_m_min: f64,

    /// Pressing speed in m/min
    pub pressing_speed_m_min: f64,

    /// Reverse (return) speed in m/min
    pub reverse_speed_m_min: f64,

    /// Pressure during fast approach in kg/cm²
    pub fast_approach_pressure_kg_cm2: f64,

    /// Pressure during pressing in kg/cm²
    pub pressing_pressure_kg_cm2: f64,

    /// Pressure during reverse in kg/cm²
    pub reverse_pressure_kg_cm2: f64,
}

impl MainCylinderInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        fields::require_positive("bore_diameter_cm", self.bore_diameter_cm)?;
        fields::require_positive("rod_diameter_cm", self.rod_diameter_cm)?;
        if self.rod_diameter_cm >= self.bore_diameter_cm {
            return Err(CalcError::out_of_range(
                "rod_diameter_cm",
                self.rod_diameter_cm.to_string(),
                "Rod diameter must be smaller than the bore diameter",
            ));
        }
        fields::require_positive(
            "fast_approach_speed_m_min",
            self.fast_approach_speed_m_min,
        )?;
        fields::require_positive("pressing_speed_m_min", self.pressing_speed_m_min)?;
        fields::require_positive("reverse_speed_m_min", self.reverse_speed_m_min)?;
        fields::require_positive(
            "fast_approach_pressure_kg_cm2",
            self.fast_approach_pressure_kg_cm2,
        )?;
        fields::require_positive("pressing_pressure_kg_cm2", self.pressing_pressure_kg_cm2)?;
        fields::require_positive("reverse_pressure_kg_cm2", self.reverse_pressure_kg_cm2)?;
        Ok(())
    }

    /// Bore-side piston area in cm².
    pub fn bore_area_cm2(&self) -> f64 {
        circle_area(self.bore_diameter_cm)
    }

    /// Rod-side annulus area in cm².
    pub fn annulus_area_cm2(&self) -> f64 {
        annulus_area(self.bore_diameter_cm, self.rod_diameter_cm)
    }
}

/// Results from a main cylinder assembly calculation.
///
/// The three phases carry the full per-phase numbers; the size fields are
/// the assembly-level recommendations from the sizing policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainCylinderResult {
    pub fast_approach: CylinderPhase,
    pub pressing: CylinderPhase,
    pub reverse: CylinderPhase,

    /// Recommended prefill valve nominal size
    pub prefill_valve_size: String,

    /// Recommended cylinder port size
    pub cylinder_port_size: String,

    /// Recommended pipe block size
    pub pipe_block_size: String,
}

impl MainCylinderResult {
    /// The three phases in cycle order.
    pub fn phases(&self) -> [&CylinderPhase; 3] {
        [&self.fast_approach, &self.pressing, &self.reverse]
    }

    /// The largest phase force in tons (the pressing force on any normal
    /// duty).
    pub fn peak_force_tons(&self) -> f64 {
        self.phases()
            .iter()
            .map(|phase| phase.force_tons)
            .fold(0.0, f64::max)
    }

    /// The largest flow any phase moves, in LPM.
    pub fn peak_flow_lpm(&self) -> f64 {
        self.phases()
            .iter()
            .map(|phase| phase.peak_flow_lpm())
            .fold(0.0, f64::max)
    }
}

/// Calculate the three motion phases and component recommendations for a
/// main cylinder assembly.
///
/// # Arguments
///
/// * `input` - Cylinder geometry and per-phase duty
/// * `policy` - Sizing tables for the recommendations
///   ([`crate::sizing::reference_policy`] for the catalog defaults)
///
/// # Returns
///
/// * `Ok(MainCylinderResult)` - Phase results plus recommendations
/// * `Err(CalcError)` - If inputs are invalid
pub fn calculate(
    input: &MainCylinderInput,
    policy: &SizingPolicy,
) -> CalcResult<MainCylinderResult> {
    input.validate()?;

    let bore = input.bore_area_cm2();
    let annulus = input.annulus_area_cm2();

    let fast_approach = CylinderPhase::compute(
        "Fast Approach",
        input.bore_diameter_cm,
        bore,
        bore,
        annulus,
        input.fast_approach_speed_m_min,
        input.fast_approach_pressure_kg_cm2,
    );
    let pressing = CylinderPhase::compute(
        "Pressing",
        input.bore_diameter_cm,
        bore,
        bore,
        annulus,
        input.pressing_speed_m_min,
        input.pressing_pressure_kg_cm2,
    );
    let reverse = CylinderPhase::compute(
        "Reverse",
        input.bore_diameter_cm,
        annulus,
        annulus,
        bore,
        input.reverse_speed_m_min,
        input.reverse_pressure_kg_cm2,
    );

    // Bore-side oil moves through the prefill valve during fast approach
    // (fill) and reverse (exhaust); the ports carry everything else.
    let prefill_flow_lpm = fast_approach.inlet_flow_lpm.max(reverse.outlet_flow_lpm);
    let port_flow_lpm = [
        fast_approach.outlet_flow_lpm,
        pressing.inlet_flow_lpm,
        pressing.outlet_flow_lpm,
        reverse.inlet_flow_lpm,
    ]
    .into_iter()
    .fold(0.0, f64::max);

    let peak_force_tons = [&fast_approach, &pressing, &reverse]
        .into_iter()
        .map(|phase| phase.force_tons)
        .fold(0.0, f64::max);

    Ok(MainCylinderResult {
        prefill_valve_size: policy.prefill_valve.classify(prefill_flow_lpm).to_string(),
        cylinder_port_size: policy.cylinder_port.classify(port_flow_lpm).to_string(),
        pipe_block_size: policy.pipe_block.classify(peak_force_tons).to_string(),
        fast_approach,
        pressing,
        reverse,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizing::reference_policy;

    fn test_input() -> MainCylinderInput {
        MainCylinderInput {
            bore_diameter_cm: 40.0,
            rod_diameter_cm: 28.0,
            fast_approach_speed_m_min: 8.0,
            pressing_speed_m_min: 1.2,
            reverse_speed_m_min: 6.0,
            fast_approach_pressure_kg_cm2: 40.0,
            pressing_pressure_kg_cm2: 250.0,
            reverse_pressure_kg_cm2: 140.0,
        }
    }

    #[test]
    fn test_phase_areas() {
        let input = test_input();
        // bore: π × 20² = 1256.637, annulus: π(20² − 14²) = π × 204 = 640.885
        assert!((input.bore_area_cm2() - 1256.637).abs() < 0.001);
        assert!((input.annulus_area_cm2() - 640.885).abs() < 0.001);
    }

    #[test]
    fn test_pressing_phase() {
        let result = calculate(&test_input(), reference_policy()).unwrap();

        // F = 1256.637 × 250 / 1000 = 314.159 tons
        assert!((result.pressing.force_tons - 314.159).abs() < 0.001);
        // Q_in = 1256.637 × 1.2 / 10 = 150.796
        assert!((result.pressing.inlet_flow_lpm - 150.796).abs() < 0.001);
        assert_eq!(result.pressing.description, "Pressing");
    }

    #[test]
    fn test_reverse_acts_on_annulus() {
        let input = test_input();
        let result = calculate(&input, reference_policy()).unwrap();

        assert!((result.reverse.area_cm2 - input.annulus_area_cm2()).abs() < 1e-9);
        // F = 640.885 × 140 / 1000 = 89.72 tons
        assert!((result.reverse.force_tons - 89.724).abs() < 0.001);
        // Bore side exhausts: Q_out = 1256.637 × 6 / 10 = 753.98
        assert!((result.reverse.outlet_flow_lpm - 753.982).abs() < 0.001);
    }

    #[test]
    fn test_each_phase_force_is_area_times_pressure() {
        let result = calculate(&test_input(), reference_policy()).unwrap();
        for phase in result.phases() {
            let expected = phase.area_cm2 * phase.pressure_kg_cm2 / 1000.0;
            assert!(
                (phase.force_tons - expected).abs() < 1e-9,
                "{}: force {} != A×p {}",
                phase.description,
                phase.force_tons,
                expected
            );
        }
    }

    #[test]
    fn test_recommended_sizes() {
        let result = calculate(&test_input(), reference_policy()).unwrap();

        // Peak bore-side flow is the fast approach fill: 1005.3 LPM
        assert_eq!(result.prefill_valve_size, "DN 100");
        // Peak port flow is the fast approach rod-side exhaust: 512.7 LPM
        assert_eq!(result.cylinder_port_size, "2\" BSP");
        // Peak force is the pressing 314.2 tons
        assert_eq!(result.pipe_block_size, "250 mm sq");
    }

    #[test]
    fn test_recommendations_deterministic() {
        let input = test_input();
        let first = calculate(&input, reference_policy()).unwrap();
        let second = calculate(&input, reference_policy()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rod_larger_than_bore_rejected() {
        let mut input = test_input();
        input.rod_diameter_cm = 40.0;
        let err = calculate(&input, reference_policy()).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE");
        assert_eq!(err.field(), Some("rod_diameter_cm"));
    }

    #[test]
    fn test_zero_pressing_pressure_rejected() {
        let mut input = test_input();
        input.pressing_pressure_kg_cm2 = 0.0;
        assert!(calculate(&input, reference_policy()).is_err());
    }

    #[test]
    fn test_form_parse() {
        let form = MainCylinderForm {
            bore_diameter: "40".to_string(),
            rod_diameter: "28".to_string(),
            fast_approach_speed: "8".to_string(),
            pressing_speed: "1.2".to_string(),
            reverse_speed: "6".to_string(),
            fast_approach_pressure: "40".to_string(),
            pressing_pressure: "250".to_string(),
            reverse_pressure: "140".to_string(),
        };
        assert_eq!(form.parse().unwrap(), test_input());
    }

    #[test]
    fn test_form_rejects_blank_reverse_speed() {
        let form = MainCylinderForm {
            bore_diameter: "40".to_string(),
            rod_diameter: "28".to_string(),
            fast_approach_speed: "8".to_string(),
            pressing_speed: "1.2".to_string(),
            reverse_speed: "".to_string(),
            fast_approach_pressure: "40".to_string(),
            pressing_pressure: "250".to_string(),
            reverse_pressure: "140".to_string(),
        };
        let err = form.parse().unwrap_err();
        assert_eq!(err.field(), Some("reverse_speed_m_min"));
    }

    #[test]
    fn test_serialization() {
        let input = test_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: MainCylinderInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        let result = calculate(&input, reference_policy()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: MainCylinderResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
