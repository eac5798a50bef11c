//! # Cylinder Motion Phases
//!
//! A press cylinder cycle has three motion phases (fast approach,
//! pressing, reverse), each with its own speed and pressure against the
//! cylinder's geometry. The main cylinder and die cushion calculators
//! both report one [`CylinderPhase`] per motion phase; the acting,
//! inlet, and outlet areas differ per phase depending on which side of
//! the piston is driven.

use serde::{Deserialize, Serialize};

use crate::units;

/// One computed motion phase of a cylinder cycle.
///
/// ## JSON Example
///
/// ```json
/// {
///   "description": "Pressing",
///   "cylinder_size_cm": 40.0,
///   "area_cm2": 1256.64,
///   "speed_m_min": 1.5,
///   "inlet_flow_lpm": 188.5,
///   "outlet_flow_lpm": 117.8,
///   "pressure_kg_cm2": 250.0,
///   "force_tons": 314.16
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CylinderPhase {
    /// Phase label (e.g. "Fast Approach", "Cushioning")
    pub description: String,

    /// Echoed cylinder bore diameter (cm)
    pub cylinder_size_cm: f64,

    /// Acting area producing this phase's force (cm²)
    pub area_cm2: f64,

    /// Phase stroke speed (m/min)
    pub speed_m_min: f64,

    /// Oil flow into the driven side (LPM)
    pub inlet_flow_lpm: f64,

    /// Oil flow out of the exhausting side (LPM)
    pub outlet_flow_lpm: f64,

    /// Phase working pressure (kg/cm²)
    pub pressure_kg_cm2: f64,

    /// Phase force: acting area × pressure, in tons
    pub force_tons: f64,
}

impl CylinderPhase {
    /// Compute a phase from its geometry and duty.
    ///
    /// `acting_area_cm2` is the pressurized area producing force;
    /// `inlet_area_cm2`/`outlet_area_cm2` are the piston sides being
    /// filled and exhausted, which determine the two flows at the phase
    /// speed.
    pub fn compute(
        description: impl Into<String>,
        cylinder_size_cm: f64,
        acting_area_cm2: f64,
        inlet_area_cm2: f64,
        outlet_area_cm2: f64,
        speed_m_min: f64,
        pressure_kg_cm2: f64,
    ) -> Self {
        CylinderPhase {
            description: description.into(),
            cylinder_size_cm,
            area_cm2: acting_area_cm2,
            speed_m_min,
            inlet_flow_lpm: units::cylinder_flow_lpm(inlet_area_cm2, speed_m_min),
            outlet_flow_lpm: units::cylinder_flow_lpm(outlet_area_cm2, speed_m_min),
            pressure_kg_cm2,
            force_tons: units::force_tons(acting_area_cm2, pressure_kg_cm2),
        }
    }

    /// The larger of the phase's two flows (LPM).
    pub fn peak_flow_lpm(&self) -> f64 {
        self.inlet_flow_lpm.max(self.outlet_flow_lpm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_force_is_area_times_pressure() {
        let phase = CylinderPhase::compute("Pressing", 40.0, 1256.64, 1256.64, 755.0, 1.5, 250.0);
        let expected = 1256.64 * 250.0 / 1000.0;
        assert!((phase.force_tons - expected).abs() < 1e-9);
    }

    #[test]
    fn test_phase_flows_follow_their_areas() {
        // bore 100 cm² driven at 10 m/min, annulus 60 cm² exhausting
        let phase = CylinderPhase::compute("Fast Approach", 11.3, 100.0, 100.0, 60.0, 10.0, 40.0);
        assert!((phase.inlet_flow_lpm - 100.0).abs() < 1e-9);
        assert!((phase.outlet_flow_lpm - 60.0).abs() < 1e-9);
        assert_eq!(phase.peak_flow_lpm(), phase.inlet_flow_lpm);
    }

    #[test]
    fn test_phase_serde_roundtrip() {
        let phase = CylinderPhase::compute("Reverse", 40.0, 755.0, 755.0, 1256.64, 6.0, 140.0);
        let json = serde_json::to_string(&phase).unwrap();
        let back: CylinderPhase = serde_json::from_str(&json).unwrap();
        assert_eq!(phase, back);
    }
}
