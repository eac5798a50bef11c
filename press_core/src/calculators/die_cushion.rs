//! # Die Cushion Cylinder Calculation
//!
//! Sizes the cushion cylinders under the bolster through the same three
//! motion phases as the main cylinder, for a rod-up cushion resisting
//! the ram:
//!
//! - **Fast approach** (pre-acceleration): the rod side pulls the
//!   cushion down to match the ram before contact.
//! - **Pressing** (cushioning): the ram displaces the cushion, which
//!   resists on its bore area at the back-pressure setting; the bore
//!   side exhausts through the back-pressure relief valve.
//! - **Reverse** (return): the bore side drives the cushion back up.
//!
//! A cushion is usually a pair or quad of cylinders sharing the load;
//! phase areas are totals across the cylinder count, so force = area ×
//! pressure holds for the assembly as a whole.
//!
//! ## Example
//!
//! ```rust
//! use press_core::calculators::die_cushion::{calculate, DieCushionInput};
//! use press_core::sizing;
//!
//! let input = DieCushionInput {
//!     bore_diameter_cm: 18.0,
//!     rod_diameter_cm: 10.0,
//!     cylinder_count: 2,
//!     fast_approach_speed_m_min: 10.0,
//!     pressing_speed_m_min: 1.5,
//!     return_speed_m_min: 8.0,
//!     fast_approach_pressure_kg_cm2: 30.0,
//!     back_pressure_kg_cm2: 100.0,
//!     return_pressure_kg_cm2: 120.0,
//! };
//! let result = calculate(&input, sizing::reference_policy()).unwrap();
//! assert!((result.pressing.force_tons - 50.894).abs() < 0.001);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculators::phases::CylinderPhase;
use crate::errors::{CalcError, CalcResult};
use crate::fields;
use crate::geometry::{annulus_area, circle_area};
use crate::sizing::SizingPolicy;

fn default_cylinder_count() -> u32 {
    1
}

/// Raw field strings for a die cushion calculation. A blank cylinder
/// count means a single cylinder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DieCushionForm {
    pub bore_diameter: String,
    pub rod_diameter: String,
    pub cylinder_count: String,
    pub fast_approach_speed: String,
    pub pressing_speed: String,
    pub return_speed: String,
    pub fast_approach_pressure: String,
    pub back_pressure: String,
    pub return_pressure: String,
}

impl DieCushionForm {
    /// Parse and validate the raw fields into a typed input.
    pub fn parse(&self) -> CalcResult<DieCushionInput> {
        let cylinder_count = match fields::parse_optional_positive(
            "cylinder_count",
            &self.cylinder_count,
        )? {
            Some(count) if count.fract() != 0.0 => {
                return Err(CalcError::out_of_range(
                    "cylinder_count",
                    count.to_string(),
                    "Must be a whole number of cylinders",
                ));
            }
            Some(count) => count as u32,
            None => default_cylinder_count(),
        };

        Ok(DieCushionInput {
            bore_diameter_cm: fields::parse_positive("bore_diameter_cm", &self.bore_diameter)?,
            rod_diameter_cm: fields::parse_positive("rod_diameter_cm", &self.rod_diameter)?,
            cylinder_count,
            fast_approach_speed_m_min: fields::parse_positive(
                "fast_approach_speed_m_min",
                &self.fast_approach_speed,
            )?,
            pressing_speed_m_min: fields::parse_positive(
                "pressing_speed_m_min",
                &self.pressing_speed,
            )?,
            return_speed_m_min: fields::parse_positive("return_speed_m_min", &self.return_speed)?,
            fast_approach_pressure_kg_cm2: fields::parse_positive(
                "fast_approach_pressure_kg_cm2",
                &self.fast_approach_pressure,
            )?,
            back_pressure_kg_cm2: fields::parse_positive(
                "back_pressure_kg_cm2",
                &self.back_pressure,
            )?,
            return_pressure_kg_cm2: fields::parse_positive(
                "return_pressure_kg_cm2",
                &self.return_pressure,
            )?,
        })
    }
}

/// Input parameters for a die cushion calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "bore_diameter_cm": 18.0,
///   "rod_diameter_cm": 10.0,
///   "cylinder_count": 2,
///   "fast_approach_speed_m_min": 10.0,
///   "pressing_speed_m_min": 1.5,
///   "return_speed_m_min": 8.0,
///   "fast_approach_pressure_kg_cm2": 30.0,
///   "back_pressure_kg_cm2": 100.0,
///   "return_pressure_kg_cm2": 120.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DieCushionInput {
    /// Cushion cylinder bore diameter in cm
    pub bore_diameter_cm: f64,

    /// Piston rod diameter in cm (must be smaller than the bore)
    pub rod_diameter_cm: f64,

    /// Number of cushion cylinders sharing the load
    #[serde(default = "default_cylinder_count")]
    pub cylinder_count: u32,

    /// Pre-acceleration speed in m/min
    pub fast_approach_speed_m_min: f64,

    /// Cushioning (displacement) speed imposed by the ram in m/min
    pub pressing_speed_m_min: f64,

    /// Return speed in m/min
    pub return_speed_m_min: f64,

    /// Pressure during pre-acceleration in kg/cm²
    pub fast_approach_pressure_kg_cm2: f64,

    /// Back-pressure setting the cushion resists at, in kg/cm²
    pub back_pressure_kg_cm2: f64,

    /// Pressure during return in kg/cm²
    pub return_pressure_kg_cm2: f64,
}

impl DieCushionInput {
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
        if self.cylinder_count == 0 {
            return Err(CalcError::out_of_range(
                "cylinder_count",
                "0",
                "At least one cushion cylinder is required",
            ));
        }
        fields::require_positive(
            "fast_approach_speed_m_min",
            self.fast_approach_speed_m_min,
        )?;
        fields::require_positive("pressing_speed_m_min", self.pressing_speed_m_min)?;
        fields::require_positive("return_speed_m_min", self.return_speed_m_min)?;
        fields::require_positive(
            "fast_approach_pressure_kg_cm2",
            self.fast_approach_pressure_kg_cm2,
        )?;
        fields::require_positive("back_pressure_kg_cm2", self.back_pressure_kg_cm2)?;
        fields::require_positive("return_pressure_kg_cm2", self.return_pressure_kg_cm2)?;
        Ok(())
    }

    /// Total bore area across all cushion cylinders in cm².
    pub fn total_bore_area_cm2(&self) -> f64 {
        circle_area(self.bore_diameter_cm) * self.cylinder_count as f64
    }

    /// Total rod-side annulus area across all cushion cylinders in cm².
    pub fn total_annulus_area_cm2(&self) -> f64 {
        annulus_area(self.bore_diameter_cm, self.rod_diameter_cm) * self.cylinder_count as f64
    }
}

/// Results from a die cushion calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DieCushionResult {
    pub fast_approach: CylinderPhase,
    pub pressing: CylinderPhase,
    pub reverse: CylinderPhase,

    /// Recommended cushion port size
    pub cylinder_port_size: String,

    /// Recommended pipe block size
    pub pipe_block_size: String,

    /// Recommended back-pressure relief valve size
    pub relief_valve_size: String,
}

impl DieCushionResult {
    /// The three phases in cycle order.
    pub fn phases(&self) -> [&CylinderPhase; 3] {
        [&self.fast_approach, &self.pressing, &self.reverse]
    }

    /// The cushioning resistance in tons (the pressing-phase force).
    pub fn cushion_force_tons(&self) -> f64 {
        self.pressing.force_tons
    }
}

/// Calculate the three motion phases and component recommendations for a
/// die cushion.
///
/// # Arguments
///
/// * `input` - Cushion geometry, cylinder count, and per-phase duty
/// * `policy` - Sizing tables for the recommendations
///   ([`crate::sizing::reference_policy`] for the catalog defaults)
///
/// # Returns
///
/// * `Ok(DieCushionResult)` - Phase results plus recommendations
/// * `Err(CalcError)` - If inputs are invalid
pub fn calculate(input: &DieCushionInput, policy: &SizingPolicy) -> CalcResult<DieCushionResult> {
    input.validate()?;

    let bore = input.total_bore_area_cm2();
    let annulus = input.total_annulus_area_cm2();

    let fast_approach = CylinderPhase::compute(
        "Pre-Acceleration",
        input.bore_diameter_cm,
        annulus,
        annulus,
        bore,
        input.fast_approach_speed_m_min,
        input.fast_approach_pressure_kg_cm2,
    );
    let pressing = CylinderPhase::compute(
        "Cushioning",
        input.bore_diameter_cm,
        bore,
        annulus,
        bore,
        input.pressing_speed_m_min,
        input.back_pressure_kg_cm2,
    );
    let reverse = CylinderPhase::compute(
        "Return",
        input.bore_diameter_cm,
        bore,
        bore,
        annulus,
        input.return_speed_m_min,
        input.return_pressure_kg_cm2,
    );

    let port_flow_lpm = [&fast_approach, &pressing, &reverse]
        .into_iter()
        .map(|phase| phase.peak_flow_lpm())
        .fold(0.0, f64::max);
    let peak_force_tons = [&fast_approach, &pressing, &reverse]
        .into_iter()
        .map(|phase| phase.force_tons)
        .fold(0.0, f64::max);
    // The relief valve passes the bore oil the ram displaces while
    // cushioning.
    let relief_flow_lpm = pressing.outlet_flow_lpm;

    Ok(DieCushionResult {
        cylinder_port_size: policy.cylinder_port.classify(port_flow_lpm).to_string(),
        pipe_block_size: policy.pipe_block.classify(peak_force_tons).to_string(),
        relief_valve_size: policy.relief_valve.classify(relief_flow_lpm).to_string(),
        fast_approach,
        pressing,
        reverse,
    })
}
