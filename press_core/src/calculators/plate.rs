//! # Plate Weight & Foundation Calculation
//!
//! Weight of a bed/bolster plate and the bearing pressure the press
//! transmits to its foundation:
//!
//! ```text
//! V = l × w × t                         (cm³)
//! W = (V × specific weight) / 1000      (kg)
//! Total load = static + tool + dynamic  (kgf)
//! Bearing pressure = total / area       (kgf/cm²)
//! ```
//!
//! The dynamic-load allowance and foundation footprint are standardized
//! values from the reference worksheet and are compile-time constants
//! here, not inputs.
//!
//! ## Example
//!
//! ```rust
//! use press_core::calculators::plate::{calculate, PlateInput};
//!
//! let result = calculate(&PlateInput::new(50.0, 40.0, 5.0)).unwrap();
//! assert_eq!(result.volume_cm3, 10000.0);
//! assert_eq!(result.shaft_weight_kg, 78.5);
//! assert!((result.bearing_pressure_kg_cm2 - 2.9273).abs() < 0.0001);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::fields;
use crate::geometry::rectangular_volume;

/// Standardized impact-load allowance in kgf (reference worksheet value).
pub const DYNAMIC_LOAD_KGF: f64 = 600.0;

/// Standardized foundation footprint, length × width in cm (reference
/// worksheet values).
pub const FOUNDATION_LENGTH_CM: f64 = 110.0;
pub const FOUNDATION_WIDTH_CM: f64 = 50.0;

/// Load bearing area of the standardized footprint in cm².
pub const LOAD_BEARING_AREA_CM2: f64 = FOUNDATION_LENGTH_CM * FOUNDATION_WIDTH_CM;

/// Worksheet default specific weight of mild steel. The formula's /1000
/// normalizes the g/cm³ figure so the weight comes out in kg.
pub const DEFAULT_STEEL_SPECIFIC_WEIGHT: f64 = 7.85;

/// Worksheet default static load on the foundation in kgf.
pub const DEFAULT_STATIC_LOAD_KGF: f64 = 12500.0;

/// Worksheet default tool weight in kgf.
pub const DEFAULT_TOOL_WEIGHT_KGF: f64 = 3000.0;

fn default_steel_specific_weight() -> f64 {
    DEFAULT_STEEL_SPECIFIC_WEIGHT
}

fn default_static_load_kgf() -> f64 {
    DEFAULT_STATIC_LOAD_KGF
}

fn default_tool_weight_kgf() -> f64 {
    DEFAULT_TOOL_WEIGHT_KGF
}

/// Raw field strings for a plate calculation. The last three fields may
/// be left blank to take the worksheet defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlateForm {
    pub length: String,
    pub width: String,
    pub thickness: String,
    pub steel_specific_weight: String,
    pub static_load: String,
    pub tool_weight: String,
}

impl PlateForm {
    /// Parse and validate the raw fields into a typed input.
    pub fn parse(&self) -> CalcResult<PlateInput> {
        Ok(PlateInput {
            length_cm: fields::parse_positive("length_cm", &self.length)?,
            width_cm: fields::parse_positive("width_cm", &self.width)?,
            thickness_cm: fields::parse_positive("thickness_cm", &self.thickness)?,
            steel_specific_weight: fields::parse_optional_or(
                "steel_specific_weight",
                &self.steel_specific_weight,
                DEFAULT_STEEL_SPECIFIC_WEIGHT,
            )?,
            static_load_kgf: fields::parse_optional_or(
                "static_load_kgf",
                &self.static_load,
                DEFAULT_STATIC_LOAD_KGF,
            )?,
            tool_weight_kgf: fields::parse_optional_or(
                "tool_weight_kgf",
                &self.tool_weight,
                DEFAULT_TOOL_WEIGHT_KGF,
            )?,
        })
    }
}

/// Input parameters for a plate weight & foundation calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_cm": 50.0,
///   "width_cm": 40.0,
///   "thickness_cm": 5.0,
///   "steel_specific_weight": 7.85,
///   "static_load_kgf": 12500.0,
///   "tool_weight_kgf": 3000.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateInput {
    /// Plate length in cm
    pub length_cm: f64,

    /// Plate width in cm
    pub width_cm: f64,

    /// Plate thickness in cm
    pub thickness_cm: f64,

    /// Specific weight of the plate steel (worksheet default 7.85)
    #[serde(default = "default_steel_specific_weight")]
    pub steel_specific_weight: f64,

    /// Static load on the foundation in kgf (worksheet default 12500)
    #[serde(default = "default_static_load_kgf")]
    pub static_load_kgf: f64,

    /// Tool weight in kgf (worksheet default 3000)
    #[serde(default = "default_tool_weight_kgf")]
    pub tool_weight_kgf: f64,
}

impl PlateInput {
    /// Plate dimensions with the worksheet default loads and steel.
    pub fn new(length_cm: f64, width_cm: f64, thickness_cm: f64) -> Self {
        PlateInput {
            length_cm,
            width_cm,
            thickness_cm,
            steel_specific_weight: DEFAULT_STEEL_SPECIFIC_WEIGHT,
            static_load_kgf: DEFAULT_STATIC_LOAD_KGF,
            tool_weight_kgf: DEFAULT_TOOL_WEIGHT_KGF,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        fields::require_positive("length_cm", self.length_cm)?;
        fields::require_positive("width_cm", self.width_cm)?;
        fields::require_positive("thickness_cm", self.thickness_cm)?;
        fields::require_positive("steel_specific_weight", self.steel_specific_weight)?;
        // Loads may be zero (no tool mounted) but never negative
        fields::require_finite("static_load_kgf", self.static_load_kgf)?;
        if self.static_load_kgf < 0.0 {
            return Err(CalcError::out_of_range(
                "static_load_kgf",
                self.static_load_kgf.to_string(),
                "Load cannot be negative",
            ));
        }
        fields::require_finite("tool_weight_kgf", self.tool_weight_kgf)?;
        if self.tool_weight_kgf < 0.0 {
            return Err(CalcError::out_of_range(
                "tool_weight_kgf",
                self.tool_weight_kgf.to_string(),
                "Weight cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Results from a plate weight & foundation calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateResult {
    /// Plate volume in cm³
    pub volume_cm3: f64,

    /// Plate (shaft) weight in kg
    pub shaft_weight_kg: f64,

    /// Standardized dynamic load allowance in kgf
    pub dynamic_load_kgf: f64,

    /// Standardized foundation bearing area in cm²
    pub load_bearing_area_cm2: f64,

    /// Total load on the foundation in kgf
    pub total_load_kgf: f64,

    /// Bearing pressure on the foundation in kgf/cm²
    pub bearing_pressure_kg_cm2: f64,
}

/// Calculate plate weight and foundation bearing pressure.
///
/// # Arguments
///
/// * `input` - Plate dimensions, steel, and foundation loads
///
/// # Returns
///
/// * `Ok(PlateResult)` - Calculation results
/// * `Err(CalcError)` - If inputs are invalid
pub fn calculate(input: &PlateInput) -> CalcResult<PlateResult> {
    input.validate()?;

    let volume_cm3 = rectangular_volume(input.length_cm, input.width_cm, input.thickness_cm);
    let shaft_weight_kg = (volume_cm3 * input.steel_specific_weight) / 1000.0;
    let total_load_kgf = input.static_load_kgf + input.tool_weight_kgf + DYNAMIC_LOAD_KGF;

    Ok(PlateResult {
        volume_cm3,
        shaft_weight_kg,
        dynamic_load_kgf: DYNAMIC_LOAD_KGF,
        load_bearing_area_cm2: LOAD_BEARING_AREA_CM2,
        total_load_kgf,
        bearing_pressure_kg_cm2: total_load_kgf / LOAD_BEARING_AREA_CM2,
    })
}
