//! # Press Sizing Calculations
//!
//! This module contains all press component calculators. Each calculator
//! follows the pattern:
//!
//! - `*Form` - Raw field strings as a boundary collects them
//! - `*Input` - Typed input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input[, policy]) -> Result<*Result, CalcError>` - Pure
//!   calculation function
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Calculations
//!
//! - [`tonnage`] - Press rated tonnage from bore and pressure
//! - [`pump_flow`] - Pump flow and motor power sizing
//! - [`tie_rod`] - Tie-rod & thread safe working load
//! - [`plate`] - Plate weight & foundation bearing pressure
//! - [`main_cylinder`] - Main cylinder assembly phases and valve/port sizing
//! - [`die_cushion`] - Die cushion cylinder phases and valve/port sizing

pub mod die_cushion;
pub mod main_cylinder;
pub mod phases;
pub mod plate;
pub mod pump_flow;
pub mod tie_rod;
pub mod tonnage;

use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export commonly used types
pub use die_cushion::{DieCushionForm, DieCushionInput, DieCushionResult};
pub use main_cylinder::{MainCylinderForm, MainCylinderInput, MainCylinderResult};
pub use phases::CylinderPhase;
pub use plate::{PlateForm, PlateInput, PlateResult};
pub use pump_flow::{PumpFlowForm, PumpFlowInput, PumpFlowResult};
pub use tie_rod::{TieRodForm, TieRodInput, TieRodResult};
pub use tonnage::{TonnageForm, TonnageInput, TonnageResult};

/// The calculators this suite offers, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculatorKind {
    Tonnage,
    PumpFlow,
    TieRod,
    Plate,
    MainCylinder,
    DieCushion,
}

impl CalculatorKind {
    /// All calculators in menu order.
    pub const ALL: [CalculatorKind; 6] = [
        CalculatorKind::Tonnage,
        CalculatorKind::PumpFlow,
        CalculatorKind::TieRod,
        CalculatorKind::Plate,
        CalculatorKind::MainCylinder,
        CalculatorKind::DieCushion,
    ];

    /// Menu title for this calculator.
    pub fn display_name(&self) -> &'static str {
        match self {
            CalculatorKind::Tonnage => "Tonnage Calculator",
            CalculatorKind::PumpFlow => "Pump Flow and Motor HP Calculator",
            CalculatorKind::TieRod => "Tie Rod & Step Dia Calculator",
            CalculatorKind::Plate => "Shaft or Plate Weight & Foundation Calculator",
            CalculatorKind::MainCylinder => "Main Cylinder Assembly Calculator",
            CalculatorKind::DieCushion => "Die Cushion Cylinders Calculator",
        }
    }

    /// Report title printed on this calculator's exports.
    pub fn report_title(&self) -> &'static str {
        match self {
            CalculatorKind::Tonnage => "PRESS TONNAGE CALCULATIONS",
            CalculatorKind::PumpFlow => "PUMP FLOW & MOTOR HP CALCULATIONS",
            CalculatorKind::TieRod => "TIE ROD & THREAD CALCULATIONS",
            CalculatorKind::Plate => "PLATE WEIGHT & FOUNDATION CALCULATIONS",
            CalculatorKind::MainCylinder => "MAIN CYLINDER ASSEMBLY CALCULATIONS",
            CalculatorKind::DieCushion => "DIE CUSHION CYLINDER CALCULATIONS",
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_complete_and_ordered() {
        assert_eq!(CalculatorKind::ALL.len(), 6);
        assert_eq!(CalculatorKind::ALL[0], CalculatorKind::Tonnage);
        assert_eq!(CalculatorKind::ALL[5], CalculatorKind::DieCushion);
    }

    #[test]
    fn test_display_names_are_distinct() {
        for (i, a) in CalculatorKind::ALL.iter().enumerate() {
            for b in &CalculatorKind::ALL[i + 1..] {
                assert_ne!(a.display_name(), b.display_name());
                assert_ne!(a.report_title(), b.report_title());
            }
        }
    }

    #[test]
    fn test_display_impl() {
        assert_eq!(
            CalculatorKind::TieRod.to_string(),
            "Tie Rod & Step Dia Calculator"
        );
    }
}
