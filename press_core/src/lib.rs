//! # press_core - Hydraulic Press Sizing Calculation Engine
//!
//! `press_core` is the computational heart of PressCalc, sizing the major
//! components of a hydraulic press with a clean, LLM-friendly API. All inputs
//! and outputs are JSON-serializable, making it ideal for integration with AI
//! assistants via MCP or similar protocols.
//!
//! Calculations use the metric worksheet units of the press shop: cm for
//! dimensions, cm² for areas, kg/cm² for pressures, m/min for speeds, LPM for
//! flows, and metric tons for forces.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Well-Documented**: Every type and function has examples
//!
//! ## Quick Start
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
//!
//! ## Modules
//!
//! - [`calculators`] - The six press sizing calculators
//! - [`geometry`] - Circle, annulus, and volume primitives
//! - [`units`] - Worksheet unit constants and conversions
//! - [`sizing`] - Component sizing tables and the reference policy
//! - [`report`] - Export records and CSV rendering
//! - [`pdf`] - PDF report rendering via Typst
//! - [`fields`] - Raw form-field parsing
//! - [`errors`] - Structured error types

pub mod calculators;
pub mod errors;
pub mod fields;
pub mod geometry;
pub mod pdf;
pub mod report;
pub mod sizing;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculators::CalculatorKind;
pub use errors::{CalcError, CalcResult};
pub use report::{ExportRecord, JobDetails};
pub use sizing::{reference_policy, SizingPolicy};
