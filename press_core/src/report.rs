//! # Calculation Reports
//!
//! Flattens a calculator's input and result into an [`ExportRecord`]: a
//! titled sequence of labeled sections, each an ordered list of
//! label/value rows, plus the formulas the calculation used and the
//! [`JobDetails`] identifying the work order. The record is what the
//! export collaborators render: [`ExportRecord::to_csv`] here, the PDF
//! pipeline in [`crate::pdf`].
//!
//! The engine's calculators never build records themselves; a boundary
//! calls one of the `ExportRecord` constructors after a successful
//! calculation.
//!
//! ## Example
//!
//! ```rust
//! use press_core::calculators::tie_rod;
//! use press_core::report::{ExportRecord, JobDetails};
//!
//! let form = tie_rod::TieRodForm {
//!     tie_rod_diameter: "10".to_string(),
//!     area: "".to_string(),
//!     working_stress: "1500".to_string(),
//!     fos: "2".to_string(),
//! };
//! let input = form.parse().unwrap();
//! let result = tie_rod::calculate(&input).unwrap();
//!
//! let record = ExportRecord::tie_rod(&input, &result, JobDetails::default());
//! let csv = record.to_csv();
//! assert!(csv.contains("Load (Tons),58.9049"));
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculators::die_cushion::{DieCushionInput, DieCushionResult};
use crate::calculators::main_cylinder::{MainCylinderInput, MainCylinderResult};
use crate::calculators::phases::CylinderPhase;
use crate::calculators::plate::{PlateInput, PlateResult};
use crate::calculators::pump_flow::{PumpFlowInput, PumpFlowResult};
use crate::calculators::tie_rod::{TieRodInput, TieRodResult};
use crate::calculators::tonnage::{TonnageInput, TonnageResult};
use crate::calculators::CalculatorKind;

/// Work-order identity stamped on a report. All fields are free-form;
/// blanks render as fill-in lines on the printed report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDetails {
    /// Company name for the report header; empty hides the header band
    pub company: String,

    /// Customer the machine is built for
    pub customer_name: String,

    /// Machine name or designation
    pub machine_name: String,

    /// Works order number
    pub work_order: String,

    /// Assembly the calculation belongs to
    pub assembly_name: String,

    /// Report date; `None` leaves the date line blank for hand filling
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl JobDetails {
    /// True when every identity field is blank.
    pub fn is_blank(&self) -> bool {
        self.customer_name.trim().is_empty()
            && self.machine_name.trim().is_empty()
            && self.work_order.trim().is_empty()
            && self.assembly_name.trim().is_empty()
    }

    /// The identity fields with their report labels, in report order.
    pub fn labeled_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("Customer Name", self.customer_name.as_str()),
            ("Machine Name", self.machine_name.as_str()),
            ("WO. NO", self.work_order.as_str()),
            ("Assembly Name", self.assembly_name.as_str()),
        ]
    }
}

/// One label/value row of a report section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub label: String,
    pub value: String,
}

impl Row {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Row {
            label: label.into(),
            value: value.into(),
        }
    }

    /// A numeric row rendered with a fixed number of decimals.
    pub fn fixed(label: impl Into<String>, value: f64, decimals: usize) -> Self {
        Row::new(label, format!("{value:.decimals$}"))
    }
}

/// A titled group of rows (input parameters, one motion phase, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub rows: Vec<Row>,
}

impl Section {
    pub fn new(heading: impl Into<String>, rows: Vec<Row>) -> Self {
        Section {
            heading: heading.into(),
            rows,
        }
    }
}

/// A finished calculation flattened for export rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    /// Report title, e.g. "TIE ROD & THREAD CALCULATIONS"
    pub title: String,

    /// Work-order identity
    pub job: JobDetails,

    /// The formulas the calculation used, rendered verbatim
    pub formulas: Vec<String>,

    /// Ordered report sections
    pub sections: Vec<Section>,
}

fn echo(value: f64) -> String {
    format!("{value}")
}

fn echo_optional(value: Option<f64>) -> String {
    value.map(echo).unwrap_or_default()
}

fn phase_section(heading: &str, phase: &CylinderPhase) -> Section {
    Section::new(
        heading,
        vec![
            Row::new("Description", phase.description.clone()),
            Row::new("Cylinder Size (cm)", echo(phase.cylinder_size_cm)),
            Row::fixed("Area (cm²)", phase.area_cm2, 2),
            Row::new("Speed (m/min)", echo(phase.speed_m_min)),
            Row::fixed("Inlet Flow (LPM)", phase.inlet_flow_lpm, 2),
            Row::fixed("Outlet Flow (LPM)", phase.outlet_flow_lpm, 2),
            Row::new("Pressure (kg/cm²)", echo(phase.pressure_kg_cm2)),
            Row::fixed("Force (T)", phase.force_tons, 2),
        ],
    )
}

impl ExportRecord {
    /// Record for a press tonnage calculation.
    pub fn tonnage(input: &TonnageInput, result: &TonnageResult, job: JobDetails) -> Self {
        ExportRecord {
            title: CalculatorKind::Tonnage.report_title().to_string(),
            job,
            formulas: vec![
                "Area (cm²) = π × (Diameter / 2)²".to_string(),
                "Force (kgf) = Area × Pressure".to_string(),
                "Tonnage (T) = Force / 1000".to_string(),
            ],
            sections: vec![
                Section::new(
                    "INPUT PARAMETERS",
                    vec![
                        Row::new("Cylinder Diameter (cm)", echo(input.cylinder_diameter_cm)),
                        Row::new(
                            "System Pressure (kg/cm²)",
                            echo(input.system_pressure_kg_cm2),
                        ),
                    ],
                ),
                Section::new(
                    "CALCULATION RESULTS",
                    vec![
                        Row::fixed("Bore Area (cm²)", result.bore_area_cm2, 4),
                        Row::fixed("Force (kgf)", result.force_kgf, 2),
                        Row::fixed("Tonnage (T)", result.tonnage_tons, 4),
                    ],
                ),
            ],
        }
    }

    /// Record for a pump flow & motor power calculation.
    pub fn pump_flow(input: &PumpFlowInput, result: &PumpFlowResult, job: JobDetails) -> Self {
        ExportRecord {
            title: CalculatorKind::PumpFlow.report_title().to_string(),
            job,
            formulas: vec![
                "Flow (LPM) = Area × Speed / 10".to_string(),
                "Motor Power (HP) = Pressure × Flow / 450".to_string(),
            ],
            sections: vec![
                Section::new(
                    "INPUT PARAMETERS",
                    vec![
                        Row::new("Cylinder Diameter (cm)", echo(input.cylinder_diameter_cm)),
                        Row::new("Rod Diameter (cm)", echo_optional(input.rod_diameter_cm)),
                        Row::new("Stroke Speed (m/min)", echo(input.stroke_speed_m_min)),
                        Row::new(
                            "System Pressure (kg/cm²)",
                            echo(input.system_pressure_kg_cm2),
                        ),
                    ],
                ),
                Section::new(
                    "CALCULATION RESULTS",
                    vec![
                        Row::fixed("Bore Area (cm²)", result.bore_area_cm2, 4),
                        Row::fixed("Annulus Area (cm²)", result.annulus_area_cm2, 4),
                        Row::fixed("Inlet Flow (LPM)", result.inlet_flow_lpm, 2),
                        Row::fixed("Outlet Flow (LPM)", result.outlet_flow_lpm, 2),
                        Row::fixed("Motor Power (HP)", result.motor_power_hp, 2),
                    ],
                ),
            ],
        }
    }

    /// Record for a tie-rod load calculation.
    pub fn tie_rod(input: &TieRodInput, result: &TieRodResult, job: JobDetails) -> Self {
        ExportRecord {
            title: CalculatorKind::TieRod.report_title().to_string(),
            job,
            formulas: vec!["Load (Tons) = (Area × Working Stress) / (FOS × 1000)".to_string()],
            sections: vec![
                Section::new(
                    "INPUT PARAMETERS",
                    vec![
                        Row::new(
                            "Tie Rod Diameter (cm)",
                            echo_optional(input.tie_rod_diameter_cm),
                        ),
                        Row::fixed("Area (cm²)", result.area_cm2, 4),
                        Row::new(
                            "Working Stress (kg/cm²)",
                            echo(input.working_stress_kg_cm2),
                        ),
                        Row::new("Factor of Safety", echo(input.factor_of_safety)),
                    ],
                ),
                Section::new(
                    "CALCULATION RESULTS",
                    vec![Row::fixed("Load (Tons)", result.load_tons, 4)],
                ),
            ],
        }
    }

    /// Record for a plate weight & foundation calculation.
    pub fn plate(input: &PlateInput, result: &PlateResult, job: JobDetails) -> Self {
        ExportRecord {
            title: CalculatorKind::Plate.report_title().to_string(),
            job,
            formulas: vec![
                "Weight (W) = (Volume × Steel Specific Weight) / 1000".to_string(),
                "Bearing Pressure = Total Load / Load Bearing Area".to_string(),
            ],
            sections: vec![
                Section::new(
                    "INPUT PARAMETERS",
                    vec![
                        Row::new("Length (cm)", echo(input.length_cm)),
                        Row::new("Width (cm)", echo(input.width_cm)),
                        Row::new("Thickness (cm)", echo(input.thickness_cm)),
                        Row::new(
                            "Steel Specific Weight (kg/cm³)",
                            echo(input.steel_specific_weight),
                        ),
                        Row::new("Static Load (kgf)", echo(input.static_load_kgf)),
                        Row::new("Tool Weight (kgf)", echo(input.tool_weight_kgf)),
                    ],
                ),
                Section::new(
                    "CALCULATION RESULTS",
                    vec![
                        Row::fixed("Plate Volume (cm³)", result.volume_cm3, 2),
                        Row::fixed("Shaft Weight (kg)", result.shaft_weight_kg, 2),
                        Row::fixed("Dynamic Load (kgf)", result.dynamic_load_kgf, 2),
                        Row::fixed("Load Bearing Area (cm²)", result.load_bearing_area_cm2, 2),
                        Row::fixed("Total Load on Foundation (kgf)", result.total_load_kgf, 2),
                        Row::fixed(
                            "Bearing Pressure (kgf/cm²)",
                            result.bearing_pressure_kg_cm2,
                            2,
                        ),
                    ],
                ),
            ],
        }
    }

    /// Record for a main cylinder assembly calculation.
    pub fn main_cylinder(
        input: &MainCylinderInput,
        result: &MainCylinderResult,
        job: JobDetails,
    ) -> Self {
        ExportRecord {
            title: CalculatorKind::MainCylinder.report_title().to_string(),
            job,
            formulas: vec![
                "Area (cm²) = π × (Diameter / 2)²".to_string(),
                "Flow (LPM) = Area × Speed / 10".to_string(),
                "Force (T) = Area × Pressure / 1000".to_string(),
            ],
            sections: vec![
                Section::new(
                    "INPUT PARAMETERS",
                    vec![
                        Row::new("Bore Diameter (cm)", echo(input.bore_diameter_cm)),
                        Row::new("Rod Diameter (cm)", echo(input.rod_diameter_cm)),
                        Row::new(
                            "Fast Approach Speed (m/min)",
                            echo(input.fast_approach_speed_m_min),
                        ),
                        Row::new("Pressing Speed (m/min)", echo(input.pressing_speed_m_min)),
                        Row::new("Reverse Speed (m/min)", echo(input.reverse_speed_m_min)),
                        Row::new(
                            "Fast Approach Pressure (kg/cm²)",
                            echo(input.fast_approach_pressure_kg_cm2),
                        ),
                        Row::new(
                            "Pressing Pressure (kg/cm²)",
                            echo(input.pressing_pressure_kg_cm2),
                        ),
                        Row::new(
                            "Reverse Pressure (kg/cm²)",
                            echo(input.reverse_pressure_kg_cm2),
                        ),
                    ],
                ),
                phase_section("FAST APPROACH", &result.fast_approach),
                phase_section("PRESSING", &result.pressing),
                phase_section("REVERSE", &result.reverse),
                Section::new(
                    "RECOMMENDATIONS",
                    vec![
                        Row::new("Prefill Valve Size", result.prefill_valve_size.clone()),
                        Row::new("Cylinder Port Size", result.cylinder_port_size.clone()),
                        Row::new("Pipe Block Size", result.pipe_block_size.clone()),
                    ],
                ),
            ],
        }
    }

    /// Record for a die cushion calculation.
    pub fn die_cushion(
        input: &DieCushionInput,
        result: &DieCushionResult,
        job: JobDetails,
    ) -> Self {
        ExportRecord {
            title: CalculatorKind::DieCushion.report_title().to_string(),
            job,
            formulas: vec![
                "Area (cm²) = π × (Diameter / 2)²".to_string(),
                "Flow (LPM) = Area × Speed / 10".to_string(),
                "Force (T) = Area × Pressure / 1000".to_string(),
            ],
            sections: vec![
                Section::new(
                    "INPUT PARAMETERS",
                    vec![
                        Row::new("Bore Diameter (cm)", echo(input.bore_diameter_cm)),
                        Row::new("Rod Diameter (cm)", echo(input.rod_diameter_cm)),
                        Row::new("Cylinder Count", input.cylinder_count.to_string()),
                        Row::new(
                            "Pre-Acceleration Speed (m/min)",
                            echo(input.fast_approach_speed_m_min),
                        ),
                        Row::new(
                            "Cushioning Speed (m/min)",
                            echo(input.pressing_speed_m_min),
                        ),
                        Row::new("Return Speed (m/min)", echo(input.return_speed_m_min)),
                        Row::new(
                            "Pre-Acceleration Pressure (kg/cm²)",
                            echo(input.fast_approach_pressure_kg_cm2),
                        ),
                        Row::new("Back Pressure (kg/cm²)", echo(input.back_pressure_kg_cm2)),
                        Row::new(
                            "Return Pressure (kg/cm²)",
                            echo(input.return_pressure_kg_cm2),
                        ),
                    ],
                ),
                phase_section("PRE-ACCELERATION", &result.fast_approach),
                phase_section("CUSHIONING", &result.pressing),
                phase_section("RETURN", &result.reverse),
                Section::new(
                    "RECOMMENDATIONS",
                    vec![
                        Row::new("Cylinder Port Size", result.cylinder_port_size.clone()),
                        Row::new("Pipe Block Size", result.pipe_block_size.clone()),
                        Row::new("Relief Valve Size", result.relief_valve_size.clone()),
                    ],
                ),
            ],
        }
    }

    /// Render the record as CSV: company and date lines, title, customer
    /// details when present, formulas, the sections in order, and the
    /// signature block.
    pub fn to_csv(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        if !self.job.company.trim().is_empty() {
            lines.push(csv_field(&self.job.company));
            lines.push(String::new());
        }

        match self.job.date {
            Some(date) => lines.push(format!("DATE:,{date}")),
            None => lines.push("DATE:".to_string()),
        }
        lines.push(String::new());

        lines.push(csv_field(&self.title));
        lines.push(String::new());

        if !self.job.is_blank() {
            lines.push("CUSTOMER DETAILS".to_string());
            for (label, value) in self.job.labeled_fields() {
                lines.push(format!("{},{}", csv_field(label), csv_field(value)));
            }
            lines.push(String::new());
        }

        if !self.formulas.is_empty() {
            lines.push("FORMULAS USED".to_string());
            for formula in &self.formulas {
                lines.push(csv_field(formula));
            }
            lines.push(String::new());
        }

        for section in &self.sections {
            lines.push(csv_field(&section.heading));
            for row in &section.rows {
                lines.push(format!("{},{}", csv_field(&row.label), csv_field(&row.value)));
            }
            lines.push(String::new());
        }

        lines.push("Prepared By:,,Checked By:,,Approved By:".to_string());
        lines.push("Date:,,Date:,,Date:".to_string());

        lines.join("\n")
    }
}

/// Quote a CSV field when it contains a comma, quote, or newline.
fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
