//! # PressCalc CLI Application
//!
//! Terminal interface for the hydraulic press sizing calculators. Raw
//! field strings go straight to the engine forms; parsing, validation,
//! and every formula live in `press_core`.

use std::fs;
use std::io::{self, BufRead, Write};

use press_core::calculators::phases::CylinderPhase;
use press_core::calculators::{
    die_cushion, main_cylinder, plate, pump_flow, tie_rod, tonnage, CalculatorKind,
};
use press_core::pdf::render_report_pdf;
use press_core::report::{ExportRecord, JobDetails};
use press_core::sizing::reference_policy;
use press_core::{CalcError, CalcResult};

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

fn main() {
    println!("PressCalc CLI - Hydraulic Press Component Sizing");
    println!("================================================");

    loop {
        println!();
        for (i, kind) in CalculatorKind::ALL.iter().enumerate() {
            println!("  {}. {}", i + 1, kind.display_name());
        }
        println!("  q. Quit");
        println!();

        let choice = prompt_line("Select a calculator: ");
        let kind = match choice.as_str() {
            "1" => CalculatorKind::Tonnage,
            "2" => CalculatorKind::PumpFlow,
            "3" => CalculatorKind::TieRod,
            "4" => CalculatorKind::Plate,
            "5" => CalculatorKind::MainCylinder,
            "6" => CalculatorKind::DieCushion,
            "q" | "Q" | "" => break,
            other => {
                println!("Unknown selection '{}'", other);
                continue;
            }
        };

        run_calculator(kind);
    }
}

fn run_calculator(kind: CalculatorKind) {
    println!();
    println!("═══════════════════════════════════════");
    println!("  {}", kind.display_name());
    println!("═══════════════════════════════════════");
    println!();

    let outcome = match kind {
        CalculatorKind::Tonnage => run_tonnage(),
        CalculatorKind::PumpFlow => run_pump_flow(),
        CalculatorKind::TieRod => run_tie_rod(),
        CalculatorKind::Plate => run_plate(),
        CalculatorKind::MainCylinder => run_main_cylinder(),
        CalculatorKind::DieCushion => run_die_cushion(),
    };

    if let Err(e) = outcome {
        report_error(&e);
    }
}

fn report_error(e: &CalcError) {
    eprintln!("Error [{}]: {}", e.error_code(), e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn run_tonnage() -> CalcResult<()> {
    let form = tonnage::TonnageForm {
        cylinder_diameter: prompt_line("Cylinder diameter (cm): "),
        system_pressure: prompt_line("System pressure (kg/cm²): "),
    };
    let input = form.parse()?;
    let result = tonnage::calculate(&input)?;

    println!();
    println!("Bore Area: {:.4} cm²", result.bore_area_cm2);
    println!("Force:     {:.2} kgf", result.force_kgf);
    println!("Tonnage:   {:.4} T", result.tonnage_tons);

    print_json(&result);
    offer_export(|job| ExportRecord::tonnage(&input, &result, job))
}

fn run_pump_flow() -> CalcResult<()> {
    let form = pump_flow::PumpFlowForm {
        cylinder_diameter: prompt_line("Cylinder diameter (cm): "),
        rod_diameter: prompt_line("Rod diameter (cm) [none]: "),
        stroke_speed: prompt_line("Stroke speed (m/min): "),
        system_pressure: prompt_line("System pressure (kg/cm²): "),
    };
    let input = form.parse()?;
    let result = pump_flow::calculate(&input)?;

    println!();
    println!("Bore Area:    {:.4} cm²", result.bore_area_cm2);
    println!("Annulus Area: {:.4} cm²", result.annulus_area_cm2);
    println!("Inlet Flow:   {:.2} LPM", result.inlet_flow_lpm);
    println!("Outlet Flow:  {:.2} LPM", result.outlet_flow_lpm);
    println!("Motor Power:  {:.2} HP", result.motor_power_hp);

    print_json(&result);
    offer_export(|job| ExportRecord::pump_flow(&input, &result, job))
}

fn run_tie_rod() -> CalcResult<()> {
    let form = tie_rod::TieRodForm {
        tie_rod_diameter: prompt_line("Tie rod diameter (cm) [none]: "),
        area: prompt_line("Cross-section area (cm²) [from diameter]: "),
        working_stress: prompt_line("Working stress (kg/cm²): "),
        fos: prompt_line("Factor of safety: "),
    };
    let input = form.parse()?;
    let result = tie_rod::calculate(&input)?;

    println!();
    println!("Area: {:.4} cm²", result.area_cm2);
    println!("Load: {:.4} Tons", result.load_tons);

    print_json(&result);
    offer_export(|job| ExportRecord::tie_rod(&input, &result, job))
}

fn run_plate() -> CalcResult<()> {
    let form = plate::PlateForm {
        length: prompt_line("Plate length (cm): "),
        width: prompt_line("Plate width (cm): "),
        thickness: prompt_line("Plate thickness (cm): "),
        steel_specific_weight: prompt_line("Steel specific weight (kg/cm³) [7.85]: "),
        static_load: prompt_line("Static load (kgf) [12500]: "),
        tool_weight: prompt_line("Tool weight (kgf) [3000]: "),
    };
    let input = form.parse()?;
    let result = plate::calculate(&input)?;

    println!();
    println!("Plate Volume:      {:.2} cm³", result.volume_cm3);
    println!("Shaft Weight:      {:.2} kg", result.shaft_weight_kg);
    println!("Dynamic Load:      {:.2} kgf", result.dynamic_load_kgf);
    println!("Load Bearing Area: {:.2} cm²", result.load_bearing_area_cm2);
    println!("Total Load:        {:.2} kgf", result.total_load_kgf);
    println!("Bearing Pressure:  {:.4} kgf/cm²", result.bearing_pressure_kg_cm2);

    print_json(&result);
    offer_export(|job| ExportRecord::plate(&input, &result, job))
}

fn run_main_cylinder() -> CalcResult<()> {
    let form = main_cylinder::MainCylinderForm {
        bore_diameter: prompt_line("Bore diameter (cm): "),
        rod_diameter: prompt_line("Rod diameter (cm): "),
        fast_approach_speed: prompt_line("Fast approach speed (m/min): "),
        pressing_speed: prompt_line("Pressing speed (m/min): "),
        reverse_speed: prompt_line("Reverse speed (m/min): "),
        fast_approach_pressure: prompt_line("Fast approach pressure (kg/cm²): "),
        pressing_pressure: prompt_line("Pressing pressure (kg/cm²): "),
        reverse_pressure: prompt_line("Reverse pressure (kg/cm²): "),
    };
    let input = form.parse()?;
    let result = main_cylinder::calculate(&input, reference_policy())?;

    for phase in result.phases() {
        print_phase(phase);
    }
    println!();
    println!("Recommendations:");
    println!("  Prefill Valve: {}", result.prefill_valve_size);
    println!("  Cylinder Port: {}", result.cylinder_port_size);
    println!("  Pipe Block:    {}", result.pipe_block_size);

    print_json(&result);
    offer_export(|job| ExportRecord::main_cylinder(&input, &result, job))
}

fn run_die_cushion() -> CalcResult<()> {
    let form = die_cushion::DieCushionForm {
        bore_diameter: prompt_line("Cushion bore diameter (cm): "),
        rod_diameter: prompt_line("Cushion rod diameter (cm): "),
        cylinder_count: prompt_line("Cylinder count [1]: "),
        fast_approach_speed: prompt_line("Pre-acceleration speed (m/min): "),
        pressing_speed: prompt_line("Cushioning speed (m/min): "),
        return_speed: prompt_line("Return speed (m/min): "),
        fast_approach_pressure: prompt_line("Pre-acceleration pressure (kg/cm²): "),
        back_pressure: prompt_line("Back pressure (kg/cm²): "),
        return_pressure: prompt_line("Return pressure (kg/cm²): "),
    };
    let input = form.parse()?;
    let result = die_cushion::calculate(&input, reference_policy())?;

    for phase in result.phases() {
        print_phase(phase);
    }
    println!();
    println!("Cushion Force: {:.2} Tons", result.cushion_force_tons());
    println!();
    println!("Recommendations:");
    println!("  Cylinder Port: {}", result.cylinder_port_size);
    println!("  Pipe Block:    {}", result.pipe_block_size);
    println!("  Relief Valve:  {}", result.relief_valve_size);

    print_json(&result);
    offer_export(|job| ExportRecord::die_cushion(&input, &result, job))
}

fn print_phase(phase: &CylinderPhase) {
    println!();
    println!("{}:", phase.description);
    println!("  Area:        {:.2} cm²", phase.area_cm2);
    println!("  Speed:       {:.2} m/min", phase.speed_m_min);
    println!("  Inlet Flow:  {:.2} LPM", phase.inlet_flow_lpm);
    println!("  Outlet Flow: {:.2} LPM", phase.outlet_flow_lpm);
    println!("  Pressure:    {:.2} kg/cm²", phase.pressure_kg_cm2);
    println!("  Force:       {:.2} T", phase.force_tons);
}

fn print_json<T: serde::Serialize>(value: &T) {
    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(value) {
        println!("{}", json);
    }
}

/// Prompt for export paths; a blank path skips that format. File write
/// failures are reported but do not abort the session.
fn offer_export(build: impl FnOnce(JobDetails) -> ExportRecord) -> CalcResult<()> {
    println!();
    let csv_path = prompt_line("Write CSV to [skip]: ");
    let pdf_path = prompt_line("Write PDF to [skip]: ");
    if csv_path.is_empty() && pdf_path.is_empty() {
        return Ok(());
    }

    let record = build(prompt_job_details());

    if !csv_path.is_empty() {
        match fs::write(&csv_path, record.to_csv()) {
            Ok(()) => println!("Wrote {}", csv_path),
            Err(e) => eprintln!("Could not write {}: {}", csv_path, e),
        }
    }

    if !pdf_path.is_empty() {
        let pdf_bytes = render_report_pdf(&record)?;
        match fs::write(&pdf_path, pdf_bytes) {
            Ok(()) => println!("Wrote {}", pdf_path),
            Err(e) => eprintln!("Could not write {}: {}", pdf_path, e),
        }
    }

    Ok(())
}

fn prompt_job_details() -> JobDetails {
    println!();
    println!("Report details (leave blank to fill in by hand):");
    JobDetails {
        company: prompt_line("  Company: "),
        customer_name: prompt_line("  Customer name: "),
        machine_name: prompt_line("  Machine name: "),
        work_order: prompt_line("  WO number: "),
        assembly_name: prompt_line("  Assembly name: "),
        date: None,
    }
}
