//! # PDF Report Generation
//!
//! Renders an [`ExportRecord`] to a printable PDF report using Typst.
//!
//! ## Architecture
//!
//! - The Typst template is embedded as a string constant
//! - Record data is injected via string formatting before compilation
//! - Output is raw PDF bytes (`Vec<u8>`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use press_core::calculators::tie_rod::{calculate, TieRodInput};
//! use press_core::pdf::render_report_pdf;
//! use press_core::report::{ExportRecord, JobDetails};
//!
//! let input = TieRodInput {
//!     tie_rod_diameter_cm: Some(10.0),
//!     area_cm2: None,
//!     working_stress_kg_cm2: 1500.0,
//!     factor_of_safety: 2.0,
//! };
//! let result = calculate(&input).unwrap();
//!
//! let record = ExportRecord::tie_rod(&input, &result, JobDetails::default());
//! let pdf_bytes = render_report_pdf(&record).unwrap();
//! std::fs::write("tie_rod_report.pdf", pdf_bytes).unwrap();
//! ```

use chrono::Utc;
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::errors::{CalcError, CalcResult};
use crate::report::{ExportRecord, Section};

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world for compiling documents without external files.
struct PdfWorld {
    /// The main source document
    main: Source,
    /// Font book
    book: LazyHash<FontBook>,
    /// Available fonts
    fonts: Vec<Font>,
    /// Library (standard functions)
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String) -> Self {
        let fonts = Self::load_fonts();
        let book = FontBook::from_fonts(&fonts);

        PdfWorld {
            main: Source::detached(source),
            book: LazyHash::new(book),
            fonts,
            library: LazyHash::new(Library::default()),
        }
    }

    fn load_fonts() -> Vec<Font> {
        let mut fonts = Vec::new();

        // Bundled fonts from typst-assets (text plus math symbols)
        for font_bytes in typst_assets::fonts() {
            let buffer = Bytes::new(font_bytes.to_vec());
            for font in Font::iter(buffer) {
                fonts.push(font);
            }
        }

        fonts
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(
            now.format("%Y").to_string().parse().ok()?,
            now.format("%m").to_string().parse().ok()?,
            now.format("%d").to_string().parse().ok()?,
        )
    }
}

// ============================================================================
// PDF Template
// ============================================================================

/// Typst template for a calculation report. Holds the fixed page frame;
/// the variable formula and section markup is injected whole.
const REPORT_TEMPLATE: &str = r##"
#set page(
  paper: "a4",
  margin: (top: 1in, bottom: 1in, left: 0.8in, right: 0.8in),
  header: align(center)[
    #text(size: 11pt, weight: "bold")[{{COMPANY}}]
  ],
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr, 1fr),
      align(left)[#text(size: 9pt)[WO: {{WORK_ORDER}}]],
      align(center)[#text(size: 9pt)[Page #counter(page).display()]],
      align(right)[#text(size: 9pt)[{{DATE}}]],
    )
  ]
)

#set text(size: 11pt)

// Title Block
#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 16pt, weight: "bold")[{{TITLE}}]
  ]
]

#v(12pt)

*Customer Details*
#v(4pt)
#table(
  columns: (auto, 1fr, auto, 1fr),
  stroke: none,
  row-gutter: 4pt,
  [Customer Name:], [{{CUSTOMER_NAME}}],
  [Machine Name:], [{{MACHINE_NAME}}],
  [WO. NO:], [{{WORK_ORDER}}],
  [Assembly Name:], [{{ASSEMBLY_NAME}}],
)

#v(8pt)
#line(length: 100%, stroke: 0.5pt)
#v(8pt)

{{FORMULAS}}

{{SECTIONS}}

#v(24pt)
#line(length: 100%, stroke: 0.5pt)
#v(8pt)

#grid(
  columns: (1fr, 1fr, 1fr),
  gutter: 16pt,
  [
    #v(28pt)
    #line(length: 85%, stroke: 0.5pt)
    Prepared By:
    #v(8pt)
    Date:
  ],
  [
    #v(28pt)
    #line(length: 85%, stroke: 0.5pt)
    Checked By:
    #v(8pt)
    Date:
  ],
  [
    #v(28pt)
    #line(length: 85%, stroke: 0.5pt)
    Approved By:
    #v(8pt)
    Date:
  ],
)
"##;

// ============================================================================
// PDF Rendering
// ============================================================================

/// Render an export record to PDF.
///
/// # Arguments
///
/// * `record` - The flattened calculation report
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(CalcError)` - If compilation or rendering fails
///
/// # Example
///
/// ```rust,no_run
/// use press_core::calculators::tonnage::{calculate, TonnageInput};
/// use press_core::pdf::render_report_pdf;
/// use press_core::report::{ExportRecord, JobDetails};
///
/// let input = TonnageInput {
///     cylinder_diameter_cm: 40.0,
///     system_pressure_kg_cm2: 250.0,
/// };
/// let result = calculate(&input).unwrap();
/// let record = ExportRecord::tonnage(&input, &result, JobDetails::default());
/// let pdf = render_report_pdf(&record).unwrap();
/// ```
pub fn render_report_pdf(record: &ExportRecord) -> CalcResult<Vec<u8>> {
    let source = report_source(record);
    let world = PdfWorld::new(source);

    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::report_render(format!(
            "Typst compilation failed: {}",
            error_msgs.join("; ")
        ))
    })?;

    let pdf_bytes = typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::report_render(format!("PDF rendering failed: {}", error_msgs.join("; ")))
    })?;

    Ok(pdf_bytes)
}

/// Build the complete Typst source for a record.
fn report_source(record: &ExportRecord) -> String {
    let date = match record.job.date {
        Some(date) => date.to_string(),
        None => Utc::now().format("%Y-%m-%d").to_string(),
    };

    REPORT_TEMPLATE
        .replace("{{COMPANY}}", &escape_typst(&record.job.company))
        .replace("{{TITLE}}", &escape_typst(&record.title))
        .replace("{{CUSTOMER_NAME}}", &field_or_blank(&record.job.customer_name))
        .replace("{{MACHINE_NAME}}", &field_or_blank(&record.job.machine_name))
        .replace("{{WORK_ORDER}}", &field_or_blank(&record.job.work_order))
        .replace("{{ASSEMBLY_NAME}}", &field_or_blank(&record.job.assembly_name))
        .replace("{{DATE}}", &date)
        .replace("{{FORMULAS}}", &formulas_markup(&record.formulas))
        .replace("{{SECTIONS}}", &sections_markup(&record.sections))
}

/// A report field, or a fill-in line when it is blank.
fn field_or_blank(value: &str) -> String {
    if value.trim().is_empty() {
        escape_typst("_____________")
    } else {
        escape_typst(value)
    }
}

/// Markup for the "Formula Used" block.
fn formulas_markup(formulas: &[String]) -> String {
    if formulas.is_empty() {
        return String::new();
    }

    let mut markup = String::from("*Formula Used*\n#v(4pt)\n");
    for formula in formulas {
        markup.push_str(&format!(
            "#block(width: 100%, fill: rgb(\"#f7f7f7\"), inset: 8pt, radius: 2pt)[{}]\n",
            escape_typst(formula)
        ));
    }
    markup.push_str("#v(8pt)\n");
    markup
}

/// Markup for the section tables, in record order.
fn sections_markup(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|section| {
            let rows: String = section
                .rows
                .iter()
                .map(|row| {
                    format!(
                        "  [{}], [{}],\n",
                        escape_typst(&row.label),
                        escape_typst(&row.value)
                    )
                })
                .collect();

            format!(
                "== {}\n\n#table(\n  columns: (1fr, auto),\n  inset: 8pt,\n  stroke: 0.5pt,\n  align: (left, right),\n{rows})\n\n#v(12pt)\n",
                escape_typst(&section.heading),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape special Typst characters in user-provided text
fn escape_typst(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '*' => "\\*".to_string(),
            '_' => "\\_".to_string(),
            '#' => "\\#".to_string(),
            '$' => "\\$".to_string(),
            '@' => "\\@".to_string(),
            '<' => "\\<".to_string(),
            '>' => "\\>".to_string(),
            '\\' => "\\\\".to_string(),
            '`' => "\\`".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::tie_rod::{calculate, TieRodInput};
    use crate::report::JobDetails;

    fn test_record(job: JobDetails) -> ExportRecord {
        let input = TieRodInput {
            tie_rod_diameter_cm: Some(10.0),
            area_cm2: None,
            working_stress_kg_cm2: 1500.0,
            factor_of_safety: 2.0,
        };
        let result = calculate(&input).unwrap();
        ExportRecord::tie_rod(&input, &result, job)
    }

    #[test]
    fn test_pdf_generation() {
        let job = JobDetails {
            company: "Precision Press Works".to_string(),
            customer_name: "Sharp Tools".to_string(),
            machine_name: "PP-400T".to_string(),
            work_order: "WO-1142".to_string(),
            assembly_name: "Tie Rod Assembly".to_string(),
            date: None,
        };
        let pdf = render_report_pdf(&test_record(job));

        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());

        let pdf_bytes = pdf.unwrap();
        // PDF should start with %PDF
        assert!(pdf_bytes.starts_with(b"%PDF"), "Output is not a valid PDF");
        // Should be a reasonable size (at least 1KB)
        assert!(pdf_bytes.len() > 1000, "PDF seems too small");
    }

    #[test]
    fn test_source_carries_record_content() {
        let source = report_source(&test_record(JobDetails::default()));

        assert!(source.contains("TIE ROD & THREAD CALCULATIONS"));
        assert!(source.contains("Load (Tons) = (Area × Working Stress) / (FOS × 1000)"));
        assert!(source.contains("[Load (Tons)], [58.9049],"));
    }

    #[test]
    fn test_blank_job_renders_fill_in_lines() {
        let source = report_source(&test_record(JobDetails::default()));
        // Blank fields become escaped underscore runs
        assert!(source.contains("\\_\\_\\_"));
    }

    #[test]
    fn test_escape_typst() {
        assert_eq!(escape_typst("A*B"), "A\\*B");
        assert_eq!(escape_typst("#set"), "\\#set");
        assert_eq!(escape_typst("plain text"), "plain text");
    }
}
