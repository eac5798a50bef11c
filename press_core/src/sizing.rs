//! # Component Size Recommendation Tables
//!
//! The multi-phase calculators finish by recommending discrete component
//! sizes (prefill valve, cylinder ports, pipe block, relief valve). Those
//! recommendations are band lookups, not formulas: a computed flow or
//! force magnitude falls into an ordered band and gets that band's
//! catalog label.
//!
//! Tables are plain data so a shop can substitute its own worksheet's
//! bands; [`reference_policy`] supplies the defaults used when no custom
//! policy is given.
//!
//! ## Example
//!
//! ```rust
//! use press_core::sizing::SizingTable;
//!
//! let table = SizingTable::new(
//!     [(120.0, "NG 10"), (250.0, "NG 16")],
//!     "NG 25",
//! );
//! assert_eq!(table.classify(100.0), "NG 10");
//! assert_eq!(table.classify(250.0), "NG 16");
//! assert_eq!(table.classify(400.0), "NG 25");
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One band of a sizing table: values up to and including `up_to` get
/// `label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeBand {
    pub up_to: f64,
    pub label: String,
}

/// An ordered breakpoint → label lookup table.
///
/// Bands are kept sorted ascending by breakpoint; a value beyond the last
/// breakpoint classifies as the overflow label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingTable {
    bands: Vec<SizeBand>,
    overflow: String,
}

impl SizingTable {
    /// Build a table from `(breakpoint, label)` pairs plus the label used
    /// past the last breakpoint. Pairs may arrive in any order.
    pub fn new<L: Into<String>>(
        bands: impl IntoIterator<Item = (f64, L)>,
        overflow: impl Into<String>,
    ) -> Self {
        let mut bands: Vec<SizeBand> = bands
            .into_iter()
            .map(|(up_to, label)| SizeBand {
                up_to,
                label: label.into(),
            })
            .collect();
        bands.sort_by(|a, b| a.up_to.partial_cmp(&b.up_to).unwrap_or(Ordering::Equal));
        SizingTable {
            bands,
            overflow: overflow.into(),
        }
    }

    /// Classify a magnitude into its band label.
    pub fn classify(&self, value: f64) -> &str {
        for band in &self.bands {
            if value <= band.up_to {
                return &band.label;
            }
        }
        &self.overflow
    }

    /// The table's breakpoints, ascending.
    pub fn breakpoints(&self) -> impl Iterator<Item = f64> + '_ {
        self.bands.iter().map(|band| band.up_to)
    }
}

/// The set of sizing tables a multi-phase calculator consults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingPolicy {
    /// Prefill valve nominal size, keyed on peak bore-side flow (LPM).
    pub prefill_valve: SizingTable,
    /// Cylinder port size, keyed on peak port flow (LPM).
    pub cylinder_port: SizingTable,
    /// Pipe block size, keyed on peak phase force (tons).
    pub pipe_block: SizingTable,
    /// Back-pressure relief valve size, keyed on the displaced pressing
    /// flow of a die cushion (LPM).
    pub relief_valve: SizingTable,
}

impl Default for SizingPolicy {
    fn default() -> Self {
        reference_policy().clone()
    }
}

static REFERENCE_POLICY: Lazy<SizingPolicy> = Lazy::new(|| SizingPolicy {
    // Prefill poppets pass the full bore fill flow during fast approach;
    // bands follow nominal DN catalog steps.
    prefill_valve: SizingTable::new(
        [
            (250.0, "DN 40"),
            (600.0, "DN 63"),
            (1000.0, "DN 80"),
            (1600.0, "DN 100"),
            (2500.0, "DN 125"),
            (4000.0, "DN 150"),
            (6300.0, "DN 200"),
        ],
        "DN 250",
    ),
    // Port bands keep line velocity near 4.5 m/s at the band ceiling.
    cylinder_port: SizingTable::new(
        [
            (40.0, "1/2\" BSP"),
            (80.0, "3/4\" BSP"),
            (140.0, "1\" BSP"),
            (220.0, "1 1/4\" BSP"),
            (320.0, "1 1/2\" BSP"),
            (560.0, "2\" BSP"),
            (850.0, "2 1/2\" BSP"),
        ],
        "3\" BSP",
    ),
    pipe_block: SizingTable::new(
        [
            (100.0, "160 mm sq"),
            (250.0, "200 mm sq"),
            (500.0, "250 mm sq"),
            (800.0, "315 mm sq"),
        ],
        "400 mm sq",
    ),
    relief_valve: SizingTable::new(
        [(120.0, "NG 10"), (250.0, "NG 16"), (400.0, "NG 25"), (600.0, "NG 32")],
        "NG 40",
    ),
});

/// The reference sizing bands, from standard hydraulic component catalog
/// steps. Built once and shared.
pub fn reference_policy() -> &'static SizingPolicy {
    &REFERENCE_POLICY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> SizingTable {
        SizingTable::new([(10.0, "small"), (20.0, "medium")], "large")
    }

    #[test]
    fn test_classify_bands() {
        let table = small_table();
        assert_eq!(table.classify(5.0), "small");
        assert_eq!(table.classify(15.0), "medium");
        assert_eq!(table.classify(25.0), "large");
    }

    #[test]
    fn test_classify_boundary_belongs_to_band() {
        let table = small_table();
        assert_eq!(table.classify(10.0), "small");
        assert_eq!(table.classify(20.0), "medium");
    }

    #[test]
    fn test_classify_is_deterministic() {
        let table = small_table();
        assert_eq!(table.classify(12.0), table.classify(12.0));
    }

    #[test]
    fn test_bands_sorted_regardless_of_input_order() {
        let table = SizingTable::new([(20.0, "medium"), (10.0, "small")], "large");
        assert_eq!(table.classify(5.0), "small");
        let breakpoints: Vec<f64> = table.breakpoints().collect();
        assert_eq!(breakpoints, vec![10.0, 20.0]);
    }

    #[test]
    fn test_reference_policy_port_bands() {
        let policy = reference_policy();
        assert_eq!(policy.cylinder_port.classify(100.0), "1\" BSP");
        assert_eq!(policy.cylinder_port.classify(300.0), "1 1/2\" BSP");
        assert_eq!(policy.cylinder_port.classify(2000.0), "3\" BSP");
    }

    #[test]
    fn test_reference_policy_prefill_bands() {
        let policy = reference_policy();
        assert_eq!(policy.prefill_valve.classify(500.0), "DN 63");
        assert_eq!(policy.prefill_valve.classify(9999.0), "DN 250");
    }

    #[test]
    fn test_default_matches_reference() {
        assert_eq!(&SizingPolicy::default(), reference_policy());
    }

    #[test]
    fn test_policy_serde_roundtrip() {
        let policy = SizingPolicy::default();
        let json = serde_json::to_string(&policy).unwrap();
        let back: SizingPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(policy, back);
    }
}
