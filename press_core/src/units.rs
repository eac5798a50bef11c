//! # Worksheet Unit Conventions
//!
//! The sizing worksheets this suite reproduces work in metric shop units:
//!
//! - lengths and diameters in cm
//! - areas in cm²
//! - pressures and stresses in kg/cm²
//! - stroke speeds in m/min
//! - flows in L/min (LPM)
//! - forces in kgf, reported in metric tons
//!
//! The conversion divisors between those units are worksheet constants and
//! must be preserved verbatim; they are collected here under their
//! derivations rather than scattered through the formulas.

/// Kilograms-force per metric ton.
///
/// The worksheet's `/1000` in every force-to-tonnage step.
pub const KGF_PER_TON: f64 = 1000.0;

/// Divisor converting cm² × m/min to L/min.
///
/// A[cm²] × v[m/min] = A × v × 100 cm³/min = A × v / 10 L/min.
pub const FLOW_LPM_DIVISOR: f64 = 10.0;

/// Divisor converting kg/cm² × L/min to metric horsepower.
///
/// 1 hp = 4500 kg·m/min, and 1 kg/cm² × 1 L/min works out to
/// 10 kg·m/min, so hp = p × Q / 450.
pub const HYDRAULIC_HP_DIVISOR: f64 = 450.0;

/// Convert a force in kgf to metric tons.
#[inline]
pub fn kgf_to_tons(force_kgf: f64) -> f64 {
    force_kgf / KGF_PER_TON
}

/// Cylinder force in metric tons from acting area and pressure.
///
/// # Formula
/// F[tons] = A[cm²] × p[kg/cm²] / 1000
#[inline]
pub fn force_tons(area_cm2: f64, pressure_kg_cm2: f64) -> f64 {
    kgf_to_tons(area_cm2 * pressure_kg_cm2)
}

/// Oil flow through a cylinder side in L/min from its area and the
/// stroke speed.
///
/// # Formula
/// Q[LPM] = A[cm²] × v[m/min] / 10
#[inline]
pub fn cylinder_flow_lpm(area_cm2: f64, speed_m_min: f64) -> f64 {
    area_cm2 * speed_m_min / FLOW_LPM_DIVISOR
}

/// Hydraulic power in metric horsepower from pressure and flow.
///
/// # Formula
/// P[hp] = p[kg/cm²] × Q[LPM] / 450
#[inline]
pub fn hydraulic_horsepower(pressure_kg_cm2: f64, flow_lpm: f64) -> f64 {
    pressure_kg_cm2 * flow_lpm / HYDRAULIC_HP_DIVISOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kgf_to_tons() {
        assert_eq!(kgf_to_tons(1000.0), 1.0);
        assert_eq!(kgf_to_tons(16100.0), 16.1);
    }

    #[test]
    fn test_force_tons() {
        // 78.5398 cm² at 200 kg/cm² = 15707.96 kgf = 15.708 tons
        let f = force_tons(78.5398, 200.0);
        assert!((f - 15.70796).abs() < 0.0001, "F = {}", f);
    }

    #[test]
    fn test_cylinder_flow() {
        // 100 cm² moving at 5 m/min displaces 50 L/min
        assert_eq!(cylinder_flow_lpm(100.0, 5.0), 50.0);
    }

    #[test]
    fn test_hydraulic_horsepower() {
        // 450 is exact for metric hp: 90 LPM at 100 kg/cm² = 20 hp
        assert_eq!(hydraulic_horsepower(100.0, 90.0), 20.0);
    }
}
