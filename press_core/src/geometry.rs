//! # Cylinder & Plate Geometry Formulas
//!
//! Shape primitives shared by every calculator: piston areas from
//! diameters, the rod-side annulus, and plate volume.
//!
//! ## Notation
//!
//! - `A` = Area (cm²)
//! - `d` = Diameter (cm)
//! - `V` = Volume (cm³)
//!
//! All functions here are total for positive inputs. Positivity is the
//! caller's responsibility (enforced by the field helpers before any
//! formula runs), so none of these re-check their arguments.

// =============================================================================
// CIRCULAR SECTIONS
// Piston bore and rod cross-sections
// =============================================================================

/// Calculate the area of a circle from its diameter
///
/// ```text
///        ___
///      /     \
///     |   ·   |  d
///      \ ___ /
/// ```
///
/// # Formula
/// A = π × (d / 2)²
///
/// # Arguments
/// * `diameter` - Circle diameter
///
/// # Returns
/// Area in squared units of input
///
/// # Example
/// ```rust
/// use press_core::geometry::circle_area;
///
/// // 10 cm tie rod
/// let area = circle_area(10.0);
/// assert!((area - 78.5398).abs() < 0.0001);
/// ```
#[inline]
pub fn circle_area(diameter: f64) -> f64 {
    std::f64::consts::PI * (diameter / 2.0).powi(2)
}

/// Calculate the rod-side annulus area of a cylinder
///
/// The working area on the rod side is the bore circle minus the rod
/// circle:
///
/// ```text
///      _______
///    /  _____  \
///   |  / rod \  |   annulus = shaded ring
///   |  \_____/  |
///    \ _______ /
/// ```
///
/// # Formula
/// A = π × (d_bore / 2)² − π × (d_rod / 2)²
///
/// # Arguments
/// * `bore_diameter` - Cylinder bore diameter
/// * `rod_diameter` - Piston rod diameter (must be < bore)
///
/// # Returns
/// Annulus area in squared units of input
///
/// # Example
/// ```rust
/// use press_core::geometry::annulus_area;
///
/// // 20 cm bore with 14 cm rod
/// let area = annulus_area(20.0, 14.0);
/// // π(100 − 49) = 160.2212
/// assert!((area - 160.2212).abs() < 0.0001);
/// ```
#[inline]
pub fn annulus_area(bore_diameter: f64, rod_diameter: f64) -> f64 {
    circle_area(bore_diameter) - circle_area(rod_diameter)
}

// =============================================================================
// RECTANGULAR SOLIDS
// Bolster and bed plates
// =============================================================================

/// Calculate the volume of a rectangular plate
///
/// # Formula
/// V = length × width × thickness
///
/// # Arguments
/// * `length` - Plate length
/// * `width` - Plate width
/// * `thickness` - Plate thickness
///
/// # Returns
/// Volume in cubed units of input
///
/// # Example
/// ```rust
/// use press_core::geometry::rectangular_volume;
///
/// let v = rectangular_volume(50.0, 40.0, 5.0);
/// assert_eq!(v, 10000.0);
/// ```
#[inline]
pub fn rectangular_volume(length: f64, width: f64, thickness: f64) -> f64 {
    length * width * thickness
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_circle_area_formula() {
        // d = 10: A = π × 25 = 78.5398
        let a = circle_area(10.0);
        assert!(
            (a - std::f64::consts::PI * 25.0).abs() < 1e-12,
            "A = {} (expected π×25)",
            a
        );
        assert!((a - 78.5398).abs() < 0.0001, "A = {} (expected 78.5398)", a);
    }

    #[test]
    fn test_circle_area_monotonic() {
        let mut previous = 0.0;
        for d in [0.5, 1.0, 2.0, 5.0, 10.0, 25.0, 63.0, 100.0] {
            let a = circle_area(d);
            assert!(a > previous, "area must grow with diameter (d = {})", d);
            previous = a;
        }
    }

    #[test]
    fn test_annulus_area() {
        // 20 cm bore, 14 cm rod: π(100 − 49) = 51π
        let a = annulus_area(20.0, 14.0);
        assert!(
            approx_eq(a, 51.0 * std::f64::consts::PI),
            "A = {} (expected 51π)",
            a
        );

        // Consistency: annulus + rod circle = bore circle
        let back = a + circle_area(14.0);
        assert!(approx_eq(back, circle_area(20.0)));
    }

    #[test]
    fn test_annulus_shrinks_with_rod() {
        assert!(annulus_area(20.0, 10.0) > annulus_area(20.0, 14.0));
    }

    #[test]
    fn test_rectangular_volume() {
        assert_eq!(rectangular_volume(50.0, 40.0, 5.0), 10000.0);
        assert_eq!(rectangular_volume(1.0, 1.0, 1.0), 1.0);
    }
}
