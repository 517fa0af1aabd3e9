//! Numeric constants shared by the shape formulas.
//!
//! These values are part of the computed results: the round-shape
//! formulas are defined against `PI_APPROX`, not `std::f64::consts::PI`.

/// Fixed approximation of pi used by `Sphere` and `Cylinder`.
/// Value: 3.14159
pub const PI_APPROX: f64 = 3.14159;

/// Default tolerance for comparing two computed lengths, areas or volumes.
/// Value: 1.0e-7
pub const CONFUSION: f64 = 1.0e-7;

/// Returns true if `a` and `b` agree to `places` decimal places,
/// i.e. their difference rounds to zero at that precision.
#[inline]
pub fn approx_eq(a: f64, b: f64, places: i32) -> bool {
    ((a - b).abs() * 10f64.powi(places)).round() == 0.0
}

/// Returns true if `a` and `b` differ by less than `CONFUSION`.
#[inline]
pub fn is_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < CONFUSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_values() {
        assert_eq!(PI_APPROX, 3.14159);
        assert_eq!(CONFUSION, 1.0e-7);
    }

    #[test]
    fn test_approx_eq_places() {
        assert!(approx_eq(4.188786, 4.18879, 5));
        assert!(approx_eq(1.004, 1.0, 2));
        assert!(!approx_eq(1.01, 1.0, 2));
        assert!(!approx_eq(3.14159, std::f64::consts::PI, 6));
    }

    #[test]
    fn test_is_equal() {
        assert!(is_equal(0.1 + 0.2, 0.3));
        assert!(!is_equal(1.0, 1.000001));
    }
}
