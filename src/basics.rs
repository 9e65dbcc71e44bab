//! Foundation constants and scalar helpers.
//!
//! Everything geometric in this crate works in single precision, matching the
//! drawing back-ends that consume the results.

// ============================================================================
// Mathematical constants
// ============================================================================

pub const PI: f32 = std::f32::consts::PI;
pub const TAU: f32 = std::f32::consts::TAU;
pub const FRAC_PI_2: f32 = std::f32::consts::FRAC_PI_2;
pub const FRAC_PI_4: f32 = std::f32::consts::FRAC_PI_4;

/// Tolerance used when comparing layout coordinates.
pub const LAYOUT_EPSILON: f32 = 1e-4;

/// Convert degrees to radians.
#[inline]
pub fn deg2rad(deg: f32) -> f32 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad2deg(rad: f32) -> f32 {
    rad * 180.0 / PI
}

/// Compare two values with an absolute epsilon.
#[inline]
pub fn is_equal_eps(v1: f32, v2: f32, epsilon: f32) -> bool {
    (v1 - v2).abs() <= epsilon
}

/// Map an angle in radians into `[0, 2π)`.
///
/// Non-finite input is returned unchanged.
#[inline]
pub fn normalize_angle(a: f32) -> f32 {
    if !a.is_finite() {
        return a;
    }
    let r = a.rem_euclid(TAU);
    // rem_euclid may round up to TAU for tiny negative inputs
    if r >= TAU {
        0.0
    } else {
        r
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deg_rad_roundtrip() {
        assert!((deg2rad(180.0) - PI).abs() < 1e-6);
        assert!((rad2deg(FRAC_PI_2) - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_is_equal_eps() {
        assert!(is_equal_eps(1.0, 1.00001, 1e-4));
        assert!(!is_equal_eps(1.0, 1.1, 1e-4));
    }

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-5);
        assert!((normalize_angle(TAU + 1.0) - 1.0).abs() < 1e-5);
        assert_eq!(normalize_angle(0.0), 0.0);
        let tiny = normalize_angle(-1e-9);
        assert!((0.0..TAU).contains(&tiny));
    }
}
