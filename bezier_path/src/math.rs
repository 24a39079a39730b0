//! Scalar helpers shared by the value types and the curves

use core::f64::consts::{PI, TAU};

use libm::fabs;
use uom::si::{
    angle::{degree, radian},
    f64::{Angle, Length},
    length::{inch, millimeter},
};

use crate::Float;

/// tolerance used wherever two floats computed along different routes are compared
pub const DEFAULT_TOLERANCE: Float = 1e-4;

/// n choose r, the binomial coefficient used to weight the bernstein basis
///
/// Product formula n * (n - 1) * ... * (n - r + 1) / r! taken one factor at a time,
/// each partial product is a binomial coefficient itself. Returns 0 when r > n.
pub fn combinations(n: usize, r: usize) -> Float {
    if r > n {
        return 0.0;
    }
    let r = r.min(n - r);
    let mut result = 1.0;
    for i in 0..r {
        result = result * (n - i) as Float / (i + 1) as Float;
    }
    result
}

/// -1, 0 or 1, NaN gives 0
pub fn sign(x: Float) -> Float {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// constrain x into [lower, upper], doesn't panic if the bounds are inverted
pub fn clamp(x: Float, lower: Float, upper: Float) -> Float {
    if x < lower {
        lower
    } else if x > upper {
        upper
    } else {
        x
    }
}

/// put angle into [0, 2pi) range
pub fn normalize_angle(radians: Float) -> Float {
    let angle = radians % TAU;
    let angle = if angle < 0.0 { angle + TAU } else { angle };
    // a tiny negative angle plus 2pi rounds up to exactly 2pi
    if angle >= TAU {
        0.0
    } else {
        angle
    }
}

/// the unsigned angle between two headings, in [0, pi]
pub fn smallest_angle_difference(one: Float, two: Float) -> Float {
    let a = normalize_angle(one - two);
    let b = normalize_angle(two - one);
    a.min(b)
}

/// 1.0 to turn counter-clockwise (left) from start to end heading, -1.0 for clockwise
///
/// A forward difference of exactly 0 or exactly pi counts as counter-clockwise.
pub fn turn_direction(start_heading: Float, end_heading: Float) -> Float {
    let difference = normalize_angle(end_heading - start_heading);
    if (0.0..=PI).contains(&difference) {
        1.0
    } else {
        -1.0
    }
}

pub fn roughly_equals(one: Float, two: Float) -> bool {
    roughly_equals_within(one, two, DEFAULT_TOLERANCE)
}

pub fn roughly_equals_within(one: Float, two: Float, tolerance: Float) -> bool {
    fabs(one - two) < tolerance
}

pub fn inches_to_millimeters(inches: Float) -> Float {
    Length::new::<inch>(inches).get::<millimeter>()
}

pub fn millimeters_to_inches(millimeters: Float) -> Float {
    Length::new::<millimeter>(millimeters).get::<inch>()
}

/// only for display, everything else stays in radians
pub fn radians_to_degrees(radians: Float) -> Float {
    Angle::new::<radian>(radians).get::<degree>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn combinations_product_formula() {
        assert_eq!(combinations(0, 0), 1.0);
        assert_eq!(combinations(3, 0), 1.0);
        assert_eq!(combinations(3, 1), 3.0);
        assert_eq!(combinations(3, 2), 3.0);
        assert_eq!(combinations(3, 3), 1.0);
        assert_eq!(combinations(6, 3), 20.0);
        assert_eq!(combinations(10, 4), 210.0);
        assert_eq!(combinations(2, 5), 0.0);
        assert_eq!(combinations(usize::MAX, 0), 1.0);
        assert_eq!(combinations(usize::MAX, usize::MAX), 1.0);
        assert_eq!(combinations(usize::MAX, 1), usize::MAX as Float);

        // pascal's rule holds across a range of degrees
        for n in 1..20 {
            for r in 1..n {
                let expected = combinations(n - 1, r - 1) + combinations(n - 1, r);
                assert_abs_diff_eq!(combinations(n, r), expected, epsilon = 1e-6);
            }
        }

        // 171! overflows a double, the coefficients themselves don't
        for n in [171, 200, 500] {
            for r in 0..=n {
                let c = combinations(n, r);
                assert!(c.is_finite() && c >= 1.0, "C({n}, {r}) = {c}");
                assert_eq!(c, combinations(n, n - r));
            }
        }
        assert_relative_eq!(combinations(200, 100), 9.054851465610328e58, max_relative = 1e-12);
    }

    #[test]
    fn sign_and_clamp() {
        assert_eq!(sign(3.2), 1.0);
        assert_eq!(sign(-0.1), -1.0);
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(Float::NAN), 0.0);

        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
        // inverted bounds return the lower bound instead of panicking
        assert_eq!(clamp(0.5, 1.0, 0.0), 1.0);
    }

    #[test]
    fn normalize_angle_range_and_idempotent() {
        let angles = [
            0.0, -0.0, 1.0, -1.0, PI, -PI, TAU, -TAU, 3.0 * TAU + 0.5, -7.5, 100.0, -1e-20,
        ];
        for angle in angles {
            let normalized = normalize_angle(angle);
            assert!((0.0..TAU).contains(&normalized), "{angle} -> {normalized}");
            assert_eq!(normalize_angle(normalized), normalized, "{angle}");
        }
        assert_abs_diff_eq!(normalize_angle(-PI / 2.0), 3.0 * PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_angle(TAU + 0.25), 0.25, epsilon = 1e-12);
        assert_eq!(normalize_angle(TAU), 0.0);
    }

    #[test]
    fn angle_differences() {
        assert_abs_diff_eq!(smallest_angle_difference(0.1, TAU - 0.1), 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(smallest_angle_difference(TAU - 0.1, 0.1), 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(smallest_angle_difference(0.0, PI), PI, epsilon = 1e-12);
        assert_eq!(smallest_angle_difference(1.0, 1.0), 0.0);
    }

    #[test]
    fn turn_direction_tie_breaks() {
        // equal headings and a half turn both count as counter-clockwise
        assert_eq!(turn_direction(1.3, 1.3), 1.0);
        assert_eq!(turn_direction(0.0, PI), 1.0);
        assert_eq!(turn_direction(0.0, 0.5), 1.0);
        assert_eq!(turn_direction(0.0, PI + 0.01), -1.0);
        assert_eq!(turn_direction(0.0, -0.5), -1.0);
        assert_eq!(turn_direction(TAU - 0.1, 0.1), 1.0);
    }

    #[test]
    fn tolerance_comparison() {
        assert!(roughly_equals(1.0, 1.00005));
        assert!(roughly_equals(1.00005, 1.0));
        assert!(!roughly_equals(1.0, 1.001));
        assert!(roughly_equals_within(5.0, 5.4, 0.5));
        assert!(!roughly_equals_within(5.4, 5.0, 0.1));
    }

    #[test]
    fn unit_conversions() {
        assert_abs_diff_eq!(inches_to_millimeters(1.0), 25.4, epsilon = 1e-9);
        assert_abs_diff_eq!(millimeters_to_inches(254.0), 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(millimeters_to_inches(inches_to_millimeters(7.25)), 7.25, epsilon = 1e-9);
        assert_abs_diff_eq!(radians_to_degrees(PI / 2.0), 90.0, epsilon = 1e-9);
    }
}
