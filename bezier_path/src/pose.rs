use core::ops::{Add, Sub};

use libm::{cos, hypot, sin};
use serde::{Deserialize, Serialize};

use crate::math::{normalize_angle, smallest_angle_difference};
use crate::point::Point;
use crate::vector::Vector;
use crate::Float;

/// Robot position plus heading, as produced by localization
///
/// The heading is normalized to [0, 2pi) every time a pose is built.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPose")]
pub struct Pose {
    x: Float,
    y: Float,
    heading: Float,
}

#[derive(Deserialize)]
struct RawPose {
    x: Float,
    y: Float,
    heading: Float,
}

impl From<RawPose> for Pose {
    fn from(pose: RawPose) -> Self {
        Pose::new(pose.x, pose.y, pose.heading)
    }
}

impl Pose {
    pub fn new(x: Float, y: Float, heading: Float) -> Self {
        Self {
            x,
            y,
            heading: normalize_angle(heading),
        }
    }

    pub fn x(&self) -> Float {
        self.x
    }

    pub fn y(&self) -> Float {
        self.y
    }

    pub fn heading(&self) -> Float {
        self.heading
    }

    pub fn position(&self) -> Point {
        Point::from_pose(self)
    }

    /// position as a vector from the origin
    pub fn as_vector(&self) -> Vector {
        Vector::new(self.x, self.y)
    }

    /// unit vector pointing along the heading
    pub fn heading_vector(&self) -> Vector {
        Vector::from_polar(1.0, self.heading)
    }

    pub fn distance_from(&self, other: &Pose) -> Float {
        hypot(self.x - other.x, self.y - other.y)
    }

    pub fn distance_to_point(&self, point: &Point) -> Float {
        hypot(self.x - point.x(), self.y - point.y())
    }

    /// rotate the position about the origin by theta, optionally turning the heading with it
    pub fn rotated(&self, theta: Float, rotate_heading: bool) -> Pose {
        let (s, c) = (sin(theta), cos(theta));
        let heading = if rotate_heading {
            self.heading + theta
        } else {
            self.heading
        };
        Pose::new(self.x * c - self.y * s, self.x * s + self.y * c, heading)
    }

    /// position within tolerance and heading within tolerance radians
    pub fn roughly_equals(&self, other: &Pose, tolerance: Float) -> bool {
        self.distance_from(other) < tolerance
            && smallest_angle_difference(self.heading, other.heading) < tolerance
    }
}

impl Add for Pose {
    type Output = Self;

    fn add(self, other: Pose) -> Pose {
        Pose::new(self.x + other.x, self.y + other.y, self.heading + other.heading)
    }
}

impl Sub for Pose {
    type Output = Self;

    fn sub(self, other: Pose) -> Pose {
        Pose::new(self.x - other.x, self.y - other.y, self.heading - other.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn heading_normalized() {
        let pose = Pose::new(1.0, 2.0, -FRAC_PI_2);
        assert_abs_diff_eq!(pose.heading(), 3.0 * FRAC_PI_2, epsilon = 1e-12);
        let pose = Pose::new(0.0, 0.0, 5.0 * PI);
        assert_abs_diff_eq!(pose.heading(), PI, epsilon = 1e-12);
    }

    #[test]
    fn add_subtract() {
        let a = Pose::new(1.0, 2.0, 1.5 * PI);
        let b = Pose::new(-0.5, 1.0, PI);
        let sum = a + b;
        assert_eq!(sum.x(), 0.5);
        assert_eq!(sum.y(), 3.0);
        assert_abs_diff_eq!(sum.heading(), FRAC_PI_2, epsilon = 1e-12);

        let difference = b - a;
        assert_eq!(difference.x(), -1.5);
        assert_eq!(difference.y(), -1.0);
        assert_abs_diff_eq!(difference.heading(), 1.5 * PI, epsilon = 1e-12);
    }

    #[test]
    fn rotation() {
        let pose = Pose::new(1.0, 0.0, 0.0);

        let turned = pose.rotated(FRAC_PI_2, true);
        assert!(turned.roughly_equals(&Pose::new(0.0, 1.0, FRAC_PI_2), 1e-9), "{turned:?}");

        let moved = pose.rotated(FRAC_PI_2, false);
        assert_abs_diff_eq!(moved.x(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(moved.y(), 1.0, epsilon = 1e-12);
        assert_eq!(moved.heading(), 0.0);
    }

    #[test]
    fn distances_and_vectors() {
        let a = Pose::new(0.0, 0.0, FRAC_PI_2);
        let b = Pose::new(3.0, 4.0, 0.0);
        assert_abs_diff_eq!(a.distance_from(&b), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.distance_to_point(&Point::new(0.0, -2.0)), 2.0, epsilon = 1e-12);
        assert_eq!(b.as_vector(), Vector::new(3.0, 4.0));

        let h = a.heading_vector();
        assert_abs_diff_eq!(h.x(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(h.y(), 1.0, epsilon = 1e-12);

        // headings either side of zero are close
        assert!(Pose::new(1.0, 1.0, 0.00001).roughly_equals(&Pose::new(1.0, 1.0, -0.00001), 1e-4));
    }

    #[test]
    fn load_normalizes_heading() {
        let pose: Pose = serde_json::from_str(r#"{"x": 0.0, "y": 0.0, "heading": 10.0}"#).unwrap();
        assert_abs_diff_eq!(pose.heading(), 10.0 - 2.0 * PI, epsilon = 1e-12);
        assert_eq!(pose, Pose::new(0.0, 0.0, 10.0));

        let pose: Pose = serde_json::from_str(r#"{"x": 1.5, "y": -2.0, "heading": -1.0}"#).unwrap();
        assert_eq!(pose.x(), 1.5);
        assert_eq!(pose.y(), -2.0);
        assert_abs_diff_eq!(pose.heading(), 2.0 * PI - 1.0, epsilon = 1e-12);

        let saved = Pose::new(3.0, 4.0, 1.25);
        let loaded: Pose = serde_json::from_str(&serde_json::to_string(&saved).unwrap()).unwrap();
        assert_eq!(loaded, saved);
    }
}
