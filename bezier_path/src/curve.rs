//! The evaluation contract shared by every path segment
//!
//! t is the parametric time of a segment, 0.0 at the first control point and 1.0 at the
//! last. Every method taking t clamps it into [0, 1] so a follower overshooting the end of a
//! segment still gets a sensible answer.

use core::fmt;

use alloc::vec::Vec;
use libm::pow;

use crate::math::clamp;
use crate::point::Point;
use crate::vector::Vector;
use crate::Float;

/// Which kind of segment a curve is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathType {
    Point,
    Line,
    Bezier,
}

impl PathType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathType::Point => "point",
            PathType::Line => "line",
            PathType::Bezier => "bezier",
        }
    }

    /// fewest control points a curve of this type can be built from
    pub fn min_control_points(&self) -> usize {
        match self {
            PathType::Point => 1,
            PathType::Line => 2,
            PathType::Bezier => 3,
        }
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a closest point search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPoint {
    pub point: Point,
    pub t: Float,
    pub distance: Float,
}

// good enough for the curves a follower sees, callers can pass their own to the _with_nsteps version
const CLOSEST_POINT_STEPS: usize = 32;

pub trait Curve {
    /// position at parametric time t
    fn point(&self, t: Float) -> Point;

    /// first derivative with respect to t, not normalized
    fn derivative(&self, t: Float) -> Vector;

    fn second_derivative(&self, t: Float) -> Vector;

    /// second derivative estimated from the first, for comparison against the analytic one
    fn approx_second_derivative(&self, t: Float) -> Vector;

    /// signed curvature, positive when turning counter-clockwise
    fn curvature(&self, t: Float) -> Float {
        signed_curvature(&self.derivative(t), &self.second_derivative(t))
    }

    /// unit tangent at t = 1, computed when the curve was built
    fn end_tangent(&self) -> Vector;

    /// computes the arc length, use [`Curve::length`] for the value cached at construction
    fn approximate_length(&self) -> Float;

    fn length(&self) -> Float;

    /// parametric time per unit of distance, 0.0 for zero length curves
    fn unit_to_time_factor(&self) -> Float;

    fn control_points(&self) -> &[Point];

    fn path_type(&self) -> PathType;

    fn first_control_point(&self) -> Point {
        self.control_points().first().copied().unwrap_or_default()
    }

    /// the control point after the first, or the only one
    fn second_control_point(&self) -> Point {
        let control_points = self.control_points();
        control_points
            .get(1)
            .or(control_points.last())
            .copied()
            .unwrap_or_default()
    }

    /// the control point before the last, or the only one
    fn second_to_last_control_point(&self) -> Point {
        let control_points = self.control_points();
        control_points
            .len()
            .checked_sub(2)
            .and_then(|i| control_points.get(i))
            .or(control_points.first())
            .copied()
            .unwrap_or_default()
    }

    fn last_control_point(&self) -> Point {
        self.control_points().last().copied().unwrap_or_default()
    }

    /// parametric step that covers roughly `distance` along the curve
    fn time_step(&self, distance: Float) -> Float {
        distance * self.unit_to_time_factor()
    }

    fn closest_to_point(&self, point: &Point) -> ClosestPoint {
        self.closest_to_point_with_nsteps(point, CLOSEST_POINT_STEPS)
    }

    /// brute force search in two passes with the same number of steps:
    /// a coarse pass over the whole curve, then a fine pass around the best coarse sample
    fn closest_to_point_with_nsteps(&self, point: &Point, nsteps: usize) -> ClosestPoint {
        let nsteps = nsteps.max(1);
        let step = 1.0 / nsteps as Float;

        let mut closest = ClosestPoint {
            point: self.point(0.0),
            t: 0.0,
            distance: Float::INFINITY,
        };

        for i in 0..=nsteps {
            capture_closest(self, &mut closest, i as Float * step, point);
        }

        let fine_step = step / nsteps as Float;
        let t_coarse = closest.t;
        for i in 0..=nsteps {
            let t = t_coarse - step / 2.0 + i as Float * fine_step;
            capture_closest(self, &mut closest, clamp(t, 0.0, 1.0), point);
        }
        closest
    }

    /// points evenly spaced in t, at least the two end points
    fn sample_points(&self, num: usize) -> Vec<Point> {
        let num = num.max(2);
        let step = 1.0 / (num - 1) as Float;
        (0..num).map(|i| self.point(i as Float * step)).collect()
    }
}

fn capture_closest<C: Curve + ?Sized>(curve: &C, closest: &mut ClosestPoint, t: Float, target: &Point) {
    let candidate = curve.point(t);
    let distance = candidate.distance_from(target);
    if distance < closest.distance {
        *closest = ClosestPoint {
            point: candidate,
            t,
            distance,
        };
    }
}

/// cross(d, dd) / |d|^3, 0.0 where the derivative vanishes
pub fn signed_curvature(derivative: &Vector, second_derivative: &Vector) -> Float {
    let speed = derivative.magnitude();
    if speed < Float::EPSILON {
        return 0.0;
    }
    derivative.cross(second_derivative) / pow(speed, 3.0)
}

/// central difference of the first derivative, both samples kept inside [0, 1]
pub fn finite_difference_second_derivative<C: Curve + ?Sized>(
    curve: &C,
    t: Float,
    step: Float,
) -> Vector {
    let t = clamp(t, 0.0, 1.0);
    let t0 = clamp(t - step, 0.0, 1.0);
    let t1 = clamp(t + step, 0.0, 1.0);
    let dt = t1 - t0;
    if dt <= 0.0 {
        return Vector::ZERO;
    }
    (curve.derivative(t1) - curve.derivative(t0)) * (1.0 / dt)
}
