use log::{debug, warn};

use crate::curve::{Curve, PathType};
use crate::math::clamp;
use crate::point::Point;
use crate::pose::Pose;
use crate::vector::Vector;
use crate::Float;

/// A straight segment between two control points, a linear bezier curve
///
/// Evaluated in closed form instead of through the general bernstein sum, the derivative is
/// constant and the curvature is always zero.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierLine {
    control_points: [Point; 2],
    direction: Vector,
    end_tangent: Vector,
    length: Float,
    unit_to_time: Float,
}

impl BezierLine {
    /// coincident start and end make a zero length line, which the follower treats like a point
    ///
    /// Unlike [`crate::BezierCurve`] construction can't fail: a NaN or infinite endpoint is
    /// logged and the line gets a unit to time factor of 0, its evaluation stays non-finite.
    pub fn new(start: Point, end: Point) -> Self {
        let direction = start.vector_to(&end);
        let length = direction.magnitude();
        let unit_to_time = if !length.is_finite() {
            warn!(
                "line from ({}, {}) to ({}, {}) has a non-finite endpoint",
                start.x(),
                start.y(),
                end.x(),
                end.y()
            );
            0.0
        } else if length > 0.0 {
            1.0 / length
        } else {
            warn!("zero length line at ({}, {})", start.x(), start.y());
            0.0
        };
        debug!("line from ({}, {}) to ({}, {}), length {length}", start.x(), start.y(), end.x(), end.y());
        Self {
            control_points: [start, end],
            direction,
            end_tangent: direction.normalized(),
            length,
            unit_to_time,
        }
    }

    pub fn from_poses(start: &Pose, end: &Pose) -> Self {
        Self::new(Point::from_pose(start), Point::from_pose(end))
    }

    pub fn start(&self) -> Point {
        self.control_points[0]
    }

    pub fn end(&self) -> Point {
        self.control_points[1]
    }
}

impl Curve for BezierLine {
    fn point(&self, t: Float) -> Point {
        let t = clamp(t, 0.0, 1.0);
        let start = self.start();
        Point::new(
            start.x() + self.direction.x() * t,
            start.y() + self.direction.y() * t,
        )
    }

    fn derivative(&self, _t: Float) -> Vector {
        self.direction
    }

    fn second_derivative(&self, _t: Float) -> Vector {
        Vector::ZERO
    }

    fn approx_second_derivative(&self, _t: Float) -> Vector {
        Vector::ZERO
    }

    fn curvature(&self, _t: Float) -> Float {
        0.0
    }

    fn end_tangent(&self) -> Vector {
        self.end_tangent
    }

    /// exact, the name is shared with the curves that do need approximating
    fn approximate_length(&self) -> Float {
        self.start().distance_from(&self.end())
    }

    fn length(&self) -> Float {
        self.length
    }

    fn unit_to_time_factor(&self) -> Float {
        self.unit_to_time
    }

    fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    fn path_type(&self) -> PathType {
        PathType::Line
    }
}
