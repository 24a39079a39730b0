use crate::curve::{Curve, PathType};
use crate::point::Point;
use crate::pose::Pose;
use crate::vector::Vector;
use crate::Float;

/// A segment that stays put, used to hold a position (e.g. while turning in place)
///
/// Every t evaluates to the one control point, derivatives and length are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierPoint {
    control_points: [Point; 1],
}

impl BezierPoint {
    pub fn new(point: Point) -> Self {
        Self {
            control_points: [point],
        }
    }

    pub fn from_pose(pose: &Pose) -> Self {
        Self::new(Point::from_pose(pose))
    }
}

impl Curve for BezierPoint {
    fn point(&self, _t: Float) -> Point {
        self.control_points[0]
    }

    fn derivative(&self, _t: Float) -> Vector {
        Vector::ZERO
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

    /// a point has no direction, the follower doesn't drive along a held point anyway
    fn end_tangent(&self) -> Vector {
        Vector::ZERO
    }

    fn approximate_length(&self) -> Float {
        0.0
    }

    fn length(&self) -> Float {
        0.0
    }

    fn unit_to_time_factor(&self) -> Float {
        0.0
    }

    fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    fn path_type(&self) -> PathType {
        PathType::Point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_is_invariant() {
        let p = Point::new(2.0, -1.5);
        let hold = BezierPoint::new(p);
        for t in [-1.0, 0.0, 0.3, 0.5, 1.0, 2.0] {
            assert_eq!(hold.point(t), p);
            assert_eq!(hold.derivative(t), Vector::ZERO);
            assert_eq!(hold.second_derivative(t), Vector::ZERO);
            assert_eq!(hold.approx_second_derivative(t), Vector::ZERO);
            assert_eq!(hold.curvature(t), 0.0);
        }
        assert_eq!(hold.approximate_length(), 0.0);
        assert_eq!(hold.length(), 0.0);
        assert_eq!(hold.unit_to_time_factor(), 0.0);
        assert_eq!(hold.end_tangent(), Vector::ZERO);
        assert_eq!(hold.path_type(), PathType::Point);
    }

    #[test]
    fn every_control_point_accessor_is_the_point() {
        let hold = BezierPoint::from_pose(&Pose::new(4.0, 5.0, 1.0));
        let p = Point::new(4.0, 5.0);
        assert_eq!(hold.control_points(), &[p]);
        assert_eq!(hold.first_control_point(), p);
        assert_eq!(hold.second_control_point(), p);
        assert_eq!(hold.second_to_last_control_point(), p);
        assert_eq!(hold.last_control_point(), p);
    }
}
