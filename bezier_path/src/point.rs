use core::f64::consts::PI;
use core::ops::{Add, Mul, Sub};

use libm::{atan2, cos, hypot, sin};
use serde::{Deserialize, Serialize};

use crate::math::normalize_angle;
use crate::pose::Pose;
use crate::vector::Vector;
use crate::Float;

/// How the two numbers handed to [`Point::with_coordinates`] are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoordinateSystem {
    Cartesian,
    Polar,
}

/// A 2D location, e.g. a bezier control point
///
/// Both the cartesian and the polar form are filled in when the point is built and the
/// point never changes afterwards. Points are computed with floating point math, compare
/// them with a tolerance (see [`Point::roughly_equals`]).
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "CartesianPoint")]
pub struct Point {
    x: Float,
    y: Float,
    r: Float,
    theta: Float,
}

/// what a point is loaded from, the polar form is always recomputed from x and y
#[derive(Deserialize)]
struct CartesianPoint {
    x: Float,
    y: Float,
}

impl From<CartesianPoint> for Point {
    fn from(point: CartesianPoint) -> Self {
        Point::new(point.x, point.y)
    }
}

impl Point {
    pub fn new(x: Float, y: Float) -> Self {
        Self {
            x,
            y,
            r: hypot(x, y),
            theta: normalize_angle(atan2(y, x)),
        }
    }

    /// a negative radius is flipped positive and theta rotated a half turn
    pub fn from_polar(r: Float, theta: Float) -> Self {
        let (r, theta) = if r < 0.0 {
            (-r, normalize_angle(theta + PI))
        } else {
            (r, normalize_angle(theta))
        };
        Self {
            x: r * cos(theta),
            y: r * sin(theta),
            r,
            theta,
        }
    }

    pub fn with_coordinates(r_or_x: Float, theta_or_y: Float, system: CoordinateSystem) -> Self {
        match system {
            CoordinateSystem::Cartesian => Self::new(r_or_x, theta_or_y),
            CoordinateSystem::Polar => Self::from_polar(r_or_x, theta_or_y),
        }
    }

    /// the position of a pose, heading dropped
    pub fn from_pose(pose: &Pose) -> Self {
        Self::new(pose.x(), pose.y())
    }

    pub fn x(&self) -> Float {
        self.x
    }

    pub fn y(&self) -> Float {
        self.y
    }

    /// distance from the origin
    pub fn r(&self) -> Float {
        self.r
    }

    /// angle from the origin in [0, 2pi)
    pub fn theta(&self) -> Float {
        self.theta
    }

    pub fn distance_from(&self, other: &Point) -> Float {
        hypot(self.x - other.x, self.y - other.y)
    }

    /// displacement from this point to other
    pub fn vector_to(&self, other: &Point) -> Vector {
        Vector::new(other.x - self.x, other.y - self.y)
    }

    /// the position vector from the origin
    pub fn to_vector(&self) -> Vector {
        Vector::new(self.x, self.y)
    }

    pub fn roughly_equals(&self, other: &Point, tolerance: Float) -> bool {
        self.distance_from(other) < tolerance
    }
}

impl From<Pose> for Point {
    fn from(pose: Pose) -> Self {
        Self::from_pose(&pose)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

/// offset a point by a displacement
impl Add<Vector> for Point {
    type Output = Self;

    fn add(self, other: Vector) -> Point {
        Point::new(self.x + other.x(), self.y + other.y())
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<Float> for Point {
    type Output = Self;

    fn mul(self, rhs: Float) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}
