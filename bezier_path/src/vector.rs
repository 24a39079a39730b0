use core::ops::{Add, Mul, Neg, Sub};

use libm::{atan2, cos, hypot, sin};
use serde::{Deserialize, Serialize};

use crate::math::normalize_angle;
use crate::Float;

/// A 2D direction and magnitude, e.g. a curve derivative or a drive direction
///
/// Always stored as orthogonal x/y components, magnitude and theta are derived on request,
/// so a vector built from magnitude and angle reads back its components without drift.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    x: Float,
    y: Float,
}

impl Vector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    /// a negative magnitude points the vector the opposite way
    pub fn from_polar(magnitude: Float, theta: Float) -> Self {
        Self {
            x: magnitude * cos(theta),
            y: magnitude * sin(theta),
        }
    }

    pub fn x(&self) -> Float {
        self.x
    }

    pub fn y(&self) -> Float {
        self.y
    }

    pub fn magnitude(&self) -> Float {
        hypot(self.x, self.y)
    }

    /// direction in [0, 2pi), 0 for the zero vector
    pub fn theta(&self) -> Float {
        normalize_angle(atan2(self.y, self.x))
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn dot(&self, other: &Vector) -> Float {
        self.x * other.x + self.y * other.y
    }

    /// z component of the 3D cross product, order matters
    pub fn cross(&self, other: &Vector) -> Float {
        self.x * other.y - self.y * other.x
    }

    /// unit vector in the same direction, the zero vector comes back unchanged
    pub fn normalized(&self) -> Vector {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            *self
        } else {
            Vector::new(self.x / magnitude, self.y / magnitude)
        }
    }

    /// same direction with a new length, the zero vector stays zero
    pub fn with_magnitude(&self, magnitude: Float) -> Vector {
        self.normalized() * magnitude
    }

    /// rotate counter-clockwise by theta radians
    pub fn rotated(&self, theta: Float) -> Vector {
        let (s, c) = (sin(theta), cos(theta));
        Vector::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<Float> for Vector {
    type Output = Self;

    fn mul(self, rhs: Float) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Vector::new(-self.x, -self.y)
    }
}
