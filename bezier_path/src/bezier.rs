use libm::pow;
use log::{debug, warn};
use tinyvec::TinyVec;

use crate::config::CurveConfig;
use crate::curve::{finite_difference_second_derivative, Curve, PathType};
use crate::error::{CurveError, Result};
use crate::math::{clamp, combinations};
use crate::point::Point;
use crate::pose::Pose;
use crate::vector::Vector;
use crate::Float;

// cubic curves are the common case, they stay inline
type Points = TinyVec<[Point; 4]>;
type Vectors = TinyVec<[Vector; 4]>;
type Coefficients = TinyVec<[Float; 4]>;

/// A bezier curve of any degree defined by three or more control points
///
/// The curve is defined by the bernstein polynomial sum
/// : ```∀ t ∈ [0..1],  P(t) = Σ_{i=0..n} C(n, i) * (1 - t)^(n - i) * t^i * P_i```
/// with degree n one less than the number of control points.
///
/// The derivative curves are beziers too, of degree n - 1 over the differences
/// n * (P_{i+1} - P_i) and of degree n - 2 over the differences of those. Their control
/// vectors, the binomial coefficients of all three and the length are computed once here so
/// evaluation never rebuilds them.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve {
    control_points: Points,
    first_differences: Vectors,
    second_differences: Vectors,
    binomials: Coefficients,
    first_binomials: Coefficients,
    second_binomials: Coefficients,
    config: CurveConfig,
    end_tangent: Vector,
    length: Float,
    unit_to_time: Float,
}

fn binomial_row(n: usize) -> Coefficients {
    (0..=n).map(|i| combinations(n, i)).collect()
}

/// Σ C(n, i) (1 - t)^(n - i) t^i (x_i, y_i), with n + 1 the number of binomials
fn bernstein(binomials: &[Float], t: Float, coordinates: impl Iterator<Item = (Float, Float)>) -> (Float, Float) {
    let Some(n) = binomials.len().checked_sub(1) else {
        return (0.0, 0.0);
    };
    let one_t = 1.0 - t;
    binomials
        .iter()
        .zip(coordinates)
        .enumerate()
        .fold((0.0, 0.0), |(x, y), (i, (coefficient, (cx, cy)))| {
            let basis = coefficient * pow(one_t, (n - i) as Float) * pow(t, i as Float);
            (x + basis * cx, y + basis * cy)
        })
}

impl BezierCurve {
    pub fn new(control_points: &[Point]) -> Result<Self> {
        Self::with_config(control_points, CurveConfig::default())
    }

    pub fn with_config(control_points: &[Point], config: CurveConfig) -> Result<Self> {
        config.validate()?;

        let required = PathType::Bezier.min_control_points();
        if control_points.len() < required {
            return Err(CurveError::InsufficientControlPoints {
                curve: PathType::Bezier,
                required,
                actual: control_points.len(),
            });
        }
        if let Some(index) = control_points
            .iter()
            .position(|p| !p.x().is_finite() || !p.y().is_finite())
        {
            return Err(CurveError::NonFiniteControlPoint { index });
        }

        let degree = control_points.len() - 1;
        let first_differences: Vectors = control_points
            .windows(2)
            .map(|pair| pair[0].vector_to(&pair[1]) * degree as Float)
            .collect();
        let second_differences: Vectors = first_differences
            .windows(2)
            .map(|pair| (pair[1] - pair[0]) * (degree - 1) as Float)
            .collect();

        let mut curve = Self {
            control_points: control_points.iter().copied().collect(),
            first_differences,
            second_differences,
            binomials: binomial_row(degree),
            first_binomials: binomial_row(degree - 1),
            second_binomials: binomial_row(degree - 2),
            config,
            end_tangent: Vector::ZERO,
            length: 0.0,
            unit_to_time: 0.0,
        };
        curve.end_tangent = curve.derivative(1.0).normalized();
        curve.length = curve.approximate_length();
        curve.unit_to_time = if curve.length > 0.0 {
            1.0 / curve.length
        } else {
            warn!("bezier curve with {} control points has zero length", control_points.len());
            0.0
        };
        debug!(
            "bezier curve of degree {degree}, length {} from {} steps",
            curve.length, config.approximation_steps
        );
        Ok(curve)
    }

    /// control points at the pose positions, headings are left to the follower
    pub fn from_poses(poses: &[Pose]) -> Result<Self> {
        let control_points: Points = poses.iter().map(Point::from_pose).collect();
        Self::new(&control_points)
    }

    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    pub fn config(&self) -> &CurveConfig {
        &self.config
    }
}

impl Curve for BezierCurve {
    fn point(&self, t: Float) -> Point {
        let t = clamp(t, 0.0, 1.0);
        let (x, y) = bernstein(
            &self.binomials,
            t,
            self.control_points.iter().map(|p| (p.x(), p.y())),
        );
        Point::new(x, y)
    }

    fn derivative(&self, t: Float) -> Vector {
        let t = clamp(t, 0.0, 1.0);
        let (x, y) = bernstein(
            &self.first_binomials,
            t,
            self.first_differences.iter().map(|v| (v.x(), v.y())),
        );
        Vector::new(x, y)
    }

    fn second_derivative(&self, t: Float) -> Vector {
        if self.second_differences.is_empty() {
            return Vector::ZERO;
        }
        let t = clamp(t, 0.0, 1.0);
        let (x, y) = bernstein(
            &self.second_binomials,
            t,
            self.second_differences.iter().map(|v| (v.x(), v.y())),
        );
        Vector::new(x, y)
    }

    fn approx_second_derivative(&self, t: Float) -> Vector {
        finite_difference_second_derivative(self, t, self.config.derivative_step)
    }

    fn end_tangent(&self) -> Vector {
        self.end_tangent
    }

    /// sum of chord lengths over `approximation_steps` equal steps in t
    fn approximate_length(&self) -> Float {
        // coincident control points, rounding in the bernstein sum would give a tiny nonzero length
        if self.first_differences.iter().all(Vector::is_zero) {
            return 0.0;
        }
        let steps = self.config.approximation_steps.max(1);
        let mut previous = self.point(0.0);
        let mut length = 0.0;
        for i in 1..=steps {
            let current = self.point(i as Float / steps as Float);
            length += previous.distance_from(&current);
            previous = current;
        }
        length
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
        PathType::Bezier
    }
}
