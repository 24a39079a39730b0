/*!
Path segments for a mobile robot path follower

A path is a chain of segments, each one a point (hold position), a line, or a general
bezier curve. All of them are evaluated through the [`Curve`] trait: position, derivatives,
curvature, length and the conversion from distance along the segment to parametric t.
*/
#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

pub type Float = f64;

pub mod bezier;
pub mod bezier_point;
pub mod config;
pub mod curve;
pub mod error;
pub mod line;
pub mod math;
pub mod path;
pub mod point;
pub mod pose;
pub mod vector;

pub use bezier::BezierCurve;
pub use bezier_point::BezierPoint;
pub use config::CurveConfig;
pub use curve::{ClosestPoint, Curve, PathType};
pub use error::{CurveError, Result};
pub use line::BezierLine;
pub use path::{Path, Segment};
pub use point::{CoordinateSystem, Point};
pub use pose::Pose;
pub use vector::Vector;
