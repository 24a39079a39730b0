use alloc::vec::Vec;
use core::slice;

use log::warn;

use crate::bezier::BezierCurve;
use crate::bezier_point::BezierPoint;
use crate::curve::{Curve, PathType};
use crate::error::{CurveError, Result};
use crate::line::BezierLine;
use crate::math::DEFAULT_TOLERANCE;
use crate::point::Point;
use crate::vector::Vector;
use crate::Float;

/// One segment of a path, any of the curve types
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Point(BezierPoint),
    Line(BezierLine),
    Bezier(BezierCurve),
}

impl Segment {
    fn inner(&self) -> &dyn Curve {
        match self {
            Segment::Point(point) => point,
            Segment::Line(line) => line,
            Segment::Bezier(bezier) => bezier,
        }
    }
}

impl From<BezierPoint> for Segment {
    fn from(point: BezierPoint) -> Self {
        Segment::Point(point)
    }
}

impl From<BezierLine> for Segment {
    fn from(line: BezierLine) -> Self {
        Segment::Line(line)
    }
}

impl From<BezierCurve> for Segment {
    fn from(bezier: BezierCurve) -> Self {
        Segment::Bezier(bezier)
    }
}

impl Curve for Segment {
    fn point(&self, t: Float) -> Point {
        self.inner().point(t)
    }

    fn derivative(&self, t: Float) -> Vector {
        self.inner().derivative(t)
    }

    fn second_derivative(&self, t: Float) -> Vector {
        self.inner().second_derivative(t)
    }

    fn approx_second_derivative(&self, t: Float) -> Vector {
        self.inner().approx_second_derivative(t)
    }

    fn curvature(&self, t: Float) -> Float {
        self.inner().curvature(t)
    }

    fn end_tangent(&self) -> Vector {
        self.inner().end_tangent()
    }

    fn approximate_length(&self) -> Float {
        self.inner().approximate_length()
    }

    fn length(&self) -> Float {
        self.inner().length()
    }

    fn unit_to_time_factor(&self) -> Float {
        self.inner().unit_to_time_factor()
    }

    fn control_points(&self) -> &[Point] {
        self.inner().control_points()
    }

    fn path_type(&self) -> PathType {
        self.inner().path_type()
    }
}

/// Segments in the order the follower drives them
///
/// The end of each segment is expected to be the start of the next one. Building a path with a
/// gap is allowed (the path builder may know better) but logs a warning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<Segment>,
}

fn warn_on_gap(before: &Segment, after: &Segment, index: usize) {
    let end = before.last_control_point();
    let start = after.first_control_point();
    let gap = end.distance_from(&start);
    if gap > DEFAULT_TOLERANCE {
        warn!(
            "gap of {gap} between segment {index} ending at ({}, {}) and a {} starting at ({}, {})",
            end.x(),
            end.y(),
            after.path_type(),
            start.x(),
            start.y(),
        );
    }
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: impl Into<Segment>) {
        let segment = segment.into();
        if let Some(last) = self.segments.last() {
            warn_on_gap(last, &segment, self.segments.len() - 1);
        }
        self.segments.push(segment);
    }

    /// insert before `index`, `index == len()` appends
    pub fn insert(&mut self, index: usize, segment: impl Into<Segment>) -> Result<()> {
        let len = self.segments.len();
        if index > len {
            return Err(CurveError::SegmentIndexOutOfRange { index, len });
        }
        let segment = segment.into();
        if let Some(before) = index.checked_sub(1).and_then(|i| self.segments.get(i)) {
            warn_on_gap(before, &segment, index - 1);
        }
        if let Some(after) = self.segments.get(index) {
            warn_on_gap(&segment, after, index);
        }
        self.segments.insert(index, segment);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// sum of the cached segment lengths
    pub fn length(&self) -> Float {
        self.segments.iter().map(Curve::length).sum()
    }

    pub fn first_point(&self) -> Option<Point> {
        self.segments.first().map(|segment| segment.point(0.0))
    }

    pub fn last_point(&self) -> Option<Point> {
        self.segments.last().map(|segment| segment.point(1.0))
    }

    /// index of the first segment whose end is farther than `tolerance` from the next start
    pub fn first_discontinuity(&self, tolerance: Float) -> Option<usize> {
        self.segments.windows(2).position(|pair| {
            pair[0]
                .point(1.0)
                .distance_from(&pair[1].point(0.0))
                > tolerance
        })
    }

    pub fn is_continuous(&self, tolerance: Float) -> bool {
        self.first_discontinuity(tolerance).is_none()
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        let mut path = Path::new();
        for segment in iter {
            path.push(segment);
        }
        path
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
