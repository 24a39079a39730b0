//! Construction time errors, nothing on the evaluation path returns one

use thiserror::Error;

use crate::curve::PathType;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
    #[error("{curve} curve needs at least {required} control points, got {actual}")]
    InsufficientControlPoints {
        curve: PathType,
        required: usize,
        actual: usize,
    },

    /// NaN or infinite coordinate
    #[error("control point {index} has a non-finite coordinate")]
    NonFiniteControlPoint { index: usize },

    #[error("invalid curve config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("segment index {index} is past the end of a path with {len} segments")]
    SegmentIndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = core::result::Result<T, CurveError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn error_display() {
        let err = CurveError::InsufficientControlPoints {
            curve: PathType::Bezier,
            required: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "bezier curve needs at least 3 control points, got 2"
        );

        let err = CurveError::NonFiniteControlPoint { index: 4 };
        assert!(err.to_string().contains('4'));

        let err = CurveError::SegmentIndexOutOfRange { index: 7, len: 2 };
        assert!(err.to_string().contains("index 7"));
        assert!(err.to_string().contains("2 segments"));
    }
}
