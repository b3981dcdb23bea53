mod arc;
mod composite;
mod cubic;
mod curve_3d;
mod line_segment;
mod parametric_cubic;
mod spiral;

pub use arc::Arc2D;
pub use composite::CompositeCurve2D;
pub use cubic::CubicCurve2D;
pub use curve_3d::{Curve3D, LateralTranslatedCurve3D};
pub use line_segment::LineSegment2D;
pub use parametric_cubic::{ParamRange, ParametricCubicCurve2D};
pub use spiral::{Spiral2D, SpiralSegment2D};

use crate::error::{GeometryError, Result};
use crate::geometry::Pose2D;
use crate::math::{fuzzy_contains, Point2};

/// A 2D curve primitive mapping a curve-relative arc length to a pose.
///
/// A tagged union over all plan-view geometry variants; dispatch is an
/// exhaustive `match`, so adding a variant is a compile-time-checked
/// change everywhere.
#[derive(Debug, Clone)]
pub enum Curve2D {
    LineSegment(LineSegment2D),
    Arc(Arc2D),
    SpiralSegment(SpiralSegment2D),
    Cubic(CubicCurve2D),
    ParametricCubic(ParametricCubicCurve2D),
    Composite(CompositeCurve2D),
}

impl Curve2D {
    /// Length of the curve's domain.
    #[must_use]
    pub fn length(&self) -> f64 {
        match self {
            Self::LineSegment(c) => c.length(),
            Self::Arc(c) => c.length(),
            Self::SpiralSegment(c) => c.length(),
            Self::Cubic(c) => c.length(),
            Self::ParametricCubic(c) => c.length(),
            Self::Composite(c) => c.length(),
        }
    }

    /// Tolerance the curve was constructed with.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        match self {
            Self::LineSegment(c) => c.tolerance(),
            Self::Arc(c) => c.tolerance(),
            Self::SpiralSegment(c) => c.tolerance(),
            Self::Cubic(c) => c.tolerance(),
            Self::ParametricCubic(c) => c.tolerance(),
            Self::Composite(c) => c.tolerance(),
        }
    }

    /// Global pose at curve-relative arc length `s`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if `s` lies outside
    /// `[0, length]` by more than the curve's tolerance.
    pub fn pose_at(&self, s: f64) -> Result<Pose2D> {
        match self {
            Self::LineSegment(c) => c.pose_at(s),
            Self::Arc(c) => c.pose_at(s),
            Self::SpiralSegment(c) => c.pose_at(s),
            Self::Cubic(c) => c.pose_at(s),
            Self::ParametricCubic(c) => c.pose_at(s),
            Self::Composite(c) => c.pose_at(s),
        }
    }

    /// Global position at curve-relative arc length `s`.
    ///
    /// # Errors
    ///
    /// Same contract as [`Curve2D::pose_at`].
    pub fn point_at(&self, s: f64) -> Result<Point2> {
        Ok(self.pose_at(s)?.point)
    }
}

/// Validates a curve length at construction: finite and above tolerance.
pub(crate) fn check_length(length: f64, tolerance: f64) -> Result<f64> {
    if !length.is_finite() {
        return Err(GeometryError::NonFinite {
            quantity: "curve length",
            value: length,
        }
        .into());
    }
    if length <= tolerance {
        return Err(GeometryError::BelowTolerance {
            quantity: "curve length",
            value: length,
            tolerance,
        }
        .into());
    }
    Ok(length)
}

/// Validates a curve-relative query: `s` must lie in
/// `[-tolerance, length + tolerance]` and is clamped to `[0, length]`.
pub(crate) fn check_curve_relative(s: f64, length: f64, tolerance: f64) -> Result<f64> {
    if !s.is_finite() || !fuzzy_contains(s, 0.0, length, tolerance) {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "curve position",
            value: s,
            min: 0.0,
            max: length,
        }
        .into());
    }
    Ok(s.clamp(0.0, length))
}
