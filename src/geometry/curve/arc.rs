use crate::error::{GeometryError, Result};
use crate::geometry::Pose2D;
use crate::math::Point2;
use crate::transform::{Affine2D, AffineSequence2D};

use super::{check_curve_relative, check_length};

/// A constant-curvature plan-view segment.
///
/// Sign convention: positive curvature turns left (counter-clockwise).
/// Zero curvature is invalid; such an entry degenerates to a line and
/// callers must route it to [`super::LineSegment2D`] instead.
#[derive(Debug, Clone)]
pub struct Arc2D {
    curvature: f64,
    length: f64,
    tolerance: f64,
    affine_sequence: AffineSequence2D,
    affine: Affine2D,
}

impl Arc2D {
    /// Creates an arc from curvature and length.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroCurvature`] if `|curvature|` does not
    /// exceed the tolerance, and a length error under the same contract
    /// as [`super::LineSegment2D::new`].
    pub fn new(
        curvature: f64,
        length: f64,
        tolerance: f64,
        affine_sequence: AffineSequence2D,
    ) -> Result<Self> {
        if !curvature.is_finite() {
            return Err(GeometryError::NonFinite {
                quantity: "arc curvature",
                value: curvature,
            }
            .into());
        }
        if curvature.abs() <= tolerance {
            return Err(GeometryError::ZeroCurvature.into());
        }
        let length = check_length(length, tolerance)?;
        let affine = affine_sequence.resolve();
        Ok(Self {
            curvature,
            length,
            tolerance,
            affine_sequence,
            affine,
        })
    }

    /// Signed curvature.
    #[must_use]
    pub fn curvature(&self) -> f64 {
        self.curvature
    }

    /// Arc length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Construction tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// The placement sequence.
    #[must_use]
    pub fn affine_sequence(&self) -> &AffineSequence2D {
        &self.affine_sequence
    }

    /// Global center of the arc's circle, at distance `1/curvature` along
    /// the start normal.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.affine
            .transform_point(&Point2::new(0.0, 1.0 / self.curvature))
    }

    /// Global pose at arc length `s`: heading `curvature * s`, position on
    /// the circular parametrization through the local start.
    ///
    /// # Errors
    ///
    /// Returns an error if `s` lies outside `[0, length]` by more than
    /// the tolerance.
    pub fn pose_at(&self, s: f64) -> Result<Pose2D> {
        let s = check_curve_relative(s, self.length, self.tolerance)?;
        let angle = self.curvature * s;
        let local = Point2::new(
            angle.sin() / self.curvature,
            (1.0 - angle.cos()) / self.curvature,
        );
        Ok(self.affine.transform_pose(&Pose2D::new(local, angle)))
    }
}
