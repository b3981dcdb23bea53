use crate::error::Result;
use crate::geometry::Pose2D;
use crate::math::Point2;
use crate::transform::{Affine2D, AffineSequence2D};

use super::{check_curve_relative, check_length};

/// A straight plan-view segment with constant heading.
///
/// The local pose at arc length `s` is `((s, 0), heading 0)`, placed into
/// global coordinates by the affine sequence.
#[derive(Debug, Clone)]
pub struct LineSegment2D {
    length: f64,
    tolerance: f64,
    affine_sequence: AffineSequence2D,
    affine: Affine2D,
}

impl LineSegment2D {
    /// Creates a line segment of the given length.
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is non-finite or not above
    /// `tolerance`.
    pub fn new(length: f64, tolerance: f64, affine_sequence: AffineSequence2D) -> Result<Self> {
        let length = check_length(length, tolerance)?;
        let affine = affine_sequence.resolve();
        Ok(Self {
            length,
            tolerance,
            affine_sequence,
            affine,
        })
    }

    /// Length of the segment.
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

    /// Global pose at arc length `s`.
    ///
    /// # Errors
    ///
    /// Returns an error if `s` lies outside `[0, length]` by more than
    /// the tolerance.
    pub fn pose_at(&self, s: f64) -> Result<Pose2D> {
        let s = check_curve_relative(s, self.length, self.tolerance)?;
        Ok(self
            .affine
            .transform_pose(&Pose2D::new(Point2::new(s, 0.0), 0.0)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector2;
    use std::f64::consts::FRAC_PI_2;

    const TOL: f64 = 1e-10;

    #[test]
    fn midpoint_of_axis_aligned_segment() {
        // From (0,0) toward +x for 10 units, queried at s=5.
        let segment = LineSegment2D::new(10.0, 0.0, AffineSequence2D::empty()).unwrap();
        let pose = segment.pose_at(5.0).unwrap();
        assert!((pose.point - Point2::new(5.0, 0.0)).norm() < TOL);
        assert!(pose.heading.abs() < TOL);
    }

    #[test]
    fn start_pose_reproduces_placement() {
        let sequence = AffineSequence2D::of(vec![
            Affine2D::of_translation(Vector2::new(3.0, 4.0)),
            Affine2D::of_rotation(FRAC_PI_2),
        ]);
        let segment = LineSegment2D::new(2.0, 1e-7, sequence).unwrap();
        let pose = segment.pose_at(0.0).unwrap();
        assert!((pose.point - Point2::new(3.0, 4.0)).norm() < TOL);
        assert!((pose.heading - FRAC_PI_2).abs() < TOL);
        // End of a rotated segment points along +y.
        let end = segment.pose_at(2.0).unwrap();
        assert!((end.point - Point2::new(3.0, 6.0)).norm() < TOL);
    }

    #[test]
    fn rejects_sub_tolerance_length() {
        assert!(LineSegment2D::new(1e-8, 1e-7, AffineSequence2D::empty()).is_err());
        assert!(LineSegment2D::new(f64::NAN, 1e-7, AffineSequence2D::empty()).is_err());
    }

    #[test]
    fn rejects_out_of_domain_queries() {
        let segment = LineSegment2D::new(10.0, 1e-7, AffineSequence2D::empty()).unwrap();
        assert!(segment.pose_at(-0.1).is_err());
        assert!(segment.pose_at(10.1).is_err());
        // The closed end with fuzz is inside the contract.
        assert!(segment.pose_at(10.0).is_ok());
        assert!(segment.pose_at(10.0 + 1e-9).is_ok());
    }
}
