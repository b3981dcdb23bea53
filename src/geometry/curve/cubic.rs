use crate::analysis::CubicFunction;
use crate::error::Result;
use crate::geometry::Pose2D;
use crate::math::Point2;
use crate::transform::{Affine2D, AffineSequence2D};

use super::{check_curve_relative, check_length};

/// A plan-view polynomial segment `v = a + b*u + c*u^2 + d*u^3`, with the
/// curve-relative arc length used as the `u` coordinate directly (the
/// source format's arc-length approximation).
///
/// The endpoint is not guaranteed to coincide with the next plan-view
/// element: tolerance-bounded gaps between consecutive elements are a
/// known property of the upstream data, carried through rather than
/// repaired here.
#[derive(Debug, Clone)]
pub struct CubicCurve2D {
    polynomial: CubicFunction,
    length: f64,
    tolerance: f64,
    affine_sequence: AffineSequence2D,
    affine: Affine2D,
}

impl CubicCurve2D {
    /// Creates a cubic segment from coefficients `[a, b, c, d]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the length is non-finite or not above the
    /// tolerance.
    pub fn new(
        coefficients: [f64; 4],
        length: f64,
        tolerance: f64,
        affine_sequence: AffineSequence2D,
    ) -> Result<Self> {
        let length = check_length(length, tolerance)?;
        let affine = affine_sequence.resolve();
        Ok(Self {
            polynomial: CubicFunction::new(coefficients),
            length,
            tolerance,
            affine_sequence,
            affine,
        })
    }

    /// The polynomial coefficients `[a, b, c, d]`.
    #[must_use]
    pub fn coefficients(&self) -> [f64; 4] {
        self.polynomial.coefficients()
    }

    /// Length of the segment's domain.
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

    /// Global pose at arc length `s`; heading from the polynomial's
    /// derivative.
    ///
    /// # Errors
    ///
    /// Returns an error if `s` lies outside `[0, length]` by more than
    /// the tolerance.
    pub fn pose_at(&self, s: f64) -> Result<Pose2D> {
        let u = check_curve_relative(s, self.length, self.tolerance)?;
        let local = Point2::new(u, self.polynomial.value_at(u));
        let heading = self.polynomial.slope_at(u).atan();
        Ok(self.affine.transform_pose(&Pose2D::new(local, heading)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    const TOL: f64 = 1e-10;

    #[test]
    fn flat_polynomial_is_a_straight_segment() {
        let curve = CubicCurve2D::new([0.0; 4], 10.0, 1e-7, AffineSequence2D::empty()).unwrap();
        let pose = curve.pose_at(7.0).unwrap();
        assert!((pose.point - Point2::new(7.0, 0.0)).norm() < TOL);
        assert!(pose.heading.abs() < TOL);
    }

    #[test]
    fn heading_follows_derivative() {
        // v = u: 45 degree slope everywhere.
        let curve =
            CubicCurve2D::new([0.0, 1.0, 0.0, 0.0], 10.0, 1e-7, AffineSequence2D::empty()).unwrap();
        let pose = curve.pose_at(2.0).unwrap();
        assert!((pose.point - Point2::new(2.0, 2.0)).norm() < TOL);
        assert!((pose.heading - FRAC_PI_4).abs() < TOL);
    }

    #[test]
    fn cubic_term_dominates_far_out() {
        let curve =
            CubicCurve2D::new([0.0, 0.0, 0.0, 0.001], 100.0, 1e-7, AffineSequence2D::empty())
                .unwrap();
        let pose = curve.pose_at(100.0).unwrap();
        assert!((pose.point - Point2::new(100.0, 1000.0)).norm() < TOL);
    }

    #[test]
    fn nonzero_constant_coefficient_offsets_the_start() {
        // A non-zero `a` places the curve start off the element origin;
        // the gap to the previous element's endpoint is kept as-is.
        let curve =
            CubicCurve2D::new([0.5, 0.0, 0.0, 0.0], 10.0, 1e-7, AffineSequence2D::empty()).unwrap();
        let start = curve.pose_at(0.0).unwrap();
        assert!((start.point - Point2::new(0.0, 0.5)).norm() < TOL);
    }
}
