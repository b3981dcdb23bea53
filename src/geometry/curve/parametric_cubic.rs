use crate::analysis::CubicFunction;
use crate::error::Result;
use crate::geometry::Pose2D;
use crate::math::Point2;
use crate::transform::{Affine2D, AffineSequence2D};

use super::{check_curve_relative, check_length};

/// How a parametric cubic's parameter relates to the curve-relative arc
/// length (the source format's `pRange` attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamRange {
    /// `t = s`: the parameter is the (approximated) arc length.
    #[default]
    ArcLength,
    /// `t = s / length`: the parameter runs over `[0, 1]`.
    Normalized,
}

/// A plan-view segment with independent cubic polynomials for `u(t)` and
/// `v(t)`; the heading comes from the parametric derivative
/// `atan2(v'(t), u'(t))`.
#[derive(Debug, Clone)]
pub struct ParametricCubicCurve2D {
    polynomial_u: CubicFunction,
    polynomial_v: CubicFunction,
    length: f64,
    param_range: ParamRange,
    tolerance: f64,
    affine_sequence: AffineSequence2D,
    affine: Affine2D,
}

impl ParametricCubicCurve2D {
    /// Creates a parametric cubic segment from coefficient quadruples for
    /// `u(t)` and `v(t)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the length is non-finite or not above the
    /// tolerance.
    pub fn new(
        coefficients_u: [f64; 4],
        coefficients_v: [f64; 4],
        length: f64,
        param_range: ParamRange,
        tolerance: f64,
        affine_sequence: AffineSequence2D,
    ) -> Result<Self> {
        let length = check_length(length, tolerance)?;
        let affine = affine_sequence.resolve();
        Ok(Self {
            polynomial_u: CubicFunction::new(coefficients_u),
            polynomial_v: CubicFunction::new(coefficients_v),
            length,
            param_range,
            tolerance,
            affine_sequence,
            affine,
        })
    }

    /// Length of the segment's domain.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The parameter interpretation.
    #[must_use]
    pub fn param_range(&self) -> ParamRange {
        self.param_range
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
        let t = match self.param_range {
            ParamRange::ArcLength => s,
            ParamRange::Normalized => s / self.length,
        };
        let local = Point2::new(self.polynomial_u.value_at(t), self.polynomial_v.value_at(t));
        let heading = self
            .polynomial_v
            .slope_at(t)
            .atan2(self.polynomial_u.slope_at(t));
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
    fn linear_parametrization_is_a_diagonal() {
        // u(t) = t, v(t) = t: diagonal line, heading 45 degrees.
        let curve = ParametricCubicCurve2D::new(
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            10.0,
            ParamRange::ArcLength,
            1e-7,
            AffineSequence2D::empty(),
        )
        .unwrap();
        let pose = curve.pose_at(3.0).unwrap();
        assert!((pose.point - Point2::new(3.0, 3.0)).norm() < TOL);
        assert!((pose.heading - FRAC_PI_4).abs() < TOL);
    }

    #[test]
    fn normalized_parameter_maps_length_to_one() {
        // u(t) = 100 t: with a normalized parameter, s = length lands on
        // t = 1 and u = 100.
        let curve = ParametricCubicCurve2D::new(
            [0.0, 100.0, 0.0, 0.0],
            [0.0; 4],
            100.0,
            ParamRange::Normalized,
            1e-7,
            AffineSequence2D::empty(),
        )
        .unwrap();
        let end = curve.pose_at(100.0).unwrap();
        assert!((end.point - Point2::new(100.0, 0.0)).norm() < TOL);
        let mid = curve.pose_at(50.0).unwrap();
        assert!((mid.point - Point2::new(50.0, 0.0)).norm() < TOL);
    }

    #[test]
    fn heading_uses_both_derivatives() {
        // u(t) = t, v(t) = t^2: at t=1 the tangent is (1, 2).
        let curve = ParametricCubicCurve2D::new(
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            4.0,
            ParamRange::ArcLength,
            1e-7,
            AffineSequence2D::empty(),
        )
        .unwrap();
        let pose = curve.pose_at(1.0).unwrap();
        assert!((pose.heading - 2.0_f64.atan2(1.0)).abs() < TOL);
    }
}
