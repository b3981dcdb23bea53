use std::f64::consts::PI;

use crate::analysis::LinearFunction;
use crate::error::{GeometryError, Result};
use crate::geometry::Pose2D;
use crate::math::fresnel::fresnel;
use crate::math::Point2;
use crate::transform::{Affine2D, AffineSequence2D};

use super::{check_curve_relative, check_length};

/// The standard Euler spiral (clothoid): curvature grows linearly with
/// arc length, `kappa(l) = curvature_derivative * l`.
///
/// At arc length `l`, with `a = sqrt(pi / |cDot|)`, the point is
/// `(C(l/a) * a, S(l/a) * a * sign(cDot))` via the Fresnel integrals and
/// the tangent angle is `0.5 * cDot * l^2`. As `l -> +/-inf` the point
/// converges to the asymptotic point `(+/-a/2, +/-a/2 * sign(cDot))`;
/// evaluation returns that closed-form limit instead of diverging.
/// Floating-point error grows at very large finite `|l|` (the oscillatory
/// Fresnel terms lose precision); this is an accepted, bounded
/// limitation of the evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spiral2D {
    curvature_derivative: f64,
}

impl Spiral2D {
    /// Creates the standard spiral with the given curvature derivative.
    ///
    /// # Errors
    ///
    /// Returns an error if the derivative is non-finite or zero.
    pub fn new(curvature_derivative: f64) -> Result<Self> {
        if !curvature_derivative.is_finite() {
            return Err(GeometryError::NonFinite {
                quantity: "curvature derivative",
                value: curvature_derivative,
            }
            .into());
        }
        if curvature_derivative == 0.0 {
            return Err(GeometryError::ZeroCurvature.into());
        }
        Ok(Self {
            curvature_derivative,
        })
    }

    /// The curvature derivative.
    #[must_use]
    pub fn curvature_derivative(&self) -> f64 {
        self.curvature_derivative
    }

    /// Point on the spiral at arc length `l`, in the spiral's own frame
    /// (origin at the inflection point, tangent along +x).
    ///
    /// Infinite arguments yield the asymptotic point.
    #[must_use]
    pub fn point_at(&self, l: f64) -> Point2 {
        let a = (PI / self.curvature_derivative.abs()).sqrt();
        let (s, c) = fresnel(l / a);
        Point2::new(c * a, s * a * self.curvature_derivative.signum())
    }

    /// Tangent angle at arc length `l`: `0.5 * cDot * l^2`.
    #[must_use]
    pub fn rotation_at(&self, l: f64) -> f64 {
        0.5 * self.curvature_derivative * l * l
    }

    /// The asymptotic point approached as `l -> +inf` (negate for
    /// `l -> -inf`).
    #[must_use]
    pub fn asymptote(&self) -> Point2 {
        self.point_at(f64::INFINITY)
    }
}

/// A clothoid plan-view segment with linearly varying curvature
/// `kappa(s) = kappa_0 + cDot * s`.
///
/// Evaluated by offsetting into the standard spiral at
/// `l0 = kappa_0 / cDot` and re-basing, so the segment starts at the
/// local origin with zero heading.
#[derive(Debug, Clone)]
pub struct SpiralSegment2D {
    curvature_function: LinearFunction,
    length: f64,
    tolerance: f64,
    affine_sequence: AffineSequence2D,
    affine: Affine2D,
    spiral: Spiral2D,
    start_offset: f64,
    start_point: Point2,
    start_rotation: f64,
}

impl SpiralSegment2D {
    /// Creates a clothoid segment from its curvature function
    /// (`intercept` = start curvature, `slope` = curvature derivative).
    ///
    /// # Errors
    ///
    /// Returns an error if the curvature derivative is zero or non-finite
    /// (a constant-curvature entry belongs to [`super::Arc2D`] or
    /// [`super::LineSegment2D`]), or if the length is invalid.
    pub fn new(
        curvature_function: LinearFunction,
        length: f64,
        tolerance: f64,
        affine_sequence: AffineSequence2D,
    ) -> Result<Self> {
        let spiral = Spiral2D::new(curvature_function.slope())?;
        let length = check_length(length, tolerance)?;
        let start_offset = curvature_function.intercept() / curvature_function.slope();
        let affine = affine_sequence.resolve();
        Ok(Self {
            curvature_function,
            length,
            tolerance,
            affine_sequence,
            affine,
            spiral,
            start_offset,
            start_point: spiral.point_at(start_offset),
            start_rotation: spiral.rotation_at(start_offset),
        })
    }

    /// The linear curvature function over the segment's arc length.
    #[must_use]
    pub fn curvature_function(&self) -> LinearFunction {
        self.curvature_function
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

    /// Global pose at arc length `s`.
    ///
    /// # Errors
    ///
    /// Returns an error if `s` lies outside `[0, length]` by more than
    /// the tolerance.
    pub fn pose_at(&self, s: f64) -> Result<Pose2D> {
        let s = check_curve_relative(s, self.length, self.tolerance)?;
        let p = self.spiral.point_at(self.start_offset + s);
        let heading = self.spiral.rotation_at(self.start_offset + s) - self.start_rotation;

        // Re-base onto the segment start: undo the start rotation and
        // translation of the standard spiral's frame.
        let d = p - self.start_point;
        let (sin, cos) = (-self.start_rotation).sin_cos();
        let local = Point2::new(cos * d.x - sin * d.y, sin * d.x + cos * d.y);

        Ok(self.affine.transform_pose(&Pose2D::new(local, heading)))
    }
}
