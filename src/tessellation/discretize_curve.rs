use crate::error::{Result, TessellationError};
use crate::geometry::curve::{Curve2D, Curve3D};
use crate::math::{Point2, Point3};

/// Discretizes a plan-view curve into a point sequence.
///
/// Sampling is uniform in arc length with `ceil(length / step)` intervals
/// (at least one), re-spaced so both endpoints are hit exactly. This is
/// the sampling surface ring emitters downstream consume.
pub struct DiscretizeCurve2D<'a> {
    curve: &'a Curve2D,
    step: f64,
}

impl<'a> DiscretizeCurve2D<'a> {
    /// Creates a new `DiscretizeCurve2D` operation.
    #[must_use]
    pub fn new(curve: &'a Curve2D, step: f64) -> Self {
        Self { curve, step }
    }

    /// Executes the discretization.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationError::InvalidParameters`] for a
    /// non-positive or non-finite step; curve evaluation errors
    /// propagate.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        let samples = sample_positions(self.curve.length(), self.step)?;
        samples
            .into_iter()
            .map(|s| self.curve.point_at(s))
            .collect()
    }
}

/// Discretizes a 3D reference curve into a point sequence, same sampling
/// contract as [`DiscretizeCurve2D`].
pub struct DiscretizeCurve3D<'a> {
    curve: &'a Curve3D,
    step: f64,
}

impl<'a> DiscretizeCurve3D<'a> {
    /// Creates a new `DiscretizeCurve3D` operation.
    #[must_use]
    pub fn new(curve: &'a Curve3D, step: f64) -> Self {
        Self { curve, step }
    }

    /// Executes the discretization.
    ///
    /// # Errors
    ///
    /// Same contract as [`DiscretizeCurve2D::execute`].
    pub fn execute(&self) -> Result<Vec<Point3>> {
        let samples = sample_positions(self.curve.length(), self.step)?;
        samples
            .into_iter()
            .map(|s| self.curve.point_at(s))
            .collect()
    }
}

fn sample_positions(length: f64, step: f64) -> Result<Vec<f64>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(
            TessellationError::InvalidParameters(format!("step size {step} must be positive"))
                .into(),
        );
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let intervals = (length / step).ceil().max(1.0) as usize;
    #[allow(clippy::cast_precision_loss)]
    Ok((0..=intervals)
        .map(|i| length * (i as f64) / (intervals as f64))
        .collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::analysis::LinearFunction;
    use crate::geometry::curve::{Arc2D, LineSegment2D};
    use crate::transform::AffineSequence2D;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-10;

    #[test]
    fn includes_both_endpoints() {
        let curve = Curve2D::LineSegment(
            LineSegment2D::new(10.0, 1e-7, AffineSequence2D::empty()).unwrap(),
        );
        let points = DiscretizeCurve2D::new(&curve, 3.0).execute().unwrap();
        assert_eq!(points.len(), 5); // ceil(10/3) = 4 intervals
        assert!((points[0] - Point2::origin()).norm() < TOL);
        assert!((points[4] - Point2::new(10.0, 0.0)).norm() < TOL);
    }

    #[test]
    fn short_curve_yields_at_least_the_endpoints() {
        let curve = Curve2D::LineSegment(
            LineSegment2D::new(0.1, 1e-7, AffineSequence2D::empty()).unwrap(),
        );
        let points = DiscretizeCurve2D::new(&curve, 5.0).execute().unwrap();
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn arc_samples_stay_on_the_circle() {
        let curve =
            Curve2D::Arc(Arc2D::new(1.0, PI, 1e-7, AffineSequence2D::empty()).unwrap());
        let points = DiscretizeCurve2D::new(&curve, 0.1).execute().unwrap();
        for p in &points {
            let r = (p - Point2::new(0.0, 1.0)).norm();
            assert!((r - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn lifts_to_3d_with_elevation() {
        let horizontal = Curve2D::LineSegment(
            LineSegment2D::new(10.0, 1e-7, AffineSequence2D::empty()).unwrap(),
        );
        let curve = Curve3D::new(horizontal, LinearFunction::new(0.1, 0.0).into(), None);
        let points = DiscretizeCurve3D::new(&curve, 2.5).execute().unwrap();
        assert_eq!(points.len(), 5);
        assert!((points[4] - Point3::new(10.0, 0.0, 1.0)).norm() < TOL);
    }

    #[test]
    fn rejects_non_positive_steps() {
        let curve = Curve2D::LineSegment(
            LineSegment2D::new(10.0, 1e-7, AffineSequence2D::empty()).unwrap(),
        );
        assert!(DiscretizeCurve2D::new(&curve, 0.0).execute().is_err());
        assert!(DiscretizeCurve2D::new(&curve, f64::NAN).execute().is_err());
    }
}
