use crate::analysis::{LinearFunction, UnivariateFunction};
use crate::error::Result;
use crate::geometry::{CurveRelativeVector2D, Pose3D, Rotation3D};
use crate::math::{Point3, Vector3};
use crate::transform::Affine3D;

use super::Curve2D;

/// A 3D reference curve: a plan-view curve lifted by an elevation profile
/// and an optional torsion (superelevation) profile.
///
/// The pose at arc length `s` takes its position from the plan view plus
/// the elevation value, its heading from the plan view, its pitch from
/// the elevation slope, and its roll from the torsion profile.
#[derive(Debug, Clone)]
pub struct Curve3D {
    horizontal: Curve2D,
    elevation: UnivariateFunction,
    torsion: Option<UnivariateFunction>,
}

impl Curve3D {
    /// Lifts a plan-view curve with elevation and optional torsion.
    #[must_use]
    pub fn new(
        horizontal: Curve2D,
        elevation: UnivariateFunction,
        torsion: Option<UnivariateFunction>,
    ) -> Self {
        Self {
            horizontal,
            elevation,
            torsion,
        }
    }

    /// Lifts a plan-view curve flat at height zero.
    #[must_use]
    pub fn flat(horizontal: Curve2D) -> Self {
        Self::new(horizontal, UnivariateFunction::zero(), None)
    }

    /// Length of the underlying plan-view curve.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.horizontal.length()
    }

    /// Tolerance of the underlying plan-view curve.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.horizontal.tolerance()
    }

    /// The plan-view curve.
    #[must_use]
    pub fn horizontal(&self) -> &Curve2D {
        &self.horizontal
    }

    /// The elevation profile.
    #[must_use]
    pub fn elevation(&self) -> &UnivariateFunction {
        &self.elevation
    }

    /// The torsion profile, if any.
    #[must_use]
    pub fn torsion(&self) -> Option<&UnivariateFunction> {
        self.torsion.as_ref()
    }

    /// Global 3D pose at arc length `s`.
    ///
    /// # Errors
    ///
    /// Returns an error if `s` is outside the curve or profile domains.
    pub fn pose_at(&self, s: f64) -> Result<Pose3D> {
        let plan = self.horizontal.pose_at(s)?;
        let z = self.elevation.value_at(s)?;
        let pitch = -self.elevation.slope_at(s)?.atan();
        let roll = match &self.torsion {
            Some(torsion) => torsion.value_at(s)?,
            None => 0.0,
        };
        Ok(Pose3D::new(
            Point3::new(plan.point.x, plan.point.y, z),
            Rotation3D::new(plan.heading, pitch, roll),
        ))
    }

    /// Global position at arc length `s`.
    ///
    /// # Errors
    ///
    /// Same contract as [`Curve3D::pose_at`].
    pub fn point_at(&self, s: f64) -> Result<Point3> {
        Ok(self.pose_at(s)?.point)
    }

    /// Maps a curve-relative point (arc length, lateral offset) to global
    /// coordinates through the full pose rotation, so superelevation
    /// tilts lateral offsets out of the horizontal plane.
    ///
    /// # Errors
    ///
    /// Same contract as [`Curve3D::pose_at`].
    pub fn transform(&self, point: CurveRelativeVector2D) -> Result<Point3> {
        self.transform_with_height(point, 0.0)
    }

    /// Like [`Curve3D::transform`] with an additional local height above
    /// the (possibly tilted) cross-section plane.
    ///
    /// # Errors
    ///
    /// Same contract as [`Curve3D::pose_at`].
    pub fn transform_with_height(
        &self,
        point: CurveRelativeVector2D,
        height: f64,
    ) -> Result<Point3> {
        let pose = self.pose_at(point.curve_position)?;
        let affine = Affine3D::of_pose(&pose);
        Ok(affine.transform_point(&Point3::from(Vector3::new(
            0.0,
            point.lateral_offset,
            height,
        ))))
    }
}

/// A section of a base curve, laterally translated by a linear function
/// of the section-local arc length.
///
/// This is the reference line for parametric sweeps: a road-object repeat
/// entry spans `[s_start, s_start + length]` of the road reference line
/// and drifts from one lateral offset to another along the way. Queries
/// are section-local (`0` is the section start).
#[derive(Debug, Clone)]
pub struct LateralTranslatedCurve3D {
    base: Curve3D,
    lateral_offset: LinearFunction,
    s_start: f64,
    length: f64,
}

impl LateralTranslatedCurve3D {
    /// Creates a laterally translated section of `base` covering
    /// `[s_start, s_start + length]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the section exceeds the base curve's domain.
    pub fn new(
        base: Curve3D,
        lateral_offset: LinearFunction,
        s_start: f64,
        length: f64,
    ) -> Result<Self> {
        let tolerance = base.tolerance();
        super::check_curve_relative(s_start, base.length(), tolerance)?;
        super::check_curve_relative(s_start + length, base.length(), tolerance)?;
        Ok(Self {
            base,
            lateral_offset,
            s_start,
            length,
        })
    }

    /// Length of the section.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Tolerance of the base curve.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.base.tolerance()
    }

    /// Maps a section-local curve-relative point plus local height to
    /// global coordinates. The stored lateral offset adds to the point's
    /// own offset.
    ///
    /// # Errors
    ///
    /// Returns an error if the section-local position is outside
    /// `[0, length]` or the base curve evaluation fails.
    pub fn transform_with_height(
        &self,
        point: CurveRelativeVector2D,
        height: f64,
    ) -> Result<Point3> {
        let local = super::check_curve_relative(point.curve_position, self.length, self.tolerance())?;
        let offset = self.lateral_offset.value_at(local) + point.lateral_offset;
        self.base.transform_with_height(
            CurveRelativeVector2D::new(self.s_start + local, offset),
            height,
        )
    }
}
