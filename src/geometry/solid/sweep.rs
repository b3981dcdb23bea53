use crate::analysis::UnivariateFunction;
use crate::error::{GeometryError, Result};
use crate::geometry::curve::LateralTranslatedCurve3D;
use crate::geometry::surface::Polygon3D;
use crate::geometry::CurveRelativeVector2D;
use crate::math::Point3;

use super::Polyhedron3D;

/// Default arc-length step between sweep cross sections, in meters.
pub const DEFAULT_STEP_SIZE: f64 = 0.3;

/// A solid swept along a reference curve: a rectangular cross section
/// whose width and height vary with the section-local arc length.
///
/// Transient by design: built per road-object repeat entry and consumed
/// immediately to emit a [`Polyhedron3D`].
#[derive(Debug, Clone)]
pub struct ParametricSweep3D {
    reference_curve: LateralTranslatedCurve3D,
    height_function: UnivariateFunction,
    width_function: UnivariateFunction,
    step: f64,
    tolerance: f64,
}

impl ParametricSweep3D {
    /// Creates a sweep over the full length of `reference_curve`.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is non-finite or not positive.
    pub fn new(
        reference_curve: LateralTranslatedCurve3D,
        height_function: UnivariateFunction,
        width_function: UnivariateFunction,
        step: f64,
        tolerance: f64,
    ) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(GeometryError::BelowTolerance {
                quantity: "sweep step size",
                value: step,
                tolerance: 0.0,
            }
            .into());
        }
        Ok(Self {
            reference_curve,
            height_function,
            width_function,
            step,
            tolerance,
        })
    }

    /// The discretization step.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Samples the cross sections and emits the boundary solid: start and
    /// end caps plus bottom/right/top/left quads per sampled interval.
    ///
    /// # Errors
    ///
    /// Propagates reference-curve and profile evaluation errors, and face
    /// construction errors for degenerate (collapsed) cross sections.
    pub fn calculate_polyhedron(&self) -> Result<Polyhedron3D> {
        let length = self.reference_curve.length();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let intervals = (length / self.step).ceil().max(1.0) as usize;

        let mut sections = Vec::with_capacity(intervals + 1);
        for i in 0..=intervals {
            #[allow(clippy::cast_precision_loss)]
            let s = length * (i as f64) / (intervals as f64);
            sections.push(self.cross_section(s)?);
        }

        // Cross section corners are [base_right, base_left, head_left,
        // head_right]; the raw ring's normal points along the direction
        // of travel, so the start cap flips and the end cap stays.
        let mut faces = Vec::with_capacity(4 * intervals + 2);
        faces.push(Polygon3D::new(sections[0].to_vec(), self.tolerance)?.reversed());
        faces.push(Polygon3D::new(sections[sections.len() - 1].to_vec(), self.tolerance)?);
        for pair in sections.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            for k in 0..4 {
                let l = (k + 1) % 4;
                faces.push(Polygon3D::new(
                    vec![a[k], a[l], b[l], b[k]],
                    self.tolerance,
                )?);
            }
        }
        Polyhedron3D::new(faces)
    }

    /// The four corners of the cross section at section-local `s`.
    fn cross_section(&self, s: f64) -> Result<[Point3; 4]> {
        let half_width = self.width_function.value_at(s)? / 2.0;
        let height = self.height_function.value_at(s)?;
        let corner = |lateral: f64, vertical: f64| {
            self.reference_curve
                .transform_with_height(CurveRelativeVector2D::new(s, lateral), vertical)
        };
        Ok([
            corner(-half_width, 0.0)?,
            corner(half_width, 0.0)?,
            corner(half_width, height)?,
            corner(-half_width, height)?,
        ])
    }
}
