use crate::analysis::{LinearFunction, StackedFunction, UnivariateFunction};
use crate::error::Result;
use crate::evaluation::ObjectRepeatEntry;
use crate::geometry::curve::{Curve3D, LateralTranslatedCurve3D};
use crate::geometry::solid::{ParametricSweep3D, DEFAULT_STEP_SIZE};

/// Builds the parametric sweep for a continuous road-object repeat entry.
///
/// Returns `None` when the entry does not describe a sweep-applicable
/// shape (discrete repeat distance or sub-tolerance widths/heights);
/// absence of a sweep is not an error. The reference line is the road
/// reference curve restricted to the repeat's span, laterally translated
/// between the entry's start and end offsets; the repeat's vertical
/// offset is stacked onto the road elevation.
pub struct BuildParametricSweep<'a> {
    repeat: &'a ObjectRepeatEntry,
    reference: &'a Curve3D,
    step: f64,
    tolerance: f64,
}

impl<'a> BuildParametricSweep<'a> {
    /// Creates a new `BuildParametricSweep` operation with the default
    /// step size.
    #[must_use]
    pub fn new(repeat: &'a ObjectRepeatEntry, reference: &'a Curve3D, tolerance: f64) -> Self {
        Self::with_step(repeat, reference, DEFAULT_STEP_SIZE, tolerance)
    }

    /// Creates a new `BuildParametricSweep` operation with an explicit
    /// step size.
    #[must_use]
    pub fn with_step(
        repeat: &'a ObjectRepeatEntry,
        reference: &'a Curve3D,
        step: f64,
        tolerance: f64,
    ) -> Self {
        Self {
            repeat,
            reference,
            step,
            tolerance,
        }
    }

    /// Executes the build.
    ///
    /// # Errors
    ///
    /// Returns an error if the repeat span does not fit the reference
    /// curve's domain or the step size is invalid.
    pub fn execute(self) -> Result<Option<ParametricSweep3D>> {
        if !self.repeat.contains_parametric_sweep(self.tolerance) {
            return Ok(None);
        }
        let length = self.repeat.length;

        // The repeat's vertical offset rides on top of the road
        // elevation.
        let z_offset = LinearFunction::of_points(
            0.0,
            self.repeat.z_offset_start,
            length,
            self.repeat.z_offset_end,
            self.tolerance,
        )?;
        let elevation: UnivariateFunction = StackedFunction::new(vec![
            self.reference.elevation().clone(),
            shifted(z_offset, self.repeat.s),
        ])
        .into();
        let lifted = Curve3D::new(
            self.reference.horizontal().clone(),
            elevation,
            self.reference.torsion().cloned(),
        );

        let lateral_offset = LinearFunction::of_points(
            0.0,
            self.repeat.t_start,
            length,
            self.repeat.t_end,
            self.tolerance,
        )?;
        let reference_curve =
            LateralTranslatedCurve3D::new(lifted, lateral_offset, self.repeat.s, length)?;

        let height_function = LinearFunction::of_points(
            0.0,
            self.repeat.height_start,
            length,
            self.repeat.height_end,
            self.tolerance,
        )?;
        let width_function = LinearFunction::of_points(
            0.0,
            self.repeat.width_start,
            length,
            self.repeat.width_end,
            self.tolerance,
        )?;

        Ok(Some(ParametricSweep3D::new(
            reference_curve,
            height_function.into(),
            width_function.into(),
            self.step,
            self.tolerance,
        )?))
    }
}

/// Re-anchors a section-local linear function to the absolute curve
/// coordinate it is evaluated at inside the stacked elevation.
fn shifted(f: LinearFunction, s_start: f64) -> UnivariateFunction {
    LinearFunction::new(f.slope(), f.intercept() - f.slope() * s_start).into()
}
