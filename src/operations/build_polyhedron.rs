use crate::error::{Result, StradaError};
use crate::evaluation::{Healed, IssueList, LocalCornerEntry, RoadCornerEntry};
use crate::geometry::curve::Curve3D;
use crate::geometry::{CurveRelativeVector2D, Polyhedron3D, VerticalOutlineElement};
use crate::math::Point3;
use crate::transform::AffineSequence3D;

/// Builds a road-object polyhedron from curve-relative outline corners.
///
/// Construction is best-effort: a corner that cannot be transformed (its
/// `s` lies outside the reference curve) is dropped with a warning and
/// the build continues with the remaining corners; only falling below 3
/// usable elements aborts the object.
pub struct BuildPolyhedronFromRoadCorners<'a> {
    id: String,
    corners: Vec<RoadCornerEntry>,
    reference: &'a Curve3D,
    tolerance: f64,
}

impl<'a> BuildPolyhedronFromRoadCorners<'a> {
    /// Creates a new `BuildPolyhedronFromRoadCorners` operation.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        corners: Vec<RoadCornerEntry>,
        reference: &'a Curve3D,
        tolerance: f64,
    ) -> Self {
        Self {
            id: id.into(),
            corners,
            reference,
            tolerance,
        }
    }

    /// Executes the build.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::BuilderError::InsufficientOutlineElements`]
    /// when fewer than 3 corners survive,
    /// [`crate::error::BuilderError::InconsistentOutline`] for
    /// a mixed outline (prevent via
    /// [`crate::evaluation::heal_road_corner_entries`]), and propagates
    /// face construction failures.
    pub fn execute(self) -> Result<Healed<Polyhedron3D>> {
        let mut issues = IssueList::new();

        let mut elements: Vec<VerticalOutlineElement> = Vec::with_capacity(self.corners.len());
        for corner in &self.corners {
            match self.outline_element(corner) {
                Ok(element) => elements.push(element),
                Err(error) => issues.add_warning(format!(
                    "{}: outline corner at s={} skipped: {error}",
                    self.id, corner.s
                )),
            }
        }
        dedupe_coincident(&mut elements, self.tolerance, &self.id, &mut issues);

        let polyhedron =
            Polyhedron3D::from_vertical_outline_elements(&self.id, &elements, self.tolerance)?;
        Ok(Healed::new(polyhedron, issues))
    }

    fn outline_element(&self, corner: &RoadCornerEntry) -> Result<VerticalOutlineElement> {
        let at = CurveRelativeVector2D::new(corner.s, corner.t);
        let base = self.reference.transform_with_height(at, corner.dz)?;
        if corner.height > 0.0 {
            let head = self
                .reference
                .transform_with_height(at, corner.dz + corner.height)?;
            Ok(VerticalOutlineElement::with_head(base, head))
        } else {
            Ok(VerticalOutlineElement::without_head(base))
        }
    }
}

/// Builds a road-object polyhedron from object-local outline corners,
/// placed by the object's affine sequence. Same best-effort protocol as
/// [`BuildPolyhedronFromRoadCorners`].
pub struct BuildPolyhedronFromLocalCorners {
    id: String,
    corners: Vec<LocalCornerEntry>,
    affine_sequence: AffineSequence3D,
    tolerance: f64,
}

impl BuildPolyhedronFromLocalCorners {
    /// Creates a new `BuildPolyhedronFromLocalCorners` operation.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        corners: Vec<LocalCornerEntry>,
        affine_sequence: AffineSequence3D,
        tolerance: f64,
    ) -> Self {
        Self {
            id: id.into(),
            corners,
            affine_sequence,
            tolerance,
        }
    }

    /// Executes the build.
    ///
    /// # Errors
    ///
    /// Same contract as [`BuildPolyhedronFromRoadCorners::execute`].
    pub fn execute(self) -> Result<Healed<Polyhedron3D>> {
        let mut issues = IssueList::new();
        let affine = self.affine_sequence.resolve();

        let mut elements: Vec<VerticalOutlineElement> = Vec::with_capacity(self.corners.len());
        for corner in &self.corners {
            let base = affine.transform_point(&Point3::new(corner.u, corner.v, corner.z));
            if corner.height > 0.0 {
                let head =
                    affine.transform_point(&Point3::new(corner.u, corner.v, corner.z + corner.height));
                elements.push(VerticalOutlineElement::with_head(base, head));
            } else {
                elements.push(VerticalOutlineElement::without_head(base));
            }
        }
        dedupe_coincident(&mut elements, self.tolerance, &self.id, &mut issues);

        let polyhedron =
            Polyhedron3D::from_vertical_outline_elements(&self.id, &elements, self.tolerance)?;
        Ok(Healed::new(polyhedron, issues))
    }
}

/// Drops elements whose base coincides with the previous one (cyclically,
/// so a closing duplicate of the first element also goes).
fn dedupe_coincident(
    elements: &mut Vec<VerticalOutlineElement>,
    tolerance: f64,
    id: &str,
    issues: &mut IssueList,
) {
    let mut deduped: Vec<VerticalOutlineElement> = Vec::with_capacity(elements.len());
    for element in elements.drain(..) {
        if let Some(last) = deduped.last() {
            if (element.base() - last.base()).norm() <= tolerance {
                issues.add_warning(format!("{id}: coincident outline corner dropped"));
                continue;
            }
        }
        deduped.push(element);
    }
    while deduped.len() > 1 {
        let first = deduped[0].base();
        let last = deduped[deduped.len() - 1].base();
        if (first - last).norm() <= tolerance {
            issues.add_warning(format!("{id}: closing outline corner dropped"));
            deduped.pop();
        } else {
            break;
        }
    }
    *elements = deduped;
}

/// `true` if the error is a per-object builder failure that the caller
/// downgrades to a warning issue (skipping the object) rather than a
/// model-level failure.
#[must_use]
pub fn is_recoverable(error: &StradaError) -> bool {
    matches!(error, StradaError::Builder(_))
}
