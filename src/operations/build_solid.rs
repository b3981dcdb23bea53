use crate::error::{BuilderError, Result};
use crate::evaluation::RoadObjectEntry;
use crate::geometry::{Cuboid3D, Cylinder3D};
use crate::transform::AffineSequence3D;

/// Builds the cuboid primitive for a road object with box dimensions.
///
/// Guarded by [`RoadObjectEntry::contains_cuboid`]; executing without
/// that precondition is a [`BuilderError::NotApplicable`].
pub struct BuildCuboid<'a> {
    object: &'a RoadObjectEntry,
    affine_sequence: AffineSequence3D,
    tolerance: f64,
}

impl<'a> BuildCuboid<'a> {
    /// Creates a new `BuildCuboid` operation.
    #[must_use]
    pub fn new(
        object: &'a RoadObjectEntry,
        affine_sequence: AffineSequence3D,
        tolerance: f64,
    ) -> Self {
        Self {
            object,
            affine_sequence,
            tolerance,
        }
    }

    /// Executes the build.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::NotApplicable`] if the object carries no
    /// usable box dimensions.
    pub fn execute(self) -> Result<Cuboid3D> {
        if !self.object.contains_cuboid(self.tolerance) {
            return Err(BuilderError::NotApplicable(
                "road object has no usable length/width/height".into(),
            )
            .into());
        }
        let (length, width, height) = (
            self.object.length.unwrap_or_default(),
            self.object.width.unwrap_or_default(),
            self.object.height.unwrap_or_default(),
        );
        Cuboid3D::new(length, width, height, self.tolerance, self.affine_sequence)
    }
}

/// Builds the cylinder primitive for a road object with radial
/// dimensions.
///
/// Guarded by [`RoadObjectEntry::contains_cylinder`].
pub struct BuildCylinder<'a> {
    object: &'a RoadObjectEntry,
    affine_sequence: AffineSequence3D,
    tolerance: f64,
}

impl<'a> BuildCylinder<'a> {
    /// Creates a new `BuildCylinder` operation.
    #[must_use]
    pub fn new(
        object: &'a RoadObjectEntry,
        affine_sequence: AffineSequence3D,
        tolerance: f64,
    ) -> Self {
        Self {
            object,
            affine_sequence,
            tolerance,
        }
    }

    /// Executes the build.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::NotApplicable`] if the object carries no
    /// usable radius/height.
    pub fn execute(self) -> Result<Cylinder3D> {
        if !self.object.contains_cylinder(self.tolerance) {
            return Err(BuilderError::NotApplicable(
                "road object has no usable radius/height".into(),
            )
            .into());
        }
        let (radius, height) = (
            self.object.radius.unwrap_or_default(),
            self.object.height.unwrap_or_default(),
        );
        Cylinder3D::new(radius, height, self.tolerance, self.affine_sequence)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-7;

    #[test]
    fn cuboid_from_box_dimensions() {
        let object = RoadObjectEntry {
            length: Some(4.0),
            width: Some(2.0),
            height: Some(1.0),
            radius: None,
        };
        let cuboid = BuildCuboid::new(&object, AffineSequence3D::empty(), TOL)
            .execute()
            .unwrap();
        assert!((cuboid.length() - 4.0).abs() < TOL);
        assert_eq!(cuboid.polyhedron().unwrap().faces().len(), 6);
    }

    #[test]
    fn cuboid_without_dimensions_is_not_applicable() {
        let object = RoadObjectEntry::default();
        let result = BuildCuboid::new(&object, AffineSequence3D::empty(), TOL).execute();
        assert!(matches!(
            result,
            Err(crate::error::StradaError::Builder(BuilderError::NotApplicable(_)))
        ));
    }

    #[test]
    fn cylinder_from_radial_dimensions() {
        let object = RoadObjectEntry {
            length: None,
            width: None,
            height: Some(5.0),
            radius: Some(0.25),
        };
        let cylinder = BuildCylinder::new(&object, AffineSequence3D::empty(), TOL)
            .execute()
            .unwrap();
        assert!((cylinder.height() - 5.0).abs() < TOL);
    }

    #[test]
    fn cylinder_prefers_explicit_predicate_check() {
        let object = RoadObjectEntry {
            length: Some(1.0),
            width: Some(1.0),
            height: Some(1.0),
            radius: None,
        };
        assert!(!object.contains_cylinder(TOL));
        assert!(BuildCylinder::new(&object, AffineSequence3D::empty(), TOL)
            .execute()
            .is_err());
    }
}
