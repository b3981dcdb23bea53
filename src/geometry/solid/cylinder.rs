use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::geometry::surface::Polygon3D;
use crate::math::Point3;
use crate::transform::AffineSequence3D;

use super::Polyhedron3D;

/// Number of side quads a cylinder is discretized into by default.
pub const DEFAULT_NUMBER_SLICES: usize = 16;

/// An upright cylinder in its local frame: axis along z, base disc at
/// z = 0, placed into global coordinates by an affine sequence.
///
/// The boundary output is polygonal: the lateral surface is discretized
/// into flat quads.
#[derive(Debug, Clone)]
pub struct Cylinder3D {
    radius: f64,
    height: f64,
    number_slices: usize,
    tolerance: f64,
    affine_sequence: AffineSequence3D,
}

impl Cylinder3D {
    /// Creates a cylinder with the default slice count.
    ///
    /// # Errors
    ///
    /// Returns an error if radius or height is non-finite or not above
    /// the tolerance.
    pub fn new(
        radius: f64,
        height: f64,
        tolerance: f64,
        affine_sequence: AffineSequence3D,
    ) -> Result<Self> {
        Self::with_slices(radius, height, DEFAULT_NUMBER_SLICES, tolerance, affine_sequence)
    }

    /// Creates a cylinder with an explicit slice count (at least 3).
    ///
    /// # Errors
    ///
    /// Same contract as [`Cylinder3D::new`]; additionally fails for
    /// fewer than 3 slices.
    pub fn with_slices(
        radius: f64,
        height: f64,
        number_slices: usize,
        tolerance: f64,
        affine_sequence: AffineSequence3D,
    ) -> Result<Self> {
        for (quantity, value) in [("cylinder radius", radius), ("cylinder height", height)] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { quantity, value }.into());
            }
            if value <= tolerance {
                return Err(GeometryError::BelowTolerance {
                    quantity,
                    value,
                    tolerance,
                }
                .into());
            }
        }
        if number_slices < 3 {
            return Err(GeometryError::Degenerate(format!(
                "cylinder needs at least 3 slices, got {number_slices}"
            ))
            .into());
        }
        Ok(Self {
            radius,
            height,
            number_slices,
            tolerance,
            affine_sequence,
        })
    }

    /// The radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The lateral discretization count.
    #[must_use]
    pub fn number_slices(&self) -> usize {
        self.number_slices
    }

    /// Emits the boundary solid: both discs plus `number_slices` lateral
    /// quads, all facing outward.
    ///
    /// # Errors
    ///
    /// Face construction errors propagate (only reachable through a
    /// degenerate placement).
    pub fn polyhedron(&self) -> Result<Polyhedron3D> {
        let affine = self.affine_sequence.resolve();
        let n = self.number_slices;

        #[allow(clippy::cast_precision_loss)]
        let ring = |z: f64| -> Vec<Point3> {
            (0..n)
                .map(|i| {
                    let angle = TAU * (i as f64) / (n as f64);
                    affine.transform_point(&Point3::new(
                        self.radius * angle.cos(),
                        self.radius * angle.sin(),
                        z,
                    ))
                })
                .collect()
        };
        let base = ring(0.0);
        let head = ring(self.height);

        let mut faces = Vec::with_capacity(n + 2);
        faces.push(Polygon3D::new(base.clone(), self.tolerance)?.reversed());
        faces.push(Polygon3D::new(head.clone(), self.tolerance)?);
        for i in 0..n {
            let j = (i + 1) % n;
            faces.push(Polygon3D::new(
                vec![base[i], base[j], head[j], head[i]],
                self.tolerance,
            )?);
        }
        Polyhedron3D::new(faces)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::transform::Affine3D;

    const TOL: f64 = 1e-10;

    #[test]
    fn face_count_is_slices_plus_caps() {
        let cylinder = Cylinder3D::new(1.0, 2.0, 1e-7, AffineSequence3D::empty()).unwrap();
        let polyhedron = cylinder.polyhedron().unwrap();
        assert_eq!(polyhedron.faces().len(), DEFAULT_NUMBER_SLICES + 2);

        let coarse =
            Cylinder3D::with_slices(1.0, 2.0, 6, 1e-7, AffineSequence3D::empty()).unwrap();
        assert_eq!(coarse.polyhedron().unwrap().faces().len(), 8);
    }

    #[test]
    fn caps_face_along_the_axis() {
        let cylinder = Cylinder3D::new(1.0, 2.0, 1e-7, AffineSequence3D::empty()).unwrap();
        let polyhedron = cylinder.polyhedron().unwrap();
        assert!(polyhedron.faces()[0].normal().unwrap().z < -0.99);
        assert!(polyhedron.faces()[1].normal().unwrap().z > 0.99);
    }

    #[test]
    fn ring_vertices_lie_on_the_radius() {
        let sequence = AffineSequence3D::of(vec![Affine3D::of_translation(Vector3::new(
            5.0, -2.0, 0.0,
        ))]);
        let cylinder = Cylinder3D::new(1.5, 1.0, 1e-7, sequence).unwrap();
        let polyhedron = cylinder.polyhedron().unwrap();
        for v in polyhedron.faces()[0].vertices() {
            let r = ((v.x - 5.0).powi(2) + (v.y + 2.0).powi(2)).sqrt();
            assert!((r - 1.5).abs() < TOL);
        }
    }

    #[test]
    fn rejects_degenerate_parameters() {
        assert!(Cylinder3D::new(0.0, 1.0, 1e-7, AffineSequence3D::empty()).is_err());
        assert!(Cylinder3D::new(1.0, -1.0, 1e-7, AffineSequence3D::empty()).is_err());
        assert!(Cylinder3D::with_slices(1.0, 1.0, 2, 1e-7, AffineSequence3D::empty()).is_err());
    }
}
