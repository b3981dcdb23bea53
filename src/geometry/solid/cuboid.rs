use crate::error::{GeometryError, Result};
use crate::geometry::surface::Polygon3D;
use crate::math::Point3;
use crate::transform::AffineSequence3D;

use super::Polyhedron3D;

/// An axis-aligned box in its local frame: centered in x and y, base
/// plane at z = 0, placed into global coordinates by an affine sequence.
#[derive(Debug, Clone)]
pub struct Cuboid3D {
    length: f64,
    width: f64,
    height: f64,
    tolerance: f64,
    affine_sequence: AffineSequence3D,
}

impl Cuboid3D {
    /// Creates a cuboid from its dimensions (x, y, z extents).
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is non-finite or not above the
    /// tolerance.
    pub fn new(
        length: f64,
        width: f64,
        height: f64,
        tolerance: f64,
        affine_sequence: AffineSequence3D,
    ) -> Result<Self> {
        for (quantity, value) in [("cuboid length", length), ("cuboid width", width), ("cuboid height", height)] {
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
        Ok(Self {
            length,
            width,
            height,
            tolerance,
            affine_sequence,
        })
    }

    /// Extent along local x.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Extent along local y.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Extent along local z.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Emits the boundary solid: 6 outward-facing faces.
    ///
    /// # Errors
    ///
    /// Face construction errors propagate (only reachable through a
    /// degenerate placement).
    pub fn polyhedron(&self) -> Result<Polyhedron3D> {
        let affine = self.affine_sequence.resolve();
        let (hl, hw, h) = (self.length / 2.0, self.width / 2.0, self.height);

        let corner = |x: f64, y: f64, z: f64| affine.transform_point(&Point3::new(x, y, z));
        // Base corners counter-clockwise seen from above, then the head
        // corners in the same order.
        let b = [
            corner(-hl, -hw, 0.0),
            corner(hl, -hw, 0.0),
            corner(hl, hw, 0.0),
            corner(-hl, hw, 0.0),
        ];
        let t = [
            corner(-hl, -hw, h),
            corner(hl, -hw, h),
            corner(hl, hw, h),
            corner(-hl, hw, h),
        ];

        let quad = |a: Point3, b: Point3, c: Point3, d: Point3| {
            Polygon3D::new(vec![a, b, c, d], self.tolerance)
        };

        let faces = vec![
            quad(b[3], b[2], b[1], b[0])?, // bottom, facing -z
            quad(t[0], t[1], t[2], t[3])?, // top, facing +z
            quad(b[0], b[1], t[1], t[0])?, // front, facing -y
            quad(b[1], b[2], t[2], t[1])?, // right, facing +x
            quad(b[2], b[3], t[3], t[2])?, // back, facing +y
            quad(b[3], b[0], t[0], t[3])?, // left, facing -x
        ];
        Polyhedron3D::new(faces)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Rotation3D;
    use crate::transform::Affine3D;
    use crate::math::Vector3;

    const TOL: f64 = 1e-10;

    #[test]
    fn emits_6_outward_faces() {
        let cuboid = Cuboid3D::new(2.0, 2.0, 3.0, 1e-7, AffineSequence3D::empty()).unwrap();
        let polyhedron = cuboid.polyhedron().unwrap();
        assert_eq!(polyhedron.faces().len(), 6);

        // Outward check against the solid's centroid at (0, 0, 1.5).
        let centroid = Point3::new(0.0, 0.0, 1.5);
        for face in polyhedron.faces() {
            let normal = face.normal().unwrap();
            let mut center = Vector3::zeros();
            for v in face.vertices() {
                center += v.coords;
            }
            #[allow(clippy::cast_precision_loss)]
            let center = Point3::from(center / face.vertices().len() as f64);
            assert!(
                normal.dot(&(center - centroid)) > 0.0,
                "face normal {normal} points inward"
            );
        }
    }

    #[test]
    fn placement_moves_the_base() {
        let sequence = AffineSequence3D::of(vec![Affine3D::of_translation(Vector3::new(
            10.0, 0.0, 1.0,
        ))]);
        let cuboid = Cuboid3D::new(2.0, 4.0, 1.0, 1e-7, sequence).unwrap();
        let polyhedron = cuboid.polyhedron().unwrap();
        let bottom = &polyhedron.faces()[0];
        for v in bottom.vertices() {
            assert!((v.z - 1.0).abs() < TOL);
            assert!((v.x - 10.0).abs() <= 1.0 + TOL);
            assert!(v.y.abs() <= 2.0 + TOL);
        }
    }

    #[test]
    fn heading_rotates_the_footprint() {
        let sequence = AffineSequence3D::of(vec![Affine3D::of_rotation(&Rotation3D::of_heading(
            std::f64::consts::FRAC_PI_2,
        ))]);
        let cuboid = Cuboid3D::new(4.0, 2.0, 1.0, 1e-7, sequence).unwrap();
        let polyhedron = cuboid.polyhedron().unwrap();
        // After a quarter turn the long extent lies along y.
        for v in polyhedron.faces()[0].vertices() {
            assert!(v.x.abs() <= 1.0 + TOL);
            assert!(v.y.abs() <= 2.0 + TOL);
        }
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        assert!(Cuboid3D::new(0.0, 1.0, 1.0, 1e-7, AffineSequence3D::empty()).is_err());
        assert!(Cuboid3D::new(1.0, 1e-9, 1.0, 1e-7, AffineSequence3D::empty()).is_err());
        assert!(Cuboid3D::new(1.0, 1.0, f64::INFINITY, 1e-7, AffineSequence3D::empty()).is_err());
    }
}
