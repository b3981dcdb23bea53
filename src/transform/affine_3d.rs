use crate::geometry::{Pose3D, Rotation3D};
use crate::math::{Matrix4, Point3, Vector3};

/// A rigid 3D transform as a homogeneous 4x4 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine3D {
    matrix: Matrix4,
}

impl Affine3D {
    /// The identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// A pure translation.
    #[must_use]
    pub fn of_translation(translation: Vector3) -> Self {
        Self {
            matrix: Matrix4::new_translation(&translation),
        }
    }

    /// The rotation `Rz(heading) * Ry(pitch) * Rx(roll)` (intrinsic ZYX).
    #[must_use]
    pub fn of_rotation(rotation: &Rotation3D) -> Self {
        let r = nalgebra::Rotation3::from_euler_angles(rotation.roll, rotation.pitch, rotation.heading);
        Self {
            matrix: r.to_homogeneous(),
        }
    }

    /// The transform placing the local frame at `pose`.
    #[must_use]
    pub fn of_pose(pose: &Pose3D) -> Self {
        Self::of_translation(pose.point.coords).concat(&Self::of_rotation(&pose.rotation))
    }

    /// This transform followed on the inside by `other`
    /// (`result(p) = self(other(p))`).
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transforms a point from local to global coordinates.
    #[must_use]
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        self.matrix.transform_point(point)
    }
}

impl Default for Affine3D {
    fn default() -> Self {
        Self::identity()
    }
}

/// An ordered, composable list of 3D affine transforms, outermost first.
///
/// See [`crate::transform::AffineSequence2D`] for the composition
/// contract; the 3D sequence behaves identically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AffineSequence3D {
    transforms: Vec<Affine3D>,
}

impl AffineSequence3D {
    /// The empty sequence (identity).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a sequence from its members, outermost first.
    #[must_use]
    pub fn of(transforms: Vec<Affine3D>) -> Self {
        Self { transforms }
    }

    /// Returns a new sequence with `affine` appended at the innermost end.
    #[must_use]
    pub fn appended(&self, affine: Affine3D) -> Self {
        let mut transforms = self.transforms.clone();
        transforms.push(affine);
        Self { transforms }
    }

    /// Folds the sequence into a single transform.
    #[must_use]
    pub fn resolve(&self) -> Affine3D {
        self.transforms
            .iter()
            .fold(Affine3D::identity(), |acc, t| acc.concat(t))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const TOL: f64 = 1e-10;

    #[test]
    fn heading_rotates_x_to_y() {
        let affine = Affine3D::of_rotation(&Rotation3D::of_heading(FRAC_PI_2));
        let p = affine.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert!((p - Point3::new(0.0, 1.0, 0.0)).norm() < TOL, "p={p}");
    }

    #[test]
    fn pitch_tilts_x_toward_negative_z() {
        // Positive pitch is nose-down in the ZYX convention.
        let affine = Affine3D::of_rotation(&Rotation3D::new(0.0, FRAC_PI_2, 0.0));
        let p = affine.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert!((p - Point3::new(0.0, 0.0, -1.0)).norm() < TOL, "p={p}");
    }

    #[test]
    fn roll_tilts_y_toward_z() {
        let affine = Affine3D::of_rotation(&Rotation3D::new(0.0, 0.0, FRAC_PI_2));
        let p = affine.transform_point(&Point3::new(0.0, 1.0, 0.0));
        assert!((p - Point3::new(0.0, 0.0, 1.0)).norm() < TOL, "p={p}");
    }

    #[test]
    fn pose_places_local_origin() {
        let pose = Pose3D::new(Point3::new(1.0, 2.0, 3.0), Rotation3D::of_heading(FRAC_PI_2));
        let affine = Affine3D::of_pose(&pose);
        let origin = affine.transform_point(&Point3::origin());
        assert!((origin - Point3::new(1.0, 2.0, 3.0)).norm() < TOL);
        // Local +y points along global -x after a quarter-turn heading.
        let p = affine.transform_point(&Point3::new(0.0, 1.0, 0.0));
        assert!((p - Point3::new(0.0, 2.0, 3.0)).norm() < TOL, "p={p}");
    }

    #[test]
    fn sequence_resolves_outermost_first() {
        let sequence = AffineSequence3D::of(vec![
            Affine3D::of_translation(Vector3::new(0.0, 0.0, 5.0)),
            Affine3D::of_rotation(&Rotation3D::of_heading(FRAC_PI_2)),
        ]);
        let p = sequence.resolve().transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert!((p - Point3::new(0.0, 1.0, 5.0)).norm() < TOL, "p={p}");
    }
}
