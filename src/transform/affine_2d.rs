use crate::geometry::Pose2D;
use crate::math::{Matrix3, Point2, Vector2};

/// A rigid 2D transform as a homogeneous 3x3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2D {
    matrix: Matrix3,
}

impl Affine2D {
    /// The identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// A pure translation.
    #[must_use]
    pub fn of_translation(translation: Vector2) -> Self {
        Self {
            matrix: Matrix3::new_translation(&translation),
        }
    }

    /// A pure rotation by `angle` radians (counter-clockwise).
    #[must_use]
    pub fn of_rotation(angle: f64) -> Self {
        Self {
            matrix: nalgebra::Rotation2::new(angle).to_homogeneous(),
        }
    }

    /// The transform placing the local origin at `pose` (translate to the
    /// pose's point, rotate by its heading).
    #[must_use]
    pub fn of_pose(pose: &Pose2D) -> Self {
        Self::of_translation(pose.point.coords).concat(&Self::of_rotation(pose.heading))
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
    pub fn transform_point(&self, point: &Point2) -> Point2 {
        self.matrix.transform_point(point)
    }

    /// Transforms a pose: the point is mapped through the matrix, the
    /// heading shifted by the transform's rotation angle.
    #[must_use]
    pub fn transform_pose(&self, pose: &Pose2D) -> Pose2D {
        Pose2D {
            point: self.transform_point(&pose.point),
            heading: pose.heading + self.rotation_angle(),
        }
    }

    /// The rotation angle encoded in this transform.
    #[must_use]
    pub fn rotation_angle(&self) -> f64 {
        self.matrix[(1, 0)].atan2(self.matrix[(0, 0)])
    }
}

impl Default for Affine2D {
    fn default() -> Self {
        Self::identity()
    }
}

/// An ordered, composable list of 2D affine transforms.
///
/// The sequence is applied left-to-right from outermost (global) to
/// innermost (local): resolving folds the members into a single affine
/// that maps a local point to its final global position. Sequences are
/// shared by cheap cloning and never mutated in place; `appended` returns
/// a new sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AffineSequence2D {
    transforms: Vec<Affine2D>,
}

impl AffineSequence2D {
    /// The empty sequence (identity).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a sequence from its members, outermost first.
    #[must_use]
    pub fn of(transforms: Vec<Affine2D>) -> Self {
        Self { transforms }
    }

    /// Returns a new sequence with `affine` appended at the innermost end.
    #[must_use]
    pub fn appended(&self, affine: Affine2D) -> Self {
        let mut transforms = self.transforms.clone();
        transforms.push(affine);
        Self { transforms }
    }

    /// Folds the sequence into a single transform.
    #[must_use]
    pub fn resolve(&self) -> Affine2D {
        self.transforms
            .iter()
            .fold(Affine2D::identity(), |acc, t| acc.concat(t))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const TOL: f64 = 1e-10;

    #[test]
    fn rotation_then_translation() {
        // Outermost translation, innermost rotation: local x-axis point
        // rotates first, then shifts.
        let sequence = AffineSequence2D::of(vec![
            Affine2D::of_translation(Vector2::new(10.0, 0.0)),
            Affine2D::of_rotation(FRAC_PI_2),
        ]);
        let p = sequence.resolve().transform_point(&Point2::new(1.0, 0.0));
        assert!((p - Point2::new(10.0, 1.0)).norm() < TOL, "p={p}");
    }

    #[test]
    fn pose_transform_shifts_heading() {
        let affine = Affine2D::of_pose(&Pose2D::new(Point2::new(2.0, 3.0), FRAC_PI_2));
        let pose = affine.transform_pose(&Pose2D::new(Point2::origin(), 0.1));
        assert!((pose.point - Point2::new(2.0, 3.0)).norm() < TOL);
        assert!((pose.heading - (FRAC_PI_2 + 0.1)).abs() < TOL);
    }

    #[test]
    fn resolve_is_associative() {
        let a = Affine2D::of_rotation(0.3);
        let b = Affine2D::of_translation(Vector2::new(1.0, -2.0));
        let c = Affine2D::of_rotation(-1.1);
        let all_at_once = AffineSequence2D::of(vec![a, b, c]).resolve();
        let pairwise = a.concat(&b).concat(&c);
        let p = Point2::new(0.7, 0.2);
        assert!((all_at_once.transform_point(&p) - pairwise.transform_point(&p)).norm() < TOL);
    }

    #[test]
    fn appended_leaves_original_untouched() {
        let base = AffineSequence2D::of(vec![Affine2D::of_rotation(1.0)]);
        let extended = base.appended(Affine2D::of_translation(Vector2::new(5.0, 0.0)));
        let p = Point2::origin();
        assert!((base.resolve().transform_point(&p) - p).norm() < TOL);
        assert!((extended.resolve().transform_point(&p)).coords.norm() > 1.0);
    }

    #[test]
    fn rotation_angle_roundtrip() {
        for &angle in &[0.0, 0.5, -2.0, 3.1] {
            let affine = Affine2D::of_rotation(angle);
            assert!((affine.rotation_angle() - angle).abs() < TOL, "angle={angle}");
        }
    }
}
