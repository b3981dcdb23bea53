use crate::math::{Point2, Point3};

/// A position along a reference curve, expressed as arc length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveRelativeVector1D {
    pub curve_position: f64,
}

impl CurveRelativeVector1D {
    #[must_use]
    pub fn new(curve_position: f64) -> Self {
        Self { curve_position }
    }
}

/// A position relative to a reference curve: arc length along the curve
/// plus a signed lateral offset (positive to the left of the direction of
/// travel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveRelativeVector2D {
    pub curve_position: f64,
    pub lateral_offset: f64,
}

impl CurveRelativeVector2D {
    #[must_use]
    pub fn new(curve_position: f64, lateral_offset: f64) -> Self {
        Self {
            curve_position,
            lateral_offset,
        }
    }
}

/// A 2D pose: position plus heading in radians.
///
/// Headings are stored raw (unnormalized); consumers that need a
/// canonical range normalize themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose2D {
    pub point: Point2,
    pub heading: f64,
}

impl Pose2D {
    #[must_use]
    pub fn new(point: Point2, heading: f64) -> Self {
        Self { point, heading }
    }

    /// The pose at the origin with zero heading.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(Point2::origin(), 0.0)
    }
}

/// A 3D rotation as intrinsic ZYX angles: heading about z, then pitch
/// about the rotated y, then roll about the twice-rotated x.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation3D {
    pub heading: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl Rotation3D {
    #[must_use]
    pub fn new(heading: f64, pitch: f64, roll: f64) -> Self {
        Self {
            heading,
            pitch,
            roll,
        }
    }

    /// A yaw-only rotation.
    #[must_use]
    pub fn of_heading(heading: f64) -> Self {
        Self::new(heading, 0.0, 0.0)
    }
}

/// A 3D pose: position plus [`Rotation3D`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose3D {
    pub point: Point3,
    pub rotation: Rotation3D,
}

impl Pose3D {
    #[must_use]
    pub fn new(point: Point3, rotation: Rotation3D) -> Self {
        Self { point, rotation }
    }
}
