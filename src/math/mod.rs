pub mod fresnel;
pub mod sectioned;
pub mod sorting;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 homogeneous transformation matrix (2D).
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// 4x4 homogeneous transformation matrix (3D).
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Default geometric tolerance for point coincidence and minimum-length
/// checks.
///
/// Tolerance is an explicit parameter everywhere in this crate; this
/// constant is only a convenient starting value for callers that have no
/// better one.
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Returns `true` if `a` and `b` coincide within `tolerance`.
#[must_use]
pub fn fuzzy_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

/// Returns `true` if `value` lies in `[min - tolerance, max + tolerance]`.
#[must_use]
pub fn fuzzy_contains(value: f64, min: f64, max: f64, tolerance: f64) -> bool {
    value >= min - tolerance && value <= max + tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuzzy_eq_within_tolerance() {
        assert!(fuzzy_eq(1.0, 1.0 + 1e-8, 1e-7));
        assert!(!fuzzy_eq(1.0, 1.0 + 1e-6, 1e-7));
    }

    #[test]
    fn fuzzy_contains_widens_both_ends() {
        assert!(fuzzy_contains(-1e-8, 0.0, 5.0, 1e-7));
        assert!(fuzzy_contains(5.0 + 1e-8, 0.0, 5.0, 1e-7));
        assert!(!fuzzy_contains(5.1, 0.0, 5.0, 1e-7));
    }
}
