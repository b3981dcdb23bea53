use crate::error::{GeometryError, Result};
use crate::geometry::Pose2D;
use crate::math::sectioned::SectionedDomain;

use super::Curve2D;

/// A concatenation of heterogeneous plan-view members with contiguous,
/// non-overlapping absolute domains.
///
/// Member `i` owns the half-open range `[start_i, start_{i+1})`; a query
/// equal to a lower bound selects that member. A query at exactly the
/// composite's total length is the one documented exception: it resolves
/// to the LAST member at that member's own closed endpoint instead of
/// failing, so the absolute end of the curve is always evaluable.
#[derive(Debug, Clone)]
pub struct CompositeCurve2D {
    members: Vec<Curve2D>,
    domain: SectionedDomain,
    length: f64,
    tolerance: f64,
}

impl CompositeCurve2D {
    /// Creates a composite from its members in traversal order. Absolute
    /// domains are the cumulative member lengths.
    ///
    /// # Errors
    ///
    /// Returns an error if no members are given.
    pub fn new(members: Vec<Curve2D>, tolerance: f64) -> Result<Self> {
        if members.is_empty() {
            return Err(
                GeometryError::Degenerate("composite curve needs at least one member".into())
                    .into(),
            );
        }

        let mut starts = Vec::with_capacity(members.len());
        let mut cumulative = 0.0;
        for member in &members {
            starts.push(cumulative);
            cumulative += member.length();
        }
        let domain = SectionedDomain::new(starts, Some(cumulative), tolerance)?;

        Ok(Self {
            members,
            domain,
            length: cumulative,
            tolerance,
        })
    }

    /// Total length: the sum of all member lengths.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Construction tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// The member curves in traversal order.
    #[must_use]
    pub fn members(&self) -> &[Curve2D] {
        &self.members
    }

    /// Absolute start offset of member `index`.
    #[must_use]
    pub fn member_start(&self, index: usize) -> f64 {
        self.domain.section_start(index)
    }

    /// Global pose at the absolute arc length `s`, delegated to the
    /// owning member; member errors propagate unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if `s` lies outside `[0, length]` by more than
    /// the tolerance, or if the owning member fails.
    pub fn pose_at(&self, s: f64) -> Result<Pose2D> {
        let location = self.domain.locate(s)?;
        self.members[location.index].pose_at(location.local)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::analysis::LinearFunction;
    use crate::geometry::curve::{Arc2D, LineSegment2D, SpiralSegment2D};
    use crate::math::Point2;
    use crate::transform::{Affine2D, AffineSequence2D};

    const TOL: f64 = 1e-7;

    /// Chains members the way a plan-view builder does: each successor is
    /// placed at its predecessor's end pose.
    fn chained_members(defs: &[MemberDef]) -> Vec<Curve2D> {
        let mut members: Vec<Curve2D> = Vec::with_capacity(defs.len());
        let mut placement = AffineSequence2D::empty();
        for def in defs {
            let member = def.build(placement.clone());
            let end = member.pose_at(member.length()).unwrap();
            placement = AffineSequence2D::of(vec![Affine2D::of_pose(&end)]);
            members.push(member);
        }
        members
    }

    enum MemberDef {
        Line(f64),
        Arc { curvature: f64, length: f64 },
        Spiral { start: f64, end: f64, length: f64 },
    }

    impl MemberDef {
        fn build(&self, placement: AffineSequence2D) -> Curve2D {
            match *self {
                Self::Line(length) => {
                    Curve2D::LineSegment(LineSegment2D::new(length, TOL, placement).unwrap())
                }
                Self::Arc { curvature, length } => {
                    Curve2D::Arc(Arc2D::new(curvature, length, TOL, placement).unwrap())
                }
                Self::Spiral { start, end, length } => Curve2D::SpiralSegment(
                    SpiralSegment2D::new(
                        LinearFunction::new((end - start) / length, start),
                        length,
                        TOL,
                        placement,
                    )
                    .unwrap(),
                ),
            }
        }
    }

    /// A five-member course in the shape of the ASAM crossing fixtures:
    /// line, entry spiral, arc, exit spiral, line.
    fn crossing_course() -> CompositeCurve2D {
        let members = chained_members(&[
            MemberDef::Line(100.0),
            MemberDef::Spiral {
                start: 0.0,
                end: 0.01,
                length: 50.0,
            },
            MemberDef::Arc {
                curvature: 0.01,
                length: 100.0,
            },
            MemberDef::Spiral {
                start: 0.01,
                end: 0.0,
                length: 50.0,
            },
            MemberDef::Line(100.0),
        ]);
        CompositeCurve2D::new(members, TOL).unwrap()
    }

    #[test]
    fn dispatch_matches_member_queries() {
        let composite = crossing_course();
        // Strictly inside member 2 (the arc): starts at 150.
        let global = composite.pose_at(200.0).unwrap();
        let member = composite.members()[2].pose_at(50.0).unwrap();
        assert!((global.point - member.point).norm() < 1e-9);
        assert!((global.heading - member.heading).abs() < 1e-9);
    }

    #[test]
    fn lower_bound_selects_the_starting_member() {
        let composite = crossing_course();
        let at_boundary = composite.pose_at(150.0).unwrap();
        let member = composite.members()[2].pose_at(0.0).unwrap();
        assert!((at_boundary.point - member.point).norm() < 1e-9);
    }

    #[test]
    fn exact_total_length_does_not_fail() {
        let composite = crossing_course();
        let total = composite.length();
        assert!((total - 400.0).abs() < TOL);
        let end = composite.pose_at(total).unwrap();
        assert!(end.point.x.is_finite() && end.point.y.is_finite());
        assert!(end.point.coords.norm() > TOL, "end={}", end.point);
    }

    #[test]
    fn member_errors_propagate() {
        let composite = crossing_course();
        assert!(composite.pose_at(-1.0).is_err());
        assert!(composite.pose_at(400.5).is_err());
    }

    #[test]
    fn start_pose_matches_first_member() {
        let composite = crossing_course();
        let start = composite.pose_at(0.0).unwrap();
        assert!((start.point - Point2::origin()).norm() < 1e-9);
        assert!(start.heading.abs() < 1e-9);
    }

    #[test]
    fn empty_member_list_is_rejected() {
        assert!(CompositeCurve2D::new(vec![], TOL).is_err());
    }
}
