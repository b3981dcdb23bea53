use crate::error::{BuilderError, Result};
use crate::geometry::surface::{newell_normal, Polygon3D};
use crate::math::Point3;

/// One wall element of a vertical outline: a base point and, for
/// volumetric outlines, a head point above it. Zero-height elements have
/// no head.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalOutlineElement {
    base: Point3,
    head: Option<Point3>,
}

impl VerticalOutlineElement {
    /// An element with a head point.
    #[must_use]
    pub fn with_head(base: Point3, head: Point3) -> Self {
        Self {
            base,
            head: Some(head),
        }
    }

    /// A zero-height element.
    #[must_use]
    pub fn without_head(base: Point3) -> Self {
        Self { base, head: None }
    }

    /// The base point.
    #[must_use]
    pub fn base(&self) -> Point3 {
        self.base
    }

    /// The head point, absent for zero-height elements.
    #[must_use]
    pub fn head(&self) -> Option<Point3> {
        self.head
    }
}

/// A boundary-representation solid: an ordered list of planar faces.
#[derive(Debug, Clone)]
pub struct Polyhedron3D {
    faces: Vec<Polygon3D>,
}

impl Polyhedron3D {
    /// Creates a polyhedron directly from faces.
    ///
    /// # Errors
    ///
    /// Returns an error if no faces are given.
    pub fn new(faces: Vec<Polygon3D>) -> Result<Self> {
        if faces.is_empty() {
            return Err(crate::error::GeometryError::Degenerate(
                "polyhedron needs at least one face".into(),
            )
            .into());
        }
        Ok(Self { faces })
    }

    /// Builds a polyhedron from a closed ring of vertical outline
    /// elements (ordered counter-clockwise seen from above).
    ///
    /// With head points present on every element the result is a
    /// volumetric solid: base cap, head cap and one side quad per
    /// consecutive element pair. With no head points at all the outline
    /// degenerates to a single planar ring face. Cap orientation is
    /// fixed up via the base ring's Newell normal so caps face outward
    /// regardless of the ring's winding.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InsufficientOutlineElements`] for fewer
    /// than 3 elements and [`BuilderError::InconsistentOutline`] when
    /// only some elements carry a head point. Face construction errors
    /// (coincident vertices and the like) propagate unchanged.
    pub fn from_vertical_outline_elements(
        id: &str,
        elements: &[VerticalOutlineElement],
        tolerance: f64,
    ) -> Result<Self> {
        if elements.len() < 3 {
            return Err(BuilderError::InsufficientOutlineElements {
                id: id.to_owned(),
                found: elements.len(),
            }
            .into());
        }
        let with_head = elements.iter().filter(|e| e.head().is_some()).count();
        if with_head != 0 && with_head != elements.len() {
            return Err(BuilderError::InconsistentOutline { id: id.to_owned() }.into());
        }

        let bases: Vec<Point3> = elements.iter().map(VerticalOutlineElement::base).collect();

        if with_head == 0 {
            let ring = Polygon3D::new(bases, tolerance)?;
            return Self::new(vec![ring]);
        }

        let heads: Vec<Point3> = elements
            .iter()
            .filter_map(VerticalOutlineElement::head)
            .collect();

        // Orient caps outward: with a counter-clockwise base ring (Newell
        // normal up) the base cap must face down, the head cap up.
        let ring_is_ccw = newell_normal(&bases).map_or(true, |n| n.z >= 0.0);

        let base_ring = Polygon3D::new(bases.clone(), tolerance)?;
        let head_ring = Polygon3D::new(heads.clone(), tolerance)?;
        let (base_cap, head_cap) = if ring_is_ccw {
            (base_ring.reversed(), head_ring)
        } else {
            (base_ring, head_ring.reversed())
        };

        let n = elements.len();
        let mut faces = Vec::with_capacity(n + 2);
        faces.push(base_cap);
        faces.push(head_cap);
        for i in 0..n {
            let j = (i + 1) % n;
            faces.push(Polygon3D::new(
                vec![bases[i], bases[j], heads[j], heads[i]],
                tolerance,
            )?);
        }

        Self::new(faces)
    }

    /// The boundary faces.
    #[must_use]
    pub fn faces(&self) -> &[Polygon3D] {
        &self.faces
    }
}
