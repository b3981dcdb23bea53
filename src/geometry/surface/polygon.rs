use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3};

/// A planar boundary face: an ordered vertex ring, implicitly closed.
///
/// The ring's winding determines the face normal (Newell's method,
/// right-handed). Slight non-planarity from sampled road surfaces is
/// tolerated; consumers requiring strict planarity re-triangulate.
#[derive(Debug, Clone)]
pub struct Polygon3D {
    vertices: Vec<Point3>,
}

impl Polygon3D {
    /// Creates a polygon from its vertex ring.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 vertices are given, any
    /// coordinate is non-finite, or cyclically consecutive vertices
    /// coincide within `tolerance`.
    pub fn new(vertices: Vec<Point3>, tolerance: f64) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            ))
            .into());
        }
        for vertex in &vertices {
            if !vertex.coords.iter().all(|c| c.is_finite()) {
                return Err(GeometryError::NonFinite {
                    quantity: "polygon vertex coordinate",
                    value: f64::NAN,
                }
                .into());
            }
        }
        let n = vertices.len();
        for i in 0..n {
            let next = &vertices[(i + 1) % n];
            if (vertices[i] - next).norm() <= tolerance {
                return Err(GeometryError::Degenerate(format!(
                    "polygon vertices {i} and {} coincide",
                    (i + 1) % n
                ))
                .into());
            }
        }
        Ok(Self { vertices })
    }

    /// The vertex ring.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// The unit face normal by Newell's method.
    ///
    /// # Errors
    ///
    /// Returns an error if the ring is degenerate (zero area).
    pub fn normal(&self) -> Result<Vector3> {
        newell_normal(&self.vertices)
    }

    /// A new polygon with the vertex order (and thus the normal)
    /// reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            vertices: self.vertices.iter().rev().copied().collect(),
        }
    }
}

/// Computes the unit normal of a vertex ring using Newell's method.
///
/// # Errors
///
/// Returns an error if the ring encloses no area.
pub fn newell_normal(points: &[Point3]) -> Result<Vector3> {
    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    let len = normal.norm();
    if len < 1e-12 {
        return Err(GeometryError::Degenerate("zero-area vertex ring".into()).into());
    }
    Ok(normal / len)
}
