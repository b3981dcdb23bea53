//! Untrusted input records, as delivered by the upstream road-network
//! parser. Raw `f64` fields; everything here passes through the healing
//! functions before any geometry is built from it.

/// A cubic profile entry `value(ds) = a + b*ds + c*ds^2 + d*ds^3` anchored
/// at curve position `s` (elevation, superelevation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolynomialEntry {
    pub s: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl PolynomialEntry {
    #[must_use]
    pub fn new(s: f64, a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { s, a, b, c, d }
    }

    /// The polynomial coefficients `[a, b, c, d]`.
    #[must_use]
    pub fn coefficients(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

/// A road-shape entry: a lateral cubic anchored at `(s, t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeEntry {
    pub s: f64,
    pub t: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl ShapeEntry {
    #[must_use]
    pub fn new(s: f64, t: f64, a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { s, t, a, b, c, d }
    }

    /// The polynomial coefficients `[a, b, c, d]`.
    #[must_use]
    pub fn coefficients(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

/// A lane-width entry: a cubic over the lane-section-local `s_offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneWidthEntry {
    pub s_offset: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl LaneWidthEntry {
    #[must_use]
    pub fn new(s_offset: f64, a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            s_offset,
            a,
            b,
            c,
            d,
        }
    }
}

/// A lane-height entry: inner and outer offsets above the lane surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneHeightEntry {
    pub s_offset: f64,
    pub inner: f64,
    pub outer: f64,
}

impl LaneHeightEntry {
    #[must_use]
    pub fn new(s_offset: f64, inner: f64, outer: f64) -> Self {
        Self {
            s_offset,
            inner,
            outer,
        }
    }
}

/// A road-object repeat entry: an object repeated (or stretched
/// continuously, `distance = 0`) along `[s, s + length]` of the road
/// reference line, with linearly interpolated lateral offset, width,
/// height and vertical offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectRepeatEntry {
    pub s: f64,
    pub length: f64,
    pub distance: f64,
    pub t_start: f64,
    pub t_end: f64,
    pub width_start: f64,
    pub width_end: f64,
    pub height_start: f64,
    pub height_end: f64,
    pub z_offset_start: f64,
    pub z_offset_end: f64,
}

impl ObjectRepeatEntry {
    /// `true` if the entry describes a continuous sweep along the road:
    /// zero repeat distance and usable widths and heights.
    #[must_use]
    pub fn contains_parametric_sweep(&self, tolerance: f64) -> bool {
        self.distance.abs() <= tolerance
            && self.length > tolerance
            && self.width_start > tolerance
            && self.width_end > tolerance
            && self.height_start > tolerance
            && self.height_end > tolerance
    }
}

/// An outline corner in curve-relative road coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadCornerEntry {
    pub s: f64,
    pub t: f64,
    pub dz: f64,
    pub height: f64,
}

impl RoadCornerEntry {
    #[must_use]
    pub fn new(s: f64, t: f64, dz: f64, height: f64) -> Self {
        Self { s, t, dz, height }
    }
}

/// An outline corner in object-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalCornerEntry {
    pub u: f64,
    pub v: f64,
    pub z: f64,
    pub height: f64,
}

impl LocalCornerEntry {
    #[must_use]
    pub fn new(u: f64, v: f64, z: f64, height: f64) -> Self {
        Self { u, v, z, height }
    }
}

/// A road-object record's bounding dimensions; which primitive solid (if
/// any) represents the object is decided by the predicates below.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoadObjectEntry {
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub radius: Option<f64>,
}

impl RoadObjectEntry {
    /// `true` if length, width and height are all present and above the
    /// tolerance: the object is representable as a cuboid.
    #[must_use]
    pub fn contains_cuboid(&self, tolerance: f64) -> bool {
        let above = |d: Option<f64>| d.is_some_and(|v| v.is_finite() && v > tolerance);
        above(self.length) && above(self.width) && above(self.height)
    }

    /// `true` if radius and height are present and above the tolerance:
    /// the object is representable as a cylinder.
    #[must_use]
    pub fn contains_cylinder(&self, tolerance: f64) -> bool {
        let above = |d: Option<f64>| d.is_some_and(|v| v.is_finite() && v > tolerance);
        above(self.radius) && above(self.height)
    }
}
