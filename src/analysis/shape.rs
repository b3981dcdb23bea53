use crate::error::{GeometryError, Result};

use super::CubicFunction;

/// One lateral cross-section of a road-shape height field: cubic
/// polynomials over the lateral coordinate `t`, each valid from its
/// `t_start` to the next one's.
#[derive(Debug, Clone)]
pub struct ShapeSection {
    s: f64,
    /// `(t_start, polynomial)` pairs, strictly ascending in `t_start`.
    lateral: Vec<(f64, CubicFunction)>,
}

impl ShapeSection {
    /// Creates a section at curve position `s` from strictly ascending
    /// `(t_start, polynomial)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the pairs are empty or not strictly ascending
    /// in `t_start`.
    pub fn new(s: f64, lateral: Vec<(f64, CubicFunction)>, tolerance: f64) -> Result<Self> {
        if lateral.is_empty() {
            return Err(GeometryError::Degenerate(format!(
                "shape section at s={s} has no lateral polynomials"
            ))
            .into());
        }
        for pair in lateral.windows(2) {
            if pair[1].0 - pair[0].0 <= tolerance {
                return Err(GeometryError::Degenerate(format!(
                    "shape section at s={s} has non-ascending t entries"
                ))
                .into());
            }
        }
        Ok(Self { s, lateral })
    }

    /// Curve position of this section.
    #[must_use]
    pub fn s(&self) -> f64 {
        self.s
    }

    /// Evaluates the section height at lateral offset `t`.
    ///
    /// The polynomial with the greatest `t_start <= t` applies, evaluated
    /// at `t - t_start`; before the first `t_start` the first polynomial
    /// extrapolates.
    #[must_use]
    pub fn value_at(&self, t: f64) -> f64 {
        let index = self
            .lateral
            .partition_point(|&(t_start, _)| t_start <= t)
            .saturating_sub(1);
        let (t_start, polynomial) = &self.lateral[index];
        polynomial.value_at(t - t_start)
    }
}

/// A bivariate road-shape height field `h(s, t)`.
///
/// Sections are evaluated laterally, then interpolated linearly along the
/// curve between bracketing sections; before the first and after the last
/// section the field extrapolates as constant.
#[derive(Debug, Clone)]
pub struct ShapeFunction {
    sections: Vec<ShapeSection>,
}

impl ShapeFunction {
    /// Creates a shape function from sections strictly ascending in `s`.
    ///
    /// # Errors
    ///
    /// Returns an error if no sections are given or the sections are not
    /// strictly ascending in `s`.
    pub fn new(sections: Vec<ShapeSection>, tolerance: f64) -> Result<Self> {
        if sections.is_empty() {
            return Err(GeometryError::Degenerate("shape function has no sections".into()).into());
        }
        for pair in sections.windows(2) {
            if pair[1].s() - pair[0].s() <= tolerance {
                return Err(GeometryError::Degenerate(
                    "shape sections must be strictly ascending in s".into(),
                )
                .into());
            }
        }
        Ok(Self { sections })
    }

    /// Evaluates the height field at `(s, t)`.
    #[must_use]
    pub fn value_at(&self, s: f64, t: f64) -> f64 {
        let upper = self.sections.partition_point(|section| section.s() <= s);
        if upper == 0 {
            return self.sections[0].value_at(t);
        }
        if upper == self.sections.len() {
            return self.sections[upper - 1].value_at(t);
        }

        let before = &self.sections[upper - 1];
        let after = &self.sections[upper];
        let h0 = before.value_at(t);
        let h1 = after.value_at(t);
        let fraction = (s - before.s()) / (after.s() - before.s());
        h0 + (h1 - h0) * fraction
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-7;

    fn flat(height: f64) -> Vec<(f64, CubicFunction)> {
        vec![(0.0, CubicFunction::new([height, 0.0, 0.0, 0.0]))]
    }

    fn ramp() -> ShapeFunction {
        // Height 0 at s=0, height 2 at s=10, constant laterally.
        ShapeFunction::new(
            vec![
                ShapeSection::new(0.0, flat(0.0), TOL).unwrap(),
                ShapeSection::new(10.0, flat(2.0), TOL).unwrap(),
            ],
            TOL,
        )
        .unwrap()
    }

    #[test]
    fn exact_section_hit() {
        let f = ramp();
        assert!(f.value_at(0.0, 1.0).abs() < TOL);
        assert!((f.value_at(10.0, -3.0) - 2.0).abs() < TOL);
    }

    #[test]
    fn interpolates_between_sections() {
        let f = ramp();
        assert!((f.value_at(5.0, 0.0) - 1.0).abs() < TOL);
        assert!((f.value_at(7.5, 0.0) - 1.5).abs() < TOL);
    }

    #[test]
    fn extrapolates_constant_beyond_sections() {
        let f = ramp();
        assert!(f.value_at(-5.0, 0.0).abs() < TOL);
        assert!((f.value_at(25.0, 0.0) - 2.0).abs() < TOL);
    }

    #[test]
    fn lateral_polynomial_selection() {
        // t < 2: h = 1; t >= 2: h = 3 + (t - 2)
        let section = ShapeSection::new(
            0.0,
            vec![
                (0.0, CubicFunction::new([1.0, 0.0, 0.0, 0.0])),
                (2.0, CubicFunction::new([3.0, 1.0, 0.0, 0.0])),
            ],
            TOL,
        )
        .unwrap();
        assert!((section.value_at(1.0) - 1.0).abs() < TOL);
        assert!((section.value_at(2.0) - 3.0).abs() < TOL);
        assert!((section.value_at(4.5) - 5.5).abs() < TOL);
        // Extrapolation below the first t_start.
        assert!((section.value_at(-1.0) - 1.0).abs() < TOL);
    }

    #[test]
    fn rejects_empty_and_unsorted() {
        assert!(ShapeSection::new(0.0, vec![], TOL).is_err());
        assert!(ShapeFunction::new(vec![], TOL).is_err());
        let s0 = ShapeSection::new(5.0, flat(0.0), TOL).unwrap();
        let s1 = ShapeSection::new(5.0, flat(1.0), TOL).unwrap();
        assert!(ShapeFunction::new(vec![s0, s1], TOL).is_err());
    }
}
