use crate::error::Result;
use crate::math::sectioned::SectionedDomain;

use super::UnivariateFunction;

/// A piecewise function: ordered member functions with absolute section
/// starts, each member evaluated in its own local coordinate
/// (`x - section_start`).
///
/// Elevation and superelevation profiles are concatenations of cubic
/// polynomials. The domain runs from the first section start to `end`
/// (or to infinity when unbounded); a query at exactly the bounded end
/// resolves to the last member at its closed endpoint, mirroring the
/// composite curve's boundary behavior.
#[derive(Debug, Clone)]
pub struct ConcatenatedFunction {
    members: Vec<UnivariateFunction>,
    domain: SectionedDomain,
}

impl ConcatenatedFunction {
    /// Creates a piecewise function from parallel lists of absolute
    /// section starts and member functions.
    ///
    /// # Errors
    ///
    /// Returns an error if the lists differ in length, are empty, or the
    /// starts are not strictly ascending.
    pub fn new(
        starts: Vec<f64>,
        members: Vec<UnivariateFunction>,
        end: Option<f64>,
        tolerance: f64,
    ) -> Result<Self> {
        if starts.len() != members.len() {
            return Err(crate::error::GeometryError::Degenerate(format!(
                "{} section starts but {} member functions",
                starts.len(),
                members.len()
            ))
            .into());
        }
        let domain = SectionedDomain::new(starts, end, tolerance)?;
        Ok(Self { members, domain })
    }

    /// Evaluates the owning member at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is outside the domain, or if the member
    /// evaluation fails; member errors propagate unchanged.
    pub fn value_at(&self, x: f64) -> Result<f64> {
        let location = self.domain.locate(x)?;
        self.members[location.index].value_at(location.local)
    }

    /// Evaluates the owning member's derivative at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is outside the domain.
    pub fn slope_at(&self, x: f64) -> Result<f64> {
        let location = self.domain.locate(x)?;
        self.members[location.index].slope_at(location.local)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::analysis::LinearFunction;

    const TOL: f64 = 1e-7;

    fn stepwise() -> ConcatenatedFunction {
        // [0, 10): f(x) = x; [10, 20]: f(x) = 100 + 2x (local)
        ConcatenatedFunction::new(
            vec![0.0, 10.0],
            vec![
                LinearFunction::new(1.0, 0.0).into(),
                LinearFunction::new(2.0, 100.0).into(),
            ],
            Some(20.0),
            TOL,
        )
        .unwrap()
    }

    #[test]
    fn members_evaluate_in_local_coordinates() {
        let f = stepwise();
        assert!((f.value_at(4.0).unwrap() - 4.0).abs() < TOL);
        assert!((f.value_at(10.0).unwrap() - 100.0).abs() < TOL);
        assert!((f.value_at(15.0).unwrap() - 110.0).abs() < TOL);
    }

    #[test]
    fn bounded_end_resolves_to_last_member() {
        let f = stepwise();
        assert!((f.value_at(20.0).unwrap() - 120.0).abs() < TOL);
    }

    #[test]
    fn slope_dispatches_to_owning_member() {
        let f = stepwise();
        assert!((f.slope_at(4.0).unwrap() - 1.0).abs() < TOL);
        assert!((f.slope_at(15.0).unwrap() - 2.0).abs() < TOL);
    }

    #[test]
    fn out_of_domain_fails() {
        let f = stepwise();
        assert!(f.value_at(-0.5).is_err());
        assert!(f.value_at(20.5).is_err());
    }

    #[test]
    fn mismatched_lists_fail() {
        let r = ConcatenatedFunction::new(
            vec![0.0, 10.0],
            vec![LinearFunction::constant(0.0).into()],
            None,
            TOL,
        );
        assert!(r.is_err());
    }
}
