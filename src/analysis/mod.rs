mod concatenated;
mod cubic;
mod linear;
mod shape;
mod stacked;

pub use concatenated::ConcatenatedFunction;
pub use cubic::CubicFunction;
pub use linear::LinearFunction;
pub use shape::{ShapeFunction, ShapeSection};
pub use stacked::StackedFunction;

use crate::error::Result;

/// A univariate scalar function, the building block for curvature,
/// elevation and lateral-shape profiles.
///
/// Dispatch is a tagged union rather than trait objects, so every variant
/// is covered at compile time.
#[derive(Debug, Clone)]
pub enum UnivariateFunction {
    Linear(LinearFunction),
    Cubic(CubicFunction),
    Concatenated(ConcatenatedFunction),
    Stacked(StackedFunction),
}

impl UnivariateFunction {
    /// The constant-zero function.
    #[must_use]
    pub fn zero() -> Self {
        Self::Linear(LinearFunction::constant(0.0))
    }

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is outside the function's domain.
    pub fn value_at(&self, x: f64) -> Result<f64> {
        match self {
            Self::Linear(f) => Ok(f.value_at(x)),
            Self::Cubic(f) => Ok(f.value_at(x)),
            Self::Concatenated(f) => f.value_at(x),
            Self::Stacked(f) => f.value_at(x),
        }
    }

    /// Evaluates the first derivative at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is outside the function's domain.
    pub fn slope_at(&self, x: f64) -> Result<f64> {
        match self {
            Self::Linear(f) => Ok(f.slope()),
            Self::Cubic(f) => Ok(f.slope_at(x)),
            Self::Concatenated(f) => f.slope_at(x),
            Self::Stacked(f) => f.slope_at(x),
        }
    }
}

impl From<LinearFunction> for UnivariateFunction {
    fn from(f: LinearFunction) -> Self {
        Self::Linear(f)
    }
}

impl From<CubicFunction> for UnivariateFunction {
    fn from(f: CubicFunction) -> Self {
        Self::Cubic(f)
    }
}

impl From<ConcatenatedFunction> for UnivariateFunction {
    fn from(f: ConcatenatedFunction) -> Self {
        Self::Concatenated(f)
    }
}

impl From<StackedFunction> for UnivariateFunction {
    fn from(f: StackedFunction) -> Self {
        Self::Stacked(f)
    }
}
