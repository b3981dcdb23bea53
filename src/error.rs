use thiserror::Error;

/// Top-level error type for the Strada road-geometry kernel.
#[derive(Debug, Error)]
pub enum StradaError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Builder(#[from] BuilderError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{quantity} = {value} must exceed the tolerance {tolerance}")]
    BelowTolerance {
        quantity: &'static str,
        value: f64,
        tolerance: f64,
    },

    #[error("{quantity} = {value} must be finite")]
    NonFinite { quantity: &'static str, value: f64 },

    #[error("arc curvature must be non-zero (a zero-curvature arc is a line segment)")]
    ZeroCurvature,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised while constructing boundary-representation solids.
///
/// These are recoverable per object: callers downgrade them to warning
/// issues, skip the offending object and continue with the rest of the
/// model.
#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("outline of {id} has {found} usable elements, but a polyhedron needs at least 3")]
    InsufficientOutlineElements { id: String, found: usize },

    #[error("outline of {id} mixes zero-height and non-zero-height elements")]
    InconsistentOutline { id: String },

    #[error("builder is not applicable: {0}")]
    NotApplicable(String),
}

/// Errors related to curve discretization.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid discretization parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`StradaError`].
pub type Result<T> = std::result::Result<T, StradaError>;
