mod discretize_curve;

pub use discretize_curve::{DiscretizeCurve2D, DiscretizeCurve3D};
