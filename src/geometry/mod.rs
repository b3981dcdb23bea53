pub mod curve;
mod pose;
pub mod solid;
pub mod surface;

pub use curve::{
    Arc2D, CompositeCurve2D, CubicCurve2D, Curve2D, Curve3D, LateralTranslatedCurve3D,
    LineSegment2D, ParamRange, ParametricCubicCurve2D, Spiral2D, SpiralSegment2D,
};
pub use pose::{CurveRelativeVector1D, CurveRelativeVector2D, Pose2D, Pose3D, Rotation3D};
pub use solid::{
    Cuboid3D, Cylinder3D, ParametricSweep3D, Polyhedron3D, VerticalOutlineElement,
};
pub use surface::Polygon3D;
