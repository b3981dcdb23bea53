mod build_polyhedron;
mod build_solid;
mod build_sweep;

pub use build_polyhedron::{
    is_recoverable, BuildPolyhedronFromLocalCorners, BuildPolyhedronFromRoadCorners,
};
pub use build_solid::{BuildCuboid, BuildCylinder};
pub use build_sweep::BuildParametricSweep;
