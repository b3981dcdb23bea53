mod cuboid;
mod cylinder;
mod polyhedron;
mod sweep;

pub use cuboid::Cuboid3D;
pub use cylinder::{Cylinder3D, DEFAULT_NUMBER_SLICES};
pub use polyhedron::{Polyhedron3D, VerticalOutlineElement};
pub use sweep::{ParametricSweep3D, DEFAULT_STEP_SIZE};
