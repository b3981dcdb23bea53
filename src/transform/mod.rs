mod affine_2d;
mod affine_3d;

pub use affine_2d::{Affine2D, AffineSequence2D};
pub use affine_3d::{Affine3D, AffineSequence3D};
