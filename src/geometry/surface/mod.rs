mod polygon;

pub use polygon::{newell_normal, Polygon3D};
