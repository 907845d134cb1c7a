pub mod scene2d;
pub mod scene3d;
pub mod surface;
