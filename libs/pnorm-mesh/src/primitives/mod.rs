//! # Primitives
//!
//! Mesh generators for the p-norm surface and its limiting cube.

pub mod cube;
pub mod surface;

pub use cube::create_cube;
pub use surface::pnorm_surface;
