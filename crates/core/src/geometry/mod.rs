//! Mesh geometry for drawing particles
//!
//! Only vertex data is produced here. Uploading and drawing it is left to the
//! caller's graphics stack.

pub mod uv_sphere;

pub use uv_sphere::SphereMesh;
