//! Core types and utilities

pub mod particle;
pub mod vector3;

pub use particle::Particle;
pub use vector3::Vector3;
