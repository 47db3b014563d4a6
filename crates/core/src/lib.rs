//! Particle Simulation Core Library
//!
//! Double-precision 3D vector algebra and a point-mass particle that advances
//! its own position and velocity one time step at a time.
//!
//! ## Contents
//!
//! - [`Vector3`]: value-type vector with operator arithmetic, dot and cross
//!   products, magnitude, and fallible division and normalization
//! - [`Particle`]: kinematic state plus color, mass, radius, charge, and name
//! - [`SphereMesh`]: UV sphere vertex data for drawing a particle
//! - [`SimulationSettings`]: JSON-backed fixed-step run description

// Core types and utilities
pub mod core_types;
pub mod error;

pub mod geometry;
pub mod scenario;

// Re-export core types
pub use core_types::{Particle, Vector3};
pub use error::{MeshError, ScenarioError, VectorError};
pub use geometry::SphereMesh;
pub use scenario::SimulationSettings;
