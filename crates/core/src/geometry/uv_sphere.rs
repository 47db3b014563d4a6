//! UV sphere tessellation
//!
//! Builds the latitude/longitude grid used to draw a particle as a lit sphere.
//! The grid has `latitudes + 1` rings of `longitudes + 1` vertices; the seam
//! column and the pole rows are duplicated so texture coordinates stay
//! continuous.
//!
//! ```text
//! θ = lat · π / latitudes          (0 at +Z pole, π at -Z pole)
//! φ = lon · 2π / longitudes
//! n = (sinθ cosφ, sinθ sinφ, cosθ)
//! p = radius · n
//! ```

use crate::core_types::particle::Particle;
use crate::error::MeshError;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use tracing::debug;

/// Indexed triangle mesh of a sphere centered on the origin
///
/// All attribute arrays are flat: `vertices` and `normals` hold xyz triples,
/// `tex_coords` holds uv pairs, and `indices` holds three entries per triangle
/// with counter-clockwise winding seen from outside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereMesh {
    pub vertices: Vec<f32>,
    pub normals: Vec<f32>,
    pub tex_coords: Vec<f32>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Tessellate a sphere of `radius` into `latitudes` × `longitudes` quads.
    ///
    /// Radius is not validated; zero or negative radii give a collapsed or
    /// inverted sphere.
    ///
    /// # Errors
    /// Returns [`MeshError::InvalidResolution`] when either band count is zero.
    pub fn new(radius: f32, latitudes: u32, longitudes: u32) -> Result<Self, MeshError> {
        if latitudes == 0 || longitudes == 0 {
            return Err(MeshError::InvalidResolution {
                latitudes,
                longitudes,
            });
        }

        let ring = longitudes as usize + 1;
        let vertex_count = (latitudes as usize + 1) * ring;
        let mut mesh = SphereMesh {
            vertices: Vec::with_capacity(vertex_count * 3),
            normals: Vec::with_capacity(vertex_count * 3),
            tex_coords: Vec::with_capacity(vertex_count * 2),
            indices: Vec::with_capacity(latitudes as usize * longitudes as usize * 6),
        };

        for lat in 0..=latitudes {
            let theta = lat as f32 * PI / latitudes as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();

            for lon in 0..=longitudes {
                let phi = lon as f32 * 2.0 * PI / longitudes as f32;
                let (sin_phi, cos_phi) = phi.sin_cos();

                let nx = sin_theta * cos_phi;
                let ny = sin_theta * sin_phi;
                let nz = cos_theta;

                mesh.vertices
                    .extend_from_slice(&[radius * nx, radius * ny, radius * nz]);
                mesh.normals.extend_from_slice(&[nx, ny, nz]);
                mesh.tex_coords.extend_from_slice(&[
                    lon as f32 / longitudes as f32,
                    lat as f32 / latitudes as f32,
                ]);
            }
        }

        for lat in 0..latitudes {
            for lon in 0..longitudes {
                let first = lat * (longitudes + 1) + lon;
                let second = first + longitudes + 1;

                mesh.indices.extend_from_slice(&[first, second, first + 1]);
                mesh.indices
                    .extend_from_slice(&[first + 1, second, second + 1]);
            }
        }

        debug!(
            radius,
            latitudes,
            longitudes,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "generated sphere mesh"
        );

        Ok(mesh)
    }

    /// Sphere sized to a particle's radius
    ///
    /// # Errors
    /// Same as [`SphereMesh::new`].
    pub fn for_particle(
        particle: &Particle,
        latitudes: u32,
        longitudes: u32,
    ) -> Result<Self, MeshError> {
        SphereMesh::new(particle.radius() as f32, latitudes, longitudes)
    }

    /// Number of xyz vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of indexed triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
