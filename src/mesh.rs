//! Unit sphere mesh generation.
//!
//! One UV sphere is built at startup and shared by the sun and every planet;
//! per-instance scale and translation happen in the vertex shader.

use bytemuck::{Pod, Zeroable};

/// A single mesh vertex: position and normal.
///
/// For a unit sphere centered at the origin the normal equals the position.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Triangle mesh as vertex and index lists.
#[derive(Debug, Clone)]
pub struct SphereMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Generate a unit UV sphere with the given longitude/latitude resolution.
    ///
    /// `sectors` is the number of longitudinal slices (>= 3), `stacks` the
    /// number of latitudinal bands (>= 2). Vertices are laid out stack-major
    /// with duplicated seam column so UV-style indexing stays simple.
    pub fn unit(sectors: u32, stacks: u32) -> Self {
        assert!(sectors >= 3 && stacks >= 2);

        let mut vertices = Vec::with_capacity(((stacks + 1) * (sectors + 1)) as usize);
        for stack in 0..=stacks {
            // phi: 0 at the north pole, PI at the south pole
            let phi = std::f32::consts::PI * stack as f32 / stacks as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();
            for sector in 0..=sectors {
                let theta = std::f32::consts::TAU * sector as f32 / sectors as f32;
                let (sin_theta, cos_theta) = theta.sin_cos();
                let p = [sin_phi * cos_theta, cos_phi, sin_phi * sin_theta];
                vertices.push(Vertex {
                    position: p,
                    normal: p,
                });
            }
        }

        let mut indices = Vec::with_capacity((stacks * sectors * 6) as usize);
        let row = sectors + 1;
        for stack in 0..stacks {
            for sector in 0..sectors {
                let a = stack * row + sector;
                let b = a + row;
                // Two triangles per quad; degenerate ones at the poles are
                // harmless and keep the loop uniform.
                indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
            }
        }

        Self { vertices, indices }
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}
