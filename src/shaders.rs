//! WGSL shader sources and the shared uniform block.

use bytemuck::{Pod, Zeroable};

pub const MESH_SHADER: &str = include_str!("shaders/mesh.wgsl");
pub const STAR_SHADER: &str = include_str!("shaders/stars.wgsl");

/// Uniform block shared by the mesh and star pipelines.
///
/// Layout must match the `Uniforms` struct in both WGSL files: a mat4,
/// then two vec3s each padded out to 16 bytes by an f32.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 3],
    pub time: f32,
    pub light_pos: [f32; 3],
    pub _pad: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniforms_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<Uniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<Uniforms>(), 64 + 16 + 16);
    }
}
