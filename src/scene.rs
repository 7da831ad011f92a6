//! Scene construction: sun, planets, starfield, light.
//!
//! The scene owns all per-session runtime state. It is built once from the
//! fixed descriptor table and mutated in place each frame - configuration
//! changes never trigger a rebuild.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::orbit::{OrbitState, SpeedConfig};
use crate::planet::{PlanetDescriptor, SUN_COLOR, SUN_RADIUS};

/// Number of background stars.
pub const STAR_COUNT: u32 = 1500;

/// Inner and outer radius of the spherical shell the stars scatter over.
const STAR_SHELL: (f32, f32) = (130.0, 260.0);

/// One sphere draw: per-instance data consumed by the mesh shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct MeshInstance {
    pub center: [f32; 3],
    pub scale: f32,
    pub color: [f32; 3],
    /// 1.0 for self-lit bodies (the sun), 0.0 for lit ones.
    pub emissive: f32,
}

/// One background star: per-instance data for the billboard shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct StarInstance {
    pub position: [f32; 3],
    pub brightness: f32,
}

/// The complete scene: orbital state plus static backdrop.
pub struct Scene {
    /// One entry per planet, same order as the descriptor table.
    pub planets: Vec<OrbitState>,
    /// Static star scatter, generated once.
    pub stars: Vec<StarInstance>,
    /// Point light position (the sun sits at the origin).
    pub light_position: Vec3,
}

impl Scene {
    /// Build the scene from a descriptor table. Each planet starts at a
    /// distinct angle so the system does not open as a straight line.
    pub fn new(planets: &'static [PlanetDescriptor]) -> Self {
        let planets = planets
            .iter()
            .enumerate()
            .map(|(i, p)| OrbitState::new(p, i as f32 * 0.9))
            .collect();

        Self {
            planets,
            stars: scatter_stars(STAR_COUNT),
            light_position: Vec3::ZERO,
        }
    }

    /// Advance every orbit by one frame. The caller skips this while paused,
    /// so pausing freezes angles exactly where they are.
    pub fn advance(&mut self, speeds: &SpeedConfig) {
        for orbit in &mut self.planets {
            orbit.advance(speeds.speed(orbit.descriptor.name));
        }
    }

    /// Instance list for the mesh pipeline: the sun first, then one entry
    /// per planet, in table order.
    pub fn mesh_instances(&self) -> Vec<MeshInstance> {
        let mut instances = Vec::with_capacity(self.planets.len() + 1);
        instances.push(MeshInstance {
            center: [0.0; 3],
            scale: SUN_RADIUS,
            color: SUN_COLOR.to_array(),
            emissive: 1.0,
        });
        for orbit in &self.planets {
            instances.push(MeshInstance {
                center: orbit.position().to_array(),
                scale: orbit.descriptor.radius,
                color: orbit.descriptor.color.to_array(),
                emissive: 0.0,
            });
        }
        instances
    }
}

/// Deterministic hash-based scatter, so the backdrop is stable across runs.
fn pseudo_random(seed: u32) -> f32 {
    let x = seed.wrapping_mul(1103515245).wrapping_add(12345);
    let x = x ^ (x >> 16);
    (x & 0x7FFFFFFF) as f32 / 0x7FFFFFFF as f32
}

fn scatter_stars(count: u32) -> Vec<StarInstance> {
    (0..count)
        .map(|i| {
            // Uniform direction via acos-mapped latitude.
            let theta = pseudo_random(i * 4) * std::f32::consts::TAU;
            let phi = (pseudo_random(i * 4 + 1) * 2.0 - 1.0).acos();
            let r = STAR_SHELL.0 + pseudo_random(i * 4 + 2) * (STAR_SHELL.1 - STAR_SHELL.0);
            StarInstance {
                position: [
                    r * phi.sin() * theta.cos(),
                    r * phi.cos(),
                    r * phi.sin() * theta.sin(),
                ],
                brightness: 0.3 + 0.7 * pseudo_random(i * 4 + 3),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::PLANETS;

    #[test]
    fn test_scene_has_one_orbit_per_planet() {
        let scene = Scene::new(&PLANETS);
        assert_eq!(scene.planets.len(), PLANETS.len());
        assert_eq!(scene.stars.len(), STAR_COUNT as usize);
    }

    #[test]
    fn test_mesh_instances_are_sun_plus_planets() {
        let scene = Scene::new(&PLANETS);
        let instances = scene.mesh_instances();
        assert_eq!(instances.len(), PLANETS.len() + 1);
        assert_eq!(instances[0].emissive, 1.0);
        assert!(instances[1..].iter().all(|i| i.emissive == 0.0));
    }

    #[test]
    fn test_advance_moves_every_planet_by_its_own_speed() {
        let mut scene = Scene::new(&PLANETS);
        let speeds = SpeedConfig::from_descriptors(&PLANETS);
        let initial: Vec<f32> = scene.planets.iter().map(|o| o.angle).collect();

        const FRAMES: usize = 60;
        for _ in 0..FRAMES {
            scene.advance(&speeds);
        }

        for (orbit, start) in scene.planets.iter().zip(initial) {
            let expected = start + FRAMES as f32 * orbit.descriptor.base_speed;
            assert!((orbit.angle - expected).abs() < 1e-4, "{}", orbit.descriptor.name);
        }
    }

    #[test]
    fn test_skipped_advance_is_an_exact_freeze() {
        // The driver simply does not call advance() while paused; verify the
        // resume picks up from the held angle with no drift.
        let mut scene = Scene::new(&PLANETS);
        let speeds = SpeedConfig::from_descriptors(&PLANETS);
        scene.advance(&speeds);
        let held: Vec<f32> = scene.planets.iter().map(|o| o.angle).collect();

        // paused: no calls, nothing changes
        for (orbit, h) in scene.planets.iter().zip(&held) {
            assert_eq!(orbit.angle, *h);
        }

        scene.advance(&speeds);
        for (orbit, h) in scene.planets.iter().zip(&held) {
            let expected = h + orbit.descriptor.base_speed;
            assert!((orbit.angle - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_stars_stay_within_shell() {
        let scene = Scene::new(&PLANETS);
        for star in &scene.stars {
            let r = Vec3::from_array(star.position).length();
            assert!(r >= STAR_SHELL.0 - 1e-3 && r <= STAR_SHELL.1 + 1e-3);
            assert!(star.brightness >= 0.3 && star.brightness <= 1.0);
        }
    }

    #[test]
    fn test_starfield_is_deterministic() {
        let a = scatter_stars(64);
        let b = scatter_stars(64);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.position, y.position);
            assert_eq!(x.brightness, y.brightness);
        }
    }
}
