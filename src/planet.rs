//! The fixed set of bodies in the visualization.
//!
//! All configuration lives in this table; there is no external load path.
//! Distances and radii are scene units, not astronomical ones - they are
//! picked so all eight orbits fit comfortably in view.

use glam::Vec3;

/// Immutable description of one planet.
///
/// The `name` doubles as the key into [`crate::orbit::SpeedConfig`], so it
/// must be unique within [`PLANETS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetDescriptor {
    /// Unique display name, also the speed-config key.
    pub name: &'static str,
    /// Base surface color (RGB, 0.0-1.0).
    pub color: Vec3,
    /// Sphere radius in scene units.
    pub radius: f32,
    /// Distance of the circular orbit from the sun.
    pub orbital_distance: f32,
    /// Default angular speed in radians per frame.
    pub base_speed: f32,
}

/// Radius of the sun mesh at the origin.
pub const SUN_RADIUS: f32 = 2.5;

/// Color of the sun mesh.
pub const SUN_COLOR: Vec3 = Vec3::new(1.0, 0.85, 0.3);

/// Slider bounds for per-planet angular speed (radians per frame).
pub const MIN_SPEED: f32 = 0.001;
pub const MAX_SPEED: f32 = 0.05;
pub const SPEED_STEP: f32 = 0.001;

/// The eight planets, ordered by orbital distance.
pub const PLANETS: [PlanetDescriptor; 8] = [
    PlanetDescriptor {
        name: "Mercury",
        color: Vec3::new(0.66, 0.62, 0.58),
        radius: 0.38,
        orbital_distance: 5.0,
        base_speed: 0.02,
    },
    PlanetDescriptor {
        name: "Venus",
        color: Vec3::new(0.90, 0.72, 0.44),
        radius: 0.95,
        orbital_distance: 7.5,
        base_speed: 0.015,
    },
    PlanetDescriptor {
        name: "Earth",
        color: Vec3::new(0.25, 0.48, 0.90),
        radius: 1.0,
        orbital_distance: 10.0,
        base_speed: 0.01,
    },
    PlanetDescriptor {
        name: "Mars",
        color: Vec3::new(0.85, 0.38, 0.22),
        radius: 0.53,
        orbital_distance: 12.5,
        base_speed: 0.008,
    },
    PlanetDescriptor {
        name: "Jupiter",
        color: Vec3::new(0.82, 0.66, 0.48),
        radius: 2.2,
        orbital_distance: 17.0,
        base_speed: 0.005,
    },
    PlanetDescriptor {
        name: "Saturn",
        color: Vec3::new(0.88, 0.80, 0.56),
        radius: 1.9,
        orbital_distance: 21.5,
        base_speed: 0.004,
    },
    PlanetDescriptor {
        name: "Uranus",
        color: Vec3::new(0.56, 0.82, 0.88),
        radius: 1.4,
        orbital_distance: 25.5,
        base_speed: 0.003,
    },
    PlanetDescriptor {
        name: "Neptune",
        color: Vec3::new(0.28, 0.40, 0.86),
        radius: 1.35,
        orbital_distance: 29.0,
        base_speed: 0.002,
    },
];
