//! Per-planet orbital state and the shared speed configuration.
//!
//! Orbits are cosmetic circles on the XZ plane: one scalar angle per planet,
//! advanced by a fixed per-frame increment looked up in [`SpeedConfig`].
//! There is no eccentricity, inclination, or mutual gravitation.

use std::collections::HashMap;

use glam::Vec3;

use crate::planet::{PlanetDescriptor, MAX_SPEED, MIN_SPEED};

/// Mutable orbital state for one planet.
#[derive(Debug, Clone, Copy)]
pub struct OrbitState {
    /// The immutable descriptor this state was created from.
    pub descriptor: &'static PlanetDescriptor,
    /// Current orbital angle in radians. Unbounded; wraps implicitly
    /// through cos/sin when converted to a position.
    pub angle: f32,
}

impl OrbitState {
    /// Create state at the descriptor's starting angle.
    pub fn new(descriptor: &'static PlanetDescriptor, angle: f32) -> Self {
        Self { descriptor, angle }
    }

    /// Advance the orbit by one frame at the given angular speed.
    pub fn advance(&mut self, speed: f32) {
        self.angle += speed;
    }

    /// World-space position on the XZ plane at constant height zero.
    pub fn position(&self) -> Vec3 {
        let d = self.descriptor.orbital_distance;
        Vec3::new(self.angle.cos() * d, 0.0, self.angle.sin() * d)
    }
}

/// Mapping from planet name to current angular speed (radians per frame).
///
/// Seeded from the descriptors' base speeds. Written only by the control
/// panel, read only by the frame driver - same thread, so no locking.
/// Updates are key-local: changing one planet never touches another entry.
#[derive(Debug, Clone)]
pub struct SpeedConfig {
    speeds: HashMap<&'static str, f32>,
}

impl SpeedConfig {
    /// Seed the configuration from a descriptor table.
    pub fn from_descriptors(planets: &'static [PlanetDescriptor]) -> Self {
        Self {
            speeds: planets.iter().map(|p| (p.name, p.base_speed)).collect(),
        }
    }

    /// Current speed for a planet.
    ///
    /// A missing entry means the scene and the configuration were built from
    /// different tables, which is a bug, not a runtime condition.
    pub fn speed(&self, name: &str) -> f32 {
        *self
            .speeds
            .get(name)
            .unwrap_or_else(|| panic!("no speed configured for planet {name:?}"))
    }

    /// Replace exactly one planet's speed, clamped to the slider bounds.
    pub fn set_speed(&mut self, name: &'static str, speed: f32) {
        let clamped = speed.clamp(MIN_SPEED, MAX_SPEED);
        match self.speeds.get_mut(name) {
            Some(entry) => *entry = clamped,
            None => panic!("no speed configured for planet {name:?}"),
        }
    }

    /// Reset every entry to its descriptor's base speed.
    pub fn reset(&mut self, planets: &'static [PlanetDescriptor]) {
        for p in planets {
            self.speeds.insert(p.name, p.base_speed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::PLANETS;

    #[test]
    fn test_angle_accumulates_per_frame() {
        let mut orbit = OrbitState::new(&PLANETS[2], 0.25);
        let speed = 0.01;
        for _ in 0..100 {
            orbit.advance(speed);
        }
        assert!((orbit.angle - (0.25 + 100.0 * speed)).abs() < 1e-4);
    }

    #[test]
    fn test_position_on_xz_circle() {
        let mut orbit = OrbitState::new(&PLANETS[0], 0.0);
        orbit.advance(1.3);
        let d = orbit.descriptor.orbital_distance;
        let pos = orbit.position();
        assert!((pos.x - d * orbit.angle.cos()).abs() < 1e-6);
        assert!((pos.z - d * orbit.angle.sin()).abs() < 1e-6);
        assert_eq!(pos.y, 0.0);
        assert!((pos.length() - d).abs() < 1e-4);
    }

    #[test]
    fn test_speed_config_seeded_from_base_speeds() {
        let config = SpeedConfig::from_descriptors(&PLANETS);
        for p in &PLANETS {
            assert_eq!(config.speed(p.name), p.base_speed);
        }
    }

    #[test]
    fn test_set_speed_is_key_local() {
        let mut config = SpeedConfig::from_descriptors(&PLANETS);
        config.set_speed("Mars", 0.042);

        assert_eq!(config.speed("Mars"), 0.042);
        for p in PLANETS.iter().filter(|p| p.name != "Mars") {
            assert_eq!(config.speed(p.name), p.base_speed);
        }
    }

    #[test]
    fn test_set_speed_clamps_to_slider_bounds() {
        let mut config = SpeedConfig::from_descriptors(&PLANETS);
        config.set_speed("Earth", 10.0);
        assert_eq!(config.speed("Earth"), MAX_SPEED);
        config.set_speed("Earth", 0.0);
        assert_eq!(config.speed("Earth"), MIN_SPEED);
    }

    #[test]
    fn test_reset_restores_base_speeds() {
        let mut config = SpeedConfig::from_descriptors(&PLANETS);
        config.set_speed("Venus", 0.05);
        config.reset(&PLANETS);
        assert_eq!(config.speed("Venus"), PLANETS[1].base_speed);
    }

    #[test]
    #[should_panic(expected = "no speed configured")]
    fn test_unknown_planet_is_a_bug() {
        let config = SpeedConfig::from_descriptors(&PLANETS);
        config.speed("Pluto");
    }
}
