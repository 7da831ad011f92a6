//! Pointer picking: ray/sphere intersection against the planet set.
//!
//! Only planets are pickable; the sun and the starfield are never hit-tested.
//! When several planets overlap under the cursor, the nearest intersection
//! along the ray wins.

use glam::Vec3;

use crate::orbit::OrbitState;

/// A world-space ray with unit direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Result of a successful pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Index into the scene's planet list.
    pub planet: usize,
    /// Distance from the ray origin to the intersection point.
    pub distance: f32,
}

/// Nearest intersection distance of a ray with a sphere, if any.
///
/// Standard quadratic solution; returns the smallest positive t, so a ray
/// starting inside the sphere still reports the exit point.
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    let t_near = -b - sqrt_disc;
    let t_far = -b + sqrt_disc;
    if t_near > 0.0 {
        Some(t_near)
    } else if t_far > 0.0 {
        Some(t_far)
    } else {
        None
    }
}

/// Find the planet under the ray, nearest-to-camera first.
pub fn pick(planets: &[OrbitState], ray: &Ray) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;
    for (index, orbit) in planets.iter().enumerate() {
        if let Some(distance) = ray_sphere(ray, orbit.position(), orbit.descriptor.radius) {
            if best.map_or(true, |hit| distance < hit.distance) {
                best = Some(PickHit {
                    planet: index,
                    distance,
                });
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::OrbitCamera;
    use crate::planet::PLANETS;
    use crate::scene::Scene;
    use glam::Vec2;

    #[test]
    fn test_ray_sphere_direct_hit() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 10.0),
            direction: Vec3::NEG_Z,
        };
        let t = ray_sphere(&ray, Vec3::ZERO, 1.0).unwrap();
        assert!((t - 9.0).abs() < 1e-5);
    }

    #[test]
    fn test_ray_sphere_miss() {
        let ray = Ray {
            origin: Vec3::new(0.0, 5.0, 10.0),
            direction: Vec3::NEG_Z,
        };
        assert!(ray_sphere(&ray, Vec3::ZERO, 1.0).is_none());
    }

    #[test]
    fn test_ray_sphere_behind_origin() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 10.0),
            direction: Vec3::Z,
        };
        assert!(ray_sphere(&ray, Vec3::ZERO, 1.0).is_none());
    }

    #[test]
    fn test_pick_through_projected_center_hits_that_planet() {
        let scene = Scene::new(&PLANETS);
        let camera = OrbitCamera::new();
        let aspect = 16.0 / 9.0;

        for (index, orbit) in scene.planets.iter().enumerate() {
            let clip = camera.view_proj(aspect).project_point3(orbit.position());
            let ray = camera.screen_ray(Vec2::new(clip.x, clip.y), aspect);
            let hit = pick(&scene.planets, &ray)
                .unwrap_or_else(|| panic!("{} not picked", orbit.descriptor.name));

            // The ray goes through this planet's center; anything else that
            // reports instead must genuinely sit nearer along the same ray.
            if hit.planet != index {
                let d = ray_sphere(&ray, orbit.position(), orbit.descriptor.radius)
                    .expect("center ray must intersect its own planet");
                assert!(hit.distance < d);
            }
        }
    }

    #[test]
    fn test_pick_far_from_everything_is_none() {
        let scene = Scene::new(&PLANETS);
        let ray = Ray {
            origin: Vec3::new(0.0, 500.0, 0.0),
            direction: Vec3::Y,
        };
        assert!(pick(&scene.planets, &ray).is_none());
    }

    #[test]
    fn test_overlapping_planets_resolve_nearest() {
        let mut scene = Scene::new(&PLANETS);
        // Park everything on the +Z axis, then line two planets up on +X
        // and shoot down it.
        for orbit in &mut scene.planets {
            orbit.angle = std::f32::consts::FRAC_PI_2;
        }
        scene.planets[0].angle = 0.0; // Mercury at x = 5
        scene.planets[2].angle = 0.0; // Earth at x = 10
        let ray = Ray {
            origin: Vec3::new(50.0, 0.0, 0.0),
            direction: Vec3::NEG_X,
        };
        let hit = pick(&scene.planets, &ray).unwrap();
        assert_eq!(scene.planets[hit.planet].descriptor.name, "Earth");
    }

    #[test]
    fn test_sun_is_not_pickable() {
        let scene = Scene::new(&PLANETS);
        // Straight at the sun from above, past no planet.
        let ray = Ray {
            origin: Vec3::new(0.0, 100.0, 0.0),
            direction: Vec3::NEG_Y,
        };
        // Planets sit on the XZ plane away from the origin, so nothing hits.
        assert!(pick(&scene.planets, &ray).is_none());
    }
}
