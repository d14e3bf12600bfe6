//! Static body data and construction for the toy solar system scene.
//!
//! Radii, distances, and angular speeds are stylized for a legible
//! animation, not to physical scale.

use bevy::prelude::Color;

use super::{OrbitGroup, RenderableObject, SceneGraph, Surface};
use crate::starfield::generate_stars;

/// Number of decorative background stars.
pub const STAR_COUNT: usize = 500;

/// Inner radius of the star shell, in scene units.
pub const STAR_SHELL_MIN: f64 = 600.0;

/// Outer radius of the star shell, in scene units.
pub const STAR_SHELL_MAX: f64 = 1200.0;

/// Fixed parameters for one body in the solar scene.
#[derive(Clone, Copy, Debug)]
pub struct BodySpec {
    pub id: &'static str,
    /// Sphere radius in scene units.
    pub radius: f32,
    /// Orbit radius in scene units; zero for the Sun.
    pub distance_from_center: f64,
    /// Revolution increment per tick, radians.
    pub orbit_speed: f64,
    /// Spin increment per tick, radians.
    pub rotation_speed: f64,
}

/// All bodies in increasing distance order. The ordering is cosmetic
/// (orbits are independent) but kept stable for deterministic iteration.
pub const BODIES: [BodySpec; 9] = [
    BodySpec {
        id: "sun",
        radius: 50.0,
        distance_from_center: 0.0,
        orbit_speed: 0.0,
        rotation_speed: 0.004,
    },
    BodySpec {
        id: "mercury",
        radius: 5.0,
        distance_from_center: 100.0,
        orbit_speed: 0.02,
        rotation_speed: 0.004,
    },
    BodySpec {
        id: "venus",
        radius: 9.0,
        distance_from_center: 150.0,
        orbit_speed: 0.015,
        rotation_speed: 0.002,
    },
    BodySpec {
        id: "earth",
        radius: 10.0,
        distance_from_center: 200.0,
        orbit_speed: 0.01,
        rotation_speed: 0.02,
    },
    BodySpec {
        id: "mars",
        radius: 7.0,
        distance_from_center: 250.0,
        orbit_speed: 0.008,
        rotation_speed: 0.018,
    },
    BodySpec {
        id: "jupiter",
        radius: 30.0,
        distance_from_center: 300.0,
        orbit_speed: 0.002,
        rotation_speed: 0.04,
    },
    BodySpec {
        id: "saturn",
        radius: 25.0,
        distance_from_center: 350.0,
        orbit_speed: 0.0009,
        rotation_speed: 0.038,
    },
    BodySpec {
        id: "uranus",
        radius: 18.0,
        distance_from_center: 400.0,
        orbit_speed: 0.0004,
        rotation_speed: 0.03,
    },
    BodySpec {
        id: "neptune",
        radius: 17.0,
        distance_from_center: 450.0,
        orbit_speed: 0.0001,
        rotation_speed: 0.032,
    },
];

/// Approximate visual color for a body.
fn body_color(id: &str) -> Color {
    match id {
        "sun" => Color::srgb(1.0, 0.85, 0.3),
        "mercury" => Color::srgb(0.6, 0.6, 0.6),
        "venus" => Color::srgb(0.9, 0.85, 0.7),
        "earth" => Color::srgb(0.2, 0.5, 0.8),
        "mars" => Color::srgb(0.8, 0.4, 0.2),
        "jupiter" => Color::srgb(0.8, 0.7, 0.6),
        "saturn" => Color::srgb(0.9, 0.85, 0.6),
        "uranus" => Color::srgb(0.6, 0.8, 0.9),
        "neptune" => Color::srgb(0.3, 0.5, 0.9),
        _ => Color::WHITE,
    }
}

/// Build the solar scene graph: one orbit group per body plus the star
/// decoration. The Sun sits at the center with a time-animated surface;
/// every planet gets a flat color.
pub fn solar_system() -> SceneGraph {
    let orbits = BODIES
        .iter()
        .map(|spec| {
            let color = body_color(spec.id);
            let surface = if spec.distance_from_center == 0.0 {
                Surface::Animated { color, time: 0.0 }
            } else {
                Surface::Flat(color)
            };
            OrbitGroup::new(
                spec.id,
                spec.distance_from_center,
                spec.orbit_speed,
                RenderableObject::new(spec.id, spec.radius, surface, spec.rotation_speed),
            )
        })
        .collect();

    SceneGraph {
        orbits,
        stars: generate_stars(STAR_COUNT, STAR_SHELL_MIN, STAR_SHELL_MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bodies_ordered_by_distance() {
        for pair in BODIES.windows(2) {
            assert!(pair[0].distance_from_center < pair[1].distance_from_center);
        }
    }

    #[test]
    fn test_sun_is_the_animated_center() {
        let graph = solar_system();
        let sun = graph.animated_body().expect("scene should have a sun");
        assert_eq!(sun.id, "sun");
        assert_eq!(sun.distance_from_center, 0.0);
        assert_eq!(sun.orbit_speed, 0.0);
    }

    #[test]
    fn test_planets_have_flat_surfaces() {
        let graph = solar_system();
        for orbit in graph.orbits.iter().filter(|o| o.id != "sun") {
            assert!(orbit.body.surface.animated_time().is_none());
        }
    }

    #[test]
    fn test_star_decoration_spawned() {
        let graph = solar_system();
        assert_eq!(graph.stars.len(), STAR_COUNT);
    }
}
