//! Scene model: renderable bodies, orbit groups, and the scene-state
//! struct the animation driver mutates each frame.
//!
//! The model owns all transform math; the render layer only copies the
//! results into GPU-side transforms.

pub mod cube;
pub mod solar;

use bevy::math::DVec3;
use bevy::prelude::Color;

use crate::camera::Camera;
use crate::types::{wrap_angle, SceneError, SurfaceSize};
use crate::viewport;

pub use self::cube::CubeScene;

/// Visual surface of a renderable body.
#[derive(Clone, Debug, PartialEq)]
pub enum Surface {
    /// Plain colored surface.
    Flat(Color),
    /// Time-animated surface; `time` is pushed from the driver every tick
    /// and feeds the material's animated emissive.
    Animated { color: Color, time: f64 },
}

impl Surface {
    /// Base color regardless of animation.
    pub fn color(&self) -> Color {
        match self {
            Surface::Flat(color) | Surface::Animated { color, .. } => *color,
        }
    }

    /// Current animation time, if this surface is animated.
    pub fn animated_time(&self) -> Option<f64> {
        match self {
            Surface::Animated { time, .. } => Some(*time),
            Surface::Flat(_) => None,
        }
    }
}

/// A drawable body with its own spin transform.
///
/// Owned exclusively by its parent [`OrbitGroup`]; created at scene
/// initialization and mutated every frame by the driver.
#[derive(Clone, Debug)]
pub struct RenderableObject {
    pub id: &'static str,
    /// Body radius in scene units.
    pub radius: f32,
    pub surface: Surface,
    /// Spin added to `local_rotation` each tick, in radians.
    pub rotation_speed: f64,
    /// Accumulated spin about the body's own axis, wrapped to a full turn.
    pub local_rotation: f64,
}

impl RenderableObject {
    pub fn new(id: &'static str, radius: f32, surface: Surface, rotation_speed: f64) -> Self {
        Self {
            id,
            radius,
            surface,
            rotation_speed,
            local_rotation: 0.0,
        }
    }

    /// Advance the body's own spin by one tick.
    pub fn spin(&mut self) {
        self.local_rotation = wrap_angle(self.local_rotation + self.rotation_speed);
    }
}

/// Transform node representing revolution of a body around the scene
/// center at fixed angular speed and radius.
#[derive(Clone, Debug)]
pub struct OrbitGroup {
    pub id: &'static str,
    /// Orbit radius in scene units; zero for the central body.
    pub distance_from_center: f64,
    /// Angle added to `orbit_angle` each tick, in radians.
    pub orbit_speed: f64,
    /// Accumulated revolution angle, wrapped to a full turn.
    pub orbit_angle: f64,
    pub body: RenderableObject,
}

impl OrbitGroup {
    pub fn new(
        id: &'static str,
        distance_from_center: f64,
        orbit_speed: f64,
        body: RenderableObject,
    ) -> Self {
        debug_assert!(distance_from_center >= 0.0);
        Self {
            id,
            distance_from_center,
            orbit_speed,
            orbit_angle: 0.0,
            body,
        }
    }

    /// Advance revolution and spin by one tick.
    pub fn advance(&mut self) {
        self.orbit_angle = wrap_angle(self.orbit_angle + self.orbit_speed);
        self.body.spin();
    }

    /// Current position of the child body in the orbital (x-z) plane.
    pub fn world_position(&self) -> DVec3 {
        let (sin, cos) = self.orbit_angle.sin_cos();
        DVec3::new(
            self.distance_from_center * cos,
            0.0,
            -self.distance_from_center * sin,
        )
    }
}

/// The solar scene's tree: orbit groups under an implicit root plus the
/// static star decoration.
///
/// Orbit iteration order is insertion order (increasing distance), kept
/// stable for deterministic iteration.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    pub orbits: Vec<OrbitGroup>,
    pub stars: Vec<DVec3>,
}

impl SceneGraph {
    /// Apply one tick: fixed angular increments for every orbit and spin,
    /// and the current simulated time for animated surfaces.
    pub fn advance(&mut self, time_seconds: f64) {
        for orbit in &mut self.orbits {
            orbit.advance();
            if let Surface::Animated { time, .. } = &mut orbit.body.surface {
                *time = time_seconds;
            }
        }
    }

    /// The time-animated central body, if the scene has one.
    pub fn animated_body(&self) -> Option<&OrbitGroup> {
        self.orbits
            .iter()
            .find(|orbit| orbit.body.surface.animated_time().is_some())
    }
}

/// Which demo scene is loaded.
#[derive(Clone, Debug)]
pub enum Scene {
    Cube(CubeScene),
    Solar(SceneGraph),
}

impl Scene {
    /// Camera defaults for this scene.
    pub fn default_camera(&self, aspect: f32) -> Camera {
        match self {
            Scene::Cube(_) => Camera::cube_demo(aspect),
            Scene::Solar(_) => Camera::solar_demo(aspect),
        }
    }
}

/// The full mutable state one animation loop drives: display and backing
/// surface sizes, the camera, and the loaded scene.
///
/// Passed explicitly into `tick` and `resize`; there is no global
/// instance.
#[derive(Clone, Debug)]
pub struct SceneState {
    /// Current on-screen size of the display element.
    pub display: SurfaceSize,
    /// Renderer backing-buffer size; trails `display` until the viewport
    /// policy runs.
    pub backing: SurfaceSize,
    pub camera: Camera,
    pub scene: Scene,
}

impl SceneState {
    /// Build scene state for a drawable surface.
    ///
    /// `None` means no surface exists; that aborts initialization with
    /// [`SceneError::MissingSurface`] instead of starting a dead loop.
    pub fn new(surface: Option<SurfaceSize>, scene: Scene) -> Result<Self, SceneError> {
        let surface = surface.ok_or(SceneError::MissingSurface)?;
        let camera = scene.default_camera(surface.aspect());
        Ok(Self {
            display: surface,
            backing: surface,
            camera,
            scene,
        })
    }

    /// Record a new display size; the backing buffer catches up when the
    /// viewport policy next runs.
    pub fn set_display_size(&mut self, width: u32, height: u32) {
        self.display = SurfaceSize::new(width, height);
    }

    /// Apply the viewport sizing policy against the given display size.
    /// Returns whether a resize was actually applied.
    pub fn resize(&mut self, display_width: u32, display_height: u32) -> bool {
        self.display = SurfaceSize::new(display_width, display_height);
        viewport::resize_to_display(&mut self.backing, &mut self.camera, self.display)
    }

    /// Apply one frame's transform updates at the given simulated time.
    pub fn advance(&mut self, time_seconds: f64) {
        match &mut self.scene {
            Scene::Cube(cube) => cube.set_time(time_seconds),
            Scene::Solar(graph) => graph.advance(time_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FULL_TURN;

    fn test_orbit(distance: f64, orbit_speed: f64, rotation_speed: f64) -> OrbitGroup {
        OrbitGroup::new(
            "test",
            distance,
            orbit_speed,
            RenderableObject::new("test", 1.0, Surface::Flat(Color::WHITE), rotation_speed),
        )
    }

    #[test]
    fn test_orbit_advance_accumulates() {
        let mut orbit = test_orbit(100.0, 0.01, 0.02);
        for _ in 0..5 {
            orbit.advance();
        }
        assert!((orbit.orbit_angle - 0.05).abs() < 1e-12);
        assert!((orbit.body.local_rotation - 0.10).abs() < 1e-12);
    }

    #[test]
    fn test_orbit_angle_wraps() {
        let mut orbit = test_orbit(100.0, FULL_TURN / 4.0, 0.0);
        for _ in 0..5 {
            orbit.advance();
        }
        // Five quarter turns wrap back to one quarter turn.
        assert!((orbit.orbit_angle - FULL_TURN / 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_world_position_on_orbit_circle() {
        let mut orbit = test_orbit(200.0, 0.1, 0.0);
        for _ in 0..17 {
            orbit.advance();
            let pos = orbit.world_position();
            assert!((pos.length() - 200.0).abs() < 1e-9);
            assert_eq!(pos.y, 0.0);
        }
    }

    #[test]
    fn test_stationary_center_body() {
        let mut orbit = test_orbit(0.0, 0.0, 0.01);
        orbit.advance();
        assert_eq!(orbit.world_position(), DVec3::ZERO);
        assert!(orbit.body.local_rotation > 0.0);
    }

    #[test]
    fn test_animated_surface_receives_time() {
        let mut graph = SceneGraph {
            orbits: vec![OrbitGroup::new(
                "sun",
                0.0,
                0.0,
                RenderableObject::new(
                    "sun",
                    10.0,
                    Surface::Animated {
                        color: Color::WHITE,
                        time: 0.0,
                    },
                    0.0,
                ),
            )],
            stars: Vec::new(),
        };

        graph.advance(3.25);
        assert_eq!(
            graph.orbits[0].body.surface.animated_time(),
            Some(3.25),
            "animated surface should track driver time"
        );
    }

    #[test]
    fn test_missing_surface_aborts_initialization() {
        let result = SceneState::new(None, Scene::Cube(CubeScene::new()));
        assert!(matches!(result, Err(SceneError::MissingSurface)));
    }

    #[test]
    fn test_state_initializes_backing_to_display() {
        let state = SceneState::new(
            Some(SurfaceSize::new(800, 600)),
            Scene::Solar(solar::solar_system()),
        )
        .unwrap();
        assert_eq!(state.backing, state.display);
        assert!((state.camera.aspect - 800.0 / 600.0).abs() < 1e-6);
    }
}
