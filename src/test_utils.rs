//! Test utilities for scene and driver tests.

use crate::scene::{solar, CubeScene, Scene, SceneState};
use crate::types::SurfaceSize;

/// Fixtures for creating prebuilt scene states.
pub mod fixtures {
    use super::*;

    /// The default test surface, an 800x600 display.
    pub fn surface() -> Option<SurfaceSize> {
        Some(SurfaceSize::new(800, 600))
    }

    /// A cube scene on the default test surface.
    pub fn cube_state() -> SceneState {
        SceneState::new(surface(), Scene::Cube(CubeScene::new()))
            .expect("test surface is present")
    }

    /// A solar scene on the default test surface.
    pub fn solar_state() -> SceneState {
        SceneState::new(surface(), Scene::Solar(solar::solar_system()))
            .expect("test surface is present")
    }

    /// A sequence of frame timestamps spaced `step_ms` apart, starting
    /// at zero.
    pub fn frame_timestamps(count: usize, step_ms: f64) -> Vec<f64> {
        (0..count).map(|i| i as f64 * step_ms).collect()
    }
}
