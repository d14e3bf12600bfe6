//! Common test utilities for integration tests.

use orrery::scene::{solar, CubeScene, Scene, SceneGraph, SceneState};
use orrery::types::SurfaceSize;

/// The default test surface, an 800x600 display.
pub fn surface() -> Option<SurfaceSize> {
    Some(SurfaceSize::new(800, 600))
}

/// A cube scene on the default test surface.
pub fn cube_state() -> SceneState {
    SceneState::new(surface(), Scene::Cube(CubeScene::new())).expect("test surface is present")
}

/// A solar scene on the default test surface.
pub fn solar_state() -> SceneState {
    SceneState::new(surface(), Scene::Solar(solar::solar_system()))
        .expect("test surface is present")
}

/// Frame timestamps spaced `step_ms` apart, starting at zero.
pub fn frame_timestamps(count: usize, step_ms: f64) -> Vec<f64> {
    (0..count).map(|i| i as f64 * step_ms).collect()
}

/// Snapshot of every dynamic transform in a solar graph, for comparing
/// replayed runs: (orbit_angle, local_rotation) per orbit plus the
/// animated surface time.
pub fn transform_snapshot(graph: &SceneGraph) -> (Vec<(f64, f64)>, Option<f64>) {
    let transforms = graph
        .orbits
        .iter()
        .map(|orbit| (orbit.orbit_angle, orbit.body.local_rotation))
        .collect();
    let sun_time = graph
        .animated_body()
        .and_then(|orbit| orbit.body.surface.animated_time());
    (transforms, sun_time)
}
