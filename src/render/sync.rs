//! Transform and material synchronization between the scene model and
//! the spawned entities.
//!
//! Runs after the driver has advanced the frame, so every read here sees
//! current transforms.

use bevy::prelude::*;

use crate::driver::ScenePlayer;
use crate::render::bodies::{AnimatedSurface, OrbitBodyIndex, SpinningCube};
use crate::scene::Scene;

/// Copy orbit positions and body spins into render transforms.
pub fn sync_orbit_transforms(
    player: Option<Res<ScenePlayer>>,
    mut query: Query<(&mut Transform, &OrbitBodyIndex)>,
) {
    let Some(player) = player else {
        return;
    };
    let Scene::Solar(graph) = &player.state.scene else {
        return;
    };

    for (mut transform, index) in query.iter_mut() {
        let Some(orbit) = graph.orbits.get(index.0) else {
            continue;
        };
        transform.translation = orbit.world_position().as_vec3();
        transform.rotation = Quat::from_rotation_y(orbit.body.local_rotation as f32);
    }
}

/// Apply the cube's absolute-time rotation.
pub fn sync_cube_transform(
    player: Option<Res<ScenePlayer>>,
    mut query: Query<&mut Transform, With<SpinningCube>>,
) {
    let Some(player) = player else {
        return;
    };
    let Scene::Cube(cube) = &player.state.scene else {
        return;
    };

    for mut transform in query.iter_mut() {
        transform.rotation = Quat::from_euler(
            EulerRot::XYZ,
            cube.rotation_x as f32,
            cube.rotation_y as f32,
            0.0,
        );
    }
}

/// Push the animated surface's time into its material.
///
/// The scalar time modulates the emissive strength, giving the central
/// body a slow breathing glow.
pub fn sync_sun_material(
    player: Option<Res<ScenePlayer>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    query: Query<&MeshMaterial3d<StandardMaterial>, With<AnimatedSurface>>,
) {
    let Some(player) = player else {
        return;
    };
    let Scene::Solar(graph) = &player.state.scene else {
        return;
    };
    let Some(animated) = graph.animated_body() else {
        return;
    };
    let Some(time) = animated.body.surface.animated_time() else {
        return;
    };

    let base = animated.body.surface.color().to_linear();
    let pulse = 2.0 + (time.sin() as f32) * 0.5;

    for handle in query.iter() {
        if let Some(material) = materials.get_mut(&handle.0) {
            material.emissive = base * pulse;
        }
    }
}
