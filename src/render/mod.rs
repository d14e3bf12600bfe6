//! Rendering systems for the demo scenes.
//!
//! The scene model owns all transform math; these systems only spawn the
//! visual entities and copy current transforms into them each frame.

mod background;
pub mod bodies;
mod sync;

use bevy::prelude::*;

use self::background::{spawn_lighting, spawn_starfield};
use self::bodies::spawn_scene_bodies;
use self::sync::{sync_cube_transform, sync_orbit_transforms, sync_sun_material};
use crate::camera::sync_camera_projection;
use crate::driver::advance_frames;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostStartup,
            (spawn_scene_bodies, spawn_starfield, spawn_lighting),
        )
        // All sync systems read state the driver just advanced:
        // 1. sync_camera_projection - applies a dirty aspect ratio
        // 2. sync_orbit_transforms / sync_cube_transform - body poses
        // 3. sync_sun_material - pushes surface time into the material
        .add_systems(
            Update,
            (
                sync_camera_projection,
                sync_orbit_transforms,
                sync_cube_transform,
                sync_sun_material,
            )
                .chain()
                .after(advance_frames),
        );
    }
}
