//! Camera model and Bevy camera wiring.
//!
//! The core [`Camera`] owns the projection parameters; the aspect ratio
//! is derived from the backing buffer by the viewport policy and never
//! stored stale.

use bevy::prelude::*;

use crate::driver::ScenePlayer;

/// Vertical field of view shared by both demo scenes, in degrees.
pub const FOV_Y_DEGREES: f32 = 75.0;

/// Near plane for the cube demo.
pub const CUBE_NEAR: f32 = 0.1;

/// Far plane for the cube demo; the cube sits well inside it.
pub const CUBE_FAR: f32 = 5.0;

/// Camera distance for the cube demo.
pub const CUBE_CAMERA_Z: f32 = 2.0;

/// Near plane for the solar demo.
pub const SOLAR_NEAR: f32 = 0.1;

/// Far plane for the solar demo; must reach past the star shell.
pub const SOLAR_FAR: f32 = 4000.0;

/// Camera vantage point for the solar demo, above the orbital plane.
pub const SOLAR_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 500.0, 900.0);

/// Projection parameters for the scene camera.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    /// Vertical field of view, degrees.
    pub fov_y_degrees: f32,
    /// Width-over-height ratio, derived from the backing buffer.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    projection_dirty: bool,
}

impl Camera {
    /// Camera defaults for the rotating-cube demo.
    pub fn cube_demo(aspect: f32) -> Self {
        Self {
            fov_y_degrees: FOV_Y_DEGREES,
            aspect,
            near: CUBE_NEAR,
            far: CUBE_FAR,
            position: Vec3::new(0.0, 0.0, CUBE_CAMERA_Z),
            projection_dirty: false,
        }
    }

    /// Camera defaults for the solar demo.
    pub fn solar_demo(aspect: f32) -> Self {
        Self {
            fov_y_degrees: FOV_Y_DEGREES,
            aspect,
            near: SOLAR_NEAR,
            far: SOLAR_FAR,
            position: SOLAR_CAMERA_POSITION,
            projection_dirty: false,
        }
    }

    /// Set a new derived aspect and mark the projection for
    /// recomputation before the next draw.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.projection_dirty = true;
    }

    /// Consume the dirty flag; the render layer recomputes the
    /// projection when this returns true.
    pub fn take_projection_dirty(&mut self) -> bool {
        std::mem::take(&mut self.projection_dirty)
    }
}

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin providing camera spawning and projection sync.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostStartup, setup_camera);
    }
}

/// Spawn the main camera from the scene's camera parameters.
fn setup_camera(mut commands: Commands, player: Option<Res<ScenePlayer>>) {
    let Some(player) = player else {
        return;
    };

    let camera = &player.state.camera;
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: camera.fov_y_degrees.to_radians(),
            aspect_ratio: camera.aspect,
            near: camera.near,
            far: camera.far,
            ..default()
        }),
        Transform::from_translation(camera.position).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// Push a recomputed aspect into the camera projection when the viewport
/// policy marked it dirty.
pub fn sync_camera_projection(
    player: Option<ResMut<ScenePlayer>>,
    mut camera_query: Query<&mut Projection, With<MainCamera>>,
) {
    let Some(mut player) = player else {
        return;
    };

    if !player.state.camera.take_projection_dirty() {
        return;
    }

    let Ok(mut projection) = camera_query.get_single_mut() else {
        return;
    };

    let Projection::Perspective(ref mut perspective) = *projection else {
        return;
    };

    perspective.aspect_ratio = player.state.camera.aspect;
}
