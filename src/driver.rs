//! Animation driver: advances simulated time and applies per-frame scene
//! updates.
//!
//! The core [`AnimationDriver`] is a plain struct fed host frame
//! timestamps; [`DriverPlugin`] wires it to Bevy's frame loop, which acts
//! as the host display-refresh scheduler.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::scene::{solar, CubeScene, Scene, SceneState};
use crate::types::{SurfaceSize, MS_PER_SECOND};

/// Drives one scene: converts host frame timestamps to simulated seconds
/// and applies the viewport policy and transform updates in order.
///
/// `stop()` is the cancellation handle; a stopped driver ignores further
/// ticks, so a torn-down scene cannot keep animating.
#[derive(Clone, Debug, Default)]
pub struct AnimationDriver {
    /// Simulated time of the most recent tick, in seconds.
    pub time: f64,
    /// Number of ticks applied so far.
    pub ticks: u64,
    stopped: bool,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one frame at the given host timestamp (milliseconds,
    /// monotonically non-decreasing, zero allowed).
    ///
    /// Order within a tick: viewport sizing policy first, then transform
    /// updates at the new simulated time.
    pub fn tick(&mut self, state: &mut SceneState, raw_timestamp_ms: f64) {
        if self.stopped {
            return;
        }

        self.time = raw_timestamp_ms / MS_PER_SECOND;
        self.ticks += 1;

        let SurfaceSize { width, height } = state.display;
        state.resize(width, height);
        state.advance(self.time);
    }

    /// Deregister the loop; subsequent ticks are no-ops.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

/// Which demo scene the binary runs.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DemoSelection {
    Cube,
    #[default]
    Solar,
}

impl DemoSelection {
    /// Build a fresh scene of the selected kind.
    pub fn scene(&self) -> Scene {
        match self {
            DemoSelection::Cube => Scene::Cube(CubeScene::new()),
            DemoSelection::Solar => Scene::Solar(solar::solar_system()),
        }
    }
}

/// Resource pairing the driver with the scene state it mutates.
#[derive(Resource)]
pub struct ScenePlayer {
    pub driver: AnimationDriver,
    pub state: SceneState,
}

/// Plugin wiring the animation driver into the Bevy frame loop.
pub struct DriverPlugin;

impl Plugin for DriverPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DemoSelection>()
            .add_systems(Startup, init_scene)
            .add_systems(Update, (apply_window_resizes, advance_frames).chain());
    }
}

/// Build the scene state from the primary window.
///
/// A missing window aborts startup with an error instead of silently
/// running a loop with nothing to draw on.
pub fn init_scene(
    mut commands: Commands,
    selection: Res<DemoSelection>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut exit: EventWriter<AppExit>,
) {
    let surface = windows
        .get_single()
        .ok()
        .map(|window| SurfaceSize::new(window.physical_width(), window.physical_height()));

    match SceneState::new(surface, selection.scene()) {
        Ok(state) => {
            info!(
                "Scene initialized at {}x{}",
                state.display.width, state.display.height
            );
            commands.insert_resource(ScenePlayer {
                driver: AnimationDriver::new(),
                state,
            });
        }
        Err(err) => {
            error!("Scene initialization failed: {err}");
            exit.send(AppExit::error());
        }
    }
}

/// Record new display sizes; the viewport policy picks them up on the
/// next tick.
pub fn apply_window_resizes(
    player: Option<ResMut<ScenePlayer>>,
    mut resize_events: EventReader<WindowResized>,
) {
    let Some(mut player) = player else {
        return;
    };

    for event in resize_events.read() {
        player
            .state
            .set_display_size(event.width.round() as u32, event.height.round() as u32);
    }
}

/// Tick the driver once per frame with Bevy's elapsed time as the host
/// timestamp.
pub fn advance_frames(player: Option<ResMut<ScenePlayer>>, time: Res<Time>) {
    let Some(mut player) = player else {
        return;
    };

    let raw_timestamp_ms = time.elapsed_secs_f64() * MS_PER_SECOND;
    let ScenePlayer { driver, state } = &mut *player;
    driver.tick(state, raw_timestamp_ms);
}
