//! Orrery - Toy Solar System Scenes
//!
//! A desktop toy with two demo scenes: a single rotating cube and a toy
//! solar system with orbiting planets, an animated sun, and a starfield.
//! Run with `orrery cube` for the cube scene; the solar scene is the
//! default.

use bevy::prelude::*;

use orrery::camera::CameraPlugin;
use orrery::driver::{DemoSelection, DriverPlugin};
use orrery::render::RenderPlugin;

fn main() {
    let selection = match std::env::args().nth(1).as_deref() {
        Some("cube") => DemoSelection::Cube,
        _ => DemoSelection::Solar,
    };

    App::new()
        .add_plugins(DefaultPlugins)
        // Insert resources before plugins that depend on them
        .insert_resource(selection)
        .add_plugins((CameraPlugin, DriverPlugin, RenderPlugin))
        .run();
}
