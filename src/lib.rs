//! Orrery - Toy Solar System Scenes
//!
//! A library crate providing the scene model, animation driver, and
//! viewport policy components for testing and integration purposes.

pub mod camera;
pub mod driver;
pub mod render;
pub mod scene;
pub mod starfield;
pub mod types;
pub mod viewport;

#[cfg(test)]
pub mod test_utils;
