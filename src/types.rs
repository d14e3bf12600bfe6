//! Core types and constants shared across the scene model.

use std::f64::consts::TAU;

/// One full revolution in radians.
pub const FULL_TURN: f64 = TAU;

/// Milliseconds per second, for converting host frame timestamps.
pub const MS_PER_SECOND: f64 = 1000.0;

/// Size of a drawable surface in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width-over-height aspect ratio.
    ///
    /// A zero height yields 1.0 rather than a NaN that would poison the
    /// projection matrix.
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }
}

/// Errors raised during scene initialization.
///
/// Startup is the only fallible phase: once a scene exists, every frame
/// update is pure arithmetic.
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    #[error("no drawable surface available at initialization")]
    MissingSurface,
}

/// Normalize an angle into `[0, FULL_TURN)`.
///
/// Accumulated orbit angles are wrapped every tick so they never grow
/// without bound.
pub fn wrap_angle(angle: f64) -> f64 {
    angle.rem_euclid(FULL_TURN)
}
