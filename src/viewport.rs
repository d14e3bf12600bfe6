//! Viewport sizing policy.
//!
//! Keeps the renderer's backing buffer matched to the display element's
//! on-screen size, and the camera aspect derived from it.

use crate::camera::Camera;
use crate::types::SurfaceSize;

/// Resize the backing buffer to the display size if they differ.
///
/// On a real resize the camera aspect is recomputed and its projection
/// marked for recomputation before the next draw. A matching size is a
/// no-op. Returns whether a resize was applied.
pub fn resize_to_display(
    backing: &mut SurfaceSize,
    camera: &mut Camera,
    display: SurfaceSize,
) -> bool {
    if *backing == display {
        return false;
    }

    // Single definitive size; no pixel-ratio upscaling pass.
    *backing = display;
    camera.set_aspect(display.aspect());
    true
}
