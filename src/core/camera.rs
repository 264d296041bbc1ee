use super::constants::{ZOOM_MAX, ZOOM_MIN};
use glam::DVec2;

/// Pan/zoom transform applied to world-space content before projection.
///
/// Written only by the gesture tracker; the render loop reads it once per
/// frame. `zoom` is kept inside `[ZOOM_MIN, ZOOM_MAX]` by `zoom_by`.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub zoom: f64,
    pub offset: DVec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset: DVec2::ZERO,
        }
    }
}

impl Camera {
    /// Multiply the zoom by `factor`, clamped to the allowed range.
    /// A pathological factor (huge or negative) lands on a clamp bound.
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Restore the identity view (double-tap target).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
