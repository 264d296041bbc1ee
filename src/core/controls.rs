use super::constants::{DEFAULT_GRAVITY_INTENSITY, DEFAULT_RING_SPEED};

/// Shared control-panel state. UI handlers write individual fields; the
/// render loop takes a copy at the top of every frame.
///
/// Slider values are trusted as delivered; the radius/angle formulas are
/// total for any finite input.
#[derive(Clone, Copy, Debug)]
pub struct Controls {
    pub gravity_intensity: f64,
    /// Accretion angular increment per frame (slider value already divided
    /// down by the UI layer).
    pub ring_speed: f64,
    pub show_helix: bool,
    pub show_stars: bool,
    pub show_labels: bool,
    pub muted: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            gravity_intensity: DEFAULT_GRAVITY_INTENSITY,
            ring_speed: DEFAULT_RING_SPEED,
            show_helix: true,
            show_stars: true,
            show_labels: true,
            muted: false,
        }
    }
}
