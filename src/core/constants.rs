// Shared scene/interaction tuning constants, usable on both native and wasm
// targets.

// Camera
pub const ZOOM_MIN: f64 = 0.1;
pub const ZOOM_MAX: f64 = 3.0;

// Gestures
pub const DOUBLE_TAP_WINDOW_MS: f64 = 300.0; // two taps inside this window reset the camera
pub const PINCH_ZOOM_DIVISOR: f64 = 200.0; // pinch delta (px) divisor for the zoom factor

// Starfield
pub const STAR_COUNT: usize = 100;
pub const STAR_FIELD_EXTENT: f64 = 2.0; // spawn region spans this multiple of the viewport per axis
pub const STAR_SIZE_MIN: f64 = 1.0;
pub const STAR_SIZE_SPAN: f64 = 2.0;
pub const STAR_DEPTH_MIN: f64 = 0.5;
pub const STAR_DEPTH_SPAN: f64 = 0.5;
pub const STAR_FLICKER_STEP: f64 = 0.01; // phase advance per frame
pub const STAR_ALPHA_BASE: f64 = 0.7;
pub const STAR_ALPHA_SPAN: f64 = 0.3;

// Event horizon
pub const HORIZON_BASE_RADIUS: f64 = 50.0;
pub const GRAVITY_RADIUS_DIVISOR: f64 = 2.0; // radius = base + gravity / divisor
pub const HORIZON_RIM_OFFSET: f64 = 5.0;

// Accretion ring
pub const ACCRETION_RADIUS_OFFSET: f64 = 15.0;
pub const ACCRETION_STRETCH_X: f64 = 1.3;

// Helix motif
pub const HELIX_OFFSET_X: f64 = 100.0; // lateral offset from the horizon center
pub const HELIX_STEP_DEG: usize = 15;
pub const HELIX_CROSSBAR_EVERY_DEG: usize = 60;
pub const HELIX_STRAND_RADIUS: f64 = 20.0;
pub const HELIX_PERSPECTIVE_DIVISOR: f64 = 100.0;
pub const HELIX_HEIGHT: f64 = 180.0;
pub const HELIX_ROTATION_STEP_DEG: f64 = 0.5; // rotation advance per frame

// Control defaults
pub const DEFAULT_GRAVITY_INTENSITY: f64 = 50.0;
pub const DEFAULT_RING_SPEED: f64 = 0.01;
