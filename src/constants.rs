// Canvas styling and web-layer tuning constants. Scene/interaction math
// constants live in `core/constants.rs` so native tests can reach them.

// Ambient audio
pub const AMBIENT_AUDIO_SRC: &str = "ambient.ogg";
pub const AMBIENT_VOLUME: f64 = 0.5;

// Control panel
pub const RING_SPEED_SLIDER_DIVISOR: f64 = 1000.0; // raw slider value -> per-frame angle

// Starfield
pub const STAR_FILL: &str = "#fff";

// Event horizon
pub const HORIZON_CORE_COLOR: &str = "#000";
pub const HORIZON_EDGE_COLOR: &str = "rgba(50,50,50,0.5)";
pub const HORIZON_GRADIENT_INNER_RATIO: f64 = 0.1;
pub const HORIZON_RIM_COLOR: &str = "rgba(255,255,255,0.1)";
pub const HORIZON_RIM_LINE_WIDTH: f64 = 2.0;

// Accretion ring
pub const ACCRETION_PRIMARY_COLOR: &str = "#f80";
pub const ACCRETION_SECONDARY_COLOR: &str = "#ff0";
pub const ACCRETION_LINE_WIDTH: f64 = 6.0;

// Helix motif
pub const HELIX_COLOR: &str = "#0f0";
pub const HELIX_DOT_RADIUS: f64 = 3.0;
pub const HELIX_CROSSBAR_LINE_WIDTH: f64 = 2.0;

// Labels
pub const LABEL_COLOR: &str = "#0ff";
pub const LABEL_FONT: &str = "20px sans-serif";
