use super::constants::*;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// One background star. Position is screen-space-at-rest, centered on the
/// viewport origin; `depth` attenuates how strongly camera panning shifts
/// the star (motion parallax).
#[derive(Clone, Copy, Debug)]
pub struct Star {
    pub pos: DVec2,
    pub size: f64,
    pub depth: f64,
    pub phase: f64,
    pub alpha: f64,
}

/// Time-dependent scene state advanced once per animation frame.
///
/// The angle accumulators are unbounded; the trigonometry that consumes
/// them wraps implicitly. Increments are fixed per frame, so animation
/// speed follows the display refresh rate.
#[derive(Clone, Debug)]
pub struct Scene {
    pub stars: Vec<Star>,
    pub accretion_angle: f64,
    pub helix_rotation: f64,
}

impl Scene {
    /// Build the star population once for the session. The field spans
    /// twice the viewport per axis and is not regenerated on resize.
    pub fn new(width: f64, height: f64, rng: &mut impl Rng) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| {
                let phase = rng.gen::<f64>() * TAU;
                Star {
                    pos: DVec2::new(
                        (rng.gen::<f64>() - 0.5) * width * STAR_FIELD_EXTENT,
                        (rng.gen::<f64>() - 0.5) * height * STAR_FIELD_EXTENT,
                    ),
                    size: STAR_SIZE_MIN + rng.gen::<f64>() * STAR_SIZE_SPAN,
                    depth: STAR_DEPTH_MIN + rng.gen::<f64>() * STAR_DEPTH_SPAN,
                    phase,
                    alpha: star_alpha(phase),
                }
            })
            .collect();
        Self {
            stars,
            accretion_angle: 0.0,
            helix_rotation: 0.0,
        }
    }

    /// Advance flicker phases, the accretion angle (by the current ring
    /// speed) and the helix rotation by one frame.
    pub fn advance(&mut self, ring_speed: f64) {
        for star in &mut self.stars {
            star.phase += STAR_FLICKER_STEP;
            star.alpha = star_alpha(star.phase);
        }
        self.accretion_angle += ring_speed;
        self.helix_rotation += HELIX_ROTATION_STEP_DEG;
    }
}

/// Flicker alpha for a given phase, oscillating in [0.4, 1.0].
#[inline]
pub fn star_alpha(phase: f64) -> f64 {
    STAR_ALPHA_BASE + STAR_ALPHA_SPAN * phase.sin()
}

/// Project a star to screen space: the camera offset is depth-attenuated
/// (parallax) while zoom scales the at-rest position directly.
#[inline]
pub fn star_screen_position(star: &Star, center: DVec2, offset: DVec2, zoom: f64) -> DVec2 {
    center + offset * star.depth + star.pos * zoom
}

/// On-screen point size of a star: depth and zoom both shrink/grow it.
#[inline]
pub fn star_screen_size(star: &Star, zoom: f64) -> f64 {
    star.size * star.depth * zoom
}

/// Event-horizon radius, monotonically non-decreasing in the gravity
/// control.
#[inline]
pub fn horizon_radius(gravity_intensity: f64) -> f64 {
    HORIZON_BASE_RADIUS + gravity_intensity / GRAVITY_RADIUS_DIVISOR
}

/// One rung of the helix: the two strands sit at `±x_offset` and every
/// `HELIX_CROSSBAR_EVERY_DEG` step carries a connecting bar.
#[derive(Clone, Copy, Debug)]
pub struct HelixNode {
    pub x_offset: f64,
    pub y: f64,
    pub crossbar: bool,
}

/// Lay out the helix for the given rotation, one node per
/// `HELIX_STEP_DEG` from 0 to 360 inclusive. The strand's pseudo-depth
/// (`sin`) only scales the apparent x-offset; the vertical position is
/// linear in the step.
pub fn helix_nodes(rotation_deg: f64) -> impl Iterator<Item = HelixNode> {
    (0..=360usize).step_by(HELIX_STEP_DEG).map(move |step| {
        let t = (step as f64 + rotation_deg).to_radians();
        let z = t.sin() * HELIX_STRAND_RADIUS;
        let scale = 1.0 + z / HELIX_PERSPECTIVE_DIVISOR;
        HelixNode {
            x_offset: t.cos() * HELIX_STRAND_RADIUS * scale,
            y: (step as f64 / 360.0 - 0.5) * HELIX_HEIGHT,
            crossbar: step % HELIX_CROSSBAR_EVERY_DEG == 0,
        }
    })
}
