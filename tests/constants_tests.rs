// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod controls {
    include!("../src/core/controls.rs");
}

use constants::*;
use controls::Controls;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_bounds_bracket_the_identity_zoom() {
    assert!(ZOOM_MIN > 0.0);
    assert!(ZOOM_MIN < 1.0 && 1.0 < ZOOM_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gesture_constants_are_positive() {
    assert!(DOUBLE_TAP_WINDOW_MS > 0.0);
    assert!(PINCH_ZOOM_DIVISOR > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn star_flicker_band_stays_renderable() {
    // Alpha must remain a valid compositing value for any phase.
    assert!(STAR_ALPHA_BASE - STAR_ALPHA_SPAN >= 0.0);
    assert!(STAR_ALPHA_BASE + STAR_ALPHA_SPAN <= 1.0);
    assert!(STAR_FLICKER_STEP > 0.0);
    assert!(STAR_SIZE_MIN > 0.0 && STAR_SIZE_SPAN > 0.0);
    assert!(STAR_DEPTH_MIN > 0.0);
    assert!(STAR_DEPTH_MIN + STAR_DEPTH_SPAN <= 1.0);
    assert!(STAR_COUNT > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn horizon_and_ring_offsets_nest_outward() {
    assert!(HORIZON_BASE_RADIUS > 0.0);
    assert!(GRAVITY_RADIUS_DIVISOR > 0.0);
    // Rim sits inside the accretion ring.
    assert!(HORIZON_RIM_OFFSET < ACCRETION_RADIUS_OFFSET);
    assert!(ACCRETION_STRETCH_X >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn helix_steps_tile_a_full_turn() {
    assert!(HELIX_STEP_DEG > 0);
    assert_eq!(360 % HELIX_STEP_DEG, 0);
    // Crossbar cadence must land on strand steps.
    assert_eq!(HELIX_CROSSBAR_EVERY_DEG % HELIX_STEP_DEG, 0);
    assert!(HELIX_STRAND_RADIUS > 0.0);
    // Perspective scale stays positive for every pseudo-depth.
    assert!(HELIX_PERSPECTIVE_DIVISOR > HELIX_STRAND_RADIUS);
    assert!(HELIX_HEIGHT > 0.0);
    assert!(HELIX_ROTATION_STEP_DEG > 0.0);
}

#[test]
fn control_defaults_match_their_constants() {
    let defaults = Controls::default();
    assert_eq!(defaults.gravity_intensity, DEFAULT_GRAVITY_INTENSITY);
    assert_eq!(defaults.ring_speed, DEFAULT_RING_SPEED);
    assert!(defaults.show_helix && defaults.show_stars && defaults.show_labels);
    assert!(!defaults.muted);
}
