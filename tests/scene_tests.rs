// Host-side tests for the pure scene math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}

use constants::*;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene::*;

fn make_scene() -> Scene {
    let mut rng = StdRng::seed_from_u64(42);
    Scene::new(800.0, 600.0, &mut rng)
}

#[test]
fn star_alpha_stays_in_flicker_band() {
    let mut phase = -50.0;
    while phase < 50.0 {
        let a = star_alpha(phase);
        assert!(
            a >= STAR_ALPHA_BASE - STAR_ALPHA_SPAN - 1e-9 && a <= STAR_ALPHA_BASE + STAR_ALPHA_SPAN + 1e-9,
            "alpha {a} out of band at phase {phase}"
        );
        phase += 0.37;
    }
}

#[test]
fn star_population_matches_spawn_contract() {
    let scene = make_scene();
    assert_eq!(scene.stars.len(), STAR_COUNT);
    for star in &scene.stars {
        assert!(star.pos.x.abs() <= 800.0 * STAR_FIELD_EXTENT / 2.0);
        assert!(star.pos.y.abs() <= 600.0 * STAR_FIELD_EXTENT / 2.0);
        assert!(star.size >= STAR_SIZE_MIN && star.size < STAR_SIZE_MIN + STAR_SIZE_SPAN);
        assert!(star.depth >= STAR_DEPTH_MIN && star.depth < STAR_DEPTH_MIN + STAR_DEPTH_SPAN);
        assert!((star.alpha - star_alpha(star.phase)).abs() < 1e-12);
    }
}

#[test]
fn advance_moves_accumulators_and_flicker() {
    let mut scene = make_scene();
    let phases: Vec<f64> = scene.stars.iter().map(|s| s.phase).collect();
    scene.advance(0.25);
    scene.advance(0.25);
    assert!((scene.accretion_angle - 0.5).abs() < 1e-12);
    assert!((scene.helix_rotation - 2.0 * HELIX_ROTATION_STEP_DEG).abs() < 1e-12);
    for (star, before) in scene.stars.iter().zip(&phases) {
        assert!((star.phase - (before + 2.0 * STAR_FLICKER_STEP)).abs() < 1e-12);
        assert!((star.alpha - star_alpha(star.phase)).abs() < 1e-12);
    }
}

#[test]
fn advance_does_not_regenerate_stars() {
    let mut scene = make_scene();
    let before: Vec<(DVec2, f64, f64)> = scene
        .stars
        .iter()
        .map(|s| (s.pos, s.size, s.depth))
        .collect();
    for _ in 0..100 {
        scene.advance(0.01);
    }
    for (star, (pos, size, depth)) in scene.stars.iter().zip(&before) {
        assert_eq!(star.pos, *pos);
        assert_eq!(star.size, *size);
        assert_eq!(star.depth, *depth);
    }
}

#[test]
fn horizon_radius_is_monotonic_in_gravity() {
    let mut prev = horizon_radius(0.0);
    for g in 1..=200 {
        let r = horizon_radius(g as f64);
        assert!(r >= prev, "radius shrank at gravity {g}");
        prev = r;
    }
    assert!((horizon_radius(50.0) - 75.0).abs() < 1e-12);
}

#[test]
fn parallax_attenuates_offset_by_depth() {
    let near = Star {
        pos: DVec2::ZERO,
        size: 1.0,
        depth: 1.0,
        phase: 0.0,
        alpha: 1.0,
    };
    let far = Star { depth: 0.5, ..near };
    let center = DVec2::new(400.0, 300.0);
    let offset = DVec2::new(100.0, -40.0);

    let near_pos = star_screen_position(&near, center, offset, 1.0);
    let far_pos = star_screen_position(&far, center, offset, 1.0);
    assert_eq!(near_pos - center, offset);
    assert_eq!(far_pos - center, offset * 0.5);
}

#[test]
fn zoom_scales_star_position_and_size_uniformly() {
    let star = Star {
        pos: DVec2::new(10.0, -20.0),
        size: 2.0,
        depth: 0.8,
        phase: 0.0,
        alpha: 1.0,
    };
    let center = DVec2::ZERO;

    let at_rest = star_screen_position(&star, center, DVec2::ZERO, 1.0);
    let zoomed = star_screen_position(&star, center, DVec2::ZERO, 2.0);
    assert_eq!(zoomed, at_rest * 2.0);
    assert!((star_screen_size(&star, 2.0) - 2.0 * star_screen_size(&star, 1.0)).abs() < 1e-12);
    assert!((star_screen_size(&star, 1.0) - 2.0 * 0.8).abs() < 1e-12);
}

#[test]
fn helix_layout_covers_a_full_turn() {
    let nodes: Vec<HelixNode> = helix_nodes(0.0).collect();
    assert_eq!(nodes.len(), 360 / HELIX_STEP_DEG + 1);

    let crossbars = nodes.iter().filter(|n| n.crossbar).count();
    assert_eq!(crossbars, 360 / HELIX_CROSSBAR_EVERY_DEG + 1);

    // Vertical positions are linear in the step and centered on zero.
    assert!((nodes.first().unwrap().y + HELIX_HEIGHT / 2.0).abs() < 1e-12);
    assert!((nodes.last().unwrap().y - HELIX_HEIGHT / 2.0).abs() < 1e-12);
    for pair in nodes.windows(2) {
        let dy = pair[1].y - pair[0].y;
        assert!((dy - HELIX_HEIGHT * HELIX_STEP_DEG as f64 / 360.0).abs() < 1e-12);
    }
}

#[test]
fn helix_perspective_only_scales_the_strand_offset() {
    let max_scale = 1.0 + HELIX_STRAND_RADIUS / HELIX_PERSPECTIVE_DIVISOR;
    for node in helix_nodes(33.0) {
        assert!(node.x_offset.abs() <= HELIX_STRAND_RADIUS * max_scale + 1e-9);
    }

    // At rotation 0 the first node sits on the strand circle itself
    // (no pseudo-depth, scale 1).
    let first = helix_nodes(0.0).next().unwrap();
    assert!((first.x_offset - HELIX_STRAND_RADIUS).abs() < 1e-12);

    // A quarter turn later the strand crosses the axis.
    let quarter = helix_nodes(0.0).nth(90 / HELIX_STEP_DEG).unwrap();
    assert!(quarter.x_offset.abs() < 1e-9);
}

#[test]
fn helix_rotation_shifts_the_pattern() {
    let base: Vec<f64> = helix_nodes(0.0).map(|n| n.x_offset).collect();
    let shifted: Vec<f64> = helix_nodes(HELIX_STEP_DEG as f64).map(|n| n.x_offset).collect();
    // Rotating by exactly one step reproduces the neighbor's offset.
    for i in 0..base.len() - 1 {
        assert!((shifted[i] - base[i + 1]).abs() < 1e-9);
    }
}
