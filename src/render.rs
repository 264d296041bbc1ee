use crate::constants::*;
use crate::core::constants::{
    ACCRETION_RADIUS_OFFSET, ACCRETION_STRETCH_X, HELIX_OFFSET_X, HORIZON_RIM_OFFSET,
};
use crate::core::scene::{self, Scene};
use crate::core::{Camera, Controls};
use glam::DVec2;
use std::f64::consts::PI;
use wasm_bindgen::JsValue;
use web_sys as web;

const LABELS: [&str; 3] = ["General Relativity", "Newtonian Limit", "Thermodynamics"];

/// Redraw the whole scene back-to-front: screen-space starfield first, then
/// the camera-transformed content (horizon, accretion arcs, helix, labels).
pub fn draw_scene(
    ctx: &web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
    scene: &Scene,
    camera: &Camera,
    controls: &Controls,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, width, height);
    let center = DVec2::new(width / 2.0, height / 2.0);

    // Stars render before the camera transform; their parallax comes from
    // the depth-attenuated offset in the projection helper instead.
    if controls.show_stars {
        draw_starfield(ctx, scene, center, camera)?;
    }

    ctx.save();
    ctx.set_transform(
        camera.zoom,
        0.0,
        0.0,
        camera.zoom,
        center.x + camera.offset.x,
        center.y + camera.offset.y,
    )?;

    let radius = scene::horizon_radius(controls.gravity_intensity);
    draw_horizon(ctx, radius)?;
    draw_accretion_arcs(ctx, radius, scene.accretion_angle)?;
    if controls.show_helix {
        draw_helix(ctx, scene.helix_rotation)?;
    }
    if controls.show_labels {
        draw_labels(ctx, radius)?;
    }

    ctx.restore();
    Ok(())
}

fn draw_starfield(
    ctx: &web::CanvasRenderingContext2d,
    scene: &Scene,
    center: DVec2,
    camera: &Camera,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(STAR_FILL);
    for star in &scene.stars {
        let pos = scene::star_screen_position(star, center, camera.offset, camera.zoom);
        let size = scene::star_screen_size(star, camera.zoom);
        ctx.set_global_alpha(star.alpha);
        ctx.begin_path();
        ctx.arc(pos.x, pos.y, size, 0.0, PI * 2.0)?;
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);
    Ok(())
}

fn draw_horizon(ctx: &web::CanvasRenderingContext2d, radius: f64) -> Result<(), JsValue> {
    let grad = ctx.create_radial_gradient(
        0.0,
        0.0,
        radius * HORIZON_GRADIENT_INNER_RATIO,
        0.0,
        0.0,
        radius,
    )?;
    grad.add_color_stop(0.0, HORIZON_CORE_COLOR)?;
    grad.add_color_stop(1.0, HORIZON_EDGE_COLOR)?;
    ctx.set_fill_style_canvas_gradient(&grad);
    ctx.begin_path();
    ctx.arc(0.0, 0.0, radius, 0.0, PI * 2.0)?;
    ctx.fill();

    // Faint rim just outside the disc.
    ctx.set_stroke_style_str(HORIZON_RIM_COLOR);
    ctx.set_line_width(HORIZON_RIM_LINE_WIDTH);
    ctx.begin_path();
    ctx.arc(0.0, 0.0, radius + HORIZON_RIM_OFFSET, 0.0, PI * 2.0)?;
    ctx.stroke();
    Ok(())
}

/// Two counter-phased half-circle strokes, stretched horizontally, reading
/// as a double-lobed rotating ring.
fn draw_accretion_arcs(
    ctx: &web::CanvasRenderingContext2d,
    radius: f64,
    angle: f64,
) -> Result<(), JsValue> {
    ctx.set_line_width(ACCRETION_LINE_WIDTH);
    for (rotation, color) in [
        (angle, ACCRETION_PRIMARY_COLOR),
        (angle + PI, ACCRETION_SECONDARY_COLOR),
    ] {
        ctx.save();
        ctx.rotate(rotation)?;
        ctx.scale(ACCRETION_STRETCH_X, 1.0)?;
        ctx.set_stroke_style_str(color);
        ctx.begin_path();
        ctx.arc(0.0, 0.0, radius + ACCRETION_RADIUS_OFFSET, 0.0, PI)?;
        ctx.stroke();
        ctx.restore();
    }
    Ok(())
}

fn draw_helix(ctx: &web::CanvasRenderingContext2d, rotation_deg: f64) -> Result<(), JsValue> {
    ctx.save();
    ctx.translate(HELIX_OFFSET_X, 0.0)?;
    ctx.set_fill_style_str(HELIX_COLOR);
    ctx.set_stroke_style_str(HELIX_COLOR);
    for node in scene::helix_nodes(rotation_deg) {
        for x in [node.x_offset, -node.x_offset] {
            ctx.begin_path();
            ctx.arc(x, node.y, HELIX_DOT_RADIUS, 0.0, PI * 2.0)?;
            ctx.fill();
        }
        if node.crossbar {
            ctx.set_line_width(HELIX_CROSSBAR_LINE_WIDTH);
            ctx.begin_path();
            ctx.move_to(node.x_offset, node.y);
            ctx.line_to(-node.x_offset, node.y);
            ctx.stroke();
        }
    }
    ctx.restore();
    Ok(())
}

fn draw_labels(ctx: &web::CanvasRenderingContext2d, radius: f64) -> Result<(), JsValue> {
    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_font(LABEL_FONT);
    ctx.fill_text(LABELS[0], -radius - 150.0, -radius - 20.0)?;
    ctx.fill_text(LABELS[1], radius + 30.0, radius + 30.0)?;
    ctx.fill_text(LABELS[2], -radius - 150.0, radius + 30.0)?;
    Ok(())
}
