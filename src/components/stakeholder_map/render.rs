//! Canvas drawing for the stakeholder map.
//!
//! Per-frame passes, back to front: background, guide geometry (concentric
//! rings or Cartesian grid), markers with optional labels, hover tooltip.
//! Positions come from [`MapState::to_screen`]; marker sizes, line widths and
//! fonts are screen-space and do not scale with zoom.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::layout;
use super::palette;
use super::state::MapState;
use super::types::{format_value, MapLayout, MapOptions};

const BACKGROUND: &str = "#ffffff";
const GUIDE_COLOR: &str = "#d3d3d3";
const GUIDE_TEXT_COLOR: &str = "#808080";
const LABEL_COLOR: &str = "#333333";
const LABEL_FONT: &str = "11px sans-serif";
const TOOLTIP_FONT: &str = "12px sans-serif";
const TOOLTIP_TITLE_FONT: &str = "bold 12px sans-serif";

/// Renders the complete chart to the canvas.
pub fn render(state: &MapState, ctx: &CanvasRenderingContext2d, options: &MapOptions) {
	draw_background(state, ctx);

	match state.layout {
		MapLayout::Polar => draw_rings(state, ctx, options),
		MapLayout::Cartesian => draw_grid(state, ctx),
	}

	draw_markers(state, ctx, options);

	if let Some(index) = state.hovered {
		draw_tooltip(state, ctx, index);
	}
}

fn draw_background(state: &MapState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

/// Concentric guide rings at the configured spacing, each annotated with its
/// radius just outside the ring on the +x axis. Radius 0 is unlabeled.
fn draw_rings(state: &MapState, ctx: &CanvasRenderingContext2d, options: &MapOptions) {
	let (ox, oy) = state.to_screen(0.0, 0.0);
	let (unit, _) = state.unit_scale();

	ctx.set_stroke_style_str(GUIDE_COLOR);
	ctx.set_line_width(1.0);

	for radius in layout::ring_radii(options.ring_step) {
		// Radius 0 is a degenerate ring; nothing to draw or label.
		if radius == 0.0 {
			continue;
		}

		ctx.begin_path();
		let _ = ctx.arc(ox, oy, radius * unit, 0.0, PI * 2.0);
		ctx.stroke();

		let (tx, ty) = state.to_screen(radius, 0.0);
		ctx.set_fill_style_str(GUIDE_TEXT_COLOR);
		ctx.set_font("10px sans-serif");
		ctx.set_text_align("left");
		let _ = ctx.fill_text(&format_value(radius), tx + 3.0, ty - 3.0);
	}
}

/// Unit grid with tick labels and axis titles for the Cartesian layout.
fn draw_grid(state: &MapState, ctx: &CanvasRenderingContext2d) {
	let viewport = state.viewport;

	ctx.set_stroke_style_str(GUIDE_COLOR);
	ctx.set_line_width(1.0);
	ctx.set_fill_style_str(GUIDE_TEXT_COLOR);
	ctx.set_font("10px sans-serif");

	// Vertical lines and x tick labels: distance 0..=10.
	ctx.set_text_align("center");
	for x in 0..=layout::MAX_RADIUS as i32 {
		let x = f64::from(x);
		let (sx, sy_top) = state.to_screen(x, viewport.y_max);
		let (_, sy_bottom) = state.to_screen(x, viewport.y_min);
		ctx.begin_path();
		ctx.move_to(sx, sy_top);
		ctx.line_to(sx, sy_bottom);
		ctx.stroke();
		let _ = ctx.fill_text(&format_value(x), sx, sy_bottom - 4.0);
	}

	// Horizontal lines and y tick labels: importance 1..=10.
	ctx.set_text_align("left");
	for y in layout::IMPORTANCE_MIN as i32..=layout::MAX_RADIUS as i32 {
		let y = f64::from(y);
		let (sx_left, sy) = state.to_screen(viewport.x_min, y);
		let (sx_right, _) = state.to_screen(viewport.x_max, y);
		ctx.begin_path();
		ctx.move_to(sx_left, sy);
		ctx.line_to(sx_right, sy);
		ctx.stroke();
		let _ = ctx.fill_text(&format_value(y), sx_left + 4.0, sy - 3.0);
	}

	// Axis titles.
	ctx.set_fill_style_str(LABEL_COLOR);
	ctx.set_font(LABEL_FONT);
	ctx.set_text_align("center");
	let _ = ctx.fill_text("Distancia (0-10)", state.width / 2.0, state.height - 6.0);
	ctx.save();
	let _ = ctx.translate(12.0, state.height / 2.0);
	let _ = ctx.rotate(-PI / 2.0);
	let _ = ctx.fill_text("Importancia (1-10)", 0.0, 0.0);
	ctx.restore();
}

fn draw_markers(state: &MapState, ctx: &CanvasRenderingContext2d, options: &MapOptions) {
	for (index, marker) in state.markers.iter().enumerate() {
		let (x, y) = state.to_screen(marker.x, marker.y);
		let radius = layout::marker_diameter(marker.record.importance, options.size_scale) / 2.0;

		// The polar variant colors by category, the Cartesian one by tier.
		let color = match state.layout {
			MapLayout::Polar => marker.record.color,
			MapLayout::Cartesian => palette::level_color(marker.record.category_level),
		};

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&color.to_css());
		ctx.fill();
		ctx.set_stroke_style_str("#ffffff");
		ctx.set_line_width(1.0);
		ctx.stroke();

		if state.hovered == Some(index) {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 2.0, 0.0, PI * 2.0);
			ctx.set_stroke_style_str("rgba(0, 0, 0, 0.4)");
			ctx.set_line_width(1.5);
			ctx.stroke();
		}

		if options.show_labels {
			ctx.set_fill_style_str(LABEL_COLOR);
			ctx.set_font(LABEL_FONT);
			ctx.set_text_align("center");
			let _ = ctx.fill_text(&marker.record.group_name, x, y - radius - 4.0);
		}
	}
}

/// Hover tooltip listing all five descriptive fields of a row, kept inside the
/// canvas bounds.
fn draw_tooltip(state: &MapState, ctx: &CanvasRenderingContext2d, index: usize) {
	let Some(marker) = state.markers.get(index) else {
		return;
	};
	let record = &marker.record;

	let lines = [
		record.group_name.clone(),
		format!("Categoría: {}", record.category),
		format!("Importancia: {}", format_value(record.importance)),
		format!("Distancia: {}", format_value(record.distance)),
		format!("Nivel de categoría: {}", format_value(record.category_level)),
	];

	ctx.set_font(TOOLTIP_TITLE_FONT);
	let mut text_width: f64 = 0.0;
	for (i, line) in lines.iter().enumerate() {
		if i == 1 {
			ctx.set_font(TOOLTIP_FONT);
		}
		if let Ok(metrics) = ctx.measure_text(line) {
			text_width = text_width.max(metrics.width());
		}
	}

	const LINE_HEIGHT: f64 = 16.0;
	const PADDING: f64 = 8.0;
	let box_width = text_width + PADDING * 2.0;
	let box_height = lines.len() as f64 * LINE_HEIGHT + PADDING * 2.0 - 4.0;

	let (mx, my) = state.to_screen(marker.x, marker.y);
	let mut x = mx + 14.0;
	let mut y = my + 14.0;
	if x + box_width > state.width {
		x = mx - box_width - 14.0;
	}
	if y + box_height > state.height {
		y = my - box_height - 14.0;
	}

	ctx.set_fill_style_str("rgba(255, 255, 255, 0.95)");
	ctx.fill_rect(x, y, box_width, box_height);
	ctx.set_stroke_style_str("#999999");
	ctx.set_line_width(1.0);
	ctx.stroke_rect(x, y, box_width, box_height);

	ctx.set_fill_style_str("#222222");
	ctx.set_text_align("left");
	for (i, line) in lines.iter().enumerate() {
		ctx.set_font(if i == 0 { TOOLTIP_TITLE_FONT } else { TOOLTIP_FONT });
		let _ = ctx.fill_text(line, x + PADDING, y + PADDING + 10.0 + i as f64 * LINE_HEIGHT);
	}
}
