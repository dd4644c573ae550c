use std::collections::HashMap;
use std::f64::consts::PI;

use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::state::{MapState, hub_extent, leaf_extent};
use super::types::Shape;

const BACKGROUND: &str = "#030712";
const ACCENT: &str = "#0066ff";
const ACCENT_BRIGHT: &str = "#00f7ff";

const CENTER_LOGO_KEY: &str = "__center__";

/// Logo images keyed by node id. Elements start loading when the cache is
/// built; a logo that hasn't finished (or failed) simply isn't drawn and
/// the marker falls back to a tinted shape.
pub struct LogoCache {
	images: HashMap<String, HtmlImageElement>,
}

impl LogoCache {
	pub fn new(map: &super::types::EcosystemMap) -> Self {
		let mut images = HashMap::new();
		insert_logo(&mut images, CENTER_LOGO_KEY.into(), "/logos/nano.png");
		for node in &map.nodes {
			insert_logo(&mut images, node.id.clone(), &node.logo);
		}
		Self { images }
	}

	fn ready(&self, key: &str) -> Option<&HtmlImageElement> {
		self.images
			.get(key)
			.filter(|img| img.complete() && img.natural_width() > 0)
	}
}

fn insert_logo(images: &mut HashMap<String, HtmlImageElement>, key: String, src: &str) {
	if let Ok(img) = HtmlImageElement::new() {
		img.set_src(src);
		images.insert(key, img);
	}
}

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
	a + (b - a) * t
}

fn text_color_for(marker_color: &str) -> &'static str {
	if marker_color.eq_ignore_ascii_case("#ffffff") {
		"#000000"
	} else {
		"#ffffff"
	}
}

pub fn render(state: &MapState, logos: &LogoCache, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	ctx.save();
	let k = state.scale();
	let _ = ctx.translate(
		state.width * 0.5 + state.transform.pan_x,
		state.height * 0.5 + state.transform.pan_y,
	);
	let _ = ctx.scale(k, k);
	let half = state.side() * 0.5;
	let _ = ctx.translate(-half, -half);

	draw_center_glow(state, ctx);
	draw_peer_links(state, ctx);
	draw_leaf_links(state, ctx);
	draw_spokes(state, ctx);
	draw_leaves(state, logos, ctx);
	draw_hubs(state, ctx);
	draw_center(state, logos, ctx);
	ctx.restore();
}

/// Quadratic bow between two points, control point 30% along the
/// displacement.
fn stroke_connector(ctx: &CanvasRenderingContext2d, x1: f64, y1: f64, x2: f64, y2: f64) {
	let cpx = x1 + (x2 - x1) * 0.3;
	let cpy = y1 + (y2 - y1) * 0.3;
	ctx.begin_path();
	ctx.move_to(x1, y1);
	ctx.quadratic_curve_to(cpx, cpy, x2, y2);
	ctx.stroke();
}

fn draw_center_glow(state: &MapState, ctx: &CanvasRenderingContext2d) {
	let c = state.side() * 0.5;
	let r = state.side() * 1.2;
	let gradient = ctx
		.create_radial_gradient(c, c, 0.0, c, c, r)
		.unwrap();
	gradient.add_color_stop(0.0, "rgba(0, 102, 255, 0.15)").unwrap();
	gradient.add_color_stop(0.7, "rgba(0, 102, 255, 0.05)").unwrap();
	gradient.add_color_stop(1.0, "rgba(0, 0, 0, 0.0)").unwrap();
	ctx.begin_path();
	let _ = ctx.arc(c, c, r, 0.0, 2.0 * PI);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
}

/// Curves between consecutive leaves of the same category, closing the
/// loop around the hub.
fn draw_peer_links(state: &MapState, ctx: &CanvasRenderingContext2d) {
	let side = state.side();
	let t = ease_out_cubic(state.hover.highlight_t);
	for category in &state.map.categories {
		if state.map.hub(&category.id).is_none() {
			continue;
		}
		let nodes: Vec<_> = state.map.nodes_of(&category.id).collect();
		if nodes.len() < 2 {
			continue;
		}
		ctx.set_stroke_style_str(&category.color);
		for (i, node) in nodes.iter().enumerate() {
			let next = nodes[(i + 1) % nodes.len()];
			let lit = state.is_leaf_highlighted(node) || state.is_leaf_highlighted(next);
			let f = if lit { t } else { 0.0 };
			ctx.set_global_alpha(lerp(0.3, 0.9, f));
			ctx.set_line_width(lerp(1.5, 3.0, f));
			stroke_connector(ctx, node.x * side, node.y * side, next.x * side, next.y * side);
		}
	}
	ctx.set_global_alpha(1.0);
}

fn draw_leaf_links(state: &MapState, ctx: &CanvasRenderingContext2d) {
	let side = state.side();
	let t = ease_out_cubic(state.hover.highlight_t);
	for node in &state.map.nodes {
		let (Some(category), Some(hub)) = (
			state.map.category(&node.category_id),
			state.map.hub(&node.category_id),
		) else {
			continue;
		};
		let f = if state.is_leaf_highlighted(node) { t } else { 0.0 };
		ctx.set_stroke_style_str(&category.color);
		ctx.set_global_alpha(lerp(0.5, 0.9, f));
		ctx.set_line_width(lerp(2.0, 3.0, f));
		stroke_connector(ctx, hub.x * side, hub.y * side, node.x * side, node.y * side);
	}
	ctx.set_global_alpha(1.0);
}

fn draw_spokes(state: &MapState, ctx: &CanvasRenderingContext2d) {
	let side = state.side();
	let c = side * 0.5;
	let t = ease_out_cubic(state.hover.highlight_t);
	for hub in &state.map.hubs {
		let Some(category) = state.map.category(&hub.category_id) else {
			continue;
		};
		let f = if state.is_hub_highlighted(&hub.category_id) { t } else { 0.0 };
		ctx.set_stroke_style_str(&category.color);
		ctx.set_global_alpha(lerp(0.7, 0.9, f));
		ctx.set_line_width(lerp(3.0, 4.0, f));
		stroke_connector(ctx, c, c, hub.x * side, hub.y * side);
	}
	ctx.set_global_alpha(1.0);
}

fn draw_leaves(state: &MapState, logos: &LogoCache, ctx: &CanvasRenderingContext2d) {
	let side = state.side();
	let compact = state.is_compact();
	let t = ease_out_cubic(state.hover.highlight_t);
	for (i, node) in state.map.nodes.iter().enumerate() {
		let Some(category) = state.map.category(&node.category_id) else {
			continue;
		};
		if state.map.hub(&node.category_id).is_none() {
			continue;
		}
		let (w, h) = leaf_extent(node.shape, compact);
		let (x, y) = (node.x * side, node.y * side);

		// breathing accent behind the marker, desynced per leaf
		let phase = state.pulse_t * 2.0 + i as f64 * 0.7;
		let pulse = 0.2 + 0.15 * (0.5 + 0.5 * phase.sin());
		ctx.set_fill_style_str(ACCENT);
		ctx.set_global_alpha(pulse);
		match node.shape {
			Shape::Circle => {
				ctx.begin_path();
				let _ = ctx.arc(x, y, w * 0.5 + 4.0, 0.0, 2.0 * PI);
				ctx.fill();
			}
			Shape::Rectangle => {
				rounded_rect_path(ctx, x - w * 0.5 - 5.0, y - h * 0.5 - 5.0, w + 10.0, h + 10.0, 4.0);
				ctx.fill();
			}
		}
		ctx.set_global_alpha(1.0);

		if let Some(img) = logos.ready(&node.id) {
			ctx.save();
			marker_path(ctx, node.shape, x, y, w, h);
			ctx.clip();
			let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
				img,
				x - w * 0.5,
				y - h * 0.5,
				w,
				h,
			);
			ctx.restore();
		} else {
			// logo missing or still loading
			marker_path(ctx, node.shape, x, y, w, h);
			ctx.set_fill_style_str(&category.color);
			ctx.set_global_alpha(0.2);
			ctx.fill();
			ctx.set_global_alpha(1.0);
			ctx.set_fill_style_str("#ffffff");
			ctx.set_font("11px sans-serif");
			ctx.set_text_align("center");
			ctx.set_text_baseline("middle");
			let _ = ctx.fill_text(&node.name, x, y);
		}

		if state.is_leaf_highlighted(node) && t > 0.01 {
			marker_path(ctx, node.shape, x, y, w, h);
			ctx.set_stroke_style_str("#ffffff");
			ctx.set_global_alpha(0.7 * t);
			ctx.set_line_width(2.0);
			ctx.stroke();
			ctx.set_global_alpha(1.0);
		}

		let named = state.hover.leaf.as_deref() == Some(node.id.as_str())
			|| state.hover.prev_leaf.as_deref() == Some(node.id.as_str());
		if named && t > 0.01 {
			ctx.set_text_align("center");
			ctx.set_text_baseline("middle");
			ctx.set_fill_style_str("#ffffff");
			ctx.set_global_alpha(0.9 * t);
			ctx.set_font("bold 13px sans-serif");
			let _ = ctx.fill_text(&node.name, x, y + h * 0.5 + 16.0);
			if !node.description.is_empty() {
				ctx.set_global_alpha(0.7 * t);
				ctx.set_font("11px sans-serif");
				let _ = ctx.fill_text(&node.description, x, y + h * 0.5 + 32.0);
			}
			ctx.set_global_alpha(1.0);
		}
	}
}

fn draw_hubs(state: &MapState, ctx: &CanvasRenderingContext2d) {
	let side = state.side();
	let compact = state.is_compact();
	let t = ease_out_cubic(state.hover.highlight_t);
	let (w, h) = hub_extent(compact);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	for hub in &state.map.hubs {
		let Some(category) = state.map.category(&hub.category_id) else {
			continue;
		};
		let (x, y) = (hub.x * side, hub.y * side);
		let lit = state.is_hub_highlighted(&hub.category_id);

		if lit && t > 0.01 {
			rounded_rect_path(ctx, x - w * 0.5 - 10.0, y - h * 0.5 - 10.0, w + 20.0, h + 20.0, 10.0);
			ctx.set_fill_style_str(&category.color);
			ctx.set_global_alpha(0.25 * t);
			ctx.fill();
			ctx.set_global_alpha(1.0);
		}

		rounded_rect_path(ctx, x - w * 0.5, y - h * 0.5, w, h, 6.0);
		ctx.set_fill_style_str(&category.color);
		ctx.fill();

		ctx.set_fill_style_str(text_color_for(&category.color));
		let size = if compact { 18.0 } else { 30.0 };
		ctx.set_font(&format!("bold {size}px sans-serif"));
		let _ = ctx.fill_text(&category.name, x, y);
	}
}

fn draw_center(state: &MapState, logos: &LogoCache, ctx: &CanvasRenderingContext2d) {
	let c = state.side() * 0.5;
	let r = if state.is_compact() { 40.0 } else { 60.0 };

	let gradient = ctx.create_linear_gradient(c - r, c - r, c + r, c + r);
	gradient.add_color_stop(0.0, ACCENT).unwrap();
	gradient.add_color_stop(1.0, ACCENT_BRIGHT).unwrap();

	ctx.begin_path();
	let _ = ctx.arc(c, c, r, 0.0, 2.0 * PI);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.set_global_alpha(0.33);
	ctx.fill();

	// slow breathing ring around the emblem
	let pulse = 0.2 + 0.2 * (0.5 + 0.5 * (state.pulse_t * 2.0 * PI / 3.0).sin());
	ctx.begin_path();
	let _ = ctx.arc(c, c, r * 1.15, 0.0, 2.0 * PI);
	ctx.set_global_alpha(pulse);
	ctx.fill();
	ctx.set_global_alpha(1.0);

	if let Some(img) = logos.ready(CENTER_LOGO_KEY) {
		let e = r * 2.0;
		let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
			img,
			c - e * 0.5,
			c - e * 0.5,
			e,
			e,
		);
	}
}

fn marker_path(ctx: &CanvasRenderingContext2d, shape: Shape, x: f64, y: f64, w: f64, h: f64) {
	match shape {
		Shape::Circle => {
			ctx.begin_path();
			let _ = ctx.arc(x, y, w * 0.5, 0.0, 2.0 * PI);
		}
		Shape::Rectangle => {
			rounded_rect_path(ctx, x - w * 0.5, y - h * 0.5, w, h, 4.0);
		}
	}
}

fn rounded_rect_path(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
	let r = r.min(w * 0.5).min(h * 0.5);
	ctx.begin_path();
	ctx.move_to(x + r, y);
	let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
	let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
	let _ = ctx.arc_to(x, y + h, x, y, r);
	let _ = ctx.arc_to(x, y, x + w, y, r);
	ctx.close_path();
}
