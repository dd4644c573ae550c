use super::types::{CategoryHub, EcosystemMap, ServiceNode, Shape};

pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 5.0;
pub const ZOOM_STEP: f64 = 0.2;
pub const ZOOM_DEFAULT: f64 = 2.0;

/// The default zoom of 2.0 shows the unit square roughly 1:1, so rendering
/// applies half the zoom as the actual scale factor.
pub const BASE_SCALE: f64 = 0.5;

/// Below this container width the compact marker/text presets apply.
pub const COMPACT_BREAKPOINT: f64 = 768.0;

/// Hub marker extent in world pixels.
pub fn hub_extent(compact: bool) -> (f64, f64) {
	if compact { (140.0, 40.0) } else { (240.0, 80.0) }
}

/// Leaf marker extent in world pixels.
pub fn leaf_extent(shape: Shape, compact: bool) -> (f64, f64) {
	match shape {
		Shape::Rectangle => {
			if compact {
				(120.0, 48.0)
			} else {
				(156.0, 64.0)
			}
		}
		Shape::Circle => {
			if compact {
				(60.0, 60.0)
			} else {
				(80.0, 80.0)
			}
		}
	}
}

#[derive(Clone, Debug)]
pub struct ViewTransform {
	pub pan_x: f64,
	pub pan_y: f64,
	pub zoom: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			pan_x: 0.0,
			pan_y: 0.0,
			zoom: ZOOM_DEFAULT,
		}
	}
}

/// Single active gesture. A press only becomes a drag once the pointer
/// moves, so a plain click never arms drag-suppression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
	Idle,
	Pressed { x: f64, y: f64 },
	Dragging { last_x: f64, last_y: f64 },
	Pinching { last_distance: f64 },
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub hub: Option<String>,
	pub leaf: Option<String>,
	pub prev_hub: Option<String>,
	pub prev_leaf: Option<String>,
	pub highlight_t: f64,
}

/// Transient view state owned by the viewport: transform, gesture, hover
/// and container dimensions, plus the immutable positioned dataset it
/// renders. All transitions take plain numbers so the gesture logic tests
/// without a DOM.
pub struct MapState {
	pub map: EcosystemMap,
	pub transform: ViewTransform,
	pub gesture: Gesture,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub pulse_t: f64,
	suppress_click: bool,
}

impl MapState {
	pub fn new(map: EcosystemMap, width: f64, height: f64) -> Self {
		Self {
			map,
			transform: ViewTransform::default(),
			gesture: Gesture::Idle,
			hover: HoverState::default(),
			width,
			height,
			pulse_t: 0.0,
			suppress_click: false,
		}
	}

	/// Side of the square the normalized coordinates project onto.
	pub fn side(&self) -> f64 {
		self.width.min(self.height)
	}

	pub fn scale(&self) -> f64 {
		self.transform.zoom * BASE_SCALE
	}

	pub fn is_compact(&self) -> bool {
		self.width < COMPACT_BREAKPOINT
	}

	pub fn is_dragging(&self) -> bool {
		matches!(self.gesture, Gesture::Dragging { .. })
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	// --- zoom ---

	pub fn zoom_in(&mut self) {
		self.set_zoom(self.transform.zoom + ZOOM_STEP);
	}

	pub fn zoom_out(&mut self) {
		self.set_zoom(self.transform.zoom - ZOOM_STEP);
	}

	fn set_zoom(&mut self, zoom: f64) {
		self.transform.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
	}

	/// Wheel-up zooms in, wheel-down zooms out.
	pub fn wheel(&mut self, delta_y: f64) {
		if delta_y < 0.0 {
			self.zoom_in();
		} else {
			self.zoom_out();
		}
	}

	// --- pan / drag ---

	pub fn pointer_down(&mut self, x: f64, y: f64) {
		self.suppress_click = false;
		self.gesture = Gesture::Pressed { x, y };
	}

	pub fn pointer_move(&mut self, x: f64, y: f64) {
		match self.gesture {
			Gesture::Pressed { x: sx, y: sy } => {
				self.transform.pan_x += x - sx;
				self.transform.pan_y += y - sy;
				self.gesture = Gesture::Dragging { last_x: x, last_y: y };
			}
			Gesture::Dragging { last_x, last_y } => {
				self.transform.pan_x += x - last_x;
				self.transform.pan_y += y - last_y;
				self.gesture = Gesture::Dragging { last_x: x, last_y: y };
			}
			_ => {}
		}
	}

	/// Ends a press or drag. Ending a drag arms a one-shot flag that
	/// swallows the click the browser fires right after.
	pub fn pointer_up(&mut self) {
		if self.is_dragging() {
			self.suppress_click = true;
		}
		self.gesture = Gesture::Idle;
	}

	pub fn take_click_suppression(&mut self) -> bool {
		std::mem::take(&mut self.suppress_click)
	}

	pub fn reset_pan(&mut self) {
		self.transform.pan_x = 0.0;
		self.transform.pan_y = 0.0;
	}

	// --- touch ---

	pub fn touch_start(&mut self, points: &[(f64, f64)]) {
		match points {
			[] => {}
			[(x, y)] => self.pointer_down(*x, *y),
			[a, b, ..] => {
				self.gesture = Gesture::Pinching {
					last_distance: distance(*a, *b),
				};
			}
		}
	}

	pub fn touch_move(&mut self, points: &[(f64, f64)]) {
		match (self.gesture, points) {
			(Gesture::Pinching { last_distance }, [a, b, ..]) => {
				let current = distance(*a, *b);
				if last_distance > 0.0 && current > 0.0 {
					// Ratio against the previously tracked distance, not the
					// initial one: each move contributes its own increment.
					self.set_zoom(self.transform.zoom * current / last_distance);
				}
				self.gesture = Gesture::Pinching { last_distance: current };
			}
			(Gesture::Pressed { .. } | Gesture::Dragging { .. }, [(x, y)]) => {
				self.pointer_move(*x, *y);
			}
			_ => {}
		}
	}

	pub fn touch_end(&mut self, remaining: usize) {
		if remaining < 2 {
			self.pointer_up();
		}
	}

	// --- hover ---

	/// No-op while dragging, so panning across markers doesn't flicker.
	pub fn set_hovered_hub(&mut self, category_id: Option<String>) {
		if self.is_dragging() || self.hover.hub == category_id {
			return;
		}
		self.hover.prev_hub = if category_id.is_none() {
			self.hover.hub.take()
		} else {
			None
		};
		self.hover.hub = category_id;
	}

	pub fn set_hovered_leaf(&mut self, node_id: Option<String>) {
		if self.is_dragging() || self.hover.leaf == node_id {
			return;
		}
		self.hover.prev_leaf = if node_id.is_none() {
			self.hover.leaf.take()
		} else {
			None
		};
		self.hover.leaf = node_id;
	}

	pub fn clear_hover(&mut self) {
		self.set_hovered_hub(None);
		self.set_hovered_leaf(None);
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.hub.is_some()
			|| self.hover.leaf.is_some()
			|| self.hover.prev_hub.is_some()
			|| self.hover.prev_leaf.is_some()
	}

	pub fn is_hub_highlighted(&self, category_id: &str) -> bool {
		self.hover.hub.as_deref() == Some(category_id)
			|| self.hover.prev_hub.as_deref() == Some(category_id)
	}

	/// A leaf lights up when hovered itself or when its whole category is.
	pub fn is_leaf_highlighted(&self, node: &ServiceNode) -> bool {
		self.hover.leaf.as_deref() == Some(node.id.as_str())
			|| self.hover.prev_leaf.as_deref() == Some(node.id.as_str())
			|| self.is_hub_highlighted(&node.category_id)
	}

	/// Advance the hover fade and the cosmetic pulse.
	pub fn tick(&mut self, dt: f64) {
		self.pulse_t += dt;
		let hovering = self.hover.hub.is_some() || self.hover.leaf.is_some();
		let (target, speed) = if hovering { (1.0, 1.8) } else { (0.0, 1.26) };
		self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt;
		if !hovering && self.hover.highlight_t < 0.01 {
			self.hover.highlight_t = 0.0;
			self.hover.prev_hub = None;
			self.hover.prev_leaf = None;
		}
	}

	// --- projection / hit-testing ---

	pub fn screen_to_world(&self, sx: f64, sy: f64) -> (f64, f64) {
		let k = self.scale();
		let half = self.side() * 0.5;
		(
			(sx - self.width * 0.5 - self.transform.pan_x) / k + half,
			(sy - self.height * 0.5 - self.transform.pan_y) / k + half,
		)
	}

	pub fn hub_at(&self, sx: f64, sy: f64) -> Option<&CategoryHub> {
		let (wx, wy) = self.screen_to_world(sx, sy);
		let side = self.side();
		let (w, h) = hub_extent(self.is_compact());
		self.map.hubs.iter().rev().find(|hub| {
			(wx - hub.x * side).abs() <= w * 0.5 && (wy - hub.y * side).abs() <= h * 0.5
		})
	}

	pub fn leaf_at(&self, sx: f64, sy: f64) -> Option<&ServiceNode> {
		let (wx, wy) = self.screen_to_world(sx, sy);
		let side = self.side();
		let compact = self.is_compact();
		self.map.nodes.iter().rev().find(|node| {
			let (w, h) = leaf_extent(node.shape, compact);
			let (dx, dy) = (wx - node.x * side, wy - node.y * side);
			match node.shape {
				Shape::Circle => (dx * dx + dy * dy).sqrt() <= w * 0.5,
				Shape::Rectangle => dx.abs() <= w * 0.5 && dy.abs() <= h * 0.5,
			}
		})
	}
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
	(a.0 - b.0).hypot(a.1 - b.1)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::ecosystem_map::types::{Category, CategoryHub, ServiceNode};

	fn state() -> MapState {
		MapState::new(EcosystemMap::default(), 800.0, 600.0)
	}

	fn one_leaf_map() -> EcosystemMap {
		EcosystemMap {
			categories: vec![Category {
				id: "wallets".into(),
				name: "Wallets".into(),
				color: "#ffffff".into(),
			}],
			hubs: vec![CategoryHub {
				category_id: "wallets".into(),
				x: 0.5,
				y: 0.5,
			}],
			nodes: vec![ServiceNode {
				id: "wallets-0".into(),
				name: "Natrium".into(),
				description: "Mobile wallet".into(),
				url: "https://natrium.io".into(),
				logo: "/logos/natrium.svg".into(),
				category_id: "wallets".into(),
				x: 0.5,
				y: 0.5,
				shape: Shape::Circle,
			}],
		}
	}

	#[test]
	fn zoom_is_always_clamped() {
		let mut s = state();
		for _ in 0..100 {
			s.zoom_in();
			assert!(s.transform.zoom <= ZOOM_MAX);
		}
		assert_eq!(s.transform.zoom, ZOOM_MAX);
		for _ in 0..100 {
			s.wheel(1.0);
			assert!(s.transform.zoom >= ZOOM_MIN);
		}
		assert_eq!(s.transform.zoom, ZOOM_MIN);
		// pinch way out, then way in
		s.touch_start(&[(0.0, 0.0), (10.0, 0.0)]);
		s.touch_move(&[(0.0, 0.0), (1000.0, 0.0)]);
		assert!(s.transform.zoom <= ZOOM_MAX);
		s.touch_move(&[(0.0, 0.0), (1.0, 0.0)]);
		assert!(s.transform.zoom >= ZOOM_MIN);
	}

	#[test]
	fn wheel_direction_and_step() {
		let mut s = state();
		s.wheel(-120.0);
		assert!((s.transform.zoom - (ZOOM_DEFAULT + ZOOM_STEP)).abs() < 1e-12);
		s.wheel(120.0);
		assert!((s.transform.zoom - ZOOM_DEFAULT).abs() < 1e-12);
	}

	#[test]
	fn drag_pans_by_delta_and_reset_is_exact() {
		let mut s = state();
		s.pointer_down(100.0, 100.0);
		s.pointer_move(150.0, 80.0);
		s.pointer_move(170.0, 90.0);
		s.pointer_up();
		assert_eq!(s.transform.pan_x, 70.0);
		assert_eq!(s.transform.pan_y, -10.0);
		let zoom = s.transform.zoom;
		s.reset_pan();
		assert_eq!(s.transform.pan_x, 0.0);
		assert_eq!(s.transform.pan_y, 0.0);
		assert_eq!(s.transform.zoom, zoom);
	}

	#[test]
	fn drag_arms_click_suppression_once() {
		let mut s = state();
		s.pointer_down(10.0, 10.0);
		s.pointer_move(60.0, 10.0);
		s.pointer_up();
		assert!(s.take_click_suppression());
		assert!(!s.take_click_suppression());
	}

	#[test]
	fn plain_click_is_not_suppressed() {
		let mut s = state();
		s.pointer_down(10.0, 10.0);
		s.pointer_up();
		assert!(!s.take_click_suppression());
	}

	#[test]
	fn pinch_scales_against_tracked_distance() {
		let mut s = state();
		s.touch_start(&[(0.0, 0.0), (100.0, 0.0)]);
		s.touch_move(&[(0.0, 0.0), (150.0, 0.0)]);
		assert!((s.transform.zoom - 3.0).abs() < 1e-12);
		// same distance again contributes nothing
		s.touch_move(&[(0.0, 0.0), (150.0, 0.0)]);
		assert!((s.transform.zoom - 3.0).abs() < 1e-12);
		s.touch_end(1);
		assert_eq!(s.gesture, Gesture::Idle);
	}

	#[test]
	fn single_touch_drags_like_a_pointer() {
		let mut s = state();
		s.touch_start(&[(10.0, 10.0)]);
		s.touch_move(&[(40.0, 10.0)]);
		assert_eq!(s.transform.pan_x, 30.0);
		s.touch_end(0);
		assert!(s.take_click_suppression());
	}

	#[test]
	fn hover_is_suppressed_while_dragging() {
		let mut s = state();
		s.set_hovered_hub(Some("wallets".into()));
		assert_eq!(s.hover.hub.as_deref(), Some("wallets"));
		s.pointer_down(0.0, 0.0);
		s.pointer_move(5.0, 5.0);
		s.set_hovered_hub(Some("payments".into()));
		assert_eq!(s.hover.hub.as_deref(), Some("wallets"));
		s.set_hovered_hub(None);
		assert_eq!(s.hover.hub.as_deref(), Some("wallets"));
		s.pointer_up();
		s.set_hovered_hub(None);
		assert!(s.hover.hub.is_none());
	}

	#[test]
	fn cleared_hover_fades_out_via_prev() {
		let mut s = state();
		s.set_hovered_leaf(Some("wallets-0".into()));
		s.tick(0.5);
		assert!(s.hover.highlight_t > 0.0);
		s.set_hovered_leaf(None);
		assert_eq!(s.hover.prev_leaf.as_deref(), Some("wallets-0"));
		for _ in 0..600 {
			s.tick(0.016);
		}
		assert_eq!(s.hover.highlight_t, 0.0);
		assert!(s.hover.prev_leaf.is_none());
	}

	#[test]
	fn category_hover_highlights_its_leaves() {
		let map = one_leaf_map();
		let node = map.nodes[0].clone();
		let mut s = MapState::new(map, 800.0, 600.0);
		s.set_hovered_hub(Some("wallets".into()));
		assert!(s.is_leaf_highlighted(&node));
		assert!(s.is_hub_highlighted("wallets"));
		assert!(!s.is_hub_highlighted("payments"));
	}

	#[test]
	fn screen_center_maps_to_world_center() {
		let s = state();
		// default zoom 2.0 -> scale 1.0; side = 600
		let (wx, wy) = s.screen_to_world(400.0, 300.0);
		assert_eq!((wx, wy), (300.0, 300.0));
	}

	#[test]
	fn hit_testing_finds_the_centered_leaf() {
		let mut s = MapState::new(one_leaf_map(), 800.0, 600.0);
		// leaf sits at world center, projected to screen center
		assert_eq!(
			s.leaf_at(400.0, 300.0).map(|n| n.id.clone()),
			Some("wallets-0".into())
		);
		// circle hit radius is 40 world px at scale 1
		assert!(s.leaf_at(400.0 + 39.0, 300.0).is_some());
		assert!(s.leaf_at(400.0 + 41.0, 300.0).is_none());
		// panning moves the hit area with the scene
		s.transform.pan_x = 50.0;
		assert!(s.leaf_at(450.0, 300.0).is_some());
	}
}
