use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{
	AddEventListenerOptions, CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent,
	TouchEvent, WheelEvent, Window,
};

use super::render::{self, LogoCache};
use super::state::{Gesture, MapState};
use super::types::EcosystemMap;

#[component]
pub fn EcosystemMapCanvas(#[prop(into)] data: Signal<EcosystemMap>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<MapState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	// Wheel and touch listeners are registered non-passively so
	// prevent_default() can block page scroll/zoom; their closures are
	// parked here to stay alive for the component's lifetime.
	let input_cbs: Rc<RefCell<Vec<Closure<dyn FnMut(Event)>>>> = Rc::new(RefCell::new(Vec::new()));
	let (state_init, animate_init, resize_cb_init, input_cbs_init) = (
		state.clone(),
		animate.clone(),
		resize_cb.clone(),
		input_cbs.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = parent_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		let map = data.get();
		let logos = Rc::new(LogoCache::new(&map));
		*state_init.borrow_mut() = Some(MapState::new(map, w, h));

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = parent_size(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let opts = AddEventListenerOptions::new();
		opts.set_passive(false);
		let mut cbs: Vec<Closure<dyn FnMut(Event)>> = Vec::new();

		let state_wheel = state_init.clone();
		let cb: Closure<dyn FnMut(Event)> = Closure::new(move |event: Event| {
			let Some(ev) = event.dyn_ref::<WheelEvent>() else {
				return;
			};
			ev.prevent_default();
			if let Some(ref mut s) = *state_wheel.borrow_mut() {
				s.wheel(ev.delta_y());
			}
		});
		let _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
			"wheel",
			cb.as_ref().unchecked_ref(),
			&opts,
		);
		cbs.push(cb);

		let (state_ts, canvas_ts) = (state_init.clone(), canvas.clone());
		let cb: Closure<dyn FnMut(Event)> = Closure::new(move |event: Event| {
			let Some(ev) = event.dyn_ref::<TouchEvent>() else {
				return;
			};
			let points = touch_points(&canvas_ts, ev);
			if points.len() >= 2 {
				ev.prevent_default();
			}
			if let Some(ref mut s) = *state_ts.borrow_mut() {
				s.touch_start(&points);
			}
		});
		let _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
			"touchstart",
			cb.as_ref().unchecked_ref(),
			&opts,
		);
		cbs.push(cb);

		let (state_tm, canvas_tm) = (state_init.clone(), canvas.clone());
		let cb: Closure<dyn FnMut(Event)> = Closure::new(move |event: Event| {
			let Some(ev) = event.dyn_ref::<TouchEvent>() else {
				return;
			};
			ev.prevent_default();
			let points = touch_points(&canvas_tm, ev);
			if let Some(ref mut s) = *state_tm.borrow_mut() {
				s.touch_move(&points);
			}
		});
		let _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
			"touchmove",
			cb.as_ref().unchecked_ref(),
			&opts,
		);
		cbs.push(cb);

		let state_te = state_init.clone();
		let cb: Closure<dyn FnMut(Event)> = Closure::new(move |event: Event| {
			let Some(ev) = event.dyn_ref::<TouchEvent>() else {
				return;
			};
			if let Some(ref mut s) = *state_te.borrow_mut() {
				s.touch_end(ev.touches().length() as usize);
			}
		});
		let _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
			"touchend",
			cb.as_ref().unchecked_ref(),
			&opts,
		);
		cbs.push(cb);
		*input_cbs_init.borrow_mut() = cbs;

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &logos, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = event_point(&canvas, &ev);
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.pointer_down(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = event_point(&canvas, &ev);
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if !s.is_dragging() {
				// hubs draw above leaves, so they win the hit
				let hub = s.hub_at(x, y).map(|h| h.category_id.clone());
				let leaf = if hub.is_none() {
					s.leaf_at(x, y).map(|n| n.id.clone())
				} else {
					None
				};
				s.set_hovered_hub(hub);
				s.set_hovered_leaf(leaf);
			}
			s.pointer_move(x, y);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.pointer_up();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.gesture = Gesture::Idle;
			s.clear_hover();
		}
	};

	let state_click = state.clone();
	let on_click = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = event_point(&canvas, &ev);
		if let Some(ref mut s) = *state_click.borrow_mut() {
			// a click right after a pan is the pan's tail, not a click
			if s.take_click_suppression() {
				return;
			}
			if let Some(id) = s.hub_at(x, y).map(|h| h.category_id.clone()) {
				s.set_hovered_hub(Some(id));
			} else if let Some(url) = s.leaf_at(x, y).map(|n| n.url.clone()) {
				let _ = web_sys::window()
					.unwrap()
					.open_with_url_and_target(&url, "_blank");
			}
		}
	};

	let state_zi = state.clone();
	let on_zoom_in = move |_| {
		if let Some(ref mut s) = *state_zi.borrow_mut() {
			s.zoom_in();
		}
	};
	let state_zo = state.clone();
	let on_zoom_out = move |_| {
		if let Some(ref mut s) = *state_zo.borrow_mut() {
			s.zoom_out();
		}
	};
	let state_rp = state.clone();
	let on_reset = move |_| {
		if let Some(ref mut s) = *state_rp.borrow_mut() {
			s.reset_pan();
		}
	};

	view! {
		<div class="ecosystem-map">
			<div class="map-controls">
				<button on:click=on_zoom_in title="Zoom in">"+"</button>
				<button on:click=on_zoom_out title="Zoom out">"\u{2212}"</button>
				<button on:click=on_reset title="Reset position">"Reset"</button>
			</div>
			<canvas
				node_ref=canvas_ref
				class="ecosystem-map-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:click=on_click
				style="display: block; cursor: grab;"
			/>
		</div>
	}
}

fn parent_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.unwrap_or((800.0, 600.0))
}

fn event_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn touch_points(canvas: &HtmlCanvasElement, ev: &TouchEvent) -> Vec<(f64, f64)> {
	let rect = canvas.get_bounding_client_rect();
	let touches = ev.touches();
	(0..touches.length())
		.filter_map(|i| touches.item(i))
		.map(|t| {
			(
				t.client_x() as f64 - rect.left(),
				t.client_y() as f64 - rect.top(),
			)
		})
		.collect()
}
