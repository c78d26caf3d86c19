use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::MapState;
use super::types::landmark_graph;

/// Canvas visualization of the landmark graph with the current path
/// highlighted. The path is replaced wholesale by the caller; every value
/// change re-frames the viewport around the full graph.
#[component]
pub fn LandmarkMapCanvas(
	#[prop(into)] path: Signal<Vec<String>>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<MapState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init) = (state.clone(), animate.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let (w, h) = (
			width.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_width() as f64)
					.unwrap_or(800.0)
			}),
			height.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_height() as f64)
					.unwrap_or(600.0)
			}),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let mut map = MapState::new(landmark_graph(), w, h);
		// A fetch may have settled before the canvas mounted.
		map.set_path(path.get_untracked());
		*state_init.borrow_mut() = Some(map);

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref s) = *state_anim.borrow() {
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = web_sys::window()
				.unwrap()
				.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_path = state.clone();
	Effect::new(move |_| {
		let p = path.get();
		if let Some(ref mut s) = *state_path.borrow_mut() {
			s.set_path(p);
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.pan.active = true;
			s.pan.start_x = x;
			s.pan.start_y = y;
			s.pan.transform_start_x = s.transform.x;
			s.pan.transform_start_y = s.transform.y;
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.pan.active {
				s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
				s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.pan.active = false;
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pan.active = false;
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			s.zoom_at(x, y, factor);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="landmark-map-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
