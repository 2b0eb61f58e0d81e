//! Leptos component wrapping the stakeholder map canvas.
//!
//! The component creates an HTML canvas element and wires up mouse/wheel event
//! handlers for panning, zooming, and hover inspection. There is no animation
//! loop: the chart redraws when the dataset or options change and after each
//! interaction.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::MapState;
use super::types::{Dataset, MapOptions};

/// Bundles chart state with the 2d context and options so event handlers can
/// mutate and redraw.
struct MapContext {
	state: MapState,
	ctx: CanvasRenderingContext2d,
	options: MapOptions,
}

impl MapContext {
	fn redraw(&self) {
		render::render(&self.state, &self.ctx, &self.options);
	}
}

/// Renders the interactive stakeholder map on a canvas element.
///
/// Pass the normalized dataset and display options as reactive signals; any
/// change to either rebuilds the chart state from scratch and redraws. Drag the
/// background to pan, scroll to zoom, hover a marker for its details.
#[component]
pub fn StakeholderMapCanvas(
	#[prop(into)] data: Signal<Dataset>,
	#[prop(into)] options: Signal<MapOptions>,
	#[prop(default = 1100.0)] width: f64,
	#[prop(default = 700.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<MapContext>>> = Rc::new(RefCell::new(None));

	let context_init = context.clone();
	Effect::new(move |_| {
		let dataset = data.get();
		let opts = options.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		// Every data or option change is a full re-run: rebuild, then draw.
		let map = MapContext {
			state: MapState::new(&dataset, opts.layout, width, height),
			ctx,
			options: opts,
		};
		map.redraw();
		*context_init.borrow_mut() = Some(map);
	});

	let cursor_position = move |ev: &MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		(
			f64::from(ev.client_x()) - rect.left(),
			f64::from(ev.client_y()) - rect.top(),
		)
	};

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let (x, y) = cursor_position(&ev);
		if let Some(ref mut c) = *context_md.borrow_mut() {
			c.state.pan.active = true;
			c.state.pan.start_x = x;
			c.state.pan.start_y = y;
			c.state.pan.transform_start_x = c.state.transform.x;
			c.state.pan.transform_start_y = c.state.transform.y;
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let (x, y) = cursor_position(&ev);
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			if c.state.pan.active {
				c.state.transform.x = c.state.pan.transform_start_x + (x - c.state.pan.start_x);
				c.state.transform.y = c.state.pan.transform_start_y + (y - c.state.pan.start_y);
				c.redraw();
			} else {
				let hovered = c.state.marker_at(x, y, c.options.size_scale);
				if c.state.hovered != hovered {
					c.state.hovered = hovered;
					c.redraw();
				}
			}
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_mu.borrow_mut() {
			c.state.pan.active = false;
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.pan.active = false;
			if c.state.hovered.is_some() {
				c.state.hovered = None;
				c.redraw();
			}
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let (x, y) = cursor_position(&ev);
		if let Some(ref mut c) = *context_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let new_k = (c.state.transform.k * factor).clamp(0.1, 10.0);
			let ratio = new_k / c.state.transform.k;
			c.state.transform.x = x - (x - c.state.transform.x) * ratio;
			c.state.transform.y = y - (y - c.state.transform.y) * ratio;
			c.state.transform.k = new_k;
			c.redraw();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="stakeholder-map-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
