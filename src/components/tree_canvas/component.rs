use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::ev;
use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::random::BrowserRandom;
use super::render;
use super::state::TreeCanvasState;
use super::types::{TreeConfig, Viewport};

type SharedState = Rc<RefCell<Option<TreeCanvasState>>>;

fn window_size(window: &Window) -> Option<(f64, f64)> {
	let w = window.inner_width().ok()?.as_f64()?;
	let h = window.inner_height().ok()?.as_f64()?;
	Some((w, h))
}

fn canvas_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Canvas on which blocks are created, dragged and linked to their parents.
///
/// Pointer moves and releases are tracked on the window so a drag keeps
/// following the pointer outside the canvas. Those listeners, and the
/// animation-frame loop, are torn down when the component is cleaned up.
#[component]
pub fn TreeCanvas(
	#[prop(optional)] config: TreeConfig,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let running = Arc::new(AtomicBool::new(true));
	let (state_init, animate_init, running_init) = (state.clone(), animate.clone(), running.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if state_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("No window available, tree canvas disabled");
			return;
		};

		let (w, h) = match (fullscreen, window_size(&window)) {
			(true, Some(size)) => size,
			_ => (
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
			),
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("Canvas 2D context unavailable, tree canvas disabled");
			return;
		};
		*state_init.borrow_mut() = Some(TreeCanvasState::new(
			config,
			Viewport::new(w, h),
			Box::new(BrowserRandom),
		));

		let (state_anim, animate_inner, running_anim) =
			(state_init.clone(), animate_init.clone(), running_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !running_anim.load(Ordering::Relaxed) {
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				if s.take_dirty() {
					render::render(s, &ctx);
					let _ = web_sys::HtmlElement::style(&canvas).set_property("cursor", s.cursor());
				}
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_mm = state.clone();
	let move_handle = window_event_listener(ev::mousemove, move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pointer_move(x, y);
		}
	});

	let state_mu = state.clone();
	let up_handle = window_event_listener(ev::mouseup, move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.pointer_up();
		}
	});

	let mut handles = vec![move_handle, up_handle];
	if fullscreen {
		let state_rs = state.clone();
		handles.push(window_event_listener(ev::resize, move |_| {
			let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
				return;
			};
			if let Some(canvas) = canvas_ref.get() {
				let canvas: HtmlCanvasElement = canvas.into();
				canvas.set_width(nw as u32);
				canvas.set_height(nh as u32);
			}
			if let Some(ref mut s) = *state_rs.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
	}

	on_cleanup(move || {
		debug!("Tree canvas unmounted, removing window listeners");
		running.store(false, Ordering::Relaxed);
		for handle in handles {
			handle.remove();
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			if s.pointer_down(x, y) {
				ev.prevent_default();
			}
		}
	};

	let state_cl = state;
	let on_click = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_cl.borrow_mut() {
			s.click(x, y);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="tree-canvas"
			on:mousedown=on_mousedown
			on:click=on_click
			style="display: block;"
		/>
	}
}
