//! Leptos component wrapping the particle field canvas.
//!
//! On mount the component sizes a full-viewport canvas, builds the first
//! particle set and registers window/document listeners. A
//! `requestAnimationFrame` loop then drives [`FieldRuntime::frame`]. Everything
//! acquired on mount lives in a [`FieldHandle`]; dropping it on cleanup cancels
//! the pending frame and removes every listener.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, MouseEvent, Window};

use super::config::FieldConfig;
use super::render::CanvasSurface;
use super::state::FieldRuntime;

thread_local! {
	static MOUNTED: RefCell<HashMap<u64, FieldHandle>> = RefCell::new(HashMap::new());
	static NEXT_ID: Cell<u64> = const { Cell::new(0) };
}

/// An event listener that unregisters itself when dropped.
struct Listener {
	target: EventTarget,
	kind: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
	fn attach(
		target: EventTarget,
		kind: &'static str,
		callback: impl FnMut(Event) + 'static,
	) -> Self {
		let callback = Closure::<dyn FnMut(Event)>::new(callback);
		let _ = target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref());
		Self {
			target,
			kind,
			callback,
		}
	}
}

impl Drop for Listener {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
	}
}

/// Resources held by one mounted field. Released exactly once, on drop.
struct FieldHandle {
	window: Window,
	runtime: Rc<RefCell<FieldRuntime>>,
	animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	frame: Rc<Cell<Option<i32>>>,
	_listeners: Vec<Listener>,
}

impl Drop for FieldHandle {
	fn drop(&mut self) {
		if let Some(id) = self.frame.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
		self.runtime.borrow_mut().unmount();
		// The frame closure holds a clone of `animate`; drop it to break the cycle.
		self.animate.borrow_mut().take();
		debug!("shadowframe: particle field unmounted");
	}
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn release(id: u64) {
	let handle = MOUNTED.with(|mounted| mounted.borrow_mut().remove(&id));
	drop(handle);
}

/// Full-viewport animated backdrop whose colors follow the hovered tool card.
///
/// The canvas ignores pointer events, so foreground content stays clickable.
/// Pointer position is tracked on the window instead.
#[component]
pub fn InteractiveBackground(#[prop(into)] hovered_tool: Signal<Option<String>>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let config = FieldConfig::default();
	let style = format!(
		"position: fixed; inset: 0; z-index: 0; pointer-events: none; opacity: {};",
		config.canvas_opacity
	);
	let runtime = Rc::new(RefCell::new(FieldRuntime::new(config)));
	let id = NEXT_ID.with(|next| {
		let id = next.get();
		next.set(id + 1);
		id
	});

	let runtime_hover = runtime.clone();
	Effect::new(move |_| {
		runtime_hover
			.borrow_mut()
			.set_hovered_tool(hovered_tool.get());
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if runtime.borrow().is_running() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(document) = window.document() else {
			return;
		};
		let Some((w, h)) = viewport_size(&window) else {
			return;
		};
		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			return;
		};

		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		runtime.borrow_mut().mount(w, h);

		let (runtime_resize, canvas_resize) = (runtime.clone(), canvas.clone());
		let on_resize = Listener::attach(window.clone().into(), "resize", move |_| {
			let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
				return;
			};
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			runtime_resize.borrow_mut().resize(nw, nh);
		});

		let runtime_move = runtime.clone();
		let on_move = Listener::attach(window.clone().into(), "mousemove", move |ev: Event| {
			if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
				runtime_move
					.borrow_mut()
					.pointer_moved(ev.client_x() as f64, ev.client_y() as f64);
			}
		});

		let runtime_leave = runtime.clone();
		let on_leave = Listener::attach(document.into(), "mouseleave", move |_| {
			runtime_leave.borrow_mut().pointer_left();
		});

		let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
		let frame: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
		let (runtime_anim, animate_inner, frame_anim) =
			(runtime.clone(), animate.clone(), frame.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			frame_anim.set(None);
			let keep_going = {
				let mut rt = runtime_anim.borrow_mut();
				if canvas.is_connected() {
					rt.frame(Some(&mut CanvasSurface::new(&ctx)))
				} else {
					rt.frame::<CanvasSurface<'_>>(None)
				}
			};
			if !keep_going {
				return;
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				frame_anim.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			frame.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}

		debug!("shadowframe: particle field mounted at {}x{}", w, h);
		let handle = FieldHandle {
			window,
			runtime: runtime.clone(),
			animate,
			frame,
			_listeners: vec![on_resize, on_move, on_leave],
		};
		MOUNTED.with(|mounted| mounted.borrow_mut().insert(id, handle));
	});

	on_cleanup(move || release(id));

	view! {
		<canvas node_ref=canvas_ref class="particle-field" aria-hidden="true" style=style />
	}
}
