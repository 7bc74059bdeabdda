//! Leptos component hosting the portal canvas.
//!
//! The component sizes a canvas to the viewport, builds the scene once the
//! canvas is mounted, forwards window `resize` and `mousemove` events into the
//! scene, and starts the animation loop. Unmounting stops the loop and
//! removes the window listeners.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::ev;
use leptos::prelude::*;
use log::{debug, info, warn};
use rand::Rng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::animation::{self, PortalContext};
use super::state::SceneState;
use super::theme::Theme;

/// Current viewport size in CSS pixels; 0 where the browser reports nothing.
fn viewport_size(window: &Window) -> (f64, f64) {
	let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(dim(window.inner_width()), dim(window.inner_height()))
}

fn acquire_surface(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Regenerates the scene for a new viewport size. No-op before startup.
fn apply_resize<R: Rng>(
	context: &RefCell<Option<PortalContext>>,
	width: f64,
	height: f64,
	rng: &mut R,
) {
	if let Some(ref mut c) = *context.borrow_mut() {
		c.scene.resize(&c.theme, width, height, rng);
		debug!("portal: resized to {}x{}, populations regenerated", width, height);
	}
}

/// Forwards a pointer position to the scene. No-op before startup.
fn apply_pointer(context: &RefCell<Option<PortalContext>>, x: f64, y: f64) {
	if let Some(ref mut c) = *context.borrow_mut() {
		c.scene.pointer_move(x, y);
	}
}

/// Renders the portal effect on a fullscreen canvas behind the page.
///
/// The canvas ignores pointer events itself; the pointer is tracked on the
/// window so the portal follows the cursor over any content.
#[component]
pub fn PortalCanvas(#[prop(optional)] theme: Theme) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<PortalContext>>> = Rc::new(RefCell::new(None));
	let running = Arc::new(AtomicBool::new(true));
	let running_init = running.clone();
	let context_init = context.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(surface) = acquire_surface(&canvas) else {
			warn!("portal: 2d canvas context unavailable, effect disabled");
			return;
		};

		let (w, h) = viewport_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let scene = SceneState::new(&theme, w, h, &mut rand::thread_rng());
		info!(
			"portal: started on {}x{} surface with {} particles, {} debris",
			w,
			h,
			scene.particles.len(),
			scene.debris.len()
		);
		*context_init.borrow_mut() = Some(PortalContext {
			scene,
			theme: theme.clone(),
		});

		animation::start(context_init.clone(), surface, running_init.clone());
	});

	let context_resize = context.clone();
	let resize_handle = window_event_listener(ev::resize, move |_| {
		let (Some(win), Some(canvas)) = (web_sys::window(), canvas_ref.get_untracked()) else {
			return;
		};
		let (nw, nh) = viewport_size(&win);
		canvas.set_width(nw as u32);
		canvas.set_height(nh as u32);
		apply_resize(&context_resize, nw, nh, &mut rand::thread_rng());
	});

	let context_pointer = context;
	let pointer_handle = window_event_listener(ev::mousemove, move |event: MouseEvent| {
		apply_pointer(&context_pointer, event.client_x() as f64, event.client_y() as f64);
	});

	on_cleanup(move || {
		running.store(false, Ordering::Relaxed);
		resize_handle.remove();
		pointer_handle.remove();
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="portal-canvas"
			style="position: fixed; inset: 0; display: block; pointer-events: none;"
		/>
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::super::types::Point;
	use super::*;

	fn started(width: f64, height: f64) -> RefCell<Option<PortalContext>> {
		let theme = Theme::default();
		let mut rng = StdRng::seed_from_u64(31);
		RefCell::new(Some(PortalContext {
			scene: SceneState::new(&theme, width, height, &mut rng),
			theme,
		}))
	}

	#[test]
	fn events_before_startup_are_ignored() {
		let context: RefCell<Option<PortalContext>> = RefCell::new(None);
		let mut rng = StdRng::seed_from_u64(2);

		apply_resize(&context, 400.0, 300.0, &mut rng);
		apply_pointer(&context, 10.0, 20.0);

		assert!(context.borrow().is_none());
	}

	#[test]
	fn resize_event_swaps_scene_atomically() {
		let context = started(800.0, 600.0);
		let mut rng = StdRng::seed_from_u64(3);

		apply_resize(&context, 400.0, 300.0, &mut rng);

		let guard = context.borrow();
		let scene = &guard.as_ref().unwrap().scene;
		assert_eq!((scene.width, scene.height), (400.0, 300.0));
		assert_eq!(scene.particles.len(), 100);
		assert_eq!(scene.debris.len(), 15);
		assert!(scene.particles.iter().all(|p| p.x < 400.0 && p.y < 300.0));
	}

	#[test]
	fn pointer_event_retargets_portal() {
		let context = started(800.0, 600.0);

		apply_pointer(&context, 120.0, 80.0);

		let guard = context.borrow();
		let scene = &guard.as_ref().unwrap().scene;
		assert_eq!(scene.pointer.position, Point::new(120.0, 80.0));
		assert_eq!(scene.portal.target, Point::new(120.0, 80.0));
	}
}
