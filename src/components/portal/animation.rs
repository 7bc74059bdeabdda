//! The frame loop: smoothing, physics, then rendering, once per display refresh.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use super::render;
use super::state::SceneState;
use super::surface::Surface;
use super::theme::Theme;

/// Scene state bundled with the theme it was built from.
pub struct PortalContext {
	pub scene: SceneState,
	pub theme: Theme,
}

/// Runs one complete frame: advance the portal and physics, then draw.
/// `time` is wall-clock seconds and only drives the ring animation.
pub fn frame<S: Surface>(ctx: &mut PortalContext, surface: &S, time: f64) {
	ctx.scene.tick(&ctx.theme);
	render::render(surface, &ctx.scene, &ctx.theme, time);
}

/// Schedules [`frame`] on every `requestAnimationFrame` until `running` is
/// cleared. Each callback finishes its frame before requesting the next.
pub fn start(
	context: Rc<RefCell<Option<PortalContext>>>,
	surface: CanvasRenderingContext2d,
	running: Arc<AtomicBool>,
) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let animate_inner = animate.clone();

	*animate.borrow_mut() = Some(Closure::new(move || {
		if !running.load(Ordering::Relaxed) {
			debug!("portal: animation stopped");
			return;
		}
		if let Some(ref mut c) = *context.borrow_mut() {
			frame(c, &surface, js_sys::Date::now() * 0.001);
		}
		if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
			let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}));
	if let Some(ref cb) = *animate.borrow() {
		let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
	}
}
