//! portal-fx: an animated, mouse-reactive portal backdrop.
//!
//! This crate provides a WASM canvas component that renders drifting light
//! particles, rotating debris and a glowing ring that follows the cursor.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

// Pulled in only to enable its `js` entropy backend for `rand` on wasm32.
use getrandom as _;

pub mod components;

pub use components::portal::{PortalCanvas, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portal-fx: logging initialized");
}

/// Read the JSON text of the script element with id="portal-config".
fn config_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("portal-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Load theme overrides from a script element with id="portal-config".
/// Expected format: a JSON object with any subset of the theme sections,
/// e.g. `{ "portal": { "ring_radius": 90 } }`. Falls back to the default theme.
pub fn load_theme() -> Theme {
	let Some(json_text) = config_text() else {
		debug!("portal-fx: no portal-config element, using default theme");
		return Theme::default();
	};

	match Theme::from_json(&json_text) {
		Ok(theme) => {
			info!("portal-fx: loaded theme overrides");
			theme
		}
		Err(e) => {
			warn!("portal-fx: failed to parse portal-config: {}", e);
			Theme::default()
		}
	}
}

/// Main application component.
/// Loads the theme from the DOM and mounts the fullscreen portal canvas.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let theme = load_theme();

	view! {
		<Title text="Portal" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<PortalCanvas theme=theme />
	}
}
