//! sunflower-helix: the sunflower landing page, client side.
//!
//! This crate renders the page chrome (scroll progress, light/dark toggle,
//! loading dots) and drives the double-helix petal overlay that floats over
//! the hero section.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
mod dom;
pub mod error;

pub use components::helix::{ConfigError, HelixConfig, PetalOverlay};
pub use components::page::{LoadingDots, ModeToggle, ScrollProgress};
pub use error::PageError;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("sunflower-helix: logging initialized");
}

/// Parse and check a helix config supplied as JSON.
pub fn parse_config(json: &str) -> Result<HelixConfig, PageError> {
	let config: HelixConfig = serde_json::from_str(json)?;
	config.validate()?;
	Ok(config)
}

/// Load petal settings from a script element with id="petal-config".
/// Every field is optional; see [`HelixConfig`] for the defaults.
fn load_config() -> Option<HelixConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("petal-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match parse_config(&json_text) {
		Ok(config) => {
			info!(
				"sunflower-helix: loaded config ({} petals)",
				config.total_petals
			);
			Some(config)
		}
		Err(e) => {
			warn!("sunflower-helix: ignoring petal config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Reads petal settings from the DOM and renders the page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Sunflowers" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<header class="topbar">
			<ScrollProgress />
			<ModeToggle />
		</header>
		<section class="hero">
			<h1>"Sunflowers"</h1>
			<p class="loading">"Loading"<LoadingDots /></p>
			<PetalOverlay config=config />
		</section>
	}
}
