//! Error types for page setup and the petal overlay's DOM plumbing.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::components::helix::ConfigError;

/// Failures while wiring the page to the browser.
///
/// The simulation itself never fails; only the host side (finding the
/// window, creating petal elements) can.
#[derive(Debug, Error)]
pub enum PageError {
	/// `web_sys::window()` returned nothing (not running in a browser).
	#[error("no global window")]
	NoWindow,
	/// The window has no document attached.
	#[error("window has no document")]
	NoDocument,
	/// `document.createElement` threw.
	#[error("failed to create petal element: {0}")]
	CreateElement(String),
	/// Appending a petal to the overlay threw.
	#[error("failed to attach petal element: {0}")]
	AttachElement(String),
	/// The page's config script is not valid JSON for a helix config.
	#[error("malformed helix config: {0}")]
	ConfigJson(#[from] serde_json::Error),
	/// The page supplied a helix config that does not validate.
	#[error("invalid helix config: {0}")]
	Config(#[from] ConfigError),
}

impl PageError {
	/// Render a thrown JS value into something loggable.
	pub(crate) fn js(value: &JsValue) -> String {
		value
			.as_string()
			.unwrap_or_else(|| format!("{:?}", value))
	}
}
