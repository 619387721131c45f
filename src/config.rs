//! Page-level settings.
//!
//! Defaults are compiled in. A host page may override any subset with a JSON
//! `<script id="site-config" type="application/json">` element.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

/// Settings for the probe, the confirm gesture and persisted preferences.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
	/// URL probed at startup to decide between primary and mirror links.
	pub probe_url: String,
	pub probe_timeout_ms: u32,
	/// How long the probe badge stays after a result.
	pub badge_clear_ms: u32,
	/// Second click must land within this window to navigate.
	pub confirm_window_ms: u32,
	/// `localStorage` key holding the language preference.
	pub language_key: String,
	pub author_url: String,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			probe_url: "https://gif.qwq.team".into(),
			probe_timeout_ms: 5000,
			badge_clear_ms: 1500,
			confirm_window_ms: 2000,
			language_key: "shadowframe-lang".into(),
			author_url: "https://github.com/Arminosi".into(),
		}
	}
}

impl SiteConfig {
	/// Parse overrides; missing fields keep their defaults.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// Read overrides from the `site-config` script element, if any.
	pub fn load() -> Self {
		let Some(json) = web_sys::window().as_ref().and_then(config_script_text) else {
			return Self::default();
		};
		match Self::from_json(&json) {
			Ok(config) => {
				info!("shadowframe: loaded site config overrides");
				config
			}
			Err(e) => {
				warn!("shadowframe: failed to parse site config: {}", e);
				Self::default()
			}
		}
	}
}

fn config_script_text(window: &Window) -> Option<String> {
	let document = window.document()?;
	let element = document.get_element_by_id("site-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}
