//! Click handler implementing the confirm-click gesture on an anchor.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::confirm::{ConfirmGesture, Press};

/// Returns the armed flag and an `on:click` handler for a link.
///
/// The first click is swallowed and arms the link; a second click within
/// `window_ms` is let through. The armed flag drops back once the window
/// lapses.
pub fn use_confirm_click(window_ms: u32) -> (Signal<bool>, impl Fn(MouseEvent) + Copy + 'static) {
	let gesture = StoredValue::new(ConfirmGesture::new(window_ms));
	let armed = RwSignal::new(false);

	let on_click = move |ev: MouseEvent| {
		let now = js_sys::Date::now();
		match gesture.try_update_value(|g| g.press(now)) {
			Some(Press::Arm) => {
				ev.prevent_default();
				armed.set(true);
				Timeout::new(window_ms, move || {
					let still_armed = gesture
						.try_with_value(|g| g.is_armed(js_sys::Date::now()))
						.unwrap_or(false);
					armed.try_set(still_armed);
				})
				.forget();
			}
			Some(Press::Navigate) | None => armed.set(false),
		}
	};

	(armed.into(), on_click)
}
