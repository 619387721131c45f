//! Two-step "click to confirm" navigation.
//!
//! The first press arms the gesture; a second press inside the window
//! navigates. A press after the window has lapsed arms again.

/// What a press should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Press {
	/// Suppress navigation and show the confirm state.
	Arm,
	/// Let the link navigate.
	Navigate,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfirmGesture {
	window_ms: f64,
	armed_at: Option<f64>,
}

impl ConfirmGesture {
	pub fn new(window_ms: u32) -> Self {
		Self {
			window_ms: window_ms as f64,
			armed_at: None,
		}
	}

	pub fn press(&mut self, now_ms: f64) -> Press {
		if self.is_armed(now_ms) {
			self.armed_at = None;
			Press::Navigate
		} else {
			self.armed_at = Some(now_ms);
			Press::Arm
		}
	}

	pub fn is_armed(&self, now_ms: f64) -> bool {
		self.armed_at
			.is_some_and(|at| now_ms >= at && now_ms - at < self.window_ms)
	}

	pub fn disarm(&mut self) {
		self.armed_at = None;
	}
}
