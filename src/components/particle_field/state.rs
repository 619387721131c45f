//! Pointer tracking and the particle field lifecycle.
//!
//! [`FieldRuntime`] is the single writer of both the particle set and the
//! pointer snapshot. The component forwards platform events into it and calls
//! [`FieldRuntime::frame`] once per animation frame.

use log::debug;

use super::config::FieldConfig;
use super::particles::ParticleField;
use super::render::Surface;
use super::theme::theme_for;

/// Last known pointer position. No history is kept.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
	pub x: f64,
	pub y: f64,
	pub active: bool,
}

impl PointerState {
	pub fn move_to(&mut self, x: f64, y: f64) {
		self.x = x;
		self.y = y;
		self.active = true;
	}

	/// Pointer left the tracked surface. Position is kept.
	pub fn leave(&mut self) {
		self.active = false;
	}
}

/// Where a field instance is in its life.
#[derive(Debug, Default)]
pub enum Lifecycle {
	#[default]
	Uninitialized,
	Running(ParticleField),
	Unmounted,
}

/// Owns the simulation for one mounted component.
#[derive(Debug, Default)]
pub struct FieldRuntime {
	config: FieldConfig,
	lifecycle: Lifecycle,
	pointer: PointerState,
	hovered_tool: Option<String>,
	generation: u32,
}

impl FieldRuntime {
	pub fn new(config: FieldConfig) -> Self {
		Self {
			config,
			..Self::default()
		}
	}

	/// Build the first particle set. Ignored unless uninitialized.
	pub fn mount(&mut self, width: f64, height: f64) {
		if matches!(self.lifecycle, Lifecycle::Uninitialized) {
			self.regenerate(width, height);
		}
	}

	/// Discard every particle and scatter a fresh set for the new size.
	pub fn resize(&mut self, width: f64, height: f64) {
		if matches!(self.lifecycle, Lifecycle::Running(_)) {
			self.regenerate(width, height);
		}
	}

	fn regenerate(&mut self, width: f64, height: f64) {
		self.generation = self.generation.wrapping_add(1);
		let field = ParticleField::new(self.config.clone(), width, height, self.generation);
		debug!(
			"shadowframe: {} particles for {}x{}",
			field.len(),
			width,
			height
		);
		self.lifecycle = Lifecycle::Running(field);
	}

	/// Stop for good. Later frames and events are no-ops.
	pub fn unmount(&mut self) {
		self.lifecycle = Lifecycle::Unmounted;
	}

	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		if self.is_running() {
			self.pointer.move_to(x, y);
		}
	}

	pub fn pointer_left(&mut self) {
		self.pointer.leave();
	}

	/// Theme key for the next frames. Particle state is left untouched.
	pub fn set_hovered_tool(&mut self, tool: Option<String>) {
		self.hovered_tool = tool;
	}

	pub fn is_running(&self) -> bool {
		matches!(self.lifecycle, Lifecycle::Running(_))
	}

	pub fn field(&self) -> Option<&ParticleField> {
		match &self.lifecycle {
			Lifecycle::Running(field) => Some(field),
			_ => None,
		}
	}

	/// Run one tick if running and a surface is available.
	///
	/// Returns whether another frame should be requested.
	pub fn frame<S: Surface>(&mut self, surface: Option<&mut S>) -> bool {
		let Lifecycle::Running(field) = &mut self.lifecycle else {
			return false;
		};
		if let Some(surface) = surface {
			let theme = theme_for(self.hovered_tool.as_deref());
			field.step(&self.pointer, &theme, surface);
		}
		true
	}
}

#[cfg(test)]
mod tests {
	use super::super::render::{DrawCall, Recorder};
	use super::*;

	fn running(width: f64, height: f64) -> FieldRuntime {
		let mut rt = FieldRuntime::new(FieldConfig::default());
		rt.mount(width, height);
		rt
	}

	#[test]
	fn pointer_move_and_leave() {
		let mut pointer = PointerState::default();
		assert!(!pointer.active);
		pointer.move_to(10.0, 20.0);
		assert_eq!(
			pointer,
			PointerState {
				x: 10.0,
				y: 20.0,
				active: true
			}
		);
		pointer.leave();
		assert!(!pointer.active);
		assert_eq!((pointer.x, pointer.y), (10.0, 20.0));
	}

	#[test]
	fn mount_starts_running() {
		let mut rt = FieldRuntime::new(FieldConfig::default());
		assert!(!rt.is_running());
		assert!(!rt.frame(Some(&mut Recorder::default())));

		rt.mount(1200.0, 800.0);
		assert!(rt.is_running());
		assert_eq!(rt.field().map(ParticleField::len), Some(64));
	}

	#[test]
	fn resize_regenerates_whole_set() {
		let mut rt = running(1200.0, 800.0);
		let before = rt.field().map(|f| f.particles.clone());

		rt.resize(600.0, 500.0);
		assert_eq!(rt.field().map(ParticleField::len), Some(20));
		let mut surface = Recorder::default();
		rt.frame(Some(&mut surface));
		assert_eq!(
			surface.calls.first(),
			Some(&DrawCall::Clear {
				width: 600.0,
				height: 500.0
			})
		);

		rt.resize(1200.0, 800.0);
		let after = rt.field().map(|f| f.particles.clone());
		assert_eq!(after.as_ref().map(Vec::len), Some(64));
		assert_ne!(before, after);
	}

	#[test]
	fn frame_without_surface_skips_quietly() {
		let mut rt = running(1200.0, 800.0);
		let before = rt.field().map(|f| f.particles.clone());
		assert!(rt.frame::<Recorder>(None));
		assert_eq!(rt.field().map(|f| f.particles.clone()), before);
	}

	#[test]
	fn frame_draws_every_particle() {
		let mut rt = running(1200.0, 800.0);
		let mut surface = Recorder::default();
		assert!(rt.frame(Some(&mut surface)));
		assert_eq!(surface.circles().len(), 64);
	}

	#[test]
	fn frames_after_unmount_do_nothing() {
		let mut rt = running(1200.0, 800.0);
		rt.pointer_moved(100.0, 100.0);
		rt.unmount();

		let mut surface = Recorder::default();
		assert!(!rt.frame(Some(&mut surface)));
		assert!(surface.calls.is_empty());
		assert!(rt.field().is_none());

		rt.resize(800.0, 600.0);
		rt.mount(800.0, 600.0);
		assert!(!rt.is_running());
		assert!(!rt.frame(Some(&mut surface)));
		assert!(surface.calls.is_empty());
	}

	#[test]
	fn pointer_ignored_after_unmount() {
		let mut rt = running(1200.0, 800.0);
		rt.unmount();
		rt.pointer_moved(5.0, 5.0);
		assert!(!rt.pointer.active);
	}

	#[test]
	fn hover_changes_colors_not_motion() {
		let mut a = running(1200.0, 800.0);
		let mut b = running(1200.0, 800.0);
		b.set_hovered_tool(Some("spriteslicer".into()));

		let (mut sa, mut sb) = (Recorder::default(), Recorder::default());
		a.frame(Some(&mut sa));
		b.frame(Some(&mut sb));

		assert_eq!(
			a.field().map(|f| f.particles.clone()),
			b.field().map(|f| f.particles.clone())
		);
		assert_ne!(sa.calls, sb.calls);
	}
}
