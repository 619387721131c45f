//! Drawing backends for the particle field.
//!
//! The simulation only talks to [`Surface`]; the browser backend is
//! [`CanvasSurface`], which issues 2D canvas calls.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::theme::Color;

/// Primitive drawing operations used by one tick.
pub trait Surface {
	fn clear(&mut self, width: f64, height: f64);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64);
	/// Radial glow centered at `(x, y)`: `inner` at the center, `middle` half-way
	/// out, transparent at `radius`.
	fn fill_halo(&mut self, x: f64, y: f64, radius: f64, inner: Color, middle: Color);
}

/// [`Surface`] over a canvas 2D context.
pub struct CanvasSurface<'a> {
	ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
	pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}
}

impl Surface for CanvasSurface<'_> {
	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.stroke();
	}

	fn fill_halo(&mut self, x: f64, y: f64, radius: f64, inner: Color, middle: Color) {
		let Ok(gradient) = self.ctx.create_radial_gradient(x, y, 0.0, x, y, radius) else {
			return;
		};
		let _ = gradient.add_color_stop(0.0, &inner.to_css());
		let _ = gradient.add_color_stop(0.5, &middle.to_css());
		let _ = gradient.add_color_stop(1.0, &Color::TRANSPARENT.to_css());

		#[allow(deprecated)]
		self.ctx.set_fill_style(&gradient);
		self.ctx
			.fill_rect(x - radius, y - radius, radius * 2.0, radius * 2.0);
	}
}

/// Records draw calls instead of rendering them.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct Recorder {
	pub calls: Vec<DrawCall>,
}

#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
	Clear { width: f64, height: f64 },
	Circle { x: f64, y: f64, radius: f64, color: Color },
	Line { from: (f64, f64), to: (f64, f64), color: Color },
	Halo { x: f64, y: f64, radius: f64 },
}

#[cfg(test)]
impl Recorder {
	pub fn circles(&self) -> Vec<&DrawCall> {
		self.calls
			.iter()
			.filter(|c| matches!(c, DrawCall::Circle { .. }))
			.collect()
	}

	pub fn lines(&self) -> Vec<&DrawCall> {
		self.calls
			.iter()
			.filter(|c| matches!(c, DrawCall::Line { .. }))
			.collect()
	}

	pub fn halos(&self) -> usize {
		self.calls
			.iter()
			.filter(|c| matches!(c, DrawCall::Halo { .. }))
			.count()
	}
}

#[cfg(test)]
impl Surface for Recorder {
	fn clear(&mut self, width: f64, height: f64) {
		self.calls.push(DrawCall::Clear { width, height });
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.calls.push(DrawCall::Circle { x, y, radius, color });
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, _width: f64) {
		self.calls.push(DrawCall::Line { from, to, color });
	}

	fn fill_halo(&mut self, x: f64, y: f64, radius: f64, _inner: Color, _middle: Color) {
		self.calls.push(DrawCall::Halo { x, y, radius });
	}
}
