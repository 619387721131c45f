//! Pointer-reactive particle simulation.
//!
//! A [`ParticleField`] owns every particle for one viewport size. Each call to
//! [`ParticleField::step`] updates and draws particles one at a time, in index
//! order, so a particle is fully settled before the next one is touched.

use std::f64::consts::TAU;

use super::config::FieldConfig;
use super::render::Surface;
use super::state::PointerState;
use super::theme::{ColorTheme, resolve_color};

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	/// Kept within the configured floor and cap.
	pub opacity: f64,
	/// Drives the pulse. Only ever increases.
	pub phase: f64,
}

impl Particle {
	fn speed(&self) -> f64 {
		(self.vx * self.vx + self.vy * self.vy).sqrt()
	}
}

/// All particles for the current viewport.
#[derive(Clone, Debug)]
pub struct ParticleField {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
	config: FieldConfig,
}

impl ParticleField {
	/// Scatter `config.particle_count(width, height)` particles over the viewport.
	///
	/// `seed` varies the layout between generations; the same seed and size
	/// always produce the same set.
	pub fn new(config: FieldConfig, width: f64, height: f64, seed: u32) -> Self {
		let count = config.particle_count(width, height);
		let mut particles = Vec::with_capacity(count);
		let (r_min, r_max) = config.radius_range;
		let (o_min, o_max) = config.initial_opacity_range;
		let base = seed as f64 * 97.0;

		for i in 0..count {
			let s = base + i as f64;
			particles.push(Particle {
				x: Self::pseudo_random(s * 1.1) * width,
				y: Self::pseudo_random(s * 2.3) * height,
				vx: (Self::pseudo_random(s * 3.7) - 0.5) * config.initial_speed,
				vy: (Self::pseudo_random(s * 4.1) - 0.5) * config.initial_speed,
				radius: r_min + Self::pseudo_random(s * 5.3) * (r_max - r_min),
				opacity: o_min + Self::pseudo_random(s * 6.7) * (o_max - o_min),
				phase: Self::pseudo_random(s * 7.9) * TAU,
			});
		}

		Self::with_particles(config, width, height, particles)
	}

	/// Field over an explicit particle set.
	pub fn with_particles(
		config: FieldConfig,
		width: f64,
		height: f64,
		particles: Vec<Particle>,
	) -> Self {
		Self {
			particles,
			width,
			height,
			config,
		}
	}

	/// Simple pseudo-random function (deterministic), in `[0, 1)`.
	fn pseudo_random(seed: f64) -> f64 {
		let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
		x - x.floor()
	}

	pub(crate) fn len(&self) -> usize {
		self.particles.len()
	}

	/// Advance one tick and draw it to `surface`.
	pub fn step(
		&mut self,
		pointer: &PointerState,
		theme: &ColorTheme,
		surface: &mut impl Surface,
	) {
		let cfg = &self.config;
		surface.clear(self.width, self.height);

		for i in 0..self.particles.len() {
			let (head, rest) = self.particles.split_at_mut(i + 1);
			let p = &mut head[i];

			p.x += p.vx;
			p.y += p.vy;

			if p.x < 0.0 || p.x > self.width {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > self.height {
				p.vy = -p.vy;
			}

			if pointer.active {
				let (dx, dy) = (pointer.x - p.x, pointer.y - p.y);
				let distance = (dx * dx + dy * dy).sqrt();
				let radius = cfg.interaction.radius;

				if distance < radius {
					let force = (radius - distance) / radius;
					if distance > 0.0 {
						p.vx -= dx / distance * force * cfg.interaction.repulsion;
						p.vy -= dy / distance * force * cfg.interaction.repulsion;
					}
					p.opacity =
					(p.opacity + force * cfg.interaction.opacity_gain).min(cfg.opacity_cap);
				} else {
					p.opacity = (p.opacity - cfg.interaction.opacity_decay).max(cfg.opacity_floor);
				}
			}

			let speed = p.speed();
			if speed > cfg.max_speed {
				p.vx = p.vx / speed * cfg.max_speed;
				p.vy = p.vy / speed * cfg.max_speed;
			}

			p.phase += cfg.phase_step;
			let pulse = p.phase.sin() * cfg.pulse_amplitude + 1.0;

			let color = resolve_color(theme, i);
			surface.fill_circle(p.x, p.y, p.radius * pulse, color.with_alpha(p.opacity));

			// Later particles have not moved yet this tick.
			for other in rest.iter() {
				let (dx, dy) = (p.x - other.x, p.y - other.y);
				let distance = (dx * dx + dy * dy).sqrt();
				if distance < cfg.links.distance {
					let alpha = (1.0 - distance / cfg.links.distance) * cfg.links.max_opacity;
					surface.stroke_line(
						(p.x, p.y),
						(other.x, other.y),
						color.with_alpha(alpha),
						cfg.links.line_width,
					);
				}
			}

			if pointer.active {
				let (dx, dy) = (pointer.x - p.x, pointer.y - p.y);
				let distance = (dx * dx + dy * dy).sqrt();
				if distance < cfg.links.pointer_distance {
					let fade = 1.0 - distance / cfg.links.pointer_distance;
					let alpha = fade * cfg.links.pointer_max_opacity;
					surface.stroke_line(
						(p.x, p.y),
						(pointer.x, pointer.y),
						color.with_alpha(alpha),
						cfg.links.pointer_line_width,
					);
				}
			}
		}

		if pointer.active {
			surface.fill_halo(
				pointer.x,
				pointer.y,
				cfg.halo.radius,
				theme.primary.with_alpha(cfg.halo.inner_alpha),
				theme.secondary.with_alpha(cfg.halo.middle_alpha),
			);
		}
	}
}
