//! Tunable constants for the particle field.
//!
//! All distances are in CSS pixels and all per-tick quantities assume one tick
//! per display refresh.

/// Pointer interaction: repulsion and brightening near the cursor.
#[derive(Clone, Debug)]
pub struct InteractionConfig {
	/// Particles closer than this to the pointer are pushed away.
	pub radius: f64,
	/// Scales the linear-falloff force before it is applied to velocity.
	pub repulsion: f64,
	/// Opacity gained per unit of force.
	pub opacity_gain: f64,
	/// Opacity lost per tick while outside the interaction radius.
	pub opacity_decay: f64,
}

/// Lines between neighbouring particles and towards the pointer.
#[derive(Clone, Debug)]
pub struct LinkConfig {
	/// Particle pairs closer than this are joined.
	pub distance: f64,
	/// Line opacity at zero distance, falling off linearly.
	pub max_opacity: f64,
	pub line_width: f64,
	/// Particles closer than this to the pointer are joined to it.
	pub pointer_distance: f64,
	pub pointer_max_opacity: f64,
	pub pointer_line_width: f64,
}

/// Glow drawn under the pointer.
#[derive(Clone, Debug)]
pub struct HaloConfig {
	pub radius: f64,
	/// Alpha of the primary color at the center.
	pub inner_alpha: f64,
	/// Alpha of the secondary color half-way out.
	pub middle_alpha: f64,
}

/// Complete particle field configuration.
#[derive(Clone, Debug)]
pub struct FieldConfig {
	/// Viewport area (px²) per particle.
	pub area_per_particle: f64,
	pub max_speed: f64,
	pub opacity_floor: f64,
	pub opacity_cap: f64,
	/// Phase advance per tick, radians.
	pub phase_step: f64,
	/// Pulse multiplier is `1 + sin(phase) * pulse_amplitude`.
	pub pulse_amplitude: f64,
	/// Velocity components start uniformly in `±initial_speed / 2`.
	pub initial_speed: f64,
	pub radius_range: (f64, f64),
	pub initial_opacity_range: (f64, f64),
	/// CSS opacity of the whole canvas.
	pub canvas_opacity: f64,
	pub interaction: InteractionConfig,
	pub links: LinkConfig,
	pub halo: HaloConfig,
}

impl FieldConfig {
	/// Number of particles for a viewport: one per `area_per_particle` px².
	pub fn particle_count(&self, width: f64, height: f64) -> usize {
		let area = (width * height).max(0.0);
		(area / self.area_per_particle).floor() as usize
	}
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			area_per_particle: 15000.0,
			max_speed: 1.0,
			opacity_floor: 0.2,
			opacity_cap: 0.8,
			phase_step: 0.02,
			pulse_amplitude: 0.3,
			initial_speed: 0.3,
			radius_range: (0.5, 2.5),
			initial_opacity_range: (0.2, 0.7),
			canvas_opacity: 0.6,
			interaction: InteractionConfig {
				radius: 200.0,
				repulsion: 0.5,
				opacity_gain: 0.3,
				opacity_decay: 0.02,
			},
			links: LinkConfig {
				distance: 120.0,
				max_opacity: 0.15,
				line_width: 0.5,
				pointer_distance: 150.0,
				pointer_max_opacity: 0.3,
				pointer_line_width: 1.0,
			},
			halo: HaloConfig {
				radius: 100.0,
				inner_alpha: 0.2,
				middle_alpha: 0.1,
			},
		}
	}
}
