//! Color themes for the particle field.
//!
//! Each tool card carries its own {primary, secondary, accent} triple; the
//! field looks the active one up every tick from the hovered tool identifier.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Semi-transparent triple governing particle, link and halo colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorTheme {
	pub primary: Color,
	pub secondary: Color,
	pub accent: Color,
}

impl ColorTheme {
	/// Indigo/purple/violet, used when no card is hovered.
	pub const fn indigo() -> Self {
		Self {
			primary: Color::rgba(99, 102, 241, 0.15),
			secondary: Color::rgba(139, 92, 246, 0.12),
			accent: Color::rgba(168, 85, 247, 0.1),
		}
	}

	/// Orange, for the GIF tool. Also the fallback for unknown identifiers.
	pub const fn ember() -> Self {
		Self {
			primary: Color::rgba(251, 146, 60, 0.15),
			secondary: Color::rgba(249, 115, 22, 0.12),
			accent: Color::rgba(234, 88, 12, 0.1),
		}
	}

	/// Cyan, for the collage tool.
	pub const fn tide() -> Self {
		Self {
			primary: Color::rgba(34, 211, 238, 0.15),
			secondary: Color::rgba(6, 182, 212, 0.12),
			accent: Color::rgba(14, 165, 233, 0.1),
		}
	}

	/// Pink, for the slicing tool.
	pub const fn blossom() -> Self {
		Self {
			primary: Color::rgba(244, 114, 182, 0.15),
			secondary: Color::rgba(236, 72, 153, 0.12),
			accent: Color::rgba(219, 39, 119, 0.1),
		}
	}

	/// Colors in cycling order.
	pub fn colors(&self) -> [Color; 3] {
		[self.primary, self.secondary, self.accent]
	}
}

impl Default for ColorTheme {
	fn default() -> Self {
		Self::indigo()
	}
}

/// Selects the theme for the currently hovered tool.
///
/// `None` yields the default indigo theme. Identifiers with no entry of their
/// own fall back to [`ColorTheme::ember`].
pub fn theme_for(hovered_tool: Option<&str>) -> ColorTheme {
	match hovered_tool {
		None => ColorTheme::default(),
		Some("collagepro") => ColorTheme::tide(),
		Some("spriteslicer") => ColorTheme::blossom(),
		Some(_) => ColorTheme::ember(),
	}
}

/// Draw color for the particle at `index`: cycles through the theme's colors
/// by position in the set, re-evaluated every tick.
pub fn resolve_color(theme: &ColorTheme, index: usize) -> Color {
	let colors = theme.colors();
	colors[index % colors.len()]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn no_hover_selects_indigo() {
		assert_eq!(theme_for(None), ColorTheme::indigo());
	}

	#[test]
	fn known_tools_get_their_own_theme() {
		assert_eq!(theme_for(Some("gifbuilder")), ColorTheme::ember());
		assert_eq!(theme_for(Some("collagepro")), ColorTheme::tide());
		assert_eq!(theme_for(Some("spriteslicer")), ColorTheme::blossom());
	}

	#[test]
	fn unknown_tool_falls_back() {
		assert_eq!(theme_for(Some("no-such-tool")), ColorTheme::ember());
		assert_eq!(theme_for(Some("")), ColorTheme::ember());
	}

	#[test]
	fn colors_cycle_by_index() {
		let theme = ColorTheme::tide();
		assert_eq!(resolve_color(&theme, 0), theme.primary);
		assert_eq!(resolve_color(&theme, 1), theme.secondary);
		assert_eq!(resolve_color(&theme, 2), theme.accent);
		assert_eq!(resolve_color(&theme, 3), theme.primary);
		assert_eq!(resolve_color(&theme, 64), theme.secondary);
	}

	#[test]
	fn css_keeps_rgb_and_swaps_alpha() {
		let c = ColorTheme::indigo().primary.with_alpha(0.5);
		assert_eq!(c.to_css(), "rgba(99, 102, 241, 0.5)");
		assert_eq!(Color::TRANSPARENT.to_css(), "rgba(0, 0, 0, 0)");
	}
}
