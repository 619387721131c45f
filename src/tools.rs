//! Registry of the linked tools.

use crate::i18n::LocalizedString;
use crate::source::Source;

/// One externally hosted tool.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToolData {
	/// Stable identifier, also the particle theme key.
	pub id: &'static str,
	pub name: LocalizedString,
	pub category: LocalizedString,
	pub description: LocalizedString,
	/// Link on the primary host.
	pub url: &'static str,
	/// Link on the GitHub-hosted mirror.
	pub mirror_url: &'static str,
	/// CSS color for the card accent and glow.
	pub accent: &'static str,
	pub glow: &'static str,
}

impl ToolData {
	pub fn url_for(&self, source: Source) -> &'static str {
		match source {
			Source::Primary => self.url,
			Source::Mirror => self.mirror_url,
		}
	}
}

pub static TOOLS: [ToolData; 3] = [
	ToolData {
		id: "gifbuilder",
		name: LocalizedString::new("GifBuilder", "GifBuilder 动画制作"),
		category: LocalizedString::new("GIF", "动图"),
		description: LocalizedString::new(
			"Create high-quality GIFs from videos or image sequences with precise frame control.",
			"通过视频或图像序列创建高质量 GIF，提供精准的帧控制功能。",
		),
		url: "https://gif.qwq.team",
		mirror_url: "https://arminosi.github.io/GifBuilder/",
		accent: "#e879f9",
		glow: "rgba(232, 121, 249, 0.15)",
	},
	ToolData {
		id: "collagepro",
		name: LocalizedString::new("CollagePro", "CollagePro 拼图专家"),
		category: LocalizedString::new("Collage", "拼图"),
		description: LocalizedString::new(
			"Quickly stitch multiple images together. Ideal for long article images and sprite sheets.",
			"将多个图片快速拼接到一起，适合文章长图拼接和精灵图的制作",
		),
		url: "https://cp.qwq.team",
		mirror_url: "https://arminosi.github.io/CollagePro/",
		accent: "#22d3ee",
		glow: "rgba(34, 211, 238, 0.15)",
	},
	ToolData {
		id: "spriteslicer",
		name: LocalizedString::new("SpriteSlicer", "SpriteSlicer 精灵切片"),
		category: LocalizedString::new("Slice", "切图"),
		description: LocalizedString::new(
			"Quickly slice images into independent blocks and automatically number the sequences.",
			"快速将图片切为独立的小块，同时给切片图排上序号",
		),
		url: "https://ss.qwq.team",
		mirror_url: "https://arminosi.github.io/SpriteSlicer/",
		accent: "#34d399",
		glow: "rgba(52, 211, 153, 0.15)",
	},
];
