//! English/Chinese copy and the persisted language preference.

use log::debug;

/// Bilingual page title, independent of the selected language.
pub const DOCUMENT_TITLE: &str = "影格工坊 | ShadowFrame Workshop";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
	#[default]
	En,
	Zh,
}

impl Language {
	pub fn code(self) -> &'static str {
		match self {
			Language::En => "en",
			Language::Zh => "zh",
		}
	}

	pub fn from_code(code: &str) -> Option<Self> {
		match code {
			"en" => Some(Language::En),
			"zh" => Some(Language::Zh),
			_ => None,
		}
	}
}

/// A string in both supported languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalizedString {
	pub en: &'static str,
	pub zh: &'static str,
}

impl LocalizedString {
	pub const fn new(en: &'static str, zh: &'static str) -> Self {
		Self { en, zh }
	}

	pub fn get(&self, lang: Language) -> &'static str {
		match lang {
			Language::En => self.en,
			Language::Zh => self.zh,
		}
	}
}

/// Copy used by the page shell.
pub struct UiText {
	pub badge: LocalizedString,
	pub title: LocalizedString,
	pub subtitle: LocalizedString,
	pub footer: LocalizedString,
	pub open_tool: LocalizedString,
	pub confirm: LocalizedString,
	pub go: LocalizedString,
	pub visit_github: LocalizedString,
	pub confirm_github: LocalizedString,
	pub checking: LocalizedString,
	pub primary_ok: LocalizedString,
	pub use_mirror: LocalizedString,
}

pub const UI_TEXT: UiText = UiText {
	badge: LocalizedString::new("Creation Suite", "造图套件"),
	title: LocalizedString::new("ShadowFrame Workshop", "影格工坊"),
	subtitle: LocalizedString::new(
		"A free and powerful toolkit for GIFs, collages, and slicing.",
		"一组用于动图、拼图、切图的免费而又强大的工具包",
	),
	footer: LocalizedString::new("Author: Arminosi", "作者: Arminosi"),
	open_tool: LocalizedString::new("Open Tool", "打开工具"),
	confirm: LocalizedString::new("Click to Confirm", "再次点击以打开"),
	go: LocalizedString::new("Click to Go", "点击前往"),
	visit_github: LocalizedString::new("Visit Github", "访问 Github"),
	confirm_github: LocalizedString::new("Click again to visit Github", "再次点击访问 Github"),
	checking: LocalizedString::new("Checking server…", "正在检测服务器…"),
	primary_ok: LocalizedString::new("Server online", "服务器在线"),
	use_mirror: LocalizedString::new("Use GitHub", "使用 GitHub"),
};

/// Pick the starting language: a valid stored choice wins, then a Chinese
/// browser locale, otherwise English.
pub fn detect_language(stored: Option<&str>, browser_locale: Option<&str>) -> Language {
	if let Some(lang) = stored.and_then(Language::from_code) {
		return lang;
	}
	match browser_locale {
		Some(locale) if locale.to_lowercase().starts_with("zh") => Language::Zh,
		_ => Language::En,
	}
}

fn local_storage() -> Option<web_sys::Storage> {
	web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Startup language from storage or the browser locale.
pub fn load_language(key: &str) -> Language {
	let stored = local_storage().and_then(|s| s.get_item(key).ok().flatten());
	let locale = web_sys::window().and_then(|w| w.navigator().language());
	let lang = detect_language(stored.as_deref(), locale.as_deref());
	debug!(
		"shadowframe: language {} (stored {:?}, locale {:?})",
		lang.code(),
		stored,
		locale
	);
	lang
}

pub fn store_language(key: &str, lang: Language) {
	if let Some(storage) = local_storage() {
		let _ = storage.set_item(key, lang.code());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stored_choice_wins() {
		assert_eq!(detect_language(Some("zh"), Some("en-US")), Language::Zh);
		assert_eq!(detect_language(Some("en"), Some("zh-CN")), Language::En);
	}

	#[test]
	fn locale_used_when_nothing_stored() {
		assert_eq!(detect_language(None, Some("zh-CN")), Language::Zh);
		assert_eq!(detect_language(None, Some("ZH-tw")), Language::Zh);
		assert_eq!(detect_language(None, Some("fr-FR")), Language::En);
		assert_eq!(detect_language(None, None), Language::En);
	}

	#[test]
	fn garbage_in_storage_is_ignored() {
		assert_eq!(detect_language(Some("klingon"), Some("zh")), Language::Zh);
		assert_eq!(detect_language(Some(""), None), Language::En);
	}

	#[test]
	fn codes_round_trip() {
		for lang in [Language::En, Language::Zh] {
			assert_eq!(Language::from_code(lang.code()), Some(lang));
		}
	}

	#[test]
	fn localized_lookup() {
		assert_eq!(UI_TEXT.title.get(Language::En), "ShadowFrame Workshop");
		assert_eq!(UI_TEXT.title.get(Language::Zh), "影格工坊");
	}
}
