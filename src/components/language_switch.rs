//! EN / 中文 toggle.

use leptos::prelude::*;

use crate::i18n::{Language, store_language};

/// Switches the page language and persists the choice under `storage_key`.
#[component]
pub fn LanguageSwitch(
	lang: ReadSignal<Language>,
	set_lang: WriteSignal<Language>,
	storage_key: String,
) -> impl IntoView {
	let key = StoredValue::new(storage_key);
	let choose = move |next: Language| {
		set_lang.set(next);
		key.with_value(|key| store_language(key, next));
	};

	view! {
		<div class="language-switch" class:zh=move || lang.get() == Language::Zh>
			<button
				class:active=move || lang.get() == Language::En
				on:click=move |_| choose(Language::En)
			>
				"EN"
			</button>
			<button
				class:active=move || lang.get() == Language::Zh
				on:click=move |_| choose(Language::Zh)
			>
				"中文"
			</button>
		</div>
	}
}
