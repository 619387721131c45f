//! Footer link to the author's GitHub profile, behind a confirm click.

use leptos::prelude::*;

use super::confirm_link::use_confirm_click;
use crate::i18n::{Language, UI_TEXT};

#[component]
pub fn GithubLink(
	href: String,
	#[prop(into)] lang: Signal<Language>,
	confirm_window_ms: u32,
) -> impl IntoView {
	let (armed, on_click) = use_confirm_click(confirm_window_ms);
	let label = move || {
		let text = if armed.get() {
			UI_TEXT.confirm_github
		} else {
			UI_TEXT.visit_github
		};
		text.get(lang.get())
	};

	view! {
		<a
			class="github-link"
			class:confirming=move || armed.get()
			href=href
			target="_blank"
			rel="noopener noreferrer"
			aria-label=label
			on:click=on_click
		>
			"GitHub"
		</a>
	}
}
