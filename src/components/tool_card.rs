//! Link card for one tool.

use leptos::prelude::*;

use super::confirm_link::use_confirm_click;
use crate::i18n::{Language, UI_TEXT};
use crate::source::Source;
use crate::tools::ToolData;

/// Card linking to `tool` on the host chosen by `source`.
///
/// Hovering reports the tool id through `set_hovered` so the backdrop can
/// switch themes.
#[component]
pub fn ToolCard(
	tool: &'static ToolData,
	#[prop(into)] lang: Signal<Language>,
	#[prop(into)] source: Signal<Source>,
	set_hovered: WriteSignal<Option<String>>,
	confirm_window_ms: u32,
) -> impl IntoView {
	let (armed, on_click) = use_confirm_click(confirm_window_ms);

	view! {
		<a
			class="tool-card"
			class:confirming=move || armed.get()
			href=move || tool.url_for(source.get())
			target="_blank"
			rel="noopener noreferrer"
			style=format!("--accent: {}; --glow: {};", tool.accent, tool.glow)
			on:click=on_click
			on:mouseenter=move |_| set_hovered.set(Some(tool.id.to_string()))
			on:mouseleave=move |_| set_hovered.set(None)
		>
			<span class="tool-category">{move || tool.category.get(lang.get())}</span>
			<h2 class="tool-name">{move || tool.name.get(lang.get())}</h2>
			<p class="tool-description">{move || tool.description.get(lang.get())}</p>
			<span class="tool-cta">
				{move || {
					let text = if armed.get() { UI_TEXT.confirm } else { UI_TEXT.open_tool };
					text.get(lang.get())
				}}
				" →"
			</span>
			<Show when=move || armed.get()>
				<span class="tool-cta-mobile">{move || UI_TEXT.go.get(lang.get())}</span>
			</Show>
		</a>
	}
}
