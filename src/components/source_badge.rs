//! Transient badge reporting the reachability probe.

use leptos::prelude::*;

use crate::i18n::{Language, UI_TEXT};
use crate::source::ProbeStatus;

#[component]
pub fn SourceBadge(
	#[prop(into)] status: Signal<ProbeStatus>,
	#[prop(into)] lang: Signal<Language>,
) -> impl IntoView {
	let text = move || {
		let text = match status.get() {
			ProbeStatus::Checking => UI_TEXT.checking,
			ProbeStatus::Success => UI_TEXT.primary_ok,
			ProbeStatus::Failed => UI_TEXT.use_mirror,
			ProbeStatus::Idle => return None,
		};
		Some(text.get(lang.get()))
	};

	view! {
		<Show when=move || status.get() != ProbeStatus::Idle>
			<div
				class="source-badge"
				class:failed=move || status.get() == ProbeStatus::Failed
				role="status"
			>
				{text}
			</div>
		</Show>
	}
}
