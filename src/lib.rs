//! shadowframe: bilingual landing page for the ShadowFrame Workshop tools.
//!
//! This crate renders the page shell as a WASM client: localized copy, link
//! cards with a confirm-click gesture, a one-shot reachability probe that
//! switches the cards to a mirror host, and an animated particle backdrop that
//! follows the hovered card.

use futures_util::future::abortable;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use log::{Level, debug, info};

pub mod components;
pub mod config;
pub mod confirm;
pub mod i18n;
pub mod source;
pub mod tools;

pub use components::InteractiveBackground;
pub use config::SiteConfig;
pub use source::{ProbeStatus, Source};

use components::{GithubLink, LanguageSwitch, SourceBadge, ToolCard};
use i18n::{DOCUMENT_TITLE, UI_TEXT, load_language};
use source::{FetchTransport, SourceResolver, probe_and_report};
use tools::TOOLS;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("shadowframe: logging initialized");
}

/// Main application component.
///
/// Owns the page state (language, hovered tool, link source, probe feedback)
/// and hands it to children as signals.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let site = SiteConfig::load();
	let (lang, set_lang) = signal(load_language(&site.language_key));
	let (hovered, set_hovered) = signal(None::<String>);
	let (source, set_source) = signal(Source::default());
	let (status, set_status) = signal(ProbeStatus::Checking);

	let resolver =
		SourceResolver::new(FetchTransport, site.probe_url.clone(), site.probe_timeout_ms);
	let (probe, probe_handle) = abortable(probe_and_report(
		resolver,
		site.badge_clear_ms,
		move |s| {
			set_source.try_set(s);
		},
		move |s| {
			set_status.try_set(s);
		},
		TimeoutFuture::new,
	));
	spawn_local(async move {
		if probe.await.is_err() {
			debug!("shadowframe: probe cancelled");
		}
	});
	// Aborting drops the in-flight request and any pending timer with it.
	on_cleanup(move || probe_handle.abort());

	let confirm_window_ms = site.confirm_window_ms;
	let text = move |s: i18n::LocalizedString| move || s.get(lang.get());

	view! {
		<Html attr:lang=move || lang.get().code() attr:dir="ltr" attr:data-theme="dark" />
		<Title text=DOCUMENT_TITLE />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="page">
			<InteractiveBackground hovered_tool=hovered />
			<LanguageSwitch lang=lang set_lang=set_lang storage_key=site.language_key.clone() />
			<SourceBadge status=status lang=lang />

			<main class="content">
				<header class="hero">
					<div class="hero-badge">{text(UI_TEXT.badge)}</div>
					<h1 class="hero-title" data-tool=move || hovered.get()>
						{text(UI_TEXT.title)}
					</h1>
					<p class="hero-subtitle">{text(UI_TEXT.subtitle)}</p>
				</header>

				<div class="tool-grid">
					{TOOLS
						.iter()
						.map(|tool| {
							view! {
								<ToolCard
									tool=tool
									lang=lang
									source=source
									set_hovered=set_hovered
									confirm_window_ms=confirm_window_ms
								/>
							}
						})
						.collect_view()}
				</div>

				<footer class="footer">
					<span>{text(UI_TEXT.footer)}</span>
					<GithubLink
						href=site.author_url.clone()
						lang=lang
						confirm_window_ms=confirm_window_ms
					/>
				</footer>
			</main>
		</div>
	}
}
