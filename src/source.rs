//! Reachability probe choosing between the primary host and the mirror.
//!
//! The probe runs once per page load. Any response at all counts as reachable;
//! timeouts and transport failures select the mirror. Nothing here surfaces an
//! error to the caller.

use std::future::Future;
use std::pin::pin;

use futures_util::future::{Either, select};
use log::{info, warn};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, RequestInit, RequestMode};

/// Which URL set tool links point at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Source {
	#[default]
	Primary,
	Mirror,
}

/// Transient feedback shown while and shortly after probing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProbeStatus {
	#[default]
	Checking,
	Success,
	Failed,
	/// Feedback has been cleared.
	Idle,
}

impl ProbeStatus {
	pub fn for_source(source: Source) -> Self {
		match source {
			Source::Primary => Self::Success,
			Source::Mirror => Self::Failed,
		}
	}
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ProbeError {
	#[error("no browser window")]
	NoWindow,
	#[error("request could not be built: {0}")]
	Unsupported(String),
	#[error("timed out after {0} ms")]
	TimedOut(u32),
	#[error("network error: {0}")]
	Network(String),
}

/// Existence check against a URL.
#[allow(async_fn_in_trait)]
pub trait Transport {
	/// Resolve `Ok` if anything answers. The caller bounds how long it waits
	/// and drops the future on timeout.
	async fn head(&self, url: &str) -> Result<(), ProbeError>;
}

/// Aborts the request if dropped before it settles.
struct AbortOnDrop(AbortController);

impl Drop for AbortOnDrop {
	fn drop(&mut self) {
		self.0.abort();
	}
}

/// `fetch` with method HEAD in `no-cors` mode. Dropping the future aborts the
/// request.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
	async fn head(&self, url: &str) -> Result<(), ProbeError> {
		let window = web_sys::window().ok_or(ProbeError::NoWindow)?;
		let controller =
			AbortController::new().map_err(|e| ProbeError::Unsupported(format!("{e:?}")))?;

		let init = RequestInit::new();
		init.set_method("HEAD");
		init.set_mode(RequestMode::NoCors);
		init.set_signal(Some(&controller.signal()));

		let _guard = AbortOnDrop(controller);
		match JsFuture::from(window.fetch_with_str_and_init(url, &init)).await {
			Ok(response) if response.is_instance_of::<web_sys::Response>() => Ok(()),
			Ok(_) => Err(ProbeError::Network("unexpected fetch result".into())),
			Err(e) => Err(ProbeError::Network(format!("{e:?}"))),
		}
	}
}

/// One-shot resolver. [`SourceResolver::resolve`] consumes it, so a page load
/// gets exactly one probe.
pub struct SourceResolver<T> {
	transport: T,
	url: String,
	timeout_ms: u32,
}

impl<T: Transport> SourceResolver<T> {
	pub fn new(transport: T, url: impl Into<String>, timeout_ms: u32) -> Self {
		Self {
			transport,
			url: url.into(),
			timeout_ms,
		}
	}

	/// Probe once. `timer` builds the deadline; whichever of the request and
	/// the deadline finishes first wins and the other is dropped.
	pub async fn resolve<D>(self, timer: impl FnOnce(u32) -> D) -> Source
	where
		D: Future<Output = ()>,
	{
		let outcome = {
			let request = pin!(self.transport.head(&self.url));
			let deadline = pin!(timer(self.timeout_ms));
			match select(request, deadline).await {
				Either::Left((outcome, _)) => outcome,
				Either::Right(((), _)) => Err(ProbeError::TimedOut(self.timeout_ms)),
			}
		};
		match outcome {
			Ok(()) => {
				info!("shadowframe: {} reachable, using primary host", self.url);
				Source::Primary
			}
			Err(e) => {
				warn!("shadowframe: {} unreachable ({}), using mirror", self.url, e);
				Source::Mirror
			}
		}
	}
}

/// Probe, report, then clear the feedback after `clear_after_ms`.
///
/// `delay` backs both the probe deadline and the clear delay. `on_source` and
/// `on_status` are the only writers of the shared selection and feedback
/// state. Dropping the returned future cancels whichever timer is pending.
pub async fn probe_and_report<T, S, F, D>(
	resolver: SourceResolver<T>,
	clear_after_ms: u32,
	mut on_source: S,
	mut on_status: F,
	delay: impl Fn(u32) -> D,
) -> Source
where
	T: Transport,
	S: FnMut(Source),
	F: FnMut(ProbeStatus),
	D: Future<Output = ()>,
{
	on_status(ProbeStatus::Checking);
	let source = resolver.resolve(&delay).await;
	on_source(source);
	on_status(ProbeStatus::for_source(source));
	delay(clear_after_ms).await;
	on_status(ProbeStatus::Idle);
	source
}

#[cfg(test)]
mod tests {
	use std::cell::{Cell, RefCell};
	use std::future::{pending, ready};
	use std::pin::Pin;
	use std::rc::Rc;
	use std::task::{Context, Poll};

	use futures_util::FutureExt;
	use futures_util::future::abortable;

	use super::*;

	struct MockTransport {
		outcome: Result<(), ProbeError>,
		calls: Cell<u32>,
		seen: RefCell<Vec<String>>,
	}

	impl MockTransport {
		fn new(outcome: Result<(), ProbeError>) -> Self {
			Self {
				outcome,
				calls: Cell::new(0),
				seen: RefCell::new(Vec::new()),
			}
		}
	}

	impl Transport for &MockTransport {
		async fn head(&self, url: &str) -> Result<(), ProbeError> {
			self.calls.set(self.calls.get() + 1);
			self.seen.borrow_mut().push(url.to_string());
			self.outcome.clone()
		}
	}

	/// A host that never answers.
	struct Silent;

	impl Transport for Silent {
		async fn head(&self, _url: &str) -> Result<(), ProbeError> {
			pending().await
		}
	}

	/// Timer that never fires and records when it is dropped.
	struct Tracked {
		dropped: Rc<Cell<bool>>,
	}

	impl Future for Tracked {
		type Output = ();

		fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
			Poll::Pending
		}
	}

	impl Drop for Tracked {
		fn drop(&mut self) {
			self.dropped.set(true);
		}
	}

	fn resolve_with(outcome: Result<(), ProbeError>) -> (Source, u32) {
		let transport = MockTransport::new(outcome);
		let source = pollster::block_on(
			SourceResolver::new(&transport, "https://gif.qwq.team", 5000).resolve(|_| pending()),
		);
		(source, transport.calls.get())
	}

	#[test]
	fn reachable_host_selects_primary() {
		assert_eq!(resolve_with(Ok(())), (Source::Primary, 1));
	}

	#[test]
	fn every_failure_selects_mirror() {
		for err in [
			ProbeError::Network("connection refused".into()),
			ProbeError::NoWindow,
			ProbeError::Unsupported("no AbortController".into()),
		] {
			assert_eq!(resolve_with(Err(err)), (Source::Mirror, 1));
		}
	}

	#[test]
	fn silent_host_times_out_to_mirror() {
		let deadlines = RefCell::new(Vec::new());
		let resolver = SourceResolver::new(Silent, "https://gif.qwq.team", 5);
		let source = pollster::block_on(resolver.resolve(|ms| {
			deadlines.borrow_mut().push(ms);
			ready(())
		}));
		assert_eq!(source, Source::Mirror);
		assert_eq!(deadlines.into_inner(), vec![5]);
	}

	#[test]
	fn answer_drops_pending_deadline() {
		let transport = MockTransport::new(Ok(()));
		let dropped = Rc::new(Cell::new(false));
		let source = pollster::block_on(
			SourceResolver::new(&transport, "https://gif.qwq.team", 5000).resolve(|_| Tracked {
				dropped: dropped.clone(),
			}),
		);
		assert_eq!(source, Source::Primary);
		assert!(dropped.get());
	}

	#[test]
	fn probe_uses_configured_url_and_timeout() {
		let transport = MockTransport::new(Ok(()));
		let deadlines = RefCell::new(Vec::new());
		let resolver = SourceResolver::new(&transport, "https://example.test", 1234);
		pollster::block_on(resolver.resolve(|ms| {
			deadlines.borrow_mut().push(ms);
			pending()
		}));
		assert_eq!(transport.seen.borrow().as_slice(), &["https://example.test".to_string()]);
		assert_eq!(deadlines.into_inner(), vec![1234]);
	}

	#[test]
	fn report_sequence_on_success() {
		let transport = MockTransport::new(Ok(()));
		let statuses = RefCell::new(Vec::new());
		let sources = RefCell::new(Vec::new());
		let delays = RefCell::new(Vec::new());

		let source = pollster::block_on(probe_and_report(
			SourceResolver::new(&transport, "https://gif.qwq.team", 5000),
			1500,
			|s| sources.borrow_mut().push(s),
			|s| statuses.borrow_mut().push(s),
			|ms| {
				delays.borrow_mut().push(ms);
				ready(())
			},
		));

		assert_eq!(source, Source::Primary);
		assert_eq!(sources.into_inner(), vec![Source::Primary]);
		assert_eq!(
			statuses.into_inner(),
			vec![ProbeStatus::Checking, ProbeStatus::Success, ProbeStatus::Idle]
		);
		assert_eq!(delays.into_inner(), vec![5000, 1500]);
		assert_eq!(transport.calls.get(), 1);
	}

	#[test]
	fn report_sequence_on_timeout() {
		let statuses = RefCell::new(Vec::new());
		let source = pollster::block_on(probe_and_report(
			SourceResolver::new(Silent, "https://gif.qwq.team", 5000),
			1500,
			|_| {},
			|s| statuses.borrow_mut().push(s),
			|_| ready(()),
		));

		assert_eq!(source, Source::Mirror);
		assert_eq!(
			statuses.into_inner(),
			vec![ProbeStatus::Checking, ProbeStatus::Failed, ProbeStatus::Idle]
		);
	}

	#[test]
	fn abort_mid_probe_drops_deadline_and_stops_reporting() {
		let statuses = RefCell::new(Vec::new());
		let dropped = Rc::new(Cell::new(false));
		let (task, handle) = abortable(probe_and_report(
			SourceResolver::new(Silent, "https://gif.qwq.team", 5000),
			1500,
			|_| {},
			|s| statuses.borrow_mut().push(s),
			|_| Tracked {
				dropped: dropped.clone(),
			},
		));
		let mut task = Box::pin(task);

		assert!((&mut task).now_or_never().is_none());
		assert!(!dropped.get());

		handle.abort();
		assert!(pollster::block_on(task).is_err());
		assert!(dropped.get());
		assert_eq!(statuses.into_inner(), vec![ProbeStatus::Checking]);
	}

	#[test]
	fn error_messages() {
		assert_eq!(ProbeError::TimedOut(5000).to_string(), "timed out after 5000 ms");
		assert_eq!(
			ProbeError::Network("refused".into()).to_string(),
			"network error: refused"
		);
	}
}
