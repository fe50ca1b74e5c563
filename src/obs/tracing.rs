// self
use crate::{_prelude::*, obs::EventKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedEvent<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedEvent<F> = F;

/// A span builder used around interceptor activities.
#[derive(Clone, Debug)]
pub struct EventSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl EventSpan {
	/// Creates a new span tagged with the event kind, call-site stage, and request line.
	pub fn new(kind: EventKind, stage: &'static str, method: &Method, path: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"bearer_interceptor.request",
				event = kind.as_str(),
				stage,
				method = method.as_str(),
				path,
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage, method, path);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedEvent<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = EventSpan::new(EventKind::Request, "instrument_wraps_future", &Method::GET, "/");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
