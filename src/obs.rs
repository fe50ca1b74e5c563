//! Optional observability helpers for intercepted requests.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `bearer_interceptor.request` with the
//!   `event` and `stage` fields plus the request `method` and `path`.
//! - Enable `metrics` to increment the `bearer_interceptor_event_total` counter for every
//!   attempt/success/failure, labeled by `event` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Interceptor activities observed by spans and counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
	/// A caller-initiated request through the interceptor.
	Request,
	/// A token refresh run by the request that won the refresh slot.
	Refresh,
	/// A request re-issued after a successful refresh.
	Replay,
}
impl EventKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			EventKind::Request => "request",
			EventKind::Refresh => "refresh",
			EventKind::Replay => "replay",
		}
	}
}
impl Display for EventKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventOutcome {
	/// Entry to an interceptor activity.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl EventOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			EventOutcome::Attempt => "attempt",
			EventOutcome::Success => "success",
			EventOutcome::Failure => "failure",
		}
	}
}
impl Display for EventOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
