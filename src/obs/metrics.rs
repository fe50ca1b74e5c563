// self
use crate::obs::{EventKind, EventOutcome};

/// Records an event outcome via the global metrics recorder (when enabled).
pub fn record_event(kind: EventKind, outcome: EventOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"bearer_interceptor_event_total",
			"event" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

/// Records the outcome of a finished activity from its result.
pub fn record_result<T, E>(kind: EventKind, result: &Result<T, E>) {
	match result {
		Ok(_) => record_event(kind, EventOutcome::Success),
		Err(_) => record_event(kind, EventOutcome::Failure),
	}
}
