//! Dispatch with single-flight refresh and replay.
//!
//! A request is issued with the current token. An eligible `401` (any path not matched by a
//! refresh-exclusion rule) hands the request to the [`RefreshCoordinator`]: the first such
//! request runs the refresher while later ones queue behind it. Once the refresh succeeds,
//! every one of them is replayed exactly once with a token re-read from the store; if it fails,
//! all of them return the same [`RefreshError`].
//!
//! [`RefreshCoordinator`]: crate::interceptor::RefreshCoordinator

// self
use crate::{
	_prelude::*,
	auth::ACCESS_TOKEN_KEY,
	error::{FetchError, RefreshError, RetryError},
	interceptor::{Interceptor, PreparedRequest, ResponseBody, coordinator::Ticket},
	obs::{self, EventKind, EventOutcome, EventSpan},
	transport::{HttpResponse, HttpTransport},
};

impl<T> Interceptor<T>
where
	T: ?Sized + HttpTransport,
{
	pub(crate) async fn dispatch(&self, request: PreparedRequest) -> Result<ResponseBody> {
		const KIND: EventKind = EventKind::Request;

		let span = EventSpan::new(KIND, "dispatch", &request.method, &request.path);

		obs::record_event(KIND, EventOutcome::Attempt);

		let result = span
			.instrument(async move {
				let response = self.issue(&request).await?;

				if response.status == StatusCode::UNAUTHORIZED
					&& !self.config.is_refresh_excluded(&request.path)
				{
					return self.refresh_then_replay(request).await;
				}

				into_body(response)
			})
			.await;

		obs::record_result(KIND, &result);

		result
	}

	async fn refresh_then_replay(&self, request: PreparedRequest) -> Result<ResponseBody> {
		match self.coordinator.join() {
			Ticket::Leader(guard) => {
				let outcome = self.run_refresh(&request).await;

				guard.settle(&outcome);
				outcome?;
			},
			Ticket::Waiter(waiter) => {
				self.refresh_metrics.record_queued();
				waiter.wait().await?;
			},
		}

		self.replay(request).await
	}

	async fn run_refresh(&self, request: &PreparedRequest) -> Result<(), RefreshError> {
		const KIND: EventKind = EventKind::Refresh;

		let span = EventSpan::new(KIND, "run_refresh", &request.method, &request.path);

		obs::record_event(KIND, EventOutcome::Attempt);
		self.refresh_metrics.record_attempt();

		let result = span.instrument(self.refresher.refresh()).await;

		match &result {
			Ok(()) => self.refresh_metrics.record_success(),
			Err(_) => self.refresh_metrics.record_failure(),
		}

		obs::record_result(KIND, &result);

		result
	}

	async fn replay(&self, request: PreparedRequest) -> Result<ResponseBody> {
		const KIND: EventKind = EventKind::Replay;

		let span = EventSpan::new(KIND, "replay", &request.method, &request.path);

		obs::record_event(KIND, EventOutcome::Attempt);

		let result = span
			.instrument(async move {
				let response = self.issue(&request).await?;

				if !response.is_success() {
					return Err(RetryError { response }.into());
				}

				Ok(ResponseBody::parse(&response)?)
			})
			.await;

		obs::record_result(KIND, &result);

		result
	}

	async fn issue(&self, request: &PreparedRequest) -> Result<HttpResponse> {
		let outbound = request.authorize(self.store.get(ACCESS_TOKEN_KEY))?;

		Ok(self.transport.send(outbound).await?)
	}
}

fn into_body(response: HttpResponse) -> Result<ResponseBody> {
	if !response.is_success() {
		return Err(FetchError { status: response.status, body: ResponseBody::parse(&response).ok() }
			.into());
	}

	Ok(ResponseBody::parse(&response)?)
}
