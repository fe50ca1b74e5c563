//! Request interceptor: bearer injection, per-verb helpers, and refresh-aware dispatch.

pub mod body;
pub mod coordinator;
pub mod request;

mod dispatch;
mod metrics;

pub use body::*;
pub use coordinator::RefreshCoordinator;
pub use metrics::RefreshMetrics;
pub use request::*;

// self
use crate::{
	_prelude::*,
	auth::TokenRefresher,
	config::InterceptorConfig,
	store::CredentialStore,
	transport::HttpTransport,
};
#[cfg(feature = "reqwest")] use crate::transport::ReqwestTransport;

#[cfg(feature = "reqwest")]
/// Interceptor specialized for the crate's default reqwest transport.
pub type ReqwestInterceptor = Interceptor<ReqwestTransport>;

/// Wraps an HTTP transport with bearer-token injection and single-flight token refresh.
///
/// Clones share the transport, the credential store, the refresher, and the refresh
/// coordinator, so every clone takes part in the same refresh. Independently constructed
/// interceptors never coordinate with each other.
pub struct Interceptor<T>
where
	T: ?Sized + HttpTransport,
{
	/// Transport used for every outbound request.
	pub transport: Arc<T>,
	/// Store consulted for the access token before each request and replay.
	pub store: Arc<dyn CredentialStore>,
	/// External operation that obtains a new access token.
	pub refresher: Arc<dyn TokenRefresher>,
	/// Base URL and refresh-exclusion rules.
	pub config: Arc<InterceptorConfig>,
	/// Shared counters for refresh activity.
	pub refresh_metrics: Arc<RefreshMetrics>,
	coordinator: Arc<RefreshCoordinator>,
}
impl<T> Interceptor<T>
where
	T: ?Sized + HttpTransport,
{
	/// Creates an interceptor over the caller-provided transport.
	pub fn with_transport(
		config: InterceptorConfig,
		store: Arc<dyn CredentialStore>,
		refresher: Arc<dyn TokenRefresher>,
		transport: impl Into<Arc<T>>,
	) -> Self {
		Self {
			transport: transport.into(),
			store,
			refresher,
			config: Arc::new(config),
			refresh_metrics: Default::default(),
			coordinator: Default::default(),
		}
	}

	/// Returns the refresh flag and waiter queue owned by this interceptor.
	pub fn coordinator(&self) -> &RefreshCoordinator {
		&self.coordinator
	}

	/// Sends a `GET` request.
	pub async fn get(&self, path: &str, options: RequestOptions) -> Result<ResponseBody> {
		let request = self.prepare(Method::GET, path, options)?;

		self.dispatch(request).await
	}

	/// Sends a `POST` request with a JSON body.
	pub async fn post<B>(
		&self,
		path: &str,
		payload: &B,
		options: RequestOptions,
	) -> Result<ResponseBody>
	where
		B: ?Sized + Serialize,
	{
		self.send_json(Method::POST, path, payload, options).await
	}

	/// Sends a `PUT` request with a JSON body.
	pub async fn put<B>(
		&self,
		path: &str,
		payload: &B,
		options: RequestOptions,
	) -> Result<ResponseBody>
	where
		B: ?Sized + Serialize,
	{
		self.send_json(Method::PUT, path, payload, options).await
	}

	/// Sends a `PATCH` request with a JSON body.
	pub async fn patch<B>(
		&self,
		path: &str,
		payload: &B,
		options: RequestOptions,
	) -> Result<ResponseBody>
	where
		B: ?Sized + Serialize,
	{
		self.send_json(Method::PATCH, path, payload, options).await
	}

	/// Sends a `DELETE` request without a body.
	pub async fn delete(&self, path: &str, options: RequestOptions) -> Result<ResponseBody> {
		let request = self.prepare(Method::DELETE, path, options)?;

		self.dispatch(request).await
	}

	/// Sends a `DELETE` request with a JSON body.
	pub async fn delete_with_body<B>(
		&self,
		path: &str,
		payload: &B,
		options: RequestOptions,
	) -> Result<ResponseBody>
	where
		B: ?Sized + Serialize,
	{
		self.send_json(Method::DELETE, path, payload, options).await
	}

	/// Sends a request with any method and an optional pre-serialized body.
	///
	/// No `Content-Type` is added; pass one through `options` when sending a body.
	pub async fn send(
		&self,
		method: Method,
		path: &str,
		body: Option<Vec<u8>>,
		options: RequestOptions,
	) -> Result<ResponseBody> {
		let request = self.prepare(method, path, options)?.with_body(body);

		self.dispatch(request).await
	}

	async fn send_json<B>(
		&self,
		method: Method,
		path: &str,
		payload: &B,
		options: RequestOptions,
	) -> Result<ResponseBody>
	where
		B: ?Sized + Serialize,
	{
		let request = self.prepare(method, path, options)?.with_json(payload)?;

		self.dispatch(request).await
	}

	fn prepare(
		&self,
		method: Method,
		path: &str,
		options: RequestOptions,
	) -> Result<PreparedRequest> {
		let url = self.config.resolve(path)?;

		Ok(PreparedRequest::new(method, path, url, options))
	}
}
#[cfg(feature = "reqwest")]
impl Interceptor<ReqwestTransport> {
	/// Creates an interceptor backed by a default reqwest client.
	pub fn new(
		config: InterceptorConfig,
		store: Arc<dyn CredentialStore>,
		refresher: Arc<dyn TokenRefresher>,
	) -> Self {
		Self::with_transport(config, store, refresher, ReqwestTransport::default())
	}
}
impl<T> Clone for Interceptor<T>
where
	T: ?Sized + HttpTransport,
{
	fn clone(&self) -> Self {
		Self {
			transport: self.transport.clone(),
			store: self.store.clone(),
			refresher: self.refresher.clone(),
			config: self.config.clone(),
			refresh_metrics: self.refresh_metrics.clone(),
			coordinator: self.coordinator.clone(),
		}
	}
}
impl<T> Debug for Interceptor<T>
where
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Interceptor")
			.field("config", &self.config)
			.field("refreshing", &self.coordinator.is_refreshing())
			.field("queued_waiters", &self.coordinator.queued_waiters())
			.finish()
	}
}
