//! Transport primitives for dispatching intercepted requests.
//!
//! The module exposes [`HttpTransport`] alongside the owned [`HttpRequest`] and
//! [`HttpResponse`] values it exchanges, so downstream crates can plug in any HTTP client.
//! The interceptor never inspects a transport beyond this trait: it hands over a fully
//! resolved request (URL, headers including `Authorization`, body) and reads back the status,
//! headers, and raw body bytes.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
use http::header::CONTENT_TYPE;
// self
use crate::{_prelude::*, error::TransportError};

/// Boxed future returned by [`HttpTransport::send`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP clients capable of executing intercepted requests.
///
/// Implementations must be `Send + Sync + 'static` so one transport can be shared by every
/// clone of an [`Interceptor`](crate::interceptor::Interceptor). A transport reports only
/// network-level failures as errors; every HTTP response, whatever its status, is returned as
/// `Ok`.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Sends `request` and buffers the full response.
	fn send(&self, request: HttpRequest) -> TransportFuture<'_>;
}

/// Fully resolved outbound request.
#[derive(Clone, Debug)]
pub struct HttpRequest {
	/// HTTP method.
	pub method: Method,
	/// Absolute request URL.
	pub url: Url,
	/// Request headers, including `Authorization` when a token was available.
	pub headers: HeaderMap,
	/// Serialized request body.
	pub body: Option<Vec<u8>>,
}

/// Buffered response returned by a transport.
#[derive(Clone, Debug)]
pub struct HttpResponse {
	/// Response status.
	pub status: StatusCode,
	/// Response headers.
	pub headers: HeaderMap,
	/// Raw response body.
	pub body: Vec<u8>,
}
impl HttpResponse {
	/// Creates a response with empty headers.
	pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
		Self { status, headers: HeaderMap::new(), body: body.into() }
	}

	/// Sets the `Content-Type` header.
	pub fn with_content_type(mut self, content_type: &'static str) -> Self {
		self.headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));

		self
	}

	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		self.status.is_success()
	}

	/// Returns the `Content-Type` header, or an empty string when absent or not visible ASCII.
	pub fn content_type(&self) -> &str {
		self.headers.get(CONTENT_TYPE).and_then(|value| value.to_str().ok()).unwrap_or_default()
	}

	/// Decodes the body as UTF-8, replacing invalid sequences.
	pub fn text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestTransport {
	fn send(&self, request: HttpRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let HttpRequest { method, url, headers, body } = request;
			let mut builder = client.request(method, url).headers(headers);

			if let Some(body) = body {
				builder = builder.body(body);
			}

			let response = builder.send().await?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let body = response.bytes().await?.to_vec();

			Ok(HttpResponse { status, headers, body })
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn content_type_defaults_to_empty() {
		let response = HttpResponse::new(StatusCode::OK, "Hello World");

		assert_eq!(response.content_type(), "");
		assert_eq!(response.text(), "Hello World");
	}

	#[test]
	fn content_type_reads_header() {
		let response = HttpResponse::new(StatusCode::OK, "{}")
			.with_content_type("application/json; charset=utf-8");

		assert_eq!(response.content_type(), "application/json; charset=utf-8");
		assert!(response.is_success());
	}
}
