//! Caller-facing request options and the replayable request descriptor.

// crates.io
use http::header::CONTENT_TYPE;
// self
use crate::{
	_prelude::*,
	auth::{AUTHORIZATION, TokenSecret, bearer_header_value},
	error::{CodecError, ConfigError},
	transport::HttpRequest,
};

/// Extra per-request options.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
	/// Headers merged into the request; `Authorization` is overwritten when a token is stored.
	pub headers: HeaderMap,
}
impl RequestOptions {
	/// Creates empty options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a typed header.
	pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
		self.headers.insert(name, value);

		self
	}

	/// Adds a header from raw strings, validating both parts.
	pub fn try_header(self, name: &str, value: &str) -> Result<Self, ConfigError> {
		let invalid = || ConfigError::InvalidHeaderValue { name: name.to_owned() };
		let name = HeaderName::try_from(name).map_err(|_| invalid())?;
		let value = HeaderValue::try_from(value).map_err(|_| invalid())?;

		Ok(self.header(name, value))
	}
}

/// Snapshot of a request sufficient to re-issue it verbatim after a refresh.
///
/// The `Authorization` header is not part of the snapshot; it is derived from the credential
/// store each time the request is issued.
#[derive(Clone, Debug)]
pub struct PreparedRequest {
	/// HTTP method.
	pub method: Method,
	/// Path as supplied by the caller, used for refresh-exclusion matching.
	pub path: String,
	/// Base URL joined with `path`.
	pub url: Url,
	/// Caller headers, including `Content-Type` for JSON bodies.
	pub headers: HeaderMap,
	/// Serialized body.
	pub body: Option<Vec<u8>>,
}
impl PreparedRequest {
	pub(crate) fn new(method: Method, path: &str, url: Url, options: RequestOptions) -> Self {
		Self { method, path: path.to_owned(), url, headers: options.headers, body: None }
	}

	/// Attaches a JSON body, defaulting `Content-Type` to `application/json` unless the caller
	/// already set one.
	pub(crate) fn with_json<B>(mut self, payload: &B) -> Result<Self, CodecError>
	where
		B: ?Sized + Serialize,
	{
		let body = serde_json::to_vec(payload).map_err(CodecError::Encode)?;

		if !self.headers.contains_key(CONTENT_TYPE) {
			self.headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
		}

		self.body = Some(body);

		Ok(self)
	}

	/// Attaches a raw body without touching headers.
	pub(crate) fn with_body(mut self, body: Option<Vec<u8>>) -> Self {
		self.body = body;

		self
	}

	/// Builds the outbound request, adding `Authorization: Bearer <token>` for a non-empty token.
	pub(crate) fn authorize(&self, token: Option<TokenSecret>) -> Result<HttpRequest, ConfigError> {
		let mut headers = self.headers.clone();

		if let Some(token) = token.filter(|token| !token.is_empty()) {
			headers.insert(AUTHORIZATION, bearer_header_value(&token)?);
		}

		Ok(HttpRequest {
			method: self.method.clone(),
			url: self.url.clone(),
			headers,
			body: self.body.clone(),
		})
	}
}
