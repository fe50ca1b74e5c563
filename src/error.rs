//! Interceptor-level error types shared across dispatch, refresh, stores, and transports.

// self
use crate::{_prelude::*, interceptor::ResponseBody, transport::HttpResponse};

/// Interceptor-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;
type SharedError = Arc<dyn std::error::Error + Send + Sync>;

/// Canonical interceptor error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Credential store failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Transport failure before any response was received (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Request or response body could not be encoded or decoded.
	#[error(transparent)]
	Codec(#[from] CodecError),
	/// Backend answered with a non-success status outside the refresh path.
	#[error(transparent)]
	Fetch(#[from] FetchError),
	/// Replayed request still failed after a successful token refresh.
	#[error(transparent)]
	Retry(#[from] RetryError),
	/// External token refresh failed.
	#[error(transparent)]
	Refresh(#[from] RefreshError),
}
impl Error {
	/// Returns the HTTP status attached to fetch and retry failures.
	pub fn status(&self) -> Option<StatusCode> {
		match self {
			Self::Fetch(err) => Some(err.status),
			Self::Retry(err) => Some(err.response.status),
			_ => None,
		}
	}
}

/// Configuration and validation failures raised while building an interceptor.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base URL cannot be parsed.
	#[error("Base URL `{url}` is invalid.")]
	InvalidBaseUrl {
		/// Raw base URL that failed validation.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL uses a scheme other than http or https.
	#[error("Base URL must use http or https: {url}.")]
	UnsupportedScheme {
		/// Raw base URL that failed validation.
		url: String,
	},
	/// Base URL joined with the request path does not form a valid URL.
	#[error("Request URL `{url}` is invalid.")]
	InvalidRequestUrl {
		/// Concatenated URL that failed validation.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// A refresh-exclusion rule carries an empty pattern.
	#[error("Refresh exclusion rules must not be empty.")]
	EmptyExclusionRule,
	/// A header supplied by the caller or the credential store is not a valid header value.
	#[error("Header `{name}` carries an invalid value.")]
	InvalidHeaderValue {
		/// Header name.
		name: String,
	},
	/// Serialized configuration could not be parsed.
	#[error("Interceptor configuration is malformed.")]
	Malformed {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while sending the request.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while sending the request.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Body encoding and decoding failures.
#[derive(Debug, ThisError)]
pub enum CodecError {
	/// Request payload could not be serialized as JSON.
	#[error("Request payload could not be serialized as JSON.")]
	Encode(#[source] serde_json::Error),
	/// Response declared a JSON content type but the body is not valid JSON.
	#[error("Response body declared as JSON could not be parsed.")]
	MalformedJson(#[source] serde_json::Error),
	/// JSON response does not match the requested type.
	#[error("Response body does not match the expected shape at `{path}`.")]
	Shape {
		/// JSON path of the first mismatch.
		path: String,
		/// Underlying deserialization failure.
		#[source]
		source: serde_json::Error,
	},
	/// Caller asked for JSON but the response was text.
	#[error("Response body is text, not JSON.")]
	NotJson,
}
impl From<serde_path_to_error::Error<serde_json::Error>> for CodecError {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let path = e.path().to_string();

		Self::Shape { path, source: e.into_inner() }
	}
}

/// Non-success response that was not handled by the refresh-and-retry path.
#[derive(Debug, ThisError)]
#[error("Fetch error: backend responded with status {status}.")]
pub struct FetchError {
	/// HTTP status returned by the backend.
	pub status: StatusCode,
	/// Best-effort parsed error body; `None` when the body could not be parsed.
	pub body: Option<ResponseBody>,
}

/// Raw failing response returned by a request replayed after a successful refresh.
#[derive(Debug, ThisError)]
#[error("Request replayed after token refresh failed with status {}.", .response.status)]
pub struct RetryError {
	/// Raw response of the replayed request.
	pub response: HttpResponse,
}

/// Failure reported by a [`TokenRefresher`](crate::auth::TokenRefresher).
///
/// Cloneable so one failed refresh can be delivered to every queued waiter.
#[derive(Clone, Debug, ThisError)]
#[error("Access token refresh failed: {message}.")]
pub struct RefreshError {
	/// Refresher-supplied summary of the failure.
	pub message: String,
	#[source]
	source: Option<SharedError>,
}
impl RefreshError {
	/// Creates a refresh error with a message and no underlying source.
	pub fn new(message: impl Into<String>) -> Self {
		Self { message: message.into(), source: None }
	}

	/// Creates a refresh error that wraps the refresher's own failure.
	pub fn with_source(
		message: impl Into<String>,
		src: impl 'static + Send + Sync + std::error::Error,
	) -> Self {
		Self { message: message.into(), source: Some(Arc::new(src)) }
	}

	pub(crate) fn abandoned() -> Self {
		Self::new("the refresh in flight was dropped before it settled")
	}
}
