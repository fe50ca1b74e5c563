//! Access-token secrets, bearer header construction, and the token-refresh boundary.

pub mod refresh;
pub mod secret;

pub use refresh::*;
pub use secret::*;

// self
use crate::{_prelude::*, error::ConfigError};

/// Credential-store key under which the current access token lives.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Header carrying the access token.
pub const AUTHORIZATION: HeaderName = http::header::AUTHORIZATION;
/// Authorization scheme prefixed to the access token.
pub const BEARER_SCHEME: &str = "Bearer";

/// Builds the `Bearer <token>` header value, marked sensitive so it is redacted in debug output.
pub fn bearer_header_value(token: &TokenSecret) -> Result<HeaderValue, ConfigError> {
	let mut value = HeaderValue::try_from(format!("{BEARER_SCHEME} {}", token.expose()))
		.map_err(|_| ConfigError::InvalidHeaderValue { name: AUTHORIZATION.to_string() })?;

	value.set_sensitive(true);

	Ok(value)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn bearer_value_prefixes_scheme() {
		let value = bearer_header_value(&TokenSecret::new("test-token-123"))
			.expect("Bearer header should build from a plain token.");

		assert_eq!(value, "Bearer test-token-123");
		assert!(value.is_sensitive());
	}

	#[test]
	fn bearer_value_rejects_control_characters() {
		let err = bearer_header_value(&TokenSecret::new("bad\ntoken"))
			.expect_err("Tokens with newlines cannot be sent as headers.");

		assert!(matches!(err, ConfigError::InvalidHeaderValue { .. }));
	}
}
