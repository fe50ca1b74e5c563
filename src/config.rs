//! Interceptor configuration: base URL and refresh-exclusion rules.
//!
//! The credential-store key, authorization header, and scheme are fixed; see
//! [`ACCESS_TOKEN_KEY`](crate::auth::ACCESS_TOKEN_KEY),
//! [`AUTHORIZATION`](crate::auth::AUTHORIZATION), and
//! [`BEARER_SCHEME`](crate::auth::BEARER_SCHEME).

/// Builder API for assembling interceptor configs.
pub mod builder;
/// Path-matching rules that opt requests out of refresh handling.
pub mod rule;

pub use builder::*;
pub use rule::*;

// self
use crate::{_prelude::*, error::ConfigError};

/// Validated interceptor configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterceptorConfig {
	/// Base URL every request path is appended to.
	pub base_url: String,
	/// Paths whose `401` responses are returned as ordinary fetch errors.
	#[serde(default = "default_refresh_exclusions")]
	pub refresh_exclusions: Vec<PathRule>,
}
impl InterceptorConfig {
	/// Creates a new builder for the provided base URL.
	pub fn builder(base_url: impl Into<String>) -> InterceptorConfigBuilder {
		InterceptorConfigBuilder::new(base_url)
	}

	/// Parses and validates a JSON configuration document.
	///
	/// Missing `refresh_exclusions` fall back to the default exact `/auth/login` rule.
	pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
		let mut de = serde_json::Deserializer::from_str(raw);
		let config: Self = serde_path_to_error::deserialize(&mut de)
			.map_err(|source| ConfigError::Malformed { source })?;

		config.validate()
	}

	/// Returns `true` when a `401` on `path` must not trigger a refresh.
	pub fn is_refresh_excluded(&self, path: &str) -> bool {
		self.refresh_exclusions.iter().any(|rule| rule.matches(path))
	}

	/// Resolves the absolute URL for `path` by concatenating it onto the base URL.
	pub fn resolve(&self, path: &str) -> Result<Url, ConfigError> {
		let raw = format!("{}{path}", self.base_url);

		Url::parse(&raw).map_err(|source| ConfigError::InvalidRequestUrl { url: raw, source })
	}

	pub(crate) fn validate(self) -> Result<Self, ConfigError> {
		let parsed = Url::parse(&self.base_url)
			.map_err(|source| ConfigError::InvalidBaseUrl { url: self.base_url.clone(), source })?;

		if !matches!(parsed.scheme(), "http" | "https") {
			return Err(ConfigError::UnsupportedScheme { url: self.base_url });
		}
		if self.refresh_exclusions.iter().any(PathRule::is_empty) {
			return Err(ConfigError::EmptyExclusionRule);
		}

		Ok(self)
	}
}

/// Default refresh exclusions: the login endpoint, matched exactly.
pub fn default_refresh_exclusions() -> Vec<PathRule> {
	vec![PathRule::exact("/auth/login")]
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn resolve_concatenates_without_normalizing() {
		let config = InterceptorConfig::builder("http://localhost:3000/api")
			.build()
			.expect("Config fixture should be valid.");
		let url = config.resolve("/connection-test/common").expect("Path should resolve.");

		assert_eq!(url.as_str(), "http://localhost:3000/api/connection-test/common");
	}

	#[test]
	fn login_is_excluded_by_default() {
		let config = InterceptorConfig::builder("http://localhost:3000")
			.build()
			.expect("Config fixture should be valid.");

		assert!(config.is_refresh_excluded("/auth/login"));
		assert!(!config.is_refresh_excluded("/auth/login/extra"));
		assert!(!config.is_refresh_excluded("/api/test"));
	}

	#[test]
	fn from_json_applies_defaults() {
		let config = InterceptorConfig::from_json(r#"{"base_url":"https://api.example.com"}"#)
			.expect("Minimal JSON config should parse.");

		assert_eq!(config.refresh_exclusions, default_refresh_exclusions());
	}

	#[test]
	fn from_json_reports_offending_path() {
		let err = InterceptorConfig::from_json(
			r#"{"base_url":"https://api.example.com","refresh_exclusions":[{"kind":"glob","pattern":"/x"}]}"#,
		)
		.expect_err("Unknown rule kinds should be rejected.");

		match err {
			ConfigError::Malformed { source } =>
				assert!(source.path().to_string().starts_with("refresh_exclusions[0]")),
			other => panic!("Unexpected error: {other:?}"),
		}
	}

	#[test]
	fn from_json_validates_base_url() {
		let err = InterceptorConfig::from_json(r#"{"base_url":"ftp://files.example.com"}"#)
			.expect_err("Non-HTTP schemes should be rejected.");

		assert!(matches!(err, ConfigError::UnsupportedScheme { .. }));
	}
}
