// std
use std::iter::IntoIterator;
// self
use crate::{
	_prelude::*,
	config::{InterceptorConfig, PathRule, default_refresh_exclusions},
	error::ConfigError,
};

/// Builder for [`InterceptorConfig`] values.
#[derive(Debug)]
pub struct InterceptorConfigBuilder {
	/// Base URL every request path is appended to.
	pub base_url: String,
	/// Refresh-exclusion rules; seeded with the defaults.
	pub refresh_exclusions: Vec<PathRule>,
}
impl InterceptorConfigBuilder {
	/// Creates a new builder seeded with the default exclusions.
	pub fn new(base_url: impl Into<String>) -> Self {
		Self { base_url: base_url.into(), refresh_exclusions: default_refresh_exclusions() }
	}

	/// Adds one refresh-exclusion rule.
	pub fn exclude(mut self, rule: PathRule) -> Self {
		self.refresh_exclusions.push(rule);

		self
	}

	/// Adds multiple refresh-exclusion rules.
	pub fn exclusions<I>(mut self, rules: I) -> Self
	where
		I: IntoIterator<Item = PathRule>,
	{
		self.refresh_exclusions.extend(rules);

		self
	}

	/// Drops every exclusion, including the defaults.
	pub fn clear_exclusions(mut self) -> Self {
		self.refresh_exclusions.clear();

		self
	}

	/// Validates and produces the config.
	pub fn build(self) -> Result<InterceptorConfig, ConfigError> {
		InterceptorConfig { base_url: self.base_url, refresh_exclusions: self.refresh_exclusions }
			.validate()
	}
}
