// self
use crate::_prelude::*;

/// How a [`PathRule`] compares its pattern against a request path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
	/// Path equals the pattern.
	Exact,
	/// Path starts with the pattern.
	Prefix,
	/// Path contains the pattern anywhere.
	Substring,
}

/// Request-path matcher tagged with its comparison mode.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathRule {
	/// Comparison mode.
	pub kind: MatchKind,
	/// Pattern compared against the request path (before base-URL resolution).
	pub pattern: String,
}
impl PathRule {
	/// Matches paths equal to `pattern`.
	pub fn exact(pattern: impl Into<String>) -> Self {
		Self { kind: MatchKind::Exact, pattern: pattern.into() }
	}

	/// Matches paths starting with `pattern`.
	pub fn prefix(pattern: impl Into<String>) -> Self {
		Self { kind: MatchKind::Prefix, pattern: pattern.into() }
	}

	/// Matches paths containing `pattern`.
	pub fn substring(pattern: impl Into<String>) -> Self {
		Self { kind: MatchKind::Substring, pattern: pattern.into() }
	}

	/// Checks the rule against a request path.
	pub fn matches(&self, path: &str) -> bool {
		match self.kind {
			MatchKind::Exact => path == self.pattern,
			MatchKind::Prefix => path.starts_with(&self.pattern),
			MatchKind::Substring => path.contains(&self.pattern),
		}
	}

	pub(crate) fn is_empty(&self) -> bool {
		self.pattern.is_empty()
	}
}
