//! Credential-store contract and built-in implementations holding the current access token.

pub mod file;
pub mod memory;

pub use file::FileCredentialStore;
pub use memory::MemoryCredentialStore;

// self
use crate::{_prelude::*, auth::TokenSecret};

/// Key-value store holding access tokens, read before every dispatched request.
///
/// Reads must be cheap and non-blocking because the interceptor consults the store on every
/// request and again before each replay. Writes come from the
/// [`TokenRefresher`](crate::auth::TokenRefresher) implementation.
pub trait CredentialStore
where
	Self: Send + Sync,
{
	/// Returns the secret stored under `key`, if any.
	fn get(&self, key: &str) -> Option<TokenSecret>;

	/// Stores or replaces the secret under `key`.
	fn set(&self, key: &str, value: TokenSecret) -> Result<(), StoreError>;

	/// Removes the secret under `key`, returning the previous value.
	fn remove(&self, key: &str) -> Result<Option<TokenSecret>, StoreError>;
}

/// Error type produced by [`CredentialStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}
