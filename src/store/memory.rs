//! Thread-safe in-memory [`CredentialStore`] implementation.

// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	store::{CredentialStore, StoreError},
};

/// In-process credential store; clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentialStore(Arc<RwLock<HashMap<String, TokenSecret>>>);
impl MemoryCredentialStore {
	/// Creates a store seeded with one entry.
	pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
		let store = Self::default();

		store.0.write().insert(key.into(), TokenSecret::new(value));

		store
	}
}
impl CredentialStore for MemoryCredentialStore {
	fn get(&self, key: &str) -> Option<TokenSecret> {
		self.0.read().get(key).cloned()
	}

	fn set(&self, key: &str, value: TokenSecret) -> Result<(), StoreError> {
		self.0.write().insert(key.to_owned(), value);

		Ok(())
	}

	fn remove(&self, key: &str) -> Result<Option<TokenSecret>, StoreError> {
		Ok(self.0.write().remove(key))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::auth::ACCESS_TOKEN_KEY;

	#[test]
	fn set_get_remove() {
		let store = MemoryCredentialStore::default();

		assert!(store.get(ACCESS_TOKEN_KEY).is_none());

		store
			.set(ACCESS_TOKEN_KEY, TokenSecret::new("token-1"))
			.expect("Memory store writes never fail.");

		assert_eq!(
			store.get(ACCESS_TOKEN_KEY).map(|s| s.expose().to_owned()),
			Some("token-1".into())
		);

		let removed = store.remove(ACCESS_TOKEN_KEY).expect("Memory store removals never fail.");

		assert_eq!(removed, Some(TokenSecret::new("token-1")));
		assert!(store.get(ACCESS_TOKEN_KEY).is_none());
	}

	#[test]
	fn clones_share_entries() {
		let store = MemoryCredentialStore::with_entry(ACCESS_TOKEN_KEY, "shared");
		let clone = store.clone();

		clone
			.set(ACCESS_TOKEN_KEY, TokenSecret::new("rotated"))
			.expect("Memory store writes never fail.");

		assert_eq!(store.get(ACCESS_TOKEN_KEY), Some(TokenSecret::new("rotated")));
	}
}
