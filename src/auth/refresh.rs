//! Token-refresh boundary invoked when the backend rejects the current access token.
//!
//! A [`TokenRefresher`] is a zero-argument async operation: completing successfully means the
//! credential store now holds a fresh access token, failing means every request waiting on the
//! refresh is rejected with the same [`RefreshError`].

// self
use crate::{_prelude::*, error::RefreshError};

/// Boxed future returned by [`TokenRefresher::refresh`].
pub type RefreshFuture<'a> = Pin<Box<dyn Future<Output = Result<(), RefreshError>> + 'a + Send>>;

/// Obtains a new access token and writes it into the credential store.
pub trait TokenRefresher
where
	Self: Send + Sync,
{
	/// Runs one refresh attempt.
	fn refresh(&self) -> RefreshFuture<'_>;
}

/// Adapts an async closure into a [`TokenRefresher`].
pub struct FnRefresher<F>(F);
impl<F, Fut> FnRefresher<F>
where
	F: Fn() -> Fut + Send + Sync,
	Fut: 'static + Send + Future<Output = Result<(), RefreshError>>,
{
	/// Wraps the provided closure.
	pub fn new(f: F) -> Self {
		Self(f)
	}
}
impl<F, Fut> TokenRefresher for FnRefresher<F>
where
	F: Fn() -> Fut + Send + Sync,
	Fut: 'static + Send + Future<Output = Result<(), RefreshError>>,
{
	fn refresh(&self) -> RefreshFuture<'_> {
		Box::pin((self.0)())
	}
}
impl<F> Debug for FnRefresher<F> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("FnRefresher(..)")
	}
}

/// Placeholder refresher that succeeds without touching the credential store.
///
/// Requests replayed after this refresher runs reuse whatever token is already stored, so a
/// backend that keeps answering `401` surfaces as [`RetryError`](crate::error::RetryError).
/// Replace it with a real implementation before relying on refresh.
#[derive(Clone, Copy, Debug, Default)]
pub struct StubRefresher;
impl TokenRefresher for StubRefresher {
	fn refresh(&self) -> RefreshFuture<'_> {
		Box::pin(async {
			#[cfg(feature = "tracing")]
			tracing::warn!("StubRefresher invoked; no access token was requested.");

			Ok(())
		})
	}
}
