//! Drives the connection-test endpoints of a running backend through the interceptor.
//!
//! 1. Seed a [`MemoryCredentialStore`] with the token from `API_TOKEN` (or a placeholder).
//! 2. Build an [`Interceptor`] against `API_BASE_URL` (default `http://localhost:3000`).
//! 3. Exercise `GET`/`POST` on `/connection-test/common`, then the error and unauthorized routes
//!    to show how [`Error`] variants surface.

// std
use std::{env, sync::Arc};
// crates.io
use color_eyre::Result;
use serde_json::json;
// self
use bearer_interceptor::{
	auth::{ACCESS_TOKEN_KEY, FnRefresher, TokenRefresher},
	config::InterceptorConfig,
	error::{Error, RefreshError},
	interceptor::{Interceptor, RequestOptions},
	store::{CredentialStore, MemoryCredentialStore},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let base_url = env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into());
	let token = env::var("API_TOKEN").unwrap_or_else(|_| "demo-token".into());
	let store = Arc::new(MemoryCredentialStore::with_entry(ACCESS_TOKEN_KEY, token));
	let refresher: Arc<dyn TokenRefresher> = Arc::new(FnRefresher::new(|| async {
		Err(RefreshError::new("no refresh endpoint is configured for this demo"))
	}));
	let config = InterceptorConfig::builder(base_url).build()?;
	let interceptor = Interceptor::new(config, store as Arc<dyn CredentialStore>, refresher);
	let common = interceptor.get("/connection-test/common", RequestOptions::new()).await?;

	println!("GET /connection-test/common -> {common:?}.");

	let echoed = interceptor
		.post("/connection-test/common", &json!({ "message": "hej" }), RequestOptions::new())
		.await?;

	println!("POST /connection-test/common -> {echoed:?}.");

	for path in ["/connection-test/error", "/connection-test/unauthorized"] {
		match interceptor.get(path, RequestOptions::new()).await {
			Ok(body) => println!("GET {path} unexpectedly succeeded: {body:?}."),
			Err(Error::Fetch(e)) => println!("GET {path} failed with {}: {:?}.", e.status, e.body),
			Err(Error::Refresh(e)) => println!("GET {path} could not refresh: {e}."),
			Err(Error::Retry(e)) =>
				println!("GET {path} failed after replay with {}.", e.response.status),
			Err(e) => return Err(e.into()),
		}
	}

	println!("Refresh attempts recorded: {}.", interceptor.refresh_metrics.attempts());

	Ok(())
}
