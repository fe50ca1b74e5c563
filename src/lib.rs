//! Bearer-token request interceptor with single-flight token refresh.
//!
//! [`Interceptor`](interceptor::Interceptor) attaches `Authorization: Bearer <token>` from a
//! [`CredentialStore`](store::CredentialStore), dispatches through any
//! [`HttpTransport`](transport::HttpTransport), and when the backend answers `401` it runs exactly
//! one [`TokenRefresher`](auth::TokenRefresher) call while every other concurrent `401` waits
//! in a queue and is replayed once the refresh settles.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod obs;
pub mod store;
pub mod transport;
#[cfg(feature = "reqwest")]
#[doc(hidden)]
pub mod _preludet {
	//! Convenience re-exports and helpers shared by unit and integration tests.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::TokenRefresher,
		config::InterceptorConfig,
		interceptor::Interceptor,
		store::{CredentialStore, MemoryCredentialStore},
		transport::ReqwestTransport,
	};

	/// Interceptor type alias used by reqwest-backed integration tests.
	pub type ReqwestTestInterceptor = Interceptor<ReqwestTransport>;

	/// Builds a reqwest transport for talking to `httpmock` servers during tests.
	pub fn test_reqwest_transport() -> ReqwestTransport {
		let client = ReqwestClient::builder()
			.no_proxy()
			.build()
			.expect("Failed to build Reqwest client for tests.");

		ReqwestTransport::with_client(client)
	}

	/// Constructs an [`Interceptor`] pointed at `base_url`, backed by an in-memory credential
	/// store and the reqwest transport used across integration tests.
	pub fn build_reqwest_test_interceptor(
		base_url: &str,
		refresher: Arc<dyn TokenRefresher>,
	) -> (ReqwestTestInterceptor, Arc<MemoryCredentialStore>) {
		let config = InterceptorConfig::builder(base_url)
			.build()
			.expect("Test interceptor config should be valid.");
		let store = Arc::new(MemoryCredentialStore::default());
		let interceptor = build_reqwest_test_interceptor_with(config, store.clone(), refresher);

		(interceptor, store)
	}

	/// Constructs an [`Interceptor`] from a caller-supplied config and in-memory store.
	pub fn build_reqwest_test_interceptor_with(
		config: InterceptorConfig,
		store: Arc<MemoryCredentialStore>,
		refresher: Arc<dyn TokenRefresher>,
	) -> ReqwestTestInterceptor {
		let store: Arc<dyn CredentialStore> = store;

		Interceptor::with_transport(config, store, refresher, test_reqwest_transport())
	}
}

mod _prelude {
	pub use std::{
		collections::HashMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
	pub use parking_lot::{Mutex, RwLock};
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::Result;
}

pub use http;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
