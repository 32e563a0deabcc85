use std::net::TcpListener;
use std::time::Duration;

use crate::builders::{ClientBuilder, GroomingApiClientBuilder};
use crate::{GroomingApiClient, OfflineMode, Result};

/// Returns the base URL of a local port nobody listens on.
///
/// The port is bound and released right away, so connections to it are
/// refused instead of timing out.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind(("127.0.0.1", 0)).expect("Failed to bind");
    let port = listener.local_addr().expect("Bound socket has an address").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Creates a [`GroomingApiClient`] scanning `base_urls` with a short
/// per-attempt timeout and the bundled fallback snapshot.
pub fn create_client<S: AsRef<str>>(
    base_urls: &[S],
    attempt_timeout: Duration,
) -> Result<GroomingApiClient> {
    create_client_with_offline_mode(base_urls, attempt_timeout, OfflineMode::default())
}

pub fn create_client_with_offline_mode<S: AsRef<str>>(
    base_urls: &[S],
    attempt_timeout: Duration,
    offline_mode: OfflineMode,
) -> Result<GroomingApiClient> {
    GroomingApiClientBuilder::new()
        .base_urls(base_urls)
        .attempt_timeout(attempt_timeout)
        .user_agent("grooming-api-client/test")
        .offline_mode(offline_mode)
        .build()
}
