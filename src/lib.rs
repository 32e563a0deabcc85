// (C) Copyright IBM Corp. 2024.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Data-access client for the grooming-booking API.
//!
//! The same API may be reachable under several base URLs (localhost, the
//! loopback IP, the Android emulator alias for the host...). The client tries
//! them in order, with a short timeout per attempt, and uses the first one
//! that answers with a success status.
//!
//! When none of them can be used, read operations are answered from a
//! [`FallbackSnapshot`] and tagged as [`FetchOutcome::Fallback`], so the UI
//! can keep working offline. Write operations are never faked: they return
//! an error.
//!
//! ```no_run
//! use grooming_api::{ClientConfig, FetchOutcome, GroomingApiClient};
//!
//! let client = GroomingApiClient::new(ClientConfig::from_env()?)?;
//! match client.get_stylist(1) {
//!     FetchOutcome::Live(stylist) => println!("{}", stylist.name),
//!     FetchOutcome::Fallback(stylist) => println!("{} (offline)", stylist.name),
//!     FetchOutcome::NotFound => println!("no such stylist"),
//!     FetchOutcome::Failed(e) => println!("error: {e}"),
//! }
//! # Ok::<(), grooming_api::Error>(())
//! ```

pub mod builders;
mod client;
mod errors;
pub mod models;
pub mod network;
mod offline;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

#[cfg(test)]
mod tests;

pub use builders::{ClientBuilder, GroomingApiClientBuilder};
pub use client::{
    ClientConfig, FetchOutcome, GroomingApiClient, RecordFilter, Resource, ResourceKind,
    BASE_URLS_ENV, DEFAULT_ATTEMPT_TIMEOUT, DEFAULT_USER_AGENT, TIMEOUT_MS_ENV,
};
pub use errors::{DeserializationError, DeserializationErrorKind, Error, Result};
pub use network::{CancellationToken, NetworkError, NetworkResult};
pub use offline::{FallbackSnapshot, OfflineMode};
