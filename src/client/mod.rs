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

pub(crate) mod configuration;
mod fetch_outcome;
mod grooming_api_client;
pub(crate) mod resource;

pub use configuration::{
    ClientConfig, BASE_URLS_ENV, DEFAULT_ATTEMPT_TIMEOUT, DEFAULT_USER_AGENT, TIMEOUT_MS_ENV,
};
pub use fetch_outcome::FetchOutcome;
pub use grooming_api_client::GroomingApiClient;
pub use resource::{RecordFilter, Resource, ResourceKind};
