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

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    #[error("Cannot parse '{0}' as URL")]
    UrlParseError(String),

    #[error("Header '{0}' has an invalid name or value")]
    InvalidHeader(String),

    #[error("Endpoint path '{0}' must start with '/'")]
    InvalidPath(String),

    #[error("Server at '{url}' answered with status {status}")]
    UnsuccessfulStatus { url: String, status: u16 },

    #[error("No reachable endpoint after {attempts} attempt(s), last error: {last}")]
    NoReachableEndpoint {
        attempts: usize,
        last: Box<NetworkError>,
    },

    #[error("Endpoint scan cancelled")]
    Cancelled,
}

impl NetworkError {
    /// Returns `true` when every candidate was tried and none of them answered
    /// with a success status.
    pub fn is_exhaustion(&self) -> bool {
        matches!(self, NetworkError::NoReachableEndpoint { .. })
    }
}
