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

use crate::Error;

/// Result of a read operation.
///
/// Reads never fail only because the network is down: as long as a fallback
/// snapshot is configured, `Fallback` carries the (possibly stale) snapshot
/// data. Callers that need to show an offline indicator can match on it.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    /// Data parsed from a live server response.
    Live(T),

    /// Data taken from the fallback snapshot because no endpoint could be
    /// used or the response body was malformed.
    Fallback(T),

    /// Neither the server nor the fallback snapshot know the requested id.
    NotFound,

    /// No data could be produced.
    Failed(Error),
}

impl<T> FetchOutcome<T> {
    pub fn is_live(&self) -> bool {
        matches!(self, FetchOutcome::Live(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FetchOutcome::Fallback(_))
    }

    /// Returns the data, regardless of where it came from.
    pub fn data(self) -> Option<T> {
        match self {
            FetchOutcome::Live(data) | FetchOutcome::Fallback(data) => Some(data),
            FetchOutcome::NotFound | FetchOutcome::Failed(_) => None,
        }
    }

    pub fn as_data(&self) -> Option<&T> {
        match self {
            FetchOutcome::Live(data) | FetchOutcome::Fallback(data) => Some(data),
            FetchOutcome::NotFound | FetchOutcome::Failed(_) => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Live(data) => FetchOutcome::Live(f(data)),
            FetchOutcome::Fallback(data) => FetchOutcome::Fallback(f(data)),
            FetchOutcome::NotFound => FetchOutcome::NotFound,
            FetchOutcome::Failed(e) => FetchOutcome::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_and_map() {
        let live = FetchOutcome::Live(2).map(|v| v * 10);
        assert!(live.is_live());
        assert_eq!(live.data(), Some(20));

        let fallback = FetchOutcome::Fallback("x");
        assert!(fallback.is_fallback());
        assert_eq!(fallback.as_data(), Some(&"x"));

        let not_found: FetchOutcome<u8> = FetchOutcome::NotFound;
        assert!(not_found.map(|v| v + 1).data().is_none());

        let failed: FetchOutcome<u8> = FetchOutcome::Failed(Error::Other("boom".to_string()));
        assert!(matches!(failed.map(|v| v + 1), FetchOutcome::Failed(Error::Other(_))));
    }
}
