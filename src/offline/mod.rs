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

mod bundled;
pub(crate) mod snapshot;

pub use snapshot::FallbackSnapshot;

/// Defines the behaviour of read operations when none of the candidate
/// endpoints can be used. Write operations always fail in that situation.
#[derive(Debug, Clone)]
pub enum OfflineMode {
    /// Reads return [`FetchOutcome::Failed`](crate::FetchOutcome::Failed).
    Fail,

    /// Reads are answered from the provided snapshot.
    FallbackData(FallbackSnapshot),
}

impl OfflineMode {
    pub(crate) fn snapshot(&self) -> Option<&FallbackSnapshot> {
        match self {
            OfflineMode::Fail => None,
            OfflineMode::FallbackData(snapshot) => Some(snapshot),
        }
    }
}

impl Default for OfflineMode {
    /// Falls back to the snapshot bundled with the crate.
    fn default() -> Self {
        OfflineMode::FallbackData(FallbackSnapshot::bundled().clone())
    }
}
