// (C) Copyright IBM Corp. 2025.
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

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::errors::{DeserializationError, Error, Result};
use crate::models::{Booking, Rating, Service, Stylist, User};

static BUNDLED: OnceLock<FallbackSnapshot> = OnceLock::new();

/// Read-only table of records used when no endpoint can be reached.
///
/// The JSON representation is the one of the mock server database: one
/// top-level array per resource type. Missing arrays are read as empty and
/// unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FallbackSnapshot {
    #[serde(default)]
    pub(crate) users: Vec<User>,
    #[serde(default)]
    pub(crate) stylists: Vec<Stylist>,
    #[serde(default)]
    pub(crate) services: Vec<Service>,
    #[serde(default)]
    pub(crate) bookings: Vec<Booking>,
    #[serde(default)]
    pub(crate) ratings: Vec<Rating>,
}

impl FallbackSnapshot {
    /// The snapshot compiled into the crate. Built on first use and shared
    /// for the rest of the process.
    pub fn bundled() -> &'static FallbackSnapshot {
        BUNDLED.get_or_init(super::bundled::bundled_snapshot)
    }

    /// Loads a snapshot from a JSON file, typically a copy of the mock
    /// server database.
    pub fn from_file(filepath: &std::path::Path) -> Result<Self> {
        let file = std::fs::File::open(filepath).map_err(|_| {
            Error::Other(format!(
                "File '{}' doesn't exist or cannot be read",
                filepath.display()
            ))
        })?;
        let reader = std::io::BufReader::new(file);

        serde_json::from_reader(reader).map_err(|e| {
            Error::DeserializationError(DeserializationError {
                string: format!(
                    "Error deserializing fallback snapshot from file '{}'",
                    filepath.display()
                ),
                source: e.into(),
            })
        })
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn stylists(&self) -> &[Stylist] {
        &self.stylists
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rstest::*;
    use std::path::PathBuf;

    #[fixture]
    // Provides the path to the snapshot data file
    pub(crate) fn example_snapshot_path() -> PathBuf {
        let mut mocked_data = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        mocked_data.push("data/fallback-snapshot.json");
        mocked_data
    }

    #[test]
    fn test_bundled_snapshot_contents() {
        let snapshot = FallbackSnapshot::bundled();
        assert_eq!(snapshot.users().len(), 1);
        assert_eq!(snapshot.users()[0].name, "Yassine");
        assert_eq!(snapshot.stylists()[0].name, "Hassan the Barber");
        let services: Vec<&str> = snapshot.services().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            services,
            vec!["Haircut", "Beard Trim", "Braids", "Full Service"]
        );
        assert_eq!(snapshot.bookings()[0].id, 101);
        assert_eq!(snapshot.ratings()[0].comment, "Clean fade, came fast.");
    }

    #[test]
    fn test_bundled_snapshot_is_built_once() {
        let first = FallbackSnapshot::bundled();
        let second = FallbackSnapshot::bundled();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_bundled_dates() {
        let snapshot = FallbackSnapshot::bundled();
        assert_eq!(
            snapshot.bookings()[0].datetime.to_rfc3339(),
            "2025-04-10T14:30:00+00:00"
        );
        assert_eq!(
            snapshot.ratings()[0].timestamp.to_rfc3339(),
            "2025-04-05T16:00:00+00:00"
        );
    }

    #[rstest]
    fn test_from_file(example_snapshot_path: PathBuf) {
        let snapshot = FallbackSnapshot::from_file(&example_snapshot_path).unwrap();
        assert_eq!(snapshot.stylists().len(), 2);
        assert_eq!(snapshot.stylists()[1].name, "Karim Cuts");
        assert_eq!(snapshot.bookings().len(), 2);
        assert_eq!(snapshot.services().len(), 4);
    }

    #[test]
    fn test_from_missing_file() {
        let result = FallbackSnapshot::from_file(std::path::Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(Error::Other(_))));
    }

    #[test]
    fn test_missing_tables_are_empty() {
        let snapshot: FallbackSnapshot =
            serde_json::from_str(r#"{"services": [{"id": 9, "name": "Wash", "price": 20}], "profile": {}}"#)
                .unwrap();
        assert_eq!(snapshot.services().len(), 1);
        assert!(snapshot.stylists().is_empty());
        assert!(snapshot.users().is_empty());
    }
}
