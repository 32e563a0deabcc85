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

use serde::{Deserialize, Serialize};

use super::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// A barber or hair stylist that can be booked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stylist {
    pub id: RecordId,
    pub name: String,
    pub rating: f64,
    pub distance_km: f64,
    pub verified: bool,
    pub bio: String,
    /// Ids of the [`Service`](super::Service)s offered.
    pub services: Vec<RecordId>,
    pub gallery: Vec<String>,
    pub availability: String,
    pub location: Location,
    pub profile_picture: String,
    pub qr_link: String,
}
