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

use serde::de::DeserializeOwned;

use crate::models::{Booking, RecordId, Rating, Service, Stylist, User};
use crate::offline::FallbackSnapshot;

/// Named category of records, each with its own endpoint and fallback table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    User,
    Stylist,
    Service,
    Booking,
    Rating,
}

impl ResourceKind {
    pub fn collection_path(&self) -> &'static str {
        match self {
            ResourceKind::User => "/users",
            ResourceKind::Stylist => "/stylists",
            ResourceKind::Service => "/services",
            ResourceKind::Booking => "/bookings",
            ResourceKind::Rating => "/ratings",
        }
    }

    pub fn item_path(&self, id: RecordId) -> String {
        format!("{}/{id}", self.collection_path())
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::User => write!(f, "user"),
            ResourceKind::Stylist => write!(f, "stylist"),
            ResourceKind::Service => write!(f, "service"),
            ResourceKind::Booking => write!(f, "booking"),
            ResourceKind::Rating => write!(f, "rating"),
        }
    }
}

/// Narrows a collection read to the records owned by a user or a stylist.
///
/// Sent to the server as a query parameter and applied locally when the
/// fallback snapshot answers instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFilter {
    ByUser(RecordId),
    ByStylist(RecordId),
}

impl RecordFilter {
    pub(crate) fn query_pair(&self) -> (&'static str, RecordId) {
        match self {
            RecordFilter::ByUser(id) => ("user_id", *id),
            RecordFilter::ByStylist(id) => ("stylist_id", *id),
        }
    }

    pub(crate) fn matches<T: Resource>(&self, record: &T) -> bool {
        match self {
            RecordFilter::ByUser(id) => record.user_id() == Some(*id),
            RecordFilter::ByStylist(id) => record.stylist_id() == Some(*id),
        }
    }
}

/// A record type served by the API.
pub trait Resource: DeserializeOwned + Clone {
    const KIND: ResourceKind;

    fn id(&self) -> RecordId;

    /// Records of this type in `snapshot`.
    fn fallback_table(snapshot: &FallbackSnapshot) -> &[Self];

    fn user_id(&self) -> Option<RecordId> {
        None
    }

    fn stylist_id(&self) -> Option<RecordId> {
        None
    }
}

impl Resource for User {
    const KIND: ResourceKind = ResourceKind::User;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fallback_table(snapshot: &FallbackSnapshot) -> &[Self] {
        snapshot.users()
    }

    fn user_id(&self) -> Option<RecordId> {
        Some(self.id)
    }
}

impl Resource for Stylist {
    const KIND: ResourceKind = ResourceKind::Stylist;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fallback_table(snapshot: &FallbackSnapshot) -> &[Self] {
        snapshot.stylists()
    }

    fn stylist_id(&self) -> Option<RecordId> {
        Some(self.id)
    }
}

impl Resource for Service {
    const KIND: ResourceKind = ResourceKind::Service;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fallback_table(snapshot: &FallbackSnapshot) -> &[Self] {
        snapshot.services()
    }
}

impl Resource for Booking {
    const KIND: ResourceKind = ResourceKind::Booking;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fallback_table(snapshot: &FallbackSnapshot) -> &[Self] {
        snapshot.bookings()
    }

    fn user_id(&self) -> Option<RecordId> {
        Some(self.user_id)
    }

    fn stylist_id(&self) -> Option<RecordId> {
        Some(self.stylist_id)
    }
}

impl Resource for Rating {
    const KIND: ResourceKind = ResourceKind::Rating;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fallback_table(snapshot: &FallbackSnapshot) -> &[Self] {
        snapshot.ratings()
    }

    fn user_id(&self) -> Option<RecordId> {
        Some(self.user_id)
    }

    fn stylist_id(&self) -> Option<RecordId> {
        Some(self.stylist_id)
    }
}
