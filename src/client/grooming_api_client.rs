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

use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::configuration::ClientConfig;
use super::fetch_outcome::FetchOutcome;
use super::resource::{RecordFilter, Resource, ResourceKind};
use crate::errors::{DeserializationError, Error, Result};
use crate::models::{
    Booking, BookingUpdate, NewBooking, NewRating, Rating, RecordId, Service, Stylist, User,
};
use crate::network::{CancellationToken, EndpointResolver, RequestOptions};
use crate::OfflineMode;

/// Client for the booking API.
///
/// Every request scans the configured candidates in order (see
/// [`EndpointResolver`]). Reads degrade to the fallback snapshot of the
/// [`OfflineMode`] when the scan is exhausted or the body cannot be parsed;
/// writes report an error instead.
///
/// The client holds no mutable state and can be shared between threads.
#[derive(Debug, Clone)]
pub struct GroomingApiClient {
    resolver: EndpointResolver,
    offline_mode: OfflineMode,
}

impl GroomingApiClient {
    /// Creates a new [`GroomingApiClient`] using the candidates, timeout and
    /// offline behaviour given in `config`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let resolver =
            EndpointResolver::new(config.candidates, config.attempt_timeout, config.user_agent)?;
        Ok(Self {
            resolver,
            offline_mode: config.offline_mode,
        })
    }

    pub fn resolver(&self) -> &EndpointResolver {
        &self.resolver
    }

    pub fn offline_mode(&self) -> &OfflineMode {
        &self.offline_mode
    }

    pub fn get_stylists(&self) -> FetchOutcome<Vec<Stylist>> {
        self.fetch_collection(None, None)
    }

    pub fn get_stylist(&self, id: RecordId) -> FetchOutcome<Stylist> {
        self.fetch_by_id(id, None)
    }

    pub fn get_services(&self) -> FetchOutcome<Vec<Service>> {
        self.fetch_collection(None, None)
    }

    pub fn get_service(&self, id: RecordId) -> FetchOutcome<Service> {
        self.fetch_by_id(id, None)
    }

    pub fn get_bookings(&self) -> FetchOutcome<Vec<Booking>> {
        self.fetch_collection(None, None)
    }

    pub fn get_user_bookings(&self, user_id: RecordId) -> FetchOutcome<Vec<Booking>> {
        self.fetch_collection(Some(RecordFilter::ByUser(user_id)), None)
    }

    pub fn get_booking(&self, id: RecordId) -> FetchOutcome<Booking> {
        self.fetch_by_id(id, None)
    }

    pub fn get_user(&self, id: RecordId) -> FetchOutcome<User> {
        self.fetch_by_id(id, None)
    }

    pub fn get_ratings(&self) -> FetchOutcome<Vec<Rating>> {
        self.fetch_collection(None, None)
    }

    pub fn get_stylist_ratings(&self, stylist_id: RecordId) -> FetchOutcome<Vec<Rating>> {
        self.fetch_collection(Some(RecordFilter::ByStylist(stylist_id)), None)
    }

    pub fn create_booking(&self, booking: &NewBooking) -> Result<Booking> {
        self.write(
            ResourceKind::Booking.collection_path(),
            RequestOptions::post(to_json(booking)?),
        )
    }

    pub fn update_booking(&self, id: RecordId, update: &BookingUpdate) -> Result<Booking> {
        self.write(
            &ResourceKind::Booking.item_path(id),
            RequestOptions::patch(to_json(update)?),
        )
    }

    pub fn submit_rating(&self, rating: &NewRating) -> Result<Rating> {
        self.write(
            ResourceKind::Rating.collection_path(),
            RequestOptions::post(to_json(rating)?),
        )
    }

    /// Reads one record of type `T`, falling back to the snapshot record
    /// with the same id.
    pub fn fetch_by_id<T: Resource>(
        &self,
        id: RecordId,
        cancellation: Option<&CancellationToken>,
    ) -> FetchOutcome<T> {
        let path = T::KIND.item_path(id);
        match self.resolve_json::<T>(&path, &RequestOptions::get(), cancellation) {
            Ok(record) => FetchOutcome::Live(record),
            Err(e) if !should_fall_back(&e) => {
                error!("Error fetching {} with ID {id}: {e}", T::KIND);
                FetchOutcome::Failed(e)
            }
            Err(e) => {
                warn!("Error fetching {} with ID {id}: {e}", T::KIND);
                let Some(snapshot) = self.offline_mode.snapshot() else {
                    return FetchOutcome::Failed(e);
                };
                match T::fallback_table(snapshot).iter().find(|r| r.id() == id) {
                    Some(record) => {
                        warn!("Using fallback data for {} {id}", T::KIND);
                        FetchOutcome::Fallback(record.clone())
                    }
                    None => {
                        debug!("No fallback data for {} {id}", T::KIND);
                        FetchOutcome::NotFound
                    }
                }
            }
        }
    }

    /// Reads the collection of `T`, optionally filtered, falling back to the
    /// (equally filtered) snapshot table.
    pub fn fetch_collection<T: Resource>(
        &self,
        filter: Option<RecordFilter>,
        cancellation: Option<&CancellationToken>,
    ) -> FetchOutcome<Vec<T>> {
        let mut options = RequestOptions::get();
        if let Some(filter) = &filter {
            let (key, value) = filter.query_pair();
            options = options.with_query(key, value);
        }

        match self.resolve_json::<Vec<T>>(T::KIND.collection_path(), &options, cancellation) {
            Ok(records) => FetchOutcome::Live(records),
            Err(e) if !should_fall_back(&e) => {
                error!("Error fetching {} collection: {e}", T::KIND);
                FetchOutcome::Failed(e)
            }
            Err(e) => {
                warn!("Error fetching {} collection: {e}", T::KIND);
                let Some(snapshot) = self.offline_mode.snapshot() else {
                    return FetchOutcome::Failed(e);
                };
                let records: Vec<T> = T::fallback_table(snapshot)
                    .iter()
                    .filter(|record| filter.map_or(true, |f| f.matches(*record)))
                    .cloned()
                    .collect();
                warn!(
                    "Using fallback data for {} collection ({} records)",
                    T::KIND,
                    records.len()
                );
                FetchOutcome::Fallback(records)
            }
        }
    }

    fn write<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T> {
        match self.resolve_json(path, &options, None) {
            Ok(record) => Ok(record),
            Err(e) => {
                error!("Write to '{path}' failed: {e}");
                Err(e)
            }
        }
    }

    fn resolve_json<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
        cancellation: Option<&CancellationToken>,
    ) -> Result<T> {
        let response = match cancellation {
            Some(token) => self.resolver.resolve_cancellable(path, options, token)?,
            None => self.resolver.resolve(path, options)?,
        };
        serde_json::from_str(&response.body).map_err(|e| {
            Error::DeserializationError(DeserializationError {
                string: format!("Unexpected response body from '{}'", response.url),
                source: e.into(),
            })
        })
    }
}

/// Exhaustion and malformed bodies are recovered from the snapshot, anything
/// else (bad path, cancellation) is reported as is.
fn should_fall_back(error: &Error) -> bool {
    error.is_connectivity_failure() || matches!(error, Error::DeserializationError(_))
}

fn to_json<T: Serialize>(payload: &T) -> Result<serde_json::Value> {
    serde_json::to_value(payload).map_err(Error::SerializationError)
}
