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

use std::path::PathBuf;
use std::time::Duration;


use crate::models::{Booking, BookingStatus, NewBooking, PaymentMethod};
use crate::offline::snapshot::tests::example_snapshot_path;
use crate::test_utils::{create_client, unreachable_base_url};
use crate::{FallbackSnapshot, GroomingApiClient};
use chrono::{TimeZone, Utc};
use httpmock::MockServer;
use rstest::fixture;

pub(crate) const ATTEMPT_TIMEOUT: Duration = Duration::from_millis(500);

#[fixture]
fn server() -> MockServer {
    MockServer::start()
}

#[fixture]
fn offline_client() -> GroomingApiClient {
    create_client(&[unreachable_base_url(), unreachable_base_url()], ATTEMPT_TIMEOUT).unwrap()
}

#[fixture]
fn example_snapshot(example_snapshot_path: PathBuf) -> FallbackSnapshot {
    FallbackSnapshot::from_file(&example_snapshot_path).unwrap()
}

#[fixture]
fn new_booking() -> NewBooking {
    NewBooking {
        user_id: 10,
        stylist_id: 1,
        service_id: 4,
        status: BookingStatus::Confirmed,
        datetime: Utc.with_ymd_and_hms(2025, 5, 2, 10, 0, 0).unwrap(),
        payment_method: PaymentMethod::Cash,
        rating_given: false,
    }
}

fn booking_from(id: u64, new_booking: &NewBooking) -> Booking {
    Booking {
        id,
        user_id: new_booking.user_id,
        stylist_id: new_booking.stylist_id,
        service_id: new_booking.service_id,
        status: new_booking.status,
        datetime: new_booking.datetime,
        payment_method: new_booking.payment_method,
        rating_given: new_booking.rating_given,
    }
}
