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

use std::{thread, time::Duration};

use dotenvy::dotenv;
use grooming_api::models::{BookingStatus, BookingUpdate};
use grooming_api::{ClientConfig, FetchOutcome, GroomingApiClient};
use std::error::Error;

fn describe<T: std::fmt::Debug>(what: &str, outcome: &FetchOutcome<T>) {
    match outcome {
        FetchOutcome::Live(data) => println!("{what} (live): {data:?}"),
        FetchOutcome::Fallback(data) => println!("{what} (offline data): {data:?}"),
        FetchOutcome::NotFound => println!("{what}: not found"),
        FetchOutcome::Failed(error) => println!("There was an error getting {what}. Error {error}"),
    }
}

fn main() -> std::result::Result<(), Box<dyn Error>> {
    dotenv().ok();
    // GROOMING_API_BASE_URLS and GROOMING_API_TIMEOUT_MS are optional.
    let config = ClientConfig::from_env()?;
    println!("Candidates: {:?}", config.candidates());
    let client = GroomingApiClient::new(config)?;

    println!("The information is displayed every 5 seconds.");
    println!("Try stopping and restarting the API server.");

    loop {
        describe("stylists", &client.get_stylists());
        describe("stylist 1", &client.get_stylist(1));
        describe("bookings of user 10", &client.get_user_bookings(10));

        let update = BookingUpdate {
            status: Some(BookingStatus::EnRoute),
            ..Default::default()
        };
        match client.update_booking(101, &update) {
            Ok(booking) => println!("Booking updated: {booking:?}"),
            Err(error) => println!("Booking not updated. Error {error}"),
        }

        thread::sleep(Duration::from_secs(5));
    }
}
