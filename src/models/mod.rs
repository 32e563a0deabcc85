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

//! Records exchanged with the booking API.
//!
//! Field names follow the JSON documents served by the mock server, so the
//! same types are used for live responses, for the bundled fallback snapshot
//! and for snapshot files loaded from disk.

mod booking;
mod rating;
mod service;
mod stylist;
mod user;

pub use booking::{Booking, BookingStatus, BookingUpdate, NewBooking, PaymentMethod};
pub use rating::{NewRating, Rating};
pub use service::Service;
pub use stylist::{Location, Stylist};
pub use user::User;

/// Numeric identifier used by every resource of the API.
pub type RecordId = u64;

#[cfg(test)]
pub(crate) mod tests {

    use super::*;
    use chrono::{TimeZone, Utc};
    use rstest::*;
    use serde_json::json;

    #[fixture]
    pub(crate) fn booking_json() -> serde_json::Value {
        json!({
            "id": 102,
            "user_id": 10,
            "stylist_id": 1,
            "service_id": 2,
            "status": "en_route",
            "datetime": "2025-04-11T09:15:00Z",
            "payment_method": "cash",
            "rating_given": false
        })
    }

    #[fixture]
    pub(crate) fn stylist_json() -> serde_json::Value {
        json!({
            "id": 2,
            "name": "Karim Cuts",
            "rating": 4.6,
            "distance_km": 3.4,
            "verified": false,
            "bio": "Classic cuts",
            "services": [1],
            "gallery": [],
            "availability": "10:00 - 18:00",
            "location": { "lat": 33.57, "lng": -7.59 },
            "profile_picture": "/img/karim.png",
            "qr_link": "/barber/karim"
        })
    }

    #[rstest]
    fn test_booking_from_server_json(booking_json: serde_json::Value) {
        let booking: Booking = serde_json::from_value(booking_json).unwrap();
        assert_eq!(booking.id, 102);
        assert_eq!(booking.status, BookingStatus::EnRoute);
        assert_eq!(booking.payment_method, PaymentMethod::Cash);
        assert_eq!(
            booking.datetime,
            Utc.with_ymd_and_hms(2025, 4, 11, 9, 15, 0).unwrap()
        );
    }

    #[rstest]
    fn test_booking_rejects_unknown_status(mut booking_json: serde_json::Value) {
        booking_json["status"] = json!("lost");
        assert!(serde_json::from_value::<Booking>(booking_json).is_err());
    }

    #[rstest]
    fn test_stylist_from_server_json(stylist_json: serde_json::Value) {
        let stylist: Stylist = serde_json::from_value(stylist_json).unwrap();
        assert_eq!(stylist.name, "Karim Cuts");
        assert_eq!(stylist.services, vec![1]);
        assert_eq!(stylist.location.lng, -7.59);
    }

    #[test]
    fn test_booking_update_omits_absent_fields() {
        let update = BookingUpdate {
            status: Some(BookingStatus::Arrived),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"status": "arrived"})
        );
    }

    #[test]
    fn test_new_booking_has_no_id() {
        let booking = NewBooking {
            user_id: 10,
            stylist_id: 1,
            service_id: 4,
            status: BookingStatus::Confirmed,
            datetime: Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap(),
            payment_method: PaymentMethod::Card,
            rating_given: false,
        };
        let value = serde_json::to_value(&booking).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["datetime"], "2025-05-01T12:00:00Z");
        assert_eq!(value["status"], "confirmed");
    }
}
