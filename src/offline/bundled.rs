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

use chrono::{DateTime, TimeZone, Utc};

use super::FallbackSnapshot;
use crate::models::{
    Booking, BookingStatus, Location, PaymentMethod, Rating, Service, Stylist, User,
};

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// Representative records shipped with the crate.
pub(super) fn bundled_snapshot() -> FallbackSnapshot {
    FallbackSnapshot {
        users: vec![User {
            id: 10,
            name: "Yassine".to_string(),
            is_verified: true,
            trust_score: 87,
            payment_methods: vec![PaymentMethod::Card, PaymentMethod::Cash],
            favorite_stylists: vec![1],
            qr_discovery: true,
        }],
        stylists: vec![Stylist {
            id: 1,
            name: "Hassan the Barber".to_string(),
            rating: 4.9,
            distance_km: 2.1,
            verified: true,
            bio: "Fade specialist, 10+ yrs experience".to_string(),
            services: vec![1, 2, 4],
            gallery: vec!["/img/fade1.jpg".to_string(), "/img/fade2.jpg".to_string()],
            availability: "09:00 - 19:00".to_string(),
            location: Location {
                lat: 33.5899,
                lng: -7.6039,
            },
            profile_picture: "/img/hassan.png".to_string(),
            qr_link: "/barber/hassan".to_string(),
        }],
        services: vec![
            Service {
                id: 1,
                name: "Haircut".to_string(),
                price: 50.0,
            },
            Service {
                id: 2,
                name: "Beard Trim".to_string(),
                price: 30.0,
            },
            Service {
                id: 3,
                name: "Braids".to_string(),
                price: 70.0,
            },
            Service {
                id: 4,
                name: "Full Service".to_string(),
                price: 100.0,
            },
        ],
        bookings: vec![Booking {
            id: 101,
            user_id: 10,
            stylist_id: 1,
            service_id: 1,
            status: BookingStatus::Confirmed,
            datetime: utc(2025, 4, 10, 14, 30),
            payment_method: PaymentMethod::Card,
            rating_given: false,
        }],
        ratings: vec![Rating {
            id: 201,
            stylist_id: 1,
            user_id: 10,
            stars: 5,
            comment: "Clean fade, came fast.".to_string(),
            timestamp: utc(2025, 4, 5, 16, 0),
        }],
    }
}
