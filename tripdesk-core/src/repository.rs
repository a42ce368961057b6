use async_trait::async_trait;
use tripdesk_shared::{Booking, BookingDraft, Flight, Hotel, User};

use crate::search::{FlightQuery, HotelQuery};
use crate::CoreResult;

/// Read access to the flight catalog
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Flights matching the query, in catalog order
    async fn find_flights(&self, query: &FlightQuery) -> CoreResult<Vec<Flight>>;

    async fn get_flight(&self, id: &str) -> CoreResult<Option<Flight>>;
}

/// Read access to the hotel catalog
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Hotels matching the query, in catalog order
    async fn find_hotels(&self, query: &HotelQuery) -> CoreResult<Vec<Hotel>>;

    async fn get_hotel(&self, id: &str) -> CoreResult<Option<Hotel>>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> CoreResult<Option<User>>;
}

/// Append-only booking storage.
///
/// Implementations assign the id; `insert` must never hand out the same id
/// twice, even under concurrent callers.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn insert(&self, draft: BookingDraft) -> CoreResult<Booking>;

    /// Bookings owned by `user_id`, in insertion order
    async fn list_by_user(&self, user_id: &str) -> CoreResult<Vec<Booking>>;

    async fn list_all(&self) -> CoreResult<Vec<Booking>>;
}
