use std::collections::HashSet;

use async_trait::async_trait;
use tripdesk_core::repository::{FlightRepository, HotelRepository, UserRepository};
use tripdesk_core::search::{FlightQuery, HotelQuery};
use tripdesk_core::CoreResult;
use tripdesk_shared::{Flight, Hotel, User};

use crate::seed;

/// Read-only catalog of flights, hotels and users, fixed at construction.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    flights: Vec<Flight>,
    hotels: Vec<Hotel>,
    users: Vec<User>,
}

impl CatalogStore {
    /// Build a catalog, rejecting duplicate ids and out-of-range ratings.
    pub fn new(flights: Vec<Flight>, hotels: Vec<Hotel>, users: Vec<User>) -> Result<Self, CatalogError> {
        ensure_unique("flight", flights.iter().map(|f| f.id.as_str()))?;
        ensure_unique("hotel", hotels.iter().map(|h| h.id.as_str()))?;
        ensure_unique("user", users.iter().map(|u| u.id.as_str()))?;

        if let Some(hotel) = hotels.iter().find(|h| !(0.0..=5.0).contains(&h.rating)) {
            return Err(CatalogError::InvalidRating {
                id: hotel.id.clone(),
                rating: hotel.rating,
            });
        }

        Ok(Self { flights, hotels, users })
    }

    /// The demo catalog
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::new(seed::flights(), seed::hotels(), seed::users())
    }

    pub fn flights_where(&self, predicate: impl Fn(&Flight) -> bool) -> Vec<Flight> {
        self.flights.iter().filter(|&f| predicate(f)).cloned().collect()
    }

    pub fn hotels_where(&self, predicate: impl Fn(&Hotel) -> bool) -> Vec<Hotel> {
        self.hotels.iter().filter(|&h| predicate(h)).cloned().collect()
    }

    pub fn flight(&self, id: &str) -> Option<&Flight> {
        self.flights.iter().find(|f| f.id == id)
    }

    pub fn hotel(&self, id: &str) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.id == id)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }
}

fn ensure_unique<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { kind, id: id.to_string() });
        }
    }
    Ok(())
}

#[async_trait]
impl FlightRepository for CatalogStore {
    async fn find_flights(&self, query: &FlightQuery) -> CoreResult<Vec<Flight>> {
        Ok(self.flights_where(|f| query.matches(f)))
    }

    async fn get_flight(&self, id: &str) -> CoreResult<Option<Flight>> {
        Ok(self.flight(id).cloned())
    }
}

#[async_trait]
impl HotelRepository for CatalogStore {
    async fn find_hotels(&self, query: &HotelQuery) -> CoreResult<Vec<Hotel>> {
        Ok(self.hotels_where(|h| query.matches(h)))
    }

    async fn get_hotel(&self, id: &str) -> CoreResult<Option<Hotel>> {
        Ok(self.hotel(id).cloned())
    }
}

#[async_trait]
impl UserRepository for CatalogStore {
    async fn find_by_email(&self, email: &str) -> CoreResult<Option<User>> {
        Ok(self.user_by_email(email).cloned())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CatalogError {
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Rating {rating} of hotel {id} is outside 0..=5")]
    InvalidRating { id: String, rating: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_passes_validation() {
        assert!(CatalogStore::seeded().is_ok());
    }

    #[test]
    fn test_duplicate_flight_id_rejected() {
        let mut flights = seed::flights();
        flights.push(flights[0].clone());
        let err = CatalogStore::new(flights, seed::hotels(), seed::users()).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId { kind: "flight", id: "f1".to_string() });
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let mut hotels = seed::hotels();
        hotels[3].rating = 5.5;
        let err = CatalogStore::new(seed::flights(), hotels, seed::users()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRating { ref id, .. } if id == "h4"));
    }

    #[test]
    fn test_lookup_by_id() {
        let store = CatalogStore::seeded().unwrap();
        assert_eq!(store.flight("f3").map(|f| f.flight_number.as_str()), Some("BA-112"));
        assert_eq!(store.hotel("h5").map(|h| h.name.as_str()), Some("Eiffel Tower View"));
        assert!(store.flight("f99").is_none());
        assert!(store.hotel("f1").is_none());
    }

    #[test]
    fn test_predicate_keeps_catalog_order() {
        let store = CatalogStore::seeded().unwrap();
        let ids: Vec<String> = store.flights_where(|f| f.price > 500).into_iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["f2", "f3", "f4", "f5"]);
    }

    #[test]
    fn test_user_by_email() {
        let store = CatalogStore::seeded().unwrap();
        assert_eq!(store.user_by_email("admin@demo.com").map(|u| u.is_admin()), Some(true));
        assert!(store.user_by_email("nobody@x.com").is_none());
    }
}
