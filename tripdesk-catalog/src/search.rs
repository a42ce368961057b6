use std::sync::Arc;

use tracing::debug;
use tripdesk_core::repository::{FlightRepository, HotelRepository};
use tripdesk_core::search::{FlightQuery, HotelQuery};
use tripdesk_core::{CoreResult, LatencyProfile};
use tripdesk_shared::{Flight, Hotel};

use crate::store::CatalogStore;

/// Flight and hotel search over the catalog.
///
/// Each call waits out its configured latency first. Results are in catalog
/// order with no ranking, so identical queries return identical results.
#[derive(Clone)]
pub struct SearchService {
    flights: Arc<dyn FlightRepository>,
    hotels: Arc<dyn HotelRepository>,
    latency: LatencyProfile,
}

impl SearchService {
    pub fn new(
        flights: Arc<dyn FlightRepository>,
        hotels: Arc<dyn HotelRepository>,
        latency: LatencyProfile,
    ) -> Self {
        Self { flights, hotels, latency }
    }

    /// Search service over a single in-memory catalog
    pub fn from_catalog(catalog: Arc<CatalogStore>, latency: LatencyProfile) -> Self {
        Self::new(catalog.clone(), catalog, latency)
    }

    pub async fn search_flights(&self, origin: &str, destination: &str) -> CoreResult<Vec<Flight>> {
        self.latency.search.simulate().await;

        let query = FlightQuery::new(origin, destination);
        let results = self.flights.find_flights(&query).await?;
        debug!(origin, destination, count = results.len(), "flight search");
        Ok(results)
    }

    pub async fn search_hotels(&self, location: &str) -> CoreResult<Vec<Hotel>> {
        self.latency.search.simulate().await;

        let results = self.hotels.find_hotels(&HotelQuery::new(location)).await?;
        debug!(location, count = results.len(), "hotel search");
        Ok(results)
    }

    pub async fn get_flight_by_id(&self, id: &str) -> CoreResult<Option<Flight>> {
        self.latency.lookup.simulate().await;
        self.flights.get_flight(id).await
    }

    pub async fn get_hotel_by_id(&self, id: &str) -> CoreResult<Option<Hotel>> {
        self.latency.lookup.simulate().await;
        self.hotels.get_hotel(id).await
    }
}
