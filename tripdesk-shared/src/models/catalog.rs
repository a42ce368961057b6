use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// A scheduled flight in the catalog. Prices are whole currency units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub airline: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub depart_time: DateTime<Utc>,
    pub arrive_time: DateTime<Utc>,
    pub duration: String,
    pub price: u32,
    pub seats_available: u32,
}

/// A hotel in the catalog. `rating` is on a 0 to 5 scale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub price_per_night: u32,
    pub image_url: String,
    pub amenities: Vec<String>,
}
