use serde::{Deserialize, Serialize};
use tripdesk_shared::{Flight, Hotel};

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightQuery {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
}

impl FlightQuery {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    pub fn matches(&self, flight: &Flight) -> bool {
        contains_ignore_case(&flight.origin, &self.origin)
            && contains_ignore_case(&flight.destination, &self.destination)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HotelQuery {
    #[serde(default)]
    pub location: String,
}

impl HotelQuery {
    pub fn new(location: impl Into<String>) -> Self {
        Self { location: location.into() }
    }

    pub fn matches(&self, hotel: &Hotel) -> bool {
        contains_ignore_case(&hotel.location, &self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn flight(origin: &str, destination: &str) -> Flight {
        Flight {
            id: "f1".to_string(),
            airline: "SkyHigh Airways".to_string(),
            flight_number: "SH-101".to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            depart_time: Utc.with_ymd_and_hms(2023, 12, 15, 10, 0, 0).unwrap(),
            arrive_time: Utc.with_ymd_and_hms(2023, 12, 15, 22, 0, 0).unwrap(),
            duration: "7h 00m".to_string(),
            price: 450,
            seats_available: 12,
        }
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("New York (JFK)", "new york"));
        assert!(contains_ignore_case("New York (JFK)", "jfk"));
        assert!(contains_ignore_case("New York (JFK)", ""));
        assert!(!contains_ignore_case("New York (JFK)", "lhr"));
    }

    #[test]
    fn test_flight_query_requires_both_filters() {
        let f = flight("New York (JFK)", "London (LHR)");
        assert!(FlightQuery::new("york", "london").matches(&f));
        assert!(FlightQuery::new("", "LHR").matches(&f));
        assert!(FlightQuery::default().matches(&f));
        assert!(!FlightQuery::new("york", "paris").matches(&f));
        assert!(!FlightQuery::new("london", "york").matches(&f));
    }

    #[test]
    fn test_query_deserializes_missing_fields_as_empty() {
        let query: FlightQuery = serde_json::from_str(r#"{"origin":"JFK"}"#).expect("Failed to deserialize");
        assert_eq!(query.origin, "JFK");
        assert_eq!(query.destination, "");
    }
}
