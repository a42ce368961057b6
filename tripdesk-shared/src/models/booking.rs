use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::fmt;

use super::catalog::{Flight, Hotel};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    Pending,
}

/// Kind of catalog item a booking refers to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BookingType {
    Flight,
    Hotel,
}

impl fmt::Display for BookingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingType::Flight => write!(f, "flight"),
            BookingType::Hotel => write!(f, "hotel"),
        }
    }
}

/// Snapshot of the booked item, keyed by the booking `type`.
///
/// Serialized as two sibling fields, `"type"` and `"details"`, so a booking
/// keeps the shape `{ "type": "hotel", "details": { ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details", rename_all = "lowercase")]
pub enum BookingDetails {
    Flight(Flight),
    Hotel(Hotel),
}

impl BookingDetails {
    pub fn booking_type(&self) -> BookingType {
        match self {
            BookingDetails::Flight(_) => BookingType::Flight,
            BookingDetails::Hotel(_) => BookingType::Hotel,
        }
    }

    /// Catalog id of the snapshotted item
    pub fn item_id(&self) -> &str {
        match self {
            BookingDetails::Flight(flight) => &flight.id,
            BookingDetails::Hotel(hotel) => &hotel.id,
        }
    }

    /// Price the checkout charges for this item: the fare for a flight,
    /// one night for a hotel.
    pub fn list_price(&self) -> u32 {
        match self {
            BookingDetails::Flight(flight) => flight.price,
            BookingDetails::Hotel(hotel) => hotel.price_per_night,
        }
    }
}

/// A booking payload before the ledger assigns its id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub user_id: String,
    pub item_id: String,
    #[serde(flatten)]
    pub details: BookingDetails,
    pub date: DateTime<Utc>,
    pub status: BookingStatus,
    pub total_amount: u32,
}

/// A stored booking. Never mutated once the ledger hands it out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub item_id: String,
    #[serde(flatten)]
    pub details: BookingDetails,
    pub date: DateTime<Utc>,
    pub status: BookingStatus,
    pub total_amount: u32,
}

impl Booking {
    pub fn from_draft(id: String, draft: BookingDraft) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            item_id: draft.item_id,
            details: draft.details,
            date: draft.date,
            status: draft.status,
            total_amount: draft.total_amount,
        }
    }

    pub fn booking_type(&self) -> BookingType {
        self.details.booking_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn hotel() -> Hotel {
        Hotel {
            id: "h2".to_string(),
            name: "Seaside Resort".to_string(),
            location: "Sydney".to_string(),
            rating: 4.5,
            price_per_night: 220,
            image_url: "https://picsum.photos/seed/hotel2/400/300".to_string(),
            amenities: vec!["Bar".to_string()],
        }
    }

    #[test]
    fn test_booking_serializes_type_next_to_details() {
        let booking = Booking {
            id: "b7".to_string(),
            user_id: "u1".to_string(),
            item_id: "h2".to_string(),
            details: BookingDetails::Hotel(hotel()),
            date: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            status: BookingStatus::Confirmed,
            total_amount: 220,
        };

        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["type"], "hotel");
        assert_eq!(value["status"], "confirmed");
        assert_eq!(value["userId"], "u1");
        assert_eq!(value["details"]["pricePerNight"], 220);

        let back: Booking = serde_json::from_value(value).unwrap();
        assert_eq!(back, booking);
    }

    #[test]
    fn test_details_accessors() {
        let details = BookingDetails::Hotel(hotel());
        assert_eq!(details.booking_type(), BookingType::Hotel);
        assert_eq!(details.item_id(), "h2");
        assert_eq!(details.list_price(), 220);
        assert_eq!(BookingType::Hotel.to_string(), "hotel");
    }

    #[test]
    fn test_mismatched_type_tag_is_rejected() {
        let json = r#"
            {
                "userId": "u1",
                "itemId": "h2",
                "type": "flight",
                "details": {"id":"h2","name":"x","location":"y","rating":1.0,"pricePerNight":5,"imageUrl":"","amenities":[]},
                "date": "2024-03-01T12:00:00Z",
                "status": "pending",
                "totalAmount": 5
            }
        "#;
        assert!(serde_json::from_str::<BookingDraft>(json).is_err());
    }
}
