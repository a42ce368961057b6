use uuid::Uuid;

use super::booking::{Booking, BookingType};

/// Published whenever the ledger accepts a new booking
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct BookingCreatedEvent {
    pub event_id: Uuid,
    pub booking_id: String,
    pub user_id: String,
    pub booking_type: BookingType,
    pub item_id: String,
    pub total_amount: u32,
    pub timestamp: i64,
}

impl BookingCreatedEvent {
    pub fn for_booking(booking: &Booking) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            booking_id: booking.id.clone(),
            user_id: booking.user_id.clone(),
            booking_type: booking.booking_type(),
            item_id: booking.item_id.clone(),
            total_amount: booking.total_amount,
            timestamp: booking.date.timestamp(),
        }
    }
}
