use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tripdesk_catalog::SearchService;
use tripdesk_core::{CoreError, CoreResult};
use tripdesk_shared::{Booking, BookingDetails, BookingDraft, BookingStatus, BookingType};

use crate::service::BookingService;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub user_id: String,
    #[serde(rename = "type")]
    pub item_type: BookingType,
    pub item_id: String,
}

/// Books a catalog item at its list price.
///
/// Resolves the item, snapshots it into a confirmed draft dated now and
/// hands that to the booking service.
pub struct CheckoutService {
    search: SearchService,
    bookings: Arc<BookingService>,
}

impl CheckoutService {
    pub fn new(search: SearchService, bookings: Arc<BookingService>) -> Self {
        Self { search, bookings }
    }

    pub async fn checkout(&self, request: CheckoutRequest) -> CoreResult<Booking> {
        let details = match request.item_type {
            BookingType::Flight => self
                .search
                .get_flight_by_id(&request.item_id)
                .await?
                .map(BookingDetails::Flight),
            BookingType::Hotel => self
                .search
                .get_hotel_by_id(&request.item_id)
                .await?
                .map(BookingDetails::Hotel),
        }
        .ok_or_else(|| CoreError::NotFound(format!("{} {}", request.item_type, request.item_id)))?;

        let draft = BookingDraft {
            user_id: request.user_id,
            item_id: request.item_id,
            total_amount: details.list_price(),
            details,
            date: Utc::now(),
            status: BookingStatus::Confirmed,
        };

        self.bookings.create(draft).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::BookingLedger;
    use tripdesk_catalog::CatalogStore;
    use tripdesk_core::LatencyProfile;

    fn checkout() -> (CheckoutService, Arc<BookingService>) {
        let search = SearchService::from_catalog(Arc::new(CatalogStore::seeded().unwrap()), LatencyProfile::none());
        let bookings = Arc::new(BookingService::new(Arc::new(BookingLedger::new()), LatencyProfile::none()));
        (CheckoutService::new(search, bookings.clone()), bookings)
    }

    fn request(item_type: BookingType, item_id: &str) -> CheckoutRequest {
        CheckoutRequest {
            user_id: "u1".to_string(),
            item_type,
            item_id: item_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_checkout_flight_charges_fare() {
        let (checkout, bookings) = checkout();
        let booking = checkout.checkout(request(BookingType::Flight, "f2")).await.unwrap();

        assert_eq!(booking.total_amount, 1200);
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert!(matches!(booking.details, BookingDetails::Flight(ref f) if f.flight_number == "OA-815"));
        assert_eq!(bookings.get_by_user_id("u1").await.unwrap(), vec![booking]);
    }

    #[tokio::test]
    async fn test_checkout_hotel_charges_one_night() {
        let (checkout, _) = checkout();
        let booking = checkout.checkout(request(BookingType::Hotel, "h3")).await.unwrap();
        assert_eq!(booking.total_amount, 180);
        assert_eq!(booking.booking_type(), BookingType::Hotel);
    }

    #[tokio::test]
    async fn test_checkout_unknown_item() {
        let (checkout, bookings) = checkout();
        let err = checkout.checkout(request(BookingType::Hotel, "f1")).await.unwrap_err();
        assert_eq!(err, CoreError::NotFound("hotel f1".to_string()));
        assert!(bookings.get_all().await.unwrap().is_empty());
    }

    #[test]
    fn test_request_uses_type_field() {
        let req: CheckoutRequest =
            serde_json::from_str(r#"{"userId":"u1","type":"flight","itemId":"f1"}"#).expect("Failed to deserialize");
        assert_eq!(req, request(BookingType::Flight, "f1"));
    }
}
