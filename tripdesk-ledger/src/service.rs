use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{info, warn};
use tripdesk_core::repository::BookingRepository;
use tripdesk_core::{CoreError, CoreResult, LatencyProfile};
use tripdesk_shared::models::events::BookingCreatedEvent;
use tripdesk_shared::{Booking, BookingDraft};

use crate::summary::SpendingSummary;

const EVENT_CAPACITY: usize = 100;

/// Booking writes and dashboard reads on top of a [`BookingRepository`].
///
/// Drafts are checked for shape only. Whether the item exists in the catalog
/// and whether the amount matches its price is left to the caller.
pub struct BookingService {
    repo: Arc<dyn BookingRepository>,
    latency: LatencyProfile,
    events: broadcast::Sender<BookingCreatedEvent>,
}

impl BookingService {
    pub fn new(repo: Arc<dyn BookingRepository>, latency: LatencyProfile) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self { repo, latency, events }
    }

    /// Receive an event for every booking created after this call
    pub fn subscribe(&self) -> broadcast::Receiver<BookingCreatedEvent> {
        self.events.subscribe()
    }

    pub async fn create(&self, draft: BookingDraft) -> CoreResult<Booking> {
        self.latency.create.simulate().await;

        if let Err(e) = validate_draft(&draft) {
            warn!("Rejected booking draft for user {}: {}", draft.user_id, e);
            return Err(e);
        }

        let booking = self.repo.insert(draft).await?;
        info!(
            "Booking created: {} ({} {}) for user {}",
            booking.id,
            booking.booking_type(),
            booking.item_id,
            booking.user_id
        );

        // Nobody listening is fine
        let _ = self.events.send(BookingCreatedEvent::for_booking(&booking));

        Ok(booking)
    }

    pub async fn get_by_user_id(&self, user_id: &str) -> CoreResult<Vec<Booking>> {
        self.latency.list.simulate().await;
        self.repo.list_by_user(user_id).await
    }

    pub async fn get_all(&self) -> CoreResult<Vec<Booking>> {
        self.latency.list_all.simulate().await;
        self.repo.list_all().await
    }

    /// Dashboard spending chart for one user
    pub async fn spending_summary(&self, user_id: &str) -> CoreResult<SpendingSummary> {
        let bookings = self.get_by_user_id(user_id).await?;
        Ok(SpendingSummary::from_bookings(&bookings))
    }
}

/// A draft must name its owner and must snapshot the item it refers to.
pub fn validate_draft(draft: &BookingDraft) -> CoreResult<()> {
    if draft.user_id.trim().is_empty() {
        return Err(CoreError::InvalidInput("userId must not be empty".to_string()));
    }
    if draft.item_id.trim().is_empty() {
        return Err(CoreError::InvalidInput("itemId must not be empty".to_string()));
    }
    if draft.details.item_id() != draft.item_id {
        return Err(CoreError::InvalidInput(format!(
            "itemId {} does not match {} details {}",
            draft.item_id,
            draft.details.booking_type(),
            draft.details.item_id()
        )));
    }
    Ok(())
}
