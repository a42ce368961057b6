use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use tripdesk_core::repository::BookingRepository;
use tripdesk_core::{CoreError, CoreResult};
use tripdesk_shared::{Booking, BookingDetails, BookingDraft, BookingStatus};

const ID_PREFIX: &str = "b";

struct LedgerState {
    bookings: Vec<Booking>,
    next_seq: u64,
}

/// In-memory, append-only booking ledger.
///
/// Ids are `b1`, `b2`, ... drawn from a sequence that lives under the same
/// lock as the bookings, so an id is assigned and its booking appended in
/// one step.
pub struct BookingLedger {
    state: RwLock<LedgerState>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LedgerState {
                bookings: Vec::new(),
                next_seq: 1,
            }),
        }
    }

    /// Start from existing bookings. New ids continue after the highest
    /// `b<n>` already present.
    pub fn with_history(bookings: Vec<Booking>) -> Result<Self, LedgerError> {
        let mut seen = HashSet::new();
        for booking in &bookings {
            if !seen.insert(booking.id.as_str()) {
                return Err(LedgerError::DuplicateId(booking.id.clone()));
            }
        }

        let next_seq = match bookings.iter().filter_map(|b| parse_seq(&b.id)).max() {
            Some(highest) => highest
                .checked_add(1)
                .ok_or_else(|| LedgerError::SequenceExhausted(format!("{}{}", ID_PREFIX, highest)))?,
            None => 1,
        };

        Ok(Self {
            state: RwLock::new(LedgerState { bookings, next_seq }),
        })
    }

    /// Ledger holding the demo booking: user `u1` on flight `f1`.
    pub fn with_demo_booking() -> Result<Self, LedgerError> {
        let flight = tripdesk_catalog::seed::flights().into_iter().next();
        let bookings = flight
            .map(|flight| {
                vec![Booking {
                    id: format!("{}1", ID_PREFIX),
                    user_id: "u1".to_string(),
                    item_id: flight.id.clone(),
                    total_amount: flight.price,
                    details: BookingDetails::Flight(flight),
                    date: tripdesk_catalog::seed::demo_booking_date(),
                    status: BookingStatus::Confirmed,
                }]
            })
            .unwrap_or_default();

        Self::with_history(bookings)
    }
}

impl Default for BookingLedger {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_seq(id: &str) -> Option<u64> {
    id.strip_prefix(ID_PREFIX)?.parse().ok()
}

#[async_trait]
impl BookingRepository for BookingLedger {
    async fn insert(&self, draft: BookingDraft) -> CoreResult<Booking> {
        let mut state = self.state.write().await;

        let seq = state.next_seq;
        state.next_seq = seq
            .checked_add(1)
            .ok_or_else(|| CoreError::Internal("booking id sequence exhausted".to_string()))?;
        let id = format!("{}{}", ID_PREFIX, seq);

        let booking = Booking::from_draft(id, draft);
        state.bookings.push(booking.clone());

        info!("Booking stored: {} ({} total)", booking.id, state.bookings.len());
        Ok(booking)
    }

    async fn list_by_user(&self, user_id: &str) -> CoreResult<Vec<Booking>> {
        let state = self.state.read().await;
        Ok(state
            .bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> CoreResult<Vec<Booking>> {
        Ok(self.state.read().await.bookings.clone())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Duplicate booking id: {0}")]
    DuplicateId(String),

    #[error("No booking ids left after {0}")]
    SequenceExhausted(String),
}
