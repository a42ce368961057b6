use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tripdesk_ledger::BookingService;

/// Log every booking the service creates.
///
/// The task ends once the service is dropped and yields how many events it
/// logged.
pub fn spawn_booking_logger(bookings: &BookingService) -> JoinHandle<u64> {
    let mut events = bookings.subscribe();

    tokio::spawn(async move {
        let mut logged = 0;
        loop {
            match events.recv().await {
                Ok(event) => {
                    logged += 1;
                    info!(
                        booking_id = %event.booking_id,
                        user_id = %event.user_id,
                        booking_type = %event.booking_type,
                        total_amount = event.total_amount,
                        "booking.created"
                    );
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Booking event logger skipped {} events", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
        logged
    })
}
