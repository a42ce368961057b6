use std::sync::Arc;

use tripdesk_catalog::SearchService;
use tripdesk_core::AuthService;
use tripdesk_ledger::{BookingService, CheckoutService};
use tripdesk_store::Backend;

#[derive(Clone)]
pub struct AppState {
    pub search: SearchService,
    pub bookings: Arc<BookingService>,
    pub checkout: Arc<CheckoutService>,
    pub auth: Arc<AuthService>,
}

impl From<Backend> for AppState {
    fn from(backend: Backend) -> Self {
        Self {
            search: backend.search,
            bookings: backend.bookings,
            checkout: backend.checkout,
            auth: backend.auth,
        }
    }
}
