use std::sync::Arc;

use tracing::info;
use tripdesk_catalog::{CatalogError, CatalogStore, SearchService};
use tripdesk_core::AuthService;
use tripdesk_ledger::{BookingLedger, BookingService, CheckoutService, LedgerError};

use crate::app_config::Config;

/// The in-memory services, wired from configuration.
///
/// Every call to [`Backend::from_config`] builds a fresh catalog and ledger,
/// so separate backends never share bookings.
#[derive(Clone)]
pub struct Backend {
    pub search: SearchService,
    pub bookings: Arc<BookingService>,
    pub checkout: Arc<CheckoutService>,
    pub auth: Arc<AuthService>,
}

impl Backend {
    pub fn from_config(config: &Config) -> Result<Self, BackendError> {
        let latency = config.latency.profile();
        let catalog = Arc::new(CatalogStore::seeded()?);

        let ledger = if config.ledger.seed_demo_booking {
            BookingLedger::with_demo_booking()?
        } else {
            BookingLedger::new()
        };

        let search = SearchService::from_catalog(catalog.clone(), latency);
        let bookings = Arc::new(BookingService::new(Arc::new(ledger), latency));
        let checkout = Arc::new(CheckoutService::new(search.clone(), bookings.clone()));
        let auth = Arc::new(
            AuthService::new(catalog, latency.login)
                .with_placeholder_token(config.auth.placeholder_token.clone()),
        );

        info!(
            "In-memory backend ready (demo booking: {})",
            config.ledger.seed_demo_booking
        );

        Ok(Self { search, bookings, checkout, auth })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Catalog seed rejected: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Ledger seed rejected: {0}")]
    Ledger(#[from] LedgerError),
}
