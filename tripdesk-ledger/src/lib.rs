pub mod ledger;
pub mod service;
pub mod checkout;
pub mod summary;

pub use ledger::{BookingLedger, LedgerError};
pub use service::BookingService;
pub use checkout::{CheckoutRequest, CheckoutService};
pub use summary::{MonthlySpend, SpendingSummary};
