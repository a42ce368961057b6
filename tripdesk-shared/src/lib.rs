pub mod models;
pub mod pii;

pub use models::booking::{Booking, BookingDetails, BookingDraft, BookingStatus, BookingType};
pub use models::catalog::{Flight, Hotel};
pub use models::user::{User, UserRole};
pub use pii::Masked;
