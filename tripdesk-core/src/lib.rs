pub mod search;
pub mod repository;
pub mod identity;
pub mod latency;

pub use identity::{AuthResponse, AuthService};
pub use latency::{Latency, LatencyProfile};
pub use search::{FlightQuery, HotelQuery};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Internal service error: {0}")]
    Internal(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
