pub mod seed;
pub mod store;
pub mod search;

pub use store::{CatalogError, CatalogStore};
pub use search::SearchService;
