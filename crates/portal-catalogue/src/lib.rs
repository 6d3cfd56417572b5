pub mod client;
pub mod error;
pub mod types;

pub use client::CatalogueClient;
pub use error::CatalogueError;
pub use types::{CatalogueQuery, CataloguePage, DEFAULT_PER_PAGE};
