pub mod client;
pub mod error;
pub mod normalize;
pub mod queries;
mod retry;
pub mod types;

pub use client::{StorefrontClient, StorefrontConfig};
pub use error::CatalogError;
