//! Core type definitions for spacefetch.
//!
//! This crate defines the types shared by the client and export layers:
//! - Space identifiers
//! - Opaque management API records and their `sys` metadata
//! - Page queries and the paged collection envelope
//! - The aggregated [`SourceSpace`] handed to migration tooling
//!
//! Record payloads are owned by the management API. Nothing here validates
//! or rewrites their fields.

mod ids;
mod page;
mod record;
mod space;

pub use ids::SpaceId;
pub use page::{Collection, PageQuery, ResourceKind, DEFAULT_ORDER, MAX_ALLOWED_LIMIT};
pub use record::Record;
pub use space::{ResourceCounts, SourceSpace};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid space id: {0:?}")]
    InvalidSpaceId(String),

    #[error("record is not a JSON object")]
    NotAnObject,
}
