//! Error types for the export layer.

use spacefetch_client::ClientError;
use spacefetch_types::{ResourceKind, SpaceId};
use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while fetching a space.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The space could not be resolved.
    #[error("space {space_id} lookup failed: {source}")]
    SpaceLookup {
        space_id: SpaceId,
        #[source]
        source: ClientError,
    },

    /// A page of a collection could not be fetched.
    #[error("fetching {kind} failed at skip {skip}: {source}")]
    Fetch {
        kind: ResourceKind,
        skip: u64,
        #[source]
        source: ClientError,
    },

    /// Fetch options are unusable.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

impl ExportError {
    /// The client error behind this failure, if any.
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            ExportError::SpaceLookup { source, .. } | ExportError::Fetch { source, .. } => {
                Some(source)
            }
            ExportError::InvalidOptions(_) => None,
        }
    }
}
