//! Client abstraction traits.
//!
//! Defines the surface the export layer needs from a management API client.

use crate::error::ClientResult;
use async_trait::async_trait;
use spacefetch_types::{Collection, PageQuery, Record, ResourceKind, SpaceId};

/// Entry point of a management API client.
#[async_trait]
pub trait ManagementApi: Send + Sync {
    /// Handle to a single space.
    type Space: SpaceApi;

    /// Looks up a space the credentials have access to.
    async fn get_space(&self, space_id: &SpaceId) -> ClientResult<Self::Space>;
}

/// Operations on one space.
#[async_trait]
pub trait SpaceApi: Send + Sync {
    /// The id of this space.
    fn space_id(&self) -> &SpaceId;

    /// Fetches one page of a list endpoint.
    async fn list(&self, kind: ResourceKind, query: &PageQuery) -> ClientResult<Collection<Record>>;

    /// Fetches the editor interface of a content type.
    ///
    /// Content types created before editor interfaces existed may not have
    /// one; implementations report that as [`ClientError::NotFound`].
    ///
    /// [`ClientError::NotFound`]: crate::ClientError::NotFound
    async fn get_editor_interface(&self, content_type_id: &str) -> ClientResult<Record>;
}
