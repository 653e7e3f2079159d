use futures::stream::{self, StreamExt};
use spacefetch_client::SpaceApi;
use spacefetch_types::Record;
use tracing::{debug, warn};

/// Fetches the editor interface of each content type, in order, with at most
/// `concurrency` requests in flight.
///
/// A content type without a readable editor interface yields `None`
/// instead of an error. Old content types may never have had one.
pub async fn get_editor_interfaces<S>(
    space: &S,
    content_types: &[Record],
    concurrency: usize,
) -> Vec<Option<Record>>
where
    S: SpaceApi + ?Sized,
{
    stream::iter(content_types)
        .map(|content_type| async move {
            let Some(id) = content_type.id() else {
                debug!("Skipping editor interface for content type without sys.id");
                return None;
            };
            match space.get_editor_interface(id).await {
                Ok(editor_interface) => Some(editor_interface),
                Err(e) if e.is_rate_limited() => {
                    warn!("Editor interface for content type {} dropped: {}", id, e);
                    None
                }
                Err(e) => {
                    debug!("No editor interface for content type {}: {}", id, e);
                    None
                }
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await
}
