use spacefetch_client::SpaceApi;
use spacefetch_types::{Collection, PageQuery, Record, ResourceKind};
use tracing::debug;

use crate::error::{ExportError, ExportResult};

/// Fetches every page of a list endpoint and merges them.
///
/// The envelope of the first response is kept; later pages only contribute
/// their items. Another page is requested while `skip + limit <= total`.
pub async fn paged_get<S>(
    space: &S,
    kind: ResourceKind,
    limit: u32,
) -> ExportResult<Collection<Record>>
where
    S: SpaceApi + ?Sized,
{
    let mut query = PageQuery::first(limit);
    let mut aggregated: Option<Collection<Record>> = None;

    loop {
        let page = space
            .list(kind, &query)
            .await
            .map_err(|source| ExportError::Fetch {
                kind,
                skip: query.skip,
                source,
            })?;

        debug!(
            "Fetched {} {} (skip {}, total {})",
            page.items.len(),
            kind,
            query.skip,
            page.total
        );

        let total = page.total;
        match aggregated.as_mut() {
            Some(collection) => collection.extend_page(page),
            None => aggregated = Some(page),
        }

        if !query.has_more(total) {
            break;
        }
        query = query.next();
    }

    Ok(aggregated.unwrap_or_default())
}

/// [`paged_get`], keeping only the items.
pub async fn paged_items<S>(space: &S, kind: ResourceKind, limit: u32) -> ExportResult<Vec<Record>>
where
    S: SpaceApi + ?Sized,
{
    Ok(paged_get(space, kind, limit).await?.into_items())
}
