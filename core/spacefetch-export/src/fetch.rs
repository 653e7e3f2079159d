use futures::try_join;
use spacefetch_client::{ManagementApi, SpaceApi};
use spacefetch_types::{Record, ResourceKind, SourceSpace};
use tracing::{error, info};

use crate::editor::get_editor_interfaces;
use crate::error::{ExportError, ExportResult};
use crate::options::FetchOptions;
use crate::paged::paged_items;

/// Logged when the space lookup fails, ahead of the error itself.
pub const SPACE_LOOKUP_HINT: &str = "
The space was not found. This can happen for multiple reasons:
- If you haven't yet, you should create your space manually.
- If your space is in another organization, and the user behind your token does not have access to it, you'll need to specify separate source and destination management tokens.

Full error details below.
";

/// Gets all the content from a space via the management API, including
/// content in draft state.
pub async fn get_full_source_space<C>(client: &C, options: &FetchOptions) -> ExportResult<SourceSpace>
where
    C: ManagementApi + ?Sized,
{
    options.validate()?;
    info!("Getting content from source space");

    let space = match client.get_space(&options.space_id).await {
        Ok(space) => space,
        Err(source) => {
            error!("{}", SPACE_LOOKUP_HINT);
            return Err(ExportError::SpaceLookup {
                space_id: options.space_id.clone(),
                source,
            });
        }
    };

    let limit = options.page_limit;
    let (content_types, entries, assets, locales, webhooks) = try_join!(
        fetch_unless(&space, ResourceKind::ContentTypes, limit, options.skip_content_model),
        fetch_unless(&space, ResourceKind::Entries, limit, options.skip_content),
        fetch_unless(&space, ResourceKind::Assets, limit, options.skip_content),
        fetch_unless(&space, ResourceKind::Locales, limit, options.skip_content_model),
        fetch_unless(&space, ResourceKind::Webhooks, limit, options.skip_webhooks),
    )?;

    let editor_interfaces = if content_types.is_empty() {
        Vec::new()
    } else {
        get_editor_interfaces(&space, &content_types, options.max_concurrent_requests)
            .await
            .into_iter()
            .flatten()
            .collect()
    };

    let source = SourceSpace {
        content_types,
        entries,
        assets,
        locales,
        webhooks,
        editor_interfaces,
    };

    for kind in ResourceKind::ALL {
        info!("Fetched {} {}", source.records(kind).len(), kind);
    }
    info!("Fetched {} editor interfaces", source.editor_interfaces.len());

    Ok(source)
}

async fn fetch_unless<S>(
    space: &S,
    kind: ResourceKind,
    limit: u32,
    skip: bool,
) -> ExportResult<Vec<Record>>
where
    S: SpaceApi + ?Sized,
{
    if skip {
        return Ok(Vec::new());
    }
    paged_items(space, kind, limit).await
}
