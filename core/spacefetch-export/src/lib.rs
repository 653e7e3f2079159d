//! Full-space fetch for spacefetch.
//!
//! Reads everything a migration needs from a source space through the
//! management API client traits:
//!
//! 1. **Lookup**: resolve the space, logging a hint when that fails
//! 2. **Collections**: page through content types, entries, assets, locales
//!    and webhooks, each aggregated into a single list
//! 3. **Editor interfaces**: one request per content type; failures are
//!    tolerated and dropped from the result; requests in flight are capped
//!
//! # Example
//!
//! ```no_run
//! use spacefetch_client::{HttpManagementClient, ManagementConfig};
//! use spacefetch_export::{get_full_source_space, FetchOptions};
//! use spacefetch_types::SpaceId;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpManagementClient::new(ManagementConfig::with_token("token"))?;
//! let options = FetchOptions::new(SpaceId::parse("space1")?);
//! let space = get_full_source_space(&client, &options).await?;
//! println!("{} entries", space.entries.len());
//! # Ok(())
//! # }
//! ```

mod editor;
mod error;
mod fetch;
mod options;
mod paged;

pub use editor::get_editor_interfaces;
pub use error::{ExportError, ExportResult};
pub use fetch::{get_full_source_space, SPACE_LOOKUP_HINT};
pub use options::{DEFAULT_MAX_CONCURRENT_REQUESTS, FetchOptions};
pub use paged::{paged_get, paged_items};
