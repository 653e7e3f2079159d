use serde::{Deserialize, Serialize};
use spacefetch_types::{MAX_ALLOWED_LIMIT, SpaceId};

use crate::error::{ExportError, ExportResult};

/// What to fetch from the source space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchOptions {
    pub space_id: SpaceId,
    /// Skip content types, locales and editor interfaces.
    #[serde(default)]
    pub skip_content_model: bool,
    /// Skip entries and assets.
    #[serde(default)]
    pub skip_content: bool,
    #[serde(default)]
    pub skip_webhooks: bool,
    /// Items requested per page.
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
    /// Upper bound on editor-interface requests in flight at once.
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,
}

/// Default cap on concurrent editor-interface requests.
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 4;

fn default_page_limit() -> u32 {
    MAX_ALLOWED_LIMIT
}

fn default_max_concurrent_requests() -> usize {
    DEFAULT_MAX_CONCURRENT_REQUESTS
}

impl FetchOptions {
    /// Fetch everything from `space_id` with full-size pages.
    pub fn new(space_id: SpaceId) -> Self {
        Self {
            space_id,
            skip_content_model: false,
            skip_content: false,
            skip_webhooks: false,
            page_limit: MAX_ALLOWED_LIMIT,
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_REQUESTS,
        }
    }

    pub fn skip_content_model(mut self, skip: bool) -> Self {
        self.skip_content_model = skip;
        self
    }

    pub fn skip_content(mut self, skip: bool) -> Self {
        self.skip_content = skip;
        self
    }

    pub fn skip_webhooks(mut self, skip: bool) -> Self {
        self.skip_webhooks = skip;
        self
    }

    pub fn page_limit(mut self, limit: u32) -> Self {
        self.page_limit = limit;
        self
    }

    pub fn max_concurrent_requests(mut self, max: usize) -> Self {
        self.max_concurrent_requests = max;
        self
    }

    /// Checks the page limit is one the API accepts and that requests can
    /// be issued at all.
    pub fn validate(&self) -> ExportResult<()> {
        if self.max_concurrent_requests == 0 {
            return Err(ExportError::InvalidOptions(
                "max concurrent requests must be at least 1".to_string(),
            ));
        }
        if self.page_limit == 0 || self.page_limit > MAX_ALLOWED_LIMIT {
            return Err(ExportError::InvalidOptions(format!(
                "page limit must be between 1 and {MAX_ALLOWED_LIMIT}, got {}",
                self.page_limit
            )));
        }
        Ok(())
    }
}
