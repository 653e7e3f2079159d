//! Pagination primitives for the management API list endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest page the management API accepts.
pub const MAX_ALLOWED_LIMIT: u32 = 1000;

/// Stable ordering used for every list request, so pages never overlap.
pub const DEFAULT_ORDER: &str = "sys.createdAt";

/// The paginated collections that make up a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    ContentTypes,
    Entries,
    Assets,
    Locales,
    Webhooks,
}

impl ResourceKind {
    /// All kinds, in the order they appear in an export.
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::ContentTypes,
        ResourceKind::Entries,
        ResourceKind::Assets,
        ResourceKind::Locales,
        ResourceKind::Webhooks,
    ];

    /// Path segment of the list endpoint below `/spaces/{id}/`.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            ResourceKind::ContentTypes => "content_types",
            ResourceKind::Entries => "entries",
            ResourceKind::Assets => "assets",
            ResourceKind::Locales => "locales",
            ResourceKind::Webhooks => "webhook_definitions",
        }
    }

    /// Human readable name used in logs and errors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ResourceKind::ContentTypes => "content types",
            ResourceKind::Entries => "entries",
            ResourceKind::Assets => "assets",
            ResourceKind::Locales => "locales",
            ResourceKind::Webhooks => "webhooks",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Query parameters for one page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub skip: u64,
    pub limit: u32,
    pub order: String,
}

impl PageQuery {
    /// The first page, ordered by creation time.
    #[must_use]
    pub fn first(limit: u32) -> Self {
        Self {
            skip: 0,
            limit,
            order: DEFAULT_ORDER.to_string(),
        }
    }

    /// The page directly after this one.
    #[must_use]
    pub fn next(&self) -> Self {
        Self {
            skip: self.end(),
            limit: self.limit,
            order: self.order.clone(),
        }
    }

    /// Offset one past the last item this page can hold.
    #[must_use]
    pub fn end(&self) -> u64 {
        self.skip + u64::from(self.limit)
    }

    /// Whether another page must be requested after a response reporting
    /// `total` items.
    ///
    /// Uses `<=`, so a total that is an exact multiple of the limit is
    /// followed by one empty page.
    #[must_use]
    pub fn has_more(&self, total: u64) -> bool {
        self.end() <= total
    }

    /// Query string pairs in request order.
    pub fn to_query_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("skip", self.skip.to_string()),
            ("limit", self.limit.to_string()),
            ("order", self.order.clone()),
        ]
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::first(MAX_ALLOWED_LIMIT)
    }
}

/// One page of a list endpoint, or several pages merged together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection<T> {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub items: Vec<T>,
}

impl<T> Collection<T> {
    /// Appends the items of a later page.
    pub fn extend_page(&mut self, page: Collection<T>) {
        self.items.extend(page.items);
    }

    /// Drops the envelope and keeps the items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            total: 0,
            skip: 0,
            limit: 0,
            items: Vec::new(),
        }
    }
}
