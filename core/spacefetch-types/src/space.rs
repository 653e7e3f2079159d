use serde::{Deserialize, Serialize};

use crate::{Record, ResourceKind};

/// Everything fetched from a source space.
///
/// Field names serialize in camelCase since the JSON is consumed by
/// migration tooling that expects the management API's naming.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSpace {
    pub content_types: Vec<Record>,
    pub entries: Vec<Record>,
    pub assets: Vec<Record>,
    pub locales: Vec<Record>,
    pub webhooks: Vec<Record>,
    pub editor_interfaces: Vec<Record>,
}

impl SourceSpace {
    /// Records of one paginated kind.
    pub fn records(&self, kind: ResourceKind) -> &[Record] {
        match kind {
            ResourceKind::ContentTypes => &self.content_types,
            ResourceKind::Entries => &self.entries,
            ResourceKind::Assets => &self.assets,
            ResourceKind::Locales => &self.locales,
            ResourceKind::Webhooks => &self.webhooks,
        }
    }

    pub fn counts(&self) -> ResourceCounts {
        ResourceCounts {
            content_types: self.content_types.len(),
            entries: self.entries.len(),
            assets: self.assets.len(),
            locales: self.locales.len(),
            webhooks: self.webhooks.len(),
            editor_interfaces: self.editor_interfaces.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts().total() == 0
    }
}

/// Per-collection record counts of a [`SourceSpace`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCounts {
    pub content_types: usize,
    pub entries: usize,
    pub assets: usize,
    pub locales: usize,
    pub webhooks: usize,
    pub editor_interfaces: usize,
}

impl ResourceCounts {
    pub fn total(&self) -> usize {
        self.content_types
            + self.entries
            + self.assets
            + self.locales
            + self.webhooks
            + self.editor_interfaces
    }
}
