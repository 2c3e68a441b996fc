//! File-backed snapshot source.
//!
//! Reads a [`SnapshotPage`] exported as JSON (camelCase keys, RFC 3339
//! timestamps). The file is re-read on every poll so an external fetcher can
//! replace it between cycles.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use threadwatch_domain::SnapshotPage;

use crate::infrastructure::ports::{SnapshotError, SnapshotPort};

pub struct JsonFileSnapshotSource {
    path: PathBuf,
}

impl JsonFileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotPort for JsonFileSnapshotSource {
    async fn item_snapshots(&self) -> Result<SnapshotPage, SnapshotError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SnapshotError::RequestFailed(format!("reading {}: {}", self.path.display(), e))
        })?;

        let page: SnapshotPage = serde_json::from_str(&raw).map_err(|e| {
            SnapshotError::InvalidResponse(format!("parsing {}: {}", self.path.display(), e))
        })?;

        if page.page_info.has_next_page {
            tracing::debug!(
                items = page.items.len(),
                "Snapshot has further pages; only the first page is reconciled"
            );
        }

        Ok(page)
    }
}
