//! Item Snapshot
//!
//! A point-in-time view of one discussion as returned by the snapshot
//! provider: who wrote it, when it was created and last touched, and a small
//! recency-ordered window of its latest comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ItemId, UserId};

/// A single comment (or reply) on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    /// When the comment was posted
    pub at: DateTime<Utc>,
    /// Whether the current viewer wrote it
    pub by_viewer: bool,
}

impl ActivityRecord {
    pub fn from_viewer(at: DateTime<Utc>) -> Self {
        Self { at, by_viewer: true }
    }

    pub fn from_other(at: DateTime<Utc>) -> Self {
        Self {
            at,
            by_viewer: false,
        }
    }
}

/// One polled item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSnapshot {
    pub id: ItemId,
    pub author: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Latest activity, newest first. `None` means the provider could not say.
    #[serde(default)]
    pub recent_activity: Option<Vec<ActivityRecord>>,
}

impl ItemSnapshot {
    pub fn new(
        id: impl Into<ItemId>,
        author: impl Into<UserId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            created_at,
            updated_at,
            recent_activity: None,
        }
    }

    pub fn with_activity(mut self, activity: Vec<ActivityRecord>) -> Self {
        self.recent_activity = Some(activity);
        self
    }

    pub fn is_authored_by(&self, user: &UserId) -> bool {
        &self.author == user
    }

    /// The item was touched after `watermark` and has had activity beyond its
    /// own creation.
    ///
    /// An item whose `updated_at` equals its `created_at` has never been
    /// commented on and never qualifies.
    pub fn has_activity_since(&self, watermark: DateTime<Utc>) -> bool {
        self.updated_at > watermark && self.updated_at > self.created_at
    }

    /// Someone other than the viewer commented after `watermark`.
    ///
    /// Fails open: with no activity window the change cannot be attributed to
    /// the viewer, so this returns `true`. Entries at or before the watermark
    /// are ignored.
    pub fn has_foreign_activity_since(&self, watermark: DateTime<Utc>) -> bool {
        match &self.recent_activity {
            None => true,
            Some(window) => window
                .iter()
                .any(|record| record.at > watermark && !record.by_viewer),
        }
    }
}

/// Pagination cursor reported alongside a snapshot page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

/// A page of item snapshots. Only `items` feeds the reconciler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotPage {
    pub items: Vec<ItemSnapshot>,
    #[serde(default)]
    pub page_info: PageInfo,
}

impl SnapshotPage {
    pub fn new(items: Vec<ItemSnapshot>) -> Self {
        Self {
            items,
            page_info: PageInfo::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn uncommented_item_never_has_activity() {
        let item = ItemSnapshot::new("a", "me", t0(), t0());
        assert!(!item.has_activity_since(t0() - Duration::hours(1)));
    }

    #[test]
    fn activity_must_be_after_watermark() {
        let item = ItemSnapshot::new("a", "me", t0() - Duration::hours(3), t0());
        assert!(item.has_activity_since(t0() - Duration::seconds(1)));
        assert!(!item.has_activity_since(t0()));
    }

    #[test]
    fn missing_window_fails_open() {
        let item = ItemSnapshot::new("a", "me", t0() - Duration::hours(3), t0());
        assert!(item.has_foreign_activity_since(t0() - Duration::hours(1)));
    }

    #[test]
    fn empty_window_is_not_foreign_activity() {
        let item =
            ItemSnapshot::new("a", "me", t0() - Duration::hours(3), t0()).with_activity(vec![]);
        assert!(!item.has_foreign_activity_since(t0() - Duration::hours(1)));
    }

    #[test]
    fn viewer_comments_and_stale_comments_are_ignored() {
        let watermark = t0() - Duration::hours(2);
        let item = ItemSnapshot::new("a", "me", t0() - Duration::hours(5), t0()).with_activity(
            vec![
                ActivityRecord::from_viewer(t0()),
                ActivityRecord::from_other(watermark),
                ActivityRecord::from_other(watermark - Duration::hours(1)),
            ],
        );
        assert!(!item.has_foreign_activity_since(watermark));
    }

    #[test]
    fn deserializes_provider_json() {
        let json = r#"{
            "items": [{
                "id": "D_1",
                "author": "octocat",
                "createdAt": "2025-03-01T09:00:00Z",
                "updatedAt": "2025-03-01T11:00:00Z",
                "recentActivity": [{"at": "2025-03-01T11:00:00Z", "byViewer": false}]
            }],
            "pageInfo": {"hasNextPage": true, "endCursor": "Y3Vyc29y"}
        }"#;
        let page: SnapshotPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, ItemId::from("D_1"));
        assert_eq!(page.items[0].recent_activity.as_ref().map(Vec::len), Some(1));
        assert!(page.page_info.has_next_page);
    }

    #[test]
    fn absent_window_deserializes_as_unknown() {
        let json = r#"{
            "id": "D_1",
            "author": "octocat",
            "createdAt": "2025-03-01T09:00:00Z",
            "updatedAt": "2025-03-01T11:00:00Z"
        }"#;
        let item: ItemSnapshot = serde_json::from_str(json).unwrap();
        assert!(item.recent_activity.is_none());
    }
}
