//! Badge payload shown on the visual indicator.

use serde::{Deserialize, Serialize};

use crate::value_objects::TooltipTemplate;

/// What the indicator sink renders when there is something unread.
///
/// "No badge" is represented as `Option::<BadgePayload>::None`; a payload
/// always carries a count of at least one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgePayload {
    count: u32,
    tooltip: String,
}

impl BadgePayload {
    /// Payload for `count` unread items, or `None` when there are none.
    pub fn for_count(count: usize, template: &TooltipTemplate) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        Some(Self {
            count,
            tooltip: template.render(count),
        })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }
}
