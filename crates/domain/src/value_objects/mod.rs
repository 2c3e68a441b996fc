//! Value objects - Immutable objects defined by their attributes

mod tooltip;
mod unread_ids;
mod unread_limit;

pub use tooltip::{TooltipTemplate, COUNT_PLACEHOLDER};
pub use unread_ids::UnreadIds;
pub use unread_limit::UnreadLimit;
