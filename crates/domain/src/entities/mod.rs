//! Domain entities - Core business objects

mod badge;
mod item_snapshot;
mod unread_state;

pub use badge::BadgePayload;
pub use item_snapshot::{ActivityRecord, ItemSnapshot, PageInfo, SnapshotPage};
pub use unread_state::UnreadState;
