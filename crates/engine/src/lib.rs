//! Threadwatch Engine library.
//!
//! Keeps a badge count of the user's own discussions that have new comments
//! from other people since the last check.
//!
//! ## Structure
//!
//! - `use_cases/` - The unread badge façade (poll, mark as read, subscribe)
//! - `infrastructure/` - Port traits and their adapters (storage, identity,
//!   snapshots, indicator sink, scheduler)
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
