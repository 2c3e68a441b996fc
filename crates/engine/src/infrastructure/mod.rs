//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod app_settings;
pub mod badge_sink;
pub mod change_signal;
pub mod clock;
pub mod identity;
pub mod poller;
pub mod ports;
pub mod snapshot_file;
pub mod state_store;
