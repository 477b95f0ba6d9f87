//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Time (system clock vs. a manually driven clock)
//! - Storage (per-account data directories)

pub mod storage;
pub mod time;

pub use storage::AccountPaths;
pub use time::{Clock, ManualClock, SystemClock};
