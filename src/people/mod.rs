//! Recently contacted people
//!
//! Keeps a per-account list of avatars the user has interacted with, plus
//! the arrival times of avatars currently nearby:
//! - Records are keyed by avatar id, last write wins
//! - Persisted as one JSON record per line, minus transient `nearby` entries
//! - Expired records are dropped when the file is loaded

pub mod arrival;
pub mod registry;
pub mod signal;

pub use arrival::ArrivalTimes;
pub use registry::{RecentPeople, RecentPeopleBuilder};
pub use signal::{Change, ChangeSignal, Subscription};
