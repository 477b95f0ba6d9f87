//! Viewer Data - session data stores for a virtual-world viewer
//!
//! Core modules:
//! - `people`: Recently contacted people, nearby arrival times, change signal
//! - `record`: Self-describing contact records and their line format
//! - `groups`: Group resolution used to keep groups out of recent people
//! - `platform`: Clock and per-account storage paths
//! - `settings`: Persisted viewer settings
//! - `session`: Per-login owner of the stores
//! - `material_id`: 16-byte material identifiers

pub mod error;
pub mod groups;
pub mod material_id;
pub mod people;
pub mod platform;
pub mod record;
pub mod session;
pub mod settings;

pub use error::{Result, ViewerDataError};
pub use material_id::MaterialId;
pub use people::{Change, RecentPeople, Subscription};
pub use record::ContactRecord;
pub use session::Session;
pub use settings::Settings;

/// Fixed names and defaults
pub mod consts {
    /// Recent people file in each account directory.
    /// Holds one JSON record per line despite the extension.
    pub const RECENT_PEOPLE_FILE_NAME: &str = "recent_people.xml";

    /// Default retention for recent people entries
    pub const DEFAULT_MAX_AGE_DAYS: u32 = 30;
}
