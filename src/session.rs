//! Per-login session context
//!
//! Owns the stores that live for one login. Components that need recent
//! people borrow them from here rather than reaching for a global.

use uuid::Uuid;

use crate::consts::RECENT_PEOPLE_FILE_NAME;
use crate::groups::KnownGroups;
use crate::people::RecentPeople;
use crate::platform::{AccountPaths, Clock, SystemClock};
use crate::settings::Settings;

#[derive(Debug)]
pub struct Session {
    agent_id: Uuid,
    paths: AccountPaths,
    settings: Settings,
    groups: KnownGroups,
    recent_people: RecentPeople,
}

impl Session {
    /// Start a session on the system clock
    pub fn start(agent_id: Uuid, paths: AccountPaths) -> Self {
        Self::start_with_clock(agent_id, paths, SystemClock)
    }

    /// Start a session: read settings, then open this account's recent people
    pub fn start_with_clock(agent_id: Uuid, paths: AccountPaths, clock: impl Clock + 'static) -> Self {
        let settings = Settings::load(&paths.shared_file(Settings::FILE_NAME));
        let groups = KnownGroups::new();

        let recent_people = RecentPeople::builder(agent_id)
            .filename(paths.account_file(RECENT_PEOPLE_FILE_NAME))
            .max_age_days(settings.recent_people_max_age_days)
            .groups(groups.clone())
            .clock(clock)
            .open();

        log::info!(
            "Session started for {} ({} recent people)",
            agent_id,
            recent_people.len()
        );

        Self {
            agent_id,
            paths,
            settings,
            groups,
            recent_people,
        }
    }

    pub fn agent_id(&self) -> Uuid {
        self.agent_id
    }

    pub fn paths(&self) -> &AccountPaths {
        &self.paths
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Group ids known this session; register groups here as their data arrives
    pub fn groups(&self) -> &KnownGroups {
        &self.groups
    }

    pub fn recent_people(&self) -> &RecentPeople {
        &self.recent_people
    }

    pub fn recent_people_mut(&mut self) -> &mut RecentPeople {
        &mut self.recent_people
    }
}
