//! The recent people registry

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use tempfile::NamedTempFile;
use uuid::Uuid;

use crate::consts::DEFAULT_MAX_AGE_DAYS;
use crate::error::{Result, ViewerDataError};
use crate::groups::{GroupDirectory, NoGroups};
use crate::people::arrival::ArrivalTimes;
use crate::people::signal::{Change, ChangeSignal, Subscription};
use crate::platform::{Clock, SystemClock};
use crate::record::ContactRecord;

/// People the local avatar has recently interacted with.
///
/// Built once per session through [`RecentPeople::builder`], which loads the
/// backing file immediately. The registry saves itself again when dropped.
pub struct RecentPeople {
    people: HashMap<Uuid, ContactRecord>,
    arrivals: ArrivalTimes,
    filename: Option<PathBuf>,
    agent_id: Uuid,
    max_age_days: u32,
    groups: Box<dyn GroupDirectory>,
    clock: Box<dyn Clock>,
    changed: ChangeSignal<RecentPeople>,
}

/// Collaborators and settings for a [`RecentPeople`]
pub struct RecentPeopleBuilder {
    agent_id: Uuid,
    filename: Option<PathBuf>,
    max_age_days: u32,
    groups: Box<dyn GroupDirectory>,
    clock: Box<dyn Clock>,
}

impl RecentPeopleBuilder {
    /// Backing file. Without one the registry is memory-only and
    /// `save`/`load` fail with [`ViewerDataError::NoFilename`].
    pub fn filename(mut self, path: impl Into<PathBuf>) -> Self {
        self.filename = Some(path.into());
        self
    }

    /// Records older than this are dropped on load
    pub fn max_age_days(mut self, days: u32) -> Self {
        self.max_age_days = days;
        self
    }

    pub fn groups(mut self, groups: impl GroupDirectory + 'static) -> Self {
        self.groups = Box::new(groups);
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Build the registry and load whatever the backing file holds
    pub fn open(self) -> RecentPeople {
        let mut people = RecentPeople {
            people: HashMap::new(),
            arrivals: ArrivalTimes::new(),
            filename: self.filename,
            agent_id: self.agent_id,
            max_age_days: self.max_age_days,
            groups: self.groups,
            clock: self.clock,
            changed: ChangeSignal::new(),
        };
        if let Err(e) = people.load() {
            log::debug!("Recent people not loaded: {}", e);
        }
        people
    }
}

impl RecentPeople {
    /// Start building a registry for the given local agent
    pub fn builder(agent_id: Uuid) -> RecentPeopleBuilder {
        RecentPeopleBuilder {
            agent_id,
            filename: None,
            max_age_days: DEFAULT_MAX_AGE_DAYS,
            groups: Box::new(NoGroups),
            clock: Box::new(SystemClock),
        }
    }

    /// Insert or replace the record for `id`.
    ///
    /// The own agent and known groups are refused without touching the
    /// registry. On success `record["id"]` is set to `id`.
    pub fn add(&mut self, id: Uuid, mut record: ContactRecord) -> Result<()> {
        if id == self.agent_id {
            log::debug!("Ignoring own avatar {} for recent people", id);
            return Err(ViewerDataError::SelfAdd(id));
        }
        if self.groups.is_group(&id) {
            log::debug!("Ignoring group {} for recent people", id);
            return Err(ViewerDataError::GroupId(id));
        }

        record.set_id(id);
        self.people.insert(id, record);
        self.changed.emit(self, &Change::Added(id));
        Ok(())
    }

    /// Add `id` with a record dated now
    pub fn record_interaction(&mut self, id: Uuid) -> Result<()> {
        let record = ContactRecord::dated(self.clock.now());
        self.add(id, record)
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.people.contains_key(id)
    }

    /// Snapshot of every tracked id, in no particular order
    pub fn ids(&self) -> Vec<Uuid> {
        self.people.keys().copied().collect()
    }

    /// Last interaction time; `None` for unknown ids or undated records
    pub fn date(&self, id: &Uuid) -> Option<DateTime<Utc>> {
        self.people.get(id).and_then(ContactRecord::date)
    }

    /// Copy of the record for `id`, empty when absent
    pub fn record(&self, id: &Uuid) -> ContactRecord {
        self.people.get(id).cloned().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn max_age_days(&self) -> u32 {
        self.max_age_days
    }

    /// Rebuild arrival times from the current nearby set
    pub fn update_arrival_times(&mut self, ids: &[Uuid]) {
        let now = self.clock.now();
        self.arrivals.update(ids, now);
    }

    /// When `id` entered the nearby set; now if it is not tracked
    pub fn arrival_time(&self, id: &Uuid) -> DateTime<Utc> {
        self.arrivals.arrival_or(id, self.clock.now())
    }

    /// Get notified after every add, reload and clear.
    /// The callback sees the registry as it is after the change.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&RecentPeople, &Change) + 'static,
    {
        self.changed.subscribe(callback)
    }

    /// Write every record not flagged `nearby`, one per line.
    ///
    /// Writes to a temporary file next to the backing file and renames it
    /// into place, so a failed save leaves the previous history intact.
    pub fn save(&self) -> Result<()> {
        let path = self.filename.as_deref().ok_or(ViewerDataError::NoFilename)?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut writer = BufWriter::new(NamedTempFile::new_in(dir)?);
        let mut written = 0;
        for record in self.people.values().filter(|r| !r.is_nearby()) {
            writeln!(writer, "{}", record.to_line()?)?;
            written += 1;
        }
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.persist(path).map_err(|e| e.error)?;

        log::info!("Saved {} recent people to {}", written, path.display());
        Ok(())
    }

    /// Replace the registry with the backing file's contents.
    ///
    /// Reading stops at the first line that does not parse or has no usable
    /// `id`; everything after it is lost. A missing file gives an empty
    /// registry. Observers are notified either way.
    pub fn load(&mut self) -> Result<()> {
        log::info!("Loading recent people storage");
        let path = self.filename.clone().ok_or(ViewerDataError::NoFilename)?;

        self.people.clear();
        match File::open(&path) {
            Ok(file) => self.read_records(BufReader::new(file)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No recent people file at {}", path.display());
            }
            Err(e) => log::warn!("Could not open {}: {}", path.display(), e),
        }

        self.changed.emit(self, &Change::Reloaded);
        Ok(())
    }

    fn read_records(&mut self, reader: impl BufRead) {
        let cutoff = self.cutoff();
        let mut expired = 0;

        for (index, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::warn!("Stopped reading recent people at line {}: {}", index + 1, e);
                    break;
                }
            };
            let record = match ContactRecord::from_line(&line) {
                Ok(record) => record,
                Err(e) => {
                    log::warn!("Stopped reading recent people at line {}: {}", index + 1, e);
                    break;
                }
            };
            let Some(id) = record.id() else {
                log::warn!("Stopped reading recent people at line {}: no id", index + 1);
                break;
            };

            if id == self.agent_id {
                continue;
            }
            match record.date() {
                Some(date) if date > cutoff => {
                    self.people.insert(id, record);
                }
                _ => expired += 1,
            }
        }

        log::info!("Loaded {} recent people ({} expired)", self.people.len(), expired);
    }

    /// Oldest date still worth keeping
    fn cutoff(&self) -> DateTime<Utc> {
        Duration::try_days(i64::from(self.max_age_days))
            .and_then(|age| self.clock.now().checked_sub_signed(age))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Forget everyone and persist the empty list
    pub fn clear_history(&mut self) -> Result<()> {
        self.people.clear();
        self.changed.emit(self, &Change::Cleared);
        self.save()
    }
}

impl Drop for RecentPeople {
    fn drop(&mut self) {
        match self.save() {
            Ok(()) | Err(ViewerDataError::NoFilename) => {}
            Err(e) => log::warn!("Failed to save recent people: {}", e),
        }
    }
}

impl std::fmt::Debug for RecentPeople {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecentPeople")
            .field("people", &self.people.len())
            .field("nearby", &self.arrivals.len())
            .field("filename", &self.filename)
            .field("agent_id", &self.agent_id)
            .field("max_age_days", &self.max_age_days)
            .finish()
    }
}
