//! Contact records
//!
//! A record is a self-describing field map. `id` and `date` have typed
//! accessors; every other field is carried through untouched so callers can
//! attach whatever metadata they like (e.g. `nearby`).
//!
//! On disk each record is one line of JSON.

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::Result;

/// Field holding the contact's identifier
pub const FIELD_ID: &str = "id";
/// Field holding the time of last interaction
pub const FIELD_DATE: &str = "date";
/// Transient presence flag, never persisted
pub const FIELD_NEARBY: &str = "nearby";

/// Metadata about one recently contacted person
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactRecord {
    fields: Map<String, Value>,
}

impl ContactRecord {
    /// Empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Record with only a `date` field
    pub fn dated(date: DateTime<Utc>) -> Self {
        let mut record = Self::new();
        record.set_date(date);
        record
    }

    /// Builder-style field setter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parsed `id`; `None` when missing or not a UUID string
    pub fn id(&self) -> Option<Uuid> {
        self.fields
            .get(FIELD_ID)
            .and_then(Value::as_str)
            .and_then(|s| Uuid::parse_str(s).ok())
    }

    pub fn set_id(&mut self, id: Uuid) {
        self.set(FIELD_ID, id.hyphenated().to_string());
    }

    /// Parsed `date`; `None` when missing or not RFC 3339
    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.fields
            .get(FIELD_DATE)
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|d| d.with_timezone(&Utc))
    }

    pub fn set_date(&mut self, date: DateTime<Utc>) {
        self.set(FIELD_DATE, date.to_rfc3339_opts(SecondsFormat::AutoSi, true));
    }

    /// True when the `nearby` flag is set.
    ///
    /// Booleans are taken as-is, numbers are true when non-zero and strings
    /// when non-empty. Anything else is false.
    pub fn is_nearby(&self) -> bool {
        match self.fields.get(FIELD_NEARBY) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            _ => false,
        }
    }

    /// Serialize to a single line (no trailing newline)
    pub fn to_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse one line. Anything other than a JSON object fails.
    pub fn from_line(line: &str) -> Result<Self> {
        Ok(serde_json::from_str(line)?)
    }
}

/// Format a last-interaction time relative to `now`
pub fn format_last_seen(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(date);
    let days = diff.num_days();
    let hours = diff.num_hours();
    let mins = diff.num_minutes();

    if days >= 1 {
        if days == 1 {
            "Yesterday".to_string()
        } else if days < 7 {
            format!("{} days ago", days)
        } else {
            format!("{}/{}/{:02}", date.month(), date.day(), date.year() % 100)
        }
    } else if hours >= 1 {
        if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{} hours ago", hours)
        }
    } else if mins >= 1 {
        if mins == 1 {
            "1 min ago".to_string()
        } else {
            format!("{} mins ago", mins)
        }
    } else {
        "Just now".to_string()
    }
}
