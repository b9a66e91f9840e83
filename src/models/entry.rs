use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::hours::compute_hours;

/// Serde adapter for wall-clock `HH:MM` fields.
///
/// chrono serializes `NaiveTime` as `HH:MM:SS` by default; the interchange
/// formats carry bare `HH:MM` strings, so both directions go through here.
/// Deserialization also accepts `HH:MM:SS` from foreign artifacts.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(t: &NaiveTime, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&t.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(de)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(|_| D::Error::custom(format!("invalid time of day: {raw}")))
    }
}

/// One recorded work session.
///
/// Field names follow the interchange artifact (camelCase on the wire).
/// Everything except the identity and the time range carries a serde default
/// so that artifacts from older exports still import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    pub date: NaiveDate, // ⇔ "YYYY-MM-DD"
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime, // ⇔ "HH:MM"
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime, // ⇔ "HH:MM"
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub created_at: String, // ISO 8601
    #[serde(default)]
    pub updated_at: String, // ISO 8601
}

impl TimeEntry {
    /// Constructor for entries created through the store.
    /// - Assigns a fresh opaque id
    /// - Resolves a missing rate to the configured default
    /// - Stamps `created_at`/`updated_at` with now() in ISO 8601
    pub fn create(draft: EntryDraft, default_rate: f64) -> Self {
        let now = Local::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            date: draft.date,
            start_time: draft.start_time,
            end_time: draft.end_time,
            description: draft.description,
            is_paid: draft.is_paid,
            hourly_rate: Some(draft.hourly_rate.unwrap_or(default_rate)),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Merge a partial update into the entry and refresh `updated_at`.
    pub fn apply(&mut self, patch: EntryPatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(start) = patch.start_time {
            self.start_time = start;
        }
        if let Some(end) = patch.end_time {
            self.end_time = end;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(is_paid) = patch.is_paid {
            self.is_paid = is_paid;
        }
        if let Some(rate) = patch.hourly_rate {
            self.hourly_rate = Some(rate);
        }
        self.updated_at = Local::now().to_rfc3339();
    }

    /// Worked hours for this session, overnight spans included.
    pub fn hours(&self) -> f64 {
        compute_hours(self.start_time, self.end_time)
    }

    /// Earnings for this session. Entries without a rate earn zero.
    pub fn earnings(&self) -> f64 {
        self.hours() * self.hourly_rate.unwrap_or(0.0)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M").to_string()
    }
}

/// All entry fields the caller supplies at creation; id and timestamps are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub description: String,
    pub is_paid: bool,
    pub hourly_rate: Option<f64>,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub description: Option<String>,
    pub is_paid: Option<bool>,
    pub hourly_rate: Option<f64>,
}
