//! The authoritative entry collection and its persistence side effects.

pub mod backend;

use crate::errors::{AppError, AppResult};
use crate::models::entry::{EntryDraft, EntryPatch, TimeEntry};
use crate::models::settings::Settings;
use backend::{ENTRIES_KEY, SETTINGS_KEY, StorageBackend};

/// Owns the in-memory snapshot of all entries plus the settings record, and
/// every durable write. The full collection is persisted after each mutation;
/// derived views (`crate::core::aggregate`) are recomputed per read and never
/// cached here.
///
/// Writes are confirmed before the snapshot commits: a failed storage call
/// propagates its error and leaves the previous in-memory state intact.
pub struct EntryStore<S: StorageBackend> {
    storage: S,
    entries: Vec<TimeEntry>,
    settings: Settings,
    load_warnings: Vec<AppError>,
}

impl<S: StorageBackend> EntryStore<S> {
    /// Read the persisted collection and settings. Missing keys yield an
    /// empty collection and default settings; unreadable or malformed data
    /// falls back the same way and is kept as a non-fatal load warning.
    pub fn open(storage: S) -> Self {
        let mut load_warnings = Vec::new();

        let entries = match storage.get(ENTRIES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    load_warnings.push(AppError::CorruptData(e));
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                load_warnings.push(e);
                Vec::new()
            }
        };

        let settings = match storage.get(SETTINGS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(settings) => settings,
                Err(e) => {
                    load_warnings.push(AppError::CorruptData(e));
                    Settings::default()
                }
            },
            Ok(None) => Settings::default(),
            Err(e) => {
                load_warnings.push(e);
                Settings::default()
            }
        };

        Self {
            storage,
            entries,
            settings,
            load_warnings,
        }
    }

    /// Current snapshot, in insertion order. Consumers sort as needed.
    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Non-fatal problems encountered while loading persisted state.
    pub fn load_warnings(&self) -> &[AppError] {
        &self.load_warnings
    }

    pub fn find(&self, id: &str) -> Option<&TimeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Create an entry from a draft: assigns the id, resolves a missing rate
    /// to the current default, stamps timestamps, persists, and returns the
    /// stored entry.
    pub fn add(&mut self, draft: EntryDraft) -> AppResult<TimeEntry> {
        let entry = TimeEntry::create(draft, self.settings.default_hourly_rate);

        let mut next = self.entries.clone();
        next.push(entry.clone());
        self.persist_entries(next)?;

        Ok(entry)
    }

    /// Merge `patch` into the entry matching `id`. Returns `Ok(false)` when
    /// no entry matches; the collection is then left untouched.
    pub fn update(&mut self, id: &str, patch: EntryPatch) -> AppResult<bool> {
        let Some(idx) = self.entries.iter().position(|e| e.id == id) else {
            return Ok(false);
        };

        let mut next = self.entries.clone();
        next[idx].apply(patch);
        self.persist_entries(next)?;

        Ok(true)
    }

    /// Remove the entry matching `id`. Unknown ids are a no-op, not a fault.
    pub fn delete(&mut self, id: &str) -> AppResult<bool> {
        if !self.entries.iter().any(|e| e.id == id) {
            return Ok(false);
        }

        let next: Vec<TimeEntry> = self
            .entries
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();
        self.persist_entries(next)?;

        Ok(true)
    }

    /// Flip the payment flag of one entry. Day-level paid status is derived
    /// and never toggled wholesale.
    pub fn toggle_paid(&mut self, id: &str) -> AppResult<bool> {
        let Some(entry) = self.find(id) else {
            return Ok(false);
        };

        let patch = EntryPatch {
            is_paid: Some(!entry.is_paid),
            ..Default::default()
        };
        self.update(id, patch)
    }

    /// Replace and persist the settings record. Rate positivity is validated
    /// at the caller's boundary, not here.
    pub fn save_settings(&mut self, settings: Settings) -> AppResult<()> {
        let raw = serde_json::to_string(&settings)?;
        self.storage.set(SETTINGS_KEY, &raw)?;
        self.settings = settings;
        Ok(())
    }

    /// Replace the whole state with an externally supplied collection (the
    /// backup-restore path). The entry write is all-or-nothing; settings, if
    /// given, are saved after the entries commit.
    pub fn adopt_snapshot(
        &mut self,
        entries: Vec<TimeEntry>,
        settings: Option<Settings>,
    ) -> AppResult<()> {
        self.persist_entries(entries)?;
        if let Some(settings) = settings {
            self.save_settings(settings)?;
        }
        Ok(())
    }

    /// Remove both persisted records and reset to the empty/default state.
    /// Storage removals happen before the in-memory reset, like any write.
    pub fn clear_all(&mut self) -> AppResult<()> {
        self.storage.remove(ENTRIES_KEY)?;
        self.storage.remove(SETTINGS_KEY)?;
        self.entries = Vec::new();
        self.settings = Settings::default();
        Ok(())
    }

    /// Serialize and write the full collection, committing in-memory only
    /// after the storage call succeeds.
    fn persist_entries(&mut self, next: Vec<TimeEntry>) -> AppResult<()> {
        let raw = serde_json::to_string(&next)?;
        self.storage.set(ENTRIES_KEY, &raw)?;
        self.entries = next;
        Ok(())
    }
}
