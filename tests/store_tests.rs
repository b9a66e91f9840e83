use uuid::Uuid;
use worklog::db::storage::SqliteStorage;
use worklog::errors::{AppError, AppResult};
use worklog::models::entry::{EntryDraft, EntryPatch, TimeEntry};
use worklog::models::settings::Settings;
use worklog::store::EntryStore;
use worklog::store::backend::{ENTRIES_KEY, MemoryStorage, StorageBackend};
use worklog::utils::date::parse_date;
use worklog::utils::time::parse_time;

fn draft(date: &str, start: &str, end: &str, rate: Option<f64>, paid: bool) -> EntryDraft {
    EntryDraft {
        date: parse_date(date).expect("valid test date"),
        start_time: parse_time(start).expect("valid test time"),
        end_time: parse_time(end).expect("valid test time"),
        description: "test session".to_string(),
        is_paid: paid,
        hourly_rate: rate,
    }
}

#[test]
fn add_assigns_identity_and_default_rate() {
    let mut store = EntryStore::open(MemoryStorage::new());

    let entry = store
        .add(draft("2025-01-10", "09:00", "17:00", None, false))
        .expect("add entry");

    assert!(!entry.id.is_empty());
    assert!(!entry.created_at.is_empty());
    assert_eq!(entry.created_at, entry.updated_at);
    // No rate given: the configured default (50) is captured into the entry.
    assert_eq!(entry.hourly_rate, Some(50.0));
    assert_eq!(store.entries().len(), 1);
}

#[test]
fn explicit_rate_wins_over_default() {
    let mut store = EntryStore::open(MemoryStorage::new());

    let entry = store
        .add(draft("2025-01-10", "09:00", "17:00", Some(72.5), false))
        .expect("add entry");

    assert_eq!(entry.hourly_rate, Some(72.5));
}

#[test]
fn changed_default_rate_applies_to_new_entries_only() {
    let mut store = EntryStore::open(MemoryStorage::new());

    let before = store
        .add(draft("2025-01-10", "09:00", "10:00", None, false))
        .expect("add entry");

    store
        .save_settings(Settings {
            default_hourly_rate: 90.0,
        })
        .expect("save settings");

    let after = store
        .add(draft("2025-01-11", "09:00", "10:00", None, false))
        .expect("add entry");

    assert_eq!(before.hourly_rate, Some(50.0));
    assert_eq!(after.hourly_rate, Some(90.0));
    // The captured rate is not re-derived later.
    assert_eq!(store.entries()[0].hourly_rate, Some(50.0));
}

#[test]
fn update_merges_fields_and_keeps_identity() {
    let mut store = EntryStore::open(MemoryStorage::new());
    let entry = store
        .add(draft("2025-01-10", "09:00", "17:00", None, false))
        .expect("add entry");

    let changed = store
        .update(
            &entry.id,
            EntryPatch {
                description: Some("rewritten".to_string()),
                is_paid: Some(true),
                ..Default::default()
            },
        )
        .expect("update entry");
    assert!(changed);

    let updated = store.find(&entry.id).expect("entry still present");
    assert_eq!(updated.description, "rewritten");
    assert!(updated.is_paid);
    assert_eq!(updated.created_at, entry.created_at);
    assert_eq!(updated.start_time, entry.start_time);
}

#[test]
fn update_unknown_id_is_a_soft_no_op() {
    let mut store = EntryStore::open(MemoryStorage::new());
    store
        .add(draft("2025-01-10", "09:00", "17:00", None, false))
        .expect("add entry");

    let changed = store
        .update(
            "no-such-id",
            EntryPatch {
                is_paid: Some(true),
                ..Default::default()
            },
        )
        .expect("update returns");

    assert!(!changed);
    assert!(!store.entries()[0].is_paid);
}

#[test]
fn delete_removes_only_the_matching_entry() {
    let mut store = EntryStore::open(MemoryStorage::new());
    let first = store
        .add(draft("2025-01-10", "09:00", "17:00", None, false))
        .expect("add entry");
    let second = store
        .add(draft("2025-01-11", "09:00", "17:00", None, false))
        .expect("add entry");

    assert!(store.delete(&first.id).expect("delete"));
    assert_eq!(store.entries().len(), 1);
    assert_eq!(store.entries()[0].id, second.id);
}

#[test]
fn delete_unknown_id_leaves_collection_unchanged() {
    let mut store = EntryStore::open(MemoryStorage::new());
    store
        .add(draft("2025-01-10", "09:00", "17:00", None, false))
        .expect("add entry");
    let snapshot: Vec<TimeEntry> = store.entries().to_vec();

    let removed = store.delete("missing").expect("delete returns");

    assert!(!removed);
    assert_eq!(store.entries(), snapshot.as_slice());
}

#[test]
fn toggle_paid_flips_one_entry() {
    let mut store = EntryStore::open(MemoryStorage::new());
    let entry = store
        .add(draft("2025-01-10", "09:00", "17:00", None, false))
        .expect("add entry");

    assert!(store.toggle_paid(&entry.id).expect("toggle"));
    assert!(store.find(&entry.id).expect("present").is_paid);

    assert!(store.toggle_paid(&entry.id).expect("toggle"));
    assert!(!store.find(&entry.id).expect("present").is_paid);

    assert!(!store.toggle_paid("missing").expect("toggle unknown"));
}

#[test]
fn adopt_snapshot_replaces_state_wholesale() {
    let mut store = EntryStore::open(MemoryStorage::new());
    store
        .add(draft("2025-01-10", "09:00", "17:00", None, false))
        .expect("add entry");

    let replacement = vec![TimeEntry {
        id: Uuid::new_v4().to_string(),
        date: parse_date("2030-06-01").expect("valid date"),
        start_time: parse_time("08:00").expect("valid time"),
        end_time: parse_time("12:00").expect("valid time"),
        description: "restored".to_string(),
        is_paid: true,
        hourly_rate: Some(10.0),
        created_at: String::new(),
        updated_at: String::new(),
    }];

    store
        .adopt_snapshot(
            replacement.clone(),
            Some(Settings {
                default_hourly_rate: 99.0,
            }),
        )
        .expect("adopt snapshot");

    assert_eq!(store.entries(), replacement.as_slice());
    assert_eq!(store.settings().default_hourly_rate, 99.0);
}

#[test]
fn clear_all_resets_to_defaults() {
    let mut store = EntryStore::open(MemoryStorage::new());
    store
        .add(draft("2025-01-10", "09:00", "17:00", None, false))
        .expect("add entry");
    store
        .save_settings(Settings {
            default_hourly_rate: 75.0,
        })
        .expect("save settings");

    store.clear_all().expect("clear");

    assert!(store.entries().is_empty());
    assert_eq!(store.settings().default_hourly_rate, 50.0);
}

#[test]
fn malformed_stored_entries_fall_back_with_a_warning() {
    let storage = MemoryStorage::seeded(ENTRIES_KEY, "{ definitely not json ]");
    let store = EntryStore::open(storage);

    assert!(store.entries().is_empty());
    assert_eq!(store.settings().default_hourly_rate, 50.0);
    assert_eq!(store.load_warnings().len(), 1);
}

#[test]
fn state_survives_reopening_the_sqlite_backend() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("worklog.sqlite");
    let db_str = db_path.to_string_lossy().to_string();

    let added = {
        let storage = SqliteStorage::open(&db_str).expect("open storage");
        let mut store = EntryStore::open(storage);
        store
            .add(draft("2025-01-10", "22:00", "02:00", Some(60.0), true))
            .expect("add entry")
    };

    let storage = SqliteStorage::open(&db_str).expect("reopen storage");
    let store = EntryStore::open(storage);

    assert!(store.load_warnings().is_empty());
    assert_eq!(store.entries().len(), 1);
    assert_eq!(store.entries()[0], added);
}

/// Backend whose writes always fail, for the write-confirmed-before-commit
/// contract.
struct FailingStorage;

impl StorageBackend for FailingStorage {
    fn get(&self, _key: &str) -> AppResult<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> AppResult<()> {
        Err(AppError::Other("disk full".to_string()))
    }

    fn remove(&mut self, _key: &str) -> AppResult<()> {
        Err(AppError::Other("disk full".to_string()))
    }
}

#[test]
fn failed_write_does_not_commit_the_snapshot() {
    let mut store = EntryStore::open(FailingStorage);

    let result = store.add(draft("2025-01-10", "09:00", "17:00", None, false));

    assert!(result.is_err());
    assert!(store.entries().is_empty(), "in-memory state must not commit");
}
