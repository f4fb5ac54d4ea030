//! Tests for the SQLite-backed settings store.

use tempfile::NamedTempFile;

use tic_tac_theme::{
    GameMode, GameSession, NIGHT_MODE_KEY, Outcome, STATS_NAMESPACE, SettingsStore, SqliteStore,
    StatsRecord, StatsStore, THEME_NAMESPACE, Theme, ThemeStore,
};

/// Creates a temporary database file and opens a store on it. The file
/// handle must stay in scope to keep the file alive.
fn setup_test_db() -> (NamedTempFile, SqliteStore) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();
    let store = SqliteStore::open(&db_path).expect("Failed to open store");
    (db_file, store)
}

#[test]
fn test_missing_key_reads_none() {
    let (_db, store) = setup_test_db();
    assert_eq!(store.get(STATS_NAMESPACE, "xWins").expect("Query failed"), None);
    assert!(!store.contains(THEME_NAMESPACE, NIGHT_MODE_KEY).expect("Query failed"));
}

#[test]
fn test_set_then_get() {
    let (_db, mut store) = setup_test_db();
    store.set("misc", "greeting", "hello").expect("Write failed");
    assert_eq!(
        store.get("misc", "greeting").expect("Query failed").as_deref(),
        Some("hello")
    );
}

#[test]
fn test_set_overwrites() {
    let (_db, mut store) = setup_test_db();
    store.set_u32(STATS_NAMESPACE, "draws", 1).expect("Write failed");
    store.set_u32(STATS_NAMESPACE, "draws", 2).expect("Write failed");
    assert_eq!(store.get_u32(STATS_NAMESPACE, "draws", 0), 2);
}

#[test]
fn test_same_key_in_two_namespaces() {
    let (_db, mut store) = setup_test_db();
    store.set("a", "k", "1").expect("Write failed");
    store.set("b", "k", "2").expect("Write failed");
    assert_eq!(store.get("a", "k").expect("Query failed").as_deref(), Some("1"));
    assert_eq!(store.get("b", "k").expect("Query failed").as_deref(), Some("2"));
}

#[test]
fn test_reopen_keeps_values() {
    let (db, mut store) = setup_test_db();
    store.increment(Outcome::OWin).expect("Increment failed");
    store.toggle_theme().expect("Toggle failed");

    let reopened = SqliteStore::open(db.path().to_str().expect("Invalid path"))
        .expect("Reopen failed");
    assert_eq!(reopened.load_stats(), StatsRecord::new(0, 1, 0));
    assert_eq!(reopened.theme(), Theme::Dark);
}

#[test]
fn test_stats_increment_persists() {
    let (_db, mut store) = setup_test_db();
    assert_eq!(store.load_stats(), StatsRecord::default());

    store.increment(Outcome::XWin).expect("Increment failed");
    store.increment(Outcome::XWin).expect("Increment failed");
    let record = store.increment(Outcome::Draw).expect("Increment failed");

    assert_eq!(record, StatsRecord::new(2, 0, 1));
    assert_eq!(store.load_stats(), record);
}

#[test]
fn test_first_run_theme_written() {
    let (_db, mut store) = setup_test_db();
    assert_eq!(store.init_theme().expect("Init failed"), Theme::Light);
    assert_eq!(
        store
            .get(THEME_NAMESPACE, NIGHT_MODE_KEY)
            .expect("Query failed")
            .as_deref(),
        Some("false")
    );
}

#[test]
fn test_session_records_into_database() {
    let (db, store) = setup_test_db();
    let mut session = GameSession::new(GameMode::PlayerVsPlayer, store);

    // X:0, O:1, X:2, O:4, X:3, O:5, X:7, O:6, X:8 fills the board with no line.
    for cell in [0, 1, 2, 4, 3, 5, 7, 6] {
        session.on_cell_tapped(cell).expect("Move rejected");
    }
    let report = session.on_cell_tapped(8).expect("Move rejected");
    assert_eq!(*report.outcome(), Some(Outcome::Draw));

    let reopened = SqliteStore::open(db.path().to_str().expect("Invalid path"))
        .expect("Reopen failed");
    assert_eq!(reopened.load_stats(), StatsRecord::new(0, 0, 1));
}

#[test]
fn test_two_handles_increment_without_losing_counts() {
    let (db, mut first) = setup_test_db();
    let mut second = first.clone();

    let handles = [
        std::thread::spawn(move || {
            for _ in 0..20 {
                first.increment(Outcome::Draw).expect("Increment failed");
            }
        }),
        std::thread::spawn(move || {
            for _ in 0..20 {
                second.increment(Outcome::Draw).expect("Increment failed");
            }
        }),
    ];
    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let db_path = db.path().to_str().expect("Invalid path");
    let store = SqliteStore::open(db_path).expect("Failed to reopen");
    assert_eq!(*store.load_stats().draws(), 40);
}

#[test]
fn test_update_error_names_setting() {
    let (_db, mut store) = setup_test_db();
    store.set(STATS_NAMESPACE, "oWins", "not json").expect("Write failed");

    let err = store.increment(Outcome::OWin).expect_err("Garbage counter accepted");
    assert!(err.to_string().contains("stats/oWins"));
    assert_eq!(
        store.get(STATS_NAMESPACE, "oWins").expect("Query failed").as_deref(),
        Some("not json")
    );
}
