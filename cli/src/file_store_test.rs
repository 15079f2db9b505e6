use qotd::store::{DARK_MODE_KEY, DATE_KEY, DECK_KEY};

use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("qotd-cli-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir.join("state.json")
}

// =============================================================================
// open
// =============================================================================

#[test]
fn missing_file_opens_empty() {
    let store = FileStore::open(scratch("missing"));
    assert_eq!(store.get(DECK_KEY), None);
}

#[test]
fn malformed_file_opens_empty() {
    let path = scratch("malformed");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{not json").unwrap();

    let store = FileStore::open(&path);

    assert_eq!(store.get(DATE_KEY), None);
}

#[test]
fn blank_file_opens_empty() {
    let path = scratch("blank");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "\n").unwrap();

    assert_eq!(FileStore::open(&path).get(DATE_KEY), None);
}

// =============================================================================
// set
// =============================================================================

#[test]
fn values_survive_reopen() {
    let path = scratch("reopen");
    let mut store = FileStore::open(&path);
    store.set(DATE_KEY, "2026-10-19").unwrap();
    store.set(DARK_MODE_KEY, "true").unwrap();

    let reopened = FileStore::open(&path);

    assert_eq!(reopened.get(DATE_KEY).as_deref(), Some("2026-10-19"));
    assert_eq!(reopened.get(DARK_MODE_KEY).as_deref(), Some("true"));
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn file_is_a_flat_string_object() {
    let path = scratch("shape");
    let mut store = FileStore::open(&path);
    store.set(DECK_KEY, r#"["A","B"]"#).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value[DECK_KEY], serde_json::json!(r#"["A","B"]"#));
}

#[test]
fn unwritable_path_reports_error() {
    let path = scratch("unwritable");
    fs::create_dir_all(&path).unwrap();

    let mut store = FileStore::open(&path);
    let err = store.set(DATE_KEY, "2026-10-19").unwrap_err();

    assert!(matches!(err, StoreError::Write { ref key, .. } if key == DATE_KEY));
    assert_eq!(store.get(DATE_KEY).as_deref(), Some("2026-10-19"), "memory copy still updated");
}
