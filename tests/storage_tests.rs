mod common;
use common::{entry, setup_test_dir, write_log};
use std::fs;
use worklog::errors::AppError;
use worklog::models::LogStore;
use worklog::storage::csv_store;

#[test]
fn test_save_then_load_round_trip() {
    let dir = setup_test_dir("storage_round_trip");
    let path = dir.join("work_log.csv");

    let store = LogStore::from_entries(vec![
        entry("2024-01-02", "Write spec", 90, "draft"),
        entry("2024-01-01", "Review, merge", 0, "said \"ok\""),
        entry("2024-01-03", "Plan", 15, ""),
    ]);

    csv_store::save(&path, &store).expect("save");
    let loaded = csv_store::load(&path).expect("load");

    assert_eq!(loaded.entries(), store.entries());
    assert!(loaded.rejected().is_empty());
}

#[test]
fn test_save_writes_headerless_records() {
    let dir = setup_test_dir("storage_headerless");
    let path = dir.join("work_log.csv");

    let store = LogStore::from_entries(vec![
        entry("2024-01-01", "Write spec", 90, "draft"),
        entry("2024-01-02", "Call", 5, "a, b"),
    ]);
    csv_store::save(&path, &store).expect("save");

    let content = fs::read_to_string(&path).expect("read log");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "2024-01-01,Write spec,90,draft");
    assert_eq!(lines[1], "2024-01-02,Call,5,\"a, b\"");
}

#[test]
fn test_load_missing_file() {
    let dir = setup_test_dir("storage_missing");
    let path = dir.join("nope.csv");

    let err = csv_store::load(&path).unwrap_err();
    assert!(matches!(err, AppError::StorageMissing(p) if p == path));
    assert!(!path.exists());
}

#[test]
fn test_save_into_missing_directory_is_unwritable() {
    let dir = setup_test_dir("storage_unwritable");
    let path = dir.join("missing").join("work_log.csv");

    let store = LogStore::from_entries(vec![entry("2024-01-01", "A", 1, "")]);
    let err = csv_store::save(&path, &store).unwrap_err();
    assert!(matches!(err, AppError::StorageUnwritable { .. }));
}

#[test]
fn test_malformed_records_are_kept_aside() {
    let dir = setup_test_dir("storage_malformed");
    let path = dir.join("work_log.csv");
    write_log(
        &path,
        "2024-01-01,Write spec,90,draft\n\
         2024-01-02,Bad minutes,abc,x\n\
         not-a-date,Task,10,x\n\
         2024-01-03,Too few\n\
         2024-01-04,Negative,-5,x\n\
         2024-01-05,Ok,0,\n",
    );

    let store = csv_store::load(&path).expect("load");

    assert_eq!(
        store.entries(),
        &[
            entry("2024-01-01", "Write spec", 90, "draft"),
            entry("2024-01-05", "Ok", 0, ""),
        ]
    );
    let lines: Vec<u64> = store.rejected().iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![2, 3, 4, 5]);
    assert!(store.rejected()[0].reason.contains("abc"));
    assert!(store.rejected()[2].reason.contains("expected 4 fields"));
}

#[test]
fn test_rejected_records_survive_save() {
    let dir = setup_test_dir("storage_rejected_save");
    let path = dir.join("work_log.csv");
    write_log(&path, "2024-01-01,Write spec,90,draft\n2024-01-02,Bad minutes,abc,x\n");

    let mut store = csv_store::load(&path).expect("load");
    store.push(entry("2024-01-03", "New", 10, "n"));
    csv_store::save(&path, &store).expect("save");

    let content = fs::read_to_string(&path).expect("read log");
    assert!(content.contains("2024-01-02,Bad minutes,abc,x"));

    let reloaded = csv_store::load(&path).expect("reload");
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.rejected().len(), 1);
}

#[test]
fn test_create_empty_keeps_existing_content() {
    let dir = setup_test_dir("storage_create_existing");
    let path = dir.join("work_log.csv");
    write_log(&path, "2024-01-01,Write spec,90,draft\n");

    csv_store::create_empty(&path).expect("create");

    let store = csv_store::load(&path).expect("load");
    assert_eq!(store.len(), 1);
}

#[test]
fn test_create_empty_new_file() {
    let dir = setup_test_dir("storage_create_new");
    let path = dir.join("fresh.csv");

    csv_store::create_empty(&path).expect("create");

    assert!(path.exists());
    assert!(csv_store::load(&path).expect("load").is_empty());
}

#[test]
fn test_invalid_utf8_record_is_set_aside() {
    let dir = setup_test_dir("storage_invalid_utf8");
    let path = dir.join("work_log.csv");
    fs::write(
        &path,
        b"2024-01-01,Good,30,ok\n2024-01-02,Caf\xE9,10,latin1\n2024-01-03,Other,5,x\n",
    )
    .unwrap();

    let store = csv_store::load(&path).expect("load");
    assert_eq!(
        store.entries(),
        &[
            entry("2024-01-01", "Good", 30, "ok"),
            entry("2024-01-03", "Other", 5, "x"),
        ]
    );
    assert_eq!(store.rejected().len(), 1);
    assert_eq!(store.rejected()[0].line, 2);
    assert!(store.rejected()[0].reason.contains("UTF-8"));

    csv_store::save(&path, &store).expect("save");
    let bytes = fs::read(&path).unwrap();
    assert_eq!(
        bytes,
        b"2024-01-01,Good,30,ok\n2024-01-02,Caf\xE9,10,latin1\n2024-01-03,Other,5,x\n"
    );
}

#[test]
fn test_rejected_records_keep_their_place() {
    let dir = setup_test_dir("storage_rejected_order");
    let path = dir.join("work_log.csv");
    write_log(
        &path,
        "2024-01-01,A,abc,x\n2024-01-02,B,10,y\n2024-01-03,C,oops,z\n2024-01-04,D,20,w\n2024-01-05,E,?,v\n",
    );

    let mut store = csv_store::load(&path).expect("load");
    assert_eq!(store.len(), 2);
    store.push(entry("2024-01-06", "F", 5, "new"));
    csv_store::save(&path, &store).expect("save");

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "2024-01-01,A,abc,x",
            "2024-01-02,B,10,y",
            "2024-01-03,C,oops,z",
            "2024-01-04,D,20,w",
            "2024-01-05,E,?,v",
            "2024-01-06,F,5,new",
        ]
    );
}
