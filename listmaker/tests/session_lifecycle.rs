//! Lifecycle tests for `ListSession` through the public API.
//!
//! These drive a session across load, edit and save to verify dirty
//! tracking, name handling and on-disk contents together.

use std::fs;

use listmaker::core::list::Lifecycle;
use listmaker::error::ListError;
use listmaker::io::list_store::{ListStore, SaveMode, read_list};
use listmaker::session::ListSession;
use listmaker::test_support::TempLists;

/// Full lifecycle: Unsaved → Dirty → Clean (first save) → Dirty → Clean
/// (named rewrite) → reload.
#[test]
fn unsaved_to_clean_to_dirty_and_back() {
    let lists = TempLists::new().expect("temp lists");
    let mut session = lists.session();
    assert_eq!(session.lifecycle(), Lifecycle::Unsaved);

    session.add("write report");
    session.add("call plumber");
    assert_eq!(session.lifecycle(), Lifecycle::Dirty);

    let path = session.save(|_| Ok("week".to_string())).expect("first save");
    assert_eq!(session.lifecycle(), Lifecycle::Clean);

    session.delete_at(1).expect("delete first");
    session.add("buy stamps");
    assert_eq!(session.lifecycle(), Lifecycle::Dirty);

    let rewritten = session
        .save(|_| panic!("named list must not ask for a name"))
        .expect("second save");
    assert_eq!(rewritten, path);
    assert_eq!(
        read_list(&path).expect("read back"),
        ["call plumber", "buy stamps"]
    );

    let mut reopened = lists.session();
    reopened.load(&path).expect("reload");
    assert_eq!(reopened.items(), session.items());
    assert_eq!(reopened.name(), Some("week"));
    assert_eq!(reopened.lifecycle(), Lifecycle::Clean);
}

/// A list opened from outside the lists directory saves into it by name.
#[test]
fn list_opened_elsewhere_saves_under_lists_dir() {
    let outside = tempfile::tempdir().expect("outside dir");
    let source = outside.path().join("errands.list.txt");
    fs::write(&source, "post office\nbank\n").expect("seed");

    let lists = TempLists::new().expect("temp lists");
    let mut session = lists.session();
    session.load(&source).expect("load");
    assert_eq!(session.name(), Some("errands.list"));

    session.clear();
    assert!(session.is_dirty());
    let saved = session.save(|_| unreachable!()).expect("save");

    assert_eq!(saved, lists.path().join("errands.list.txt"));
    assert_eq!(fs::read_to_string(&saved).expect("saved"), "");
    assert_eq!(
        fs::read_to_string(&source).expect("source untouched"),
        "post office\nbank\n"
    );
}

#[test]
fn atomic_mode_leaves_no_temp_file() {
    let lists = TempLists::new().expect("temp lists");
    let store = ListStore::new(lists.path(), "txt", SaveMode::TempThenRename);
    let seeded = lists.seed("todo.txt", &["old"]).expect("seed");

    let mut session = ListSession::new(store);
    session.load(&seeded).expect("load");
    session.add("new");
    session.save(|_| unreachable!()).expect("save");

    assert_eq!(read_list(&seeded).expect("read"), ["old", "new"]);
    let leftovers: Vec<_> = fs::read_dir(lists.path())
        .expect("read dir")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn failed_save_keeps_items_and_dirty_flag() {
    let lists = TempLists::new().expect("temp lists");
    // A regular file where the lists directory should be.
    let blocker = lists.path().join("blocked");
    fs::write(&blocker, "").expect("blocker");
    let store = ListStore::new(&blocker, "txt", SaveMode::DeleteThenWrite);

    let mut session = ListSession::new(store);
    session.add("precious");
    let err = session.save(|_| Ok("todo".to_string())).expect_err("io failure");
    assert!(matches!(err, ListError::Io { .. }));
    assert_eq!(session.items(), ["precious"]);
    assert!(session.is_dirty());
    assert_eq!(session.name(), None);
}
