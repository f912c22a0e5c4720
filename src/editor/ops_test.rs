// Tests for editor operations
// Test cases:
// - Add entry places new row after all others and leaves prior rows alone
// - Add entry never collides with an existing placeholder trigger
// - Rename collision is reported, never overwrites
// - Update/remove on unknown trigger is reported
// - Reset overwrites, import merges right-biased, both mark dirty
// - Acknowledge clears dirty only if the table still matches what was saved
// - Add entry after the largest representable pos is reported, not wrapped
// - Edits that write back the same values leave a clean state clean

use super::*;

fn google_table() -> BangTable {
    let mut table = BangTable::new();
    table.insert("g", BangEntry::new(1u64, "https://google.com?q=%s", 1));
    table
}

fn add_op(id: u64) -> Operation {
    Operation::AddEntry {
        id: BangId::Numeric(id),
        trigger: "new".to_string(),
        url: "https://example.com?q=%s".to_string(),
    }
}

#[test]
fn test_add_entry_scenario() {
    let state = EditorState::loaded(google_table());

    let next = apply(&state, add_op(2)).unwrap();

    assert!(next.dirty);
    assert_eq!(next.table.len(), 2);
    let added = next.table.get("new").unwrap();
    assert_eq!(added.pos, 2);
    assert_eq!(added.url, "https://example.com?q=%s");
    assert_eq!(added.id, BangId::Numeric(2));
    assert_eq!(next.table.get("g"), state.table.get("g"));
}

#[test]
fn test_add_entry_pos_exceeds_every_existing_pos() {
    let mut table = BangTable::new();
    table.insert("a", BangEntry::new(1u64, "https://a?q=%s", 17));
    table.insert("b", BangEntry::new(2u64, "https://b?q=%s", -3));
    table.insert("c", BangEntry::new(3u64, "https://c?q=%s", 17));

    let (next, trigger, entry) =
        add_entry(&table, BangId::Numeric(4), "new", "https://x?q=%s".to_string()).unwrap();

    assert_eq!(entry.pos, 18);
    assert!(table.iter().all(|(_, e)| e.pos < entry.pos));
    for (k, e) in &table {
        assert_eq!(next.get(k), Some(e));
    }
    assert_eq!(next.get(&trigger), Some(&entry));
}

#[test]
fn test_add_entry_on_empty_table_uses_floor() {
    let (next, trigger, entry) = add_entry(
        &BangTable::new(),
        BangId::Numeric(1),
        "new",
        "https://x?q=%s".to_string(),
    )
    .unwrap();
    assert_eq!(trigger, "new");
    assert_eq!(entry.pos, 2);
    assert_eq!(next.len(), 1);
}

#[test]
fn test_add_entry_twice_keeps_both_placeholders() {
    let state = EditorState::loaded(google_table());
    let once = apply(&state, add_op(2)).unwrap();
    let twice = apply(&once, add_op(3)).unwrap();

    assert_eq!(twice.table.len(), 3);
    assert!(twice.table.contains("new"));
    assert_eq!(twice.table.get("new1").unwrap().pos, 3);
    assert_eq!(twice.table.get("new").unwrap().id, BangId::Numeric(2));
}

#[test]
fn test_add_entry_rejects_reused_id() {
    let state = EditorState::loaded(google_table());
    let result = apply(&state, add_op(1));
    assert_eq!(result, Err(EditorError::DuplicateId(BangId::Numeric(1))));
}

#[test]
fn test_add_entry_past_largest_pos_is_reported() {
    let mut table = BangTable::new();
    table.insert("g", BangEntry::new(1u64, "https://google.com?q=%s", i64::MAX));
    let state = EditorState::loaded(table);

    let result = apply(&state, add_op(2));

    assert_eq!(result, Err(EditorError::PositionOverflow(i64::MAX)));
    assert_eq!(state.table.len(), 1);
}

#[test]
fn test_add_entry_just_below_largest_pos() {
    let mut table = BangTable::new();
    table.insert("g", BangEntry::new(1u64, "https://google.com?q=%s", i64::MAX - 1));

    let (_, _, entry) =
        add_entry(&table, BangId::Numeric(2), "new", "https://x?q=%s".to_string()).unwrap();
    assert_eq!(entry.pos, i64::MAX);
}

#[test]
fn test_same_value_edits_keep_clean_state() {
    let state = EditorState::loaded(google_table());
    let ops = [
        Operation::RenameEntry {
            from: "g".to_string(),
            to: "g".to_string(),
        },
        Operation::UpdateUrl {
            trigger: "g".to_string(),
            url: "https://google.com?q=%s".to_string(),
        },
        Operation::UpdatePos {
            trigger: "g".to_string(),
            pos: 1,
        },
    ];

    for op in ops {
        let next = apply(&state, op).unwrap();
        assert!(!next.dirty);
        assert_eq!(next.table, state.table);
    }
}

#[test]
fn test_same_value_edit_keeps_unsaved_state_dirty() {
    let state = EditorState {
        table: google_table(),
        dirty: true,
    };
    let next = apply(
        &state,
        Operation::UpdatePos {
            trigger: "g".to_string(),
            pos: 1,
        },
    )
    .unwrap();
    assert!(next.dirty);
}

#[test]
fn test_rename_moves_entry_unchanged() {
    let state = EditorState::loaded(google_table());
    let next = apply(
        &state,
        Operation::RenameEntry {
            from: "g".to_string(),
            to: "google".to_string(),
        },
    )
    .unwrap();

    assert!(!next.table.contains("g"));
    assert_eq!(next.table.get("google"), state.table.get("g"));
    assert!(next.dirty);
}

#[test]
fn test_rename_collision_is_reported() {
    let mut table = google_table();
    table.insert("w", BangEntry::new(5u64, "https://wiki.org?q=%s", 2));
    let state = EditorState::loaded(table);

    let result = apply(
        &state,
        Operation::RenameEntry {
            from: "w".to_string(),
            to: "g".to_string(),
        },
    );

    assert_eq!(result, Err(EditorError::DuplicateKey("g".to_string())));
    // Input state is untouched
    assert_eq!(state.table.get("w").unwrap().id, BangId::Numeric(5));
    assert!(!state.dirty);
}

#[test]
fn test_rename_to_same_trigger_is_noop() {
    let table = google_table();
    let next = rename_entry(&table, "g", "g".to_string()).unwrap();
    assert_eq!(next, table);
}

#[test]
fn test_rename_unknown_trigger_fails() {
    let result = rename_entry(&google_table(), "zz", "y".to_string());
    assert_eq!(result, Err(EditorError::UnknownKey("zz".to_string())));
}

#[test]
fn test_update_url_and_pos() {
    let state = EditorState::loaded(google_table());
    let next = apply(
        &state,
        Operation::UpdateUrl {
            trigger: "g".to_string(),
            url: "https://google.de?q=%s".to_string(),
        },
    )
    .unwrap();
    let next = apply(
        &next,
        Operation::UpdatePos {
            trigger: "g".to_string(),
            pos: 9,
        },
    )
    .unwrap();

    let entry = next.table.get("g").unwrap();
    assert_eq!(entry.url, "https://google.de?q=%s");
    assert_eq!(entry.pos, 9);
    assert_eq!(entry.id, BangId::Numeric(1));
}

#[test]
fn test_update_unknown_trigger_fails() {
    let state = EditorState::loaded(google_table());
    let result = apply(
        &state,
        Operation::UpdateUrl {
            trigger: "nope".to_string(),
            url: "https://x?q=%s".to_string(),
        },
    );
    assert_eq!(result, Err(EditorError::UnknownKey("nope".to_string())));
}

#[test]
fn test_remove_entry() {
    let state = EditorState::loaded(google_table());
    let next = apply(
        &state,
        Operation::RemoveEntry {
            trigger: "g".to_string(),
        },
    )
    .unwrap();
    assert!(next.table.is_empty());
    assert!(next.dirty);

    let missing = apply(
        &next,
        Operation::RemoveEntry {
            trigger: "g".to_string(),
        },
    );
    assert_eq!(missing, Err(EditorError::UnknownKey("g".to_string())));
}

#[test]
fn test_reset_overwrites_without_merging() {
    let state = EditorState::loaded(google_table());
    let mut defaults = BangTable::new();
    defaults.insert("d", BangEntry::new(1u64, "https://duckduckgo.com/?q=%s", 1));

    let next = apply(
        &state,
        Operation::Reset {
            defaults: defaults.clone(),
        },
    )
    .unwrap();

    assert_eq!(next.table, defaults);
    assert!(next.dirty);
}

#[test]
fn test_import_merges_and_marks_dirty() {
    let state = EditorState::loaded(google_table());
    let mut imported = BangTable::new();
    imported.insert("w", BangEntry::new(5u64, "https://wiki.org?q=%s", 1));

    let next = apply(
        &state,
        Operation::Import {
            imported,
            policy: MergePolicy::Combine,
        },
    )
    .unwrap();

    assert_eq!(next.table.len(), 2);
    assert!(next.table.contains("g"));
    assert!(next.table.contains("w"));
    assert!(next.dirty);
}

#[test]
fn test_acknowledge_clears_dirty_for_matching_table() {
    let state = EditorState {
        table: google_table(),
        dirty: true,
    };
    let next = apply(
        &state,
        Operation::Acknowledge {
            saved: google_table(),
        },
    )
    .unwrap();
    assert!(!next.dirty);
    assert_eq!(next.table, state.table);
}

#[test]
fn test_acknowledge_keeps_dirty_after_concurrent_edit() {
    let saved = google_table();
    let edited = apply(&EditorState::loaded(saved.clone()), add_op(2)).unwrap();

    let next = apply(&edited, Operation::Acknowledge { saved }).unwrap();
    assert!(next.dirty);
    assert_eq!(next.table.len(), 2);
}

#[test]
fn test_operation_names() {
    assert_eq!(add_op(1).name(), "add");
    assert_eq!(
        Operation::Reset {
            defaults: BangTable::new()
        }
        .name(),
        "reset"
    );
}
