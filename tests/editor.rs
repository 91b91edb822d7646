
use dekit::DekitError;
use dekit::editor::{
    HistoryJump, TagEditor, ToggleTag, ToggleTags, UndoHistoryEntry, UndoHistoryPanel, UndoIcon,
};
use fixtures::{MockUndoStack, RecordingAction, random_identifiers, tag_set};

fn editor_with_recorder() -> (TagEditor, RecordingAction) {
    let recorder = RecordingAction::default();
    let mut editor = TagEditor::new();
    editor.set_action(Box::new(recorder.clone()));
    (editor, recorder)
}

fn toggles_with_recorder(tags: &[&str]) -> (ToggleTags, RecordingAction) {
    let recorder = RecordingAction::default();
    let mut toggles = ToggleTags::new();
    toggles.set_tags(tags.iter().copied());
    toggles.set_action(Box::new(recorder.clone()));
    (toggles, recorder)
}

#[test]
#[ntest::timeout(100)]
fn test_tag_editor_add_trims_and_selects() {
    let (mut editor, recorder) = editor_with_recorder();
    editor.set_combo_text("  decoration ");

    assert!(editor.add_tag());
    assert_eq!(editor.tags(), &tag_set(&["decoration"]));
    assert_eq!(editor.selection(), Some("decoration"));
    assert_eq!(recorder.call_count(), 1);
    assert_eq!(recorder.last_call(), Some(tag_set(&["decoration"])));
}

#[test]
#[ntest::timeout(100)]
fn test_tag_editor_rejects_empty_and_duplicate_tags() {
    let (mut editor, recorder) = editor_with_recorder();
    editor.set_tags(["door"]);

    editor.set_combo_text("   ");
    assert!(!editor.add_tag());
    editor.set_combo_text("door");
    assert!(!editor.add_tag());

    assert_eq!(editor.tags().len(), 1);
    assert_eq!(recorder.call_count(), 0);
}

#[test]
#[ntest::timeout(100)]
fn test_tag_editor_set_tags_does_not_notify() {
    let (mut editor, recorder) = editor_with_recorder();
    let names = random_identifiers(10);

    editor.set_tags(names.iter().cloned());
    assert_eq!(recorder.call_count(), 0);

    let sorted: Vec<&String> = editor.tags().iter().collect();
    let mut expected: Vec<&String> = names.iter().collect();
    expected.sort();
    expected.dedup();
    assert_eq!(sorted, expected);
}

#[test]
#[ntest::timeout(100)]
fn test_tag_editor_remove_selected() {
    let (mut editor, recorder) = editor_with_recorder();
    editor.set_tags(["a", "b", "c"]);

    assert!(!editor.remove_selected());
    assert!(matches!(
        editor.select("z"),
        Err(DekitError::InvalidParam { .. })
    ));

    editor.select("b").unwrap();
    assert!(editor.remove_selected());
    assert_eq!(editor.tags(), &tag_set(&["a", "c"]));
    assert_eq!(editor.selection(), None);
    assert_eq!(recorder.last_call(), Some(tag_set(&["a", "c"])));
}

#[test]
#[ntest::timeout(100)]
fn test_tag_editor_set_tags_drops_stale_selection() {
    let mut editor = TagEditor::new();
    editor.set_tags(["a", "b"]);
    editor.select("a").unwrap();

    editor.set_tags(["a", "c"]);
    assert_eq!(editor.selection(), Some("a"));

    editor.set_tags(["c"]);
    assert_eq!(editor.selection(), None);
}

#[test]
#[ntest::timeout(100)]
fn test_tag_editor_clear() {
    let (mut editor, recorder) = editor_with_recorder();

    assert!(!editor.clear());
    editor.set_tags(["x", "y"]);
    editor.select("y").unwrap();
    assert!(editor.clear());

    assert!(editor.tags().is_empty());
    assert_eq!(editor.selection(), None);
    assert_eq!(recorder.call_count(), 1);
    assert_eq!(recorder.last_call(), Some(tag_set(&[])));
}

#[test]
#[ntest::timeout(100)]
fn test_tag_editor_without_action() {
    let (mut editor, recorder) = editor_with_recorder();
    editor.clear_action();
    editor.set_available_tags(["wall", "floor"]);
    editor.set_combo_text("floor");

    assert!(editor.add_tag());
    assert_eq!(recorder.call_count(), 0);
    assert_eq!(editor.available_tags(), &tag_set(&["floor", "wall"]));
    assert_eq!(editor.combo_text(), "floor");
}

#[test]
#[ntest::timeout(100)]
fn test_toggle_tags_entries_are_sorted_and_disabled() {
    let (toggles, recorder) = toggles_with_recorder(&["zeta", "alpha", "mid"]);

    let names: Vec<&str> = toggles
        .entries()
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    assert!(toggles.enabled_tags().is_empty());
    assert_eq!(recorder.call_count(), 0);
}

#[test]
#[ntest::timeout(100)]
fn test_toggle_tags_toggle_notifies_enabled_set() {
    let (mut toggles, recorder) = toggles_with_recorder(&["a", "b"]);

    toggles.toggle("b").unwrap();
    assert!(toggles.is_enabled("b"));
    assert_eq!(recorder.last_call(), Some(tag_set(&["b"])));

    toggles.toggle("b").unwrap();
    assert!(!toggles.is_enabled("b"));
    assert_eq!(recorder.last_call(), Some(tag_set(&[])));
    assert_eq!(recorder.call_count(), 2);

    assert!(matches!(
        toggles.toggle("c"),
        Err(DekitError::InvalidParam { .. })
    ));
    assert_eq!(recorder.call_count(), 2);
}

#[test]
#[ntest::timeout(100)]
fn test_toggle_tags_set_enabled_only_notifies_on_change() {
    let (mut toggles, recorder) = toggles_with_recorder(&["a", "b"]);

    toggles.set_enabled("a", false).unwrap();
    assert_eq!(recorder.call_count(), 0);

    toggles.set_enabled("a", true).unwrap();
    toggles.set_enabled("a", true).unwrap();
    assert_eq!(recorder.call_count(), 1);
    assert!(toggles.set_enabled("nope", true).is_err());
}

#[test]
#[ntest::timeout(100)]
fn test_toggle_tags_enable_and_disable_all() {
    let (mut toggles, recorder) = toggles_with_recorder(&["a", "b", "c"]);

    toggles.enable_all();
    assert_eq!(toggles.enabled_tags(), tag_set(&["a", "b", "c"]));
    toggles.enable_all();
    assert_eq!(recorder.call_count(), 1);

    toggles.disable_all();
    assert!(toggles.enabled_tags().is_empty());
    toggles.disable_all();
    assert_eq!(recorder.call_count(), 2);
}

#[test]
#[ntest::timeout(100)]
fn test_toggle_tags_keep_state_across_set_tags() {
    let (mut toggles, recorder) = toggles_with_recorder(&["a", "b", "c"]);
    toggles.set_enabled_tags(&tag_set(&["a", "c", "unknown"]));
    assert_eq!(toggles.enabled_tags(), tag_set(&["a", "c"]));

    toggles.set_tags(["c", "d"]);
    assert_eq!(
        toggles.entries(),
        &[
            ToggleTag {
                name: "c".to_string(),
                enabled: true
            },
            ToggleTag {
                name: "d".to_string(),
                enabled: false
            },
        ]
    );
    assert_eq!(recorder.call_count(), 0);
}

#[test]
#[ntest::timeout(100)]
fn test_undo_history_mirrors_stack() {
    let stack = MockUndoStack::new(["Move object", "Rotate object", "Delete light"], 1);
    let mut panel = UndoHistoryPanel::new();
    panel.update(&stack);

    assert_eq!(
        panel.entries(),
        &[
            UndoHistoryEntry {
                text: "Move object".to_string(),
                icon: UndoIcon::Undo
            },
            UndoHistoryEntry {
                text: "Rotate object".to_string(),
                icon: UndoIcon::Undo
            },
            UndoHistoryEntry {
                text: "Delete light".to_string(),
                icon: UndoIcon::Redo
            },
        ]
    );
    assert_eq!(panel.selection(), Some(1));
    assert_eq!(panel.redo_boundary(), 2);
}

#[test]
#[ntest::timeout(100)]
fn test_undo_history_everything_undone() {
    let stack = MockUndoStack::new(["a", "b"], 2);
    let mut panel = UndoHistoryPanel::new();
    panel.update(&stack);

    assert_eq!(panel.selection(), None);
    assert_eq!(panel.redo_boundary(), 0);
    assert!(
        panel
            .entries()
            .iter()
            .all(|entry| entry.icon == UndoIcon::Redo)
    );

    // A redo count past the stack size is clamped.
    panel.update(&MockUndoStack::new(["a"], 5));
    assert_eq!(panel.selection(), None);
}

#[test]
#[ntest::timeout(100)]
fn test_undo_history_jumps() {
    let stack = MockUndoStack::new(["1", "2", "3", "4", "5"], 2);
    let mut panel = UndoHistoryPanel::new();
    panel.update(&stack);

    assert_eq!(panel.jump_to(0).unwrap(), HistoryJump::Undo(2));
    assert_eq!(panel.jump_to(2).unwrap(), HistoryJump::Stay);
    assert_eq!(panel.jump_to(4).unwrap(), HistoryJump::Redo(2));
    assert!(matches!(
        panel.jump_to(5),
        Err(DekitError::InvalidParam { .. })
    ));
}

#[test]
#[ntest::timeout(100)]
fn test_undo_history_clear() {
    let mut panel = UndoHistoryPanel::new();
    panel.update(&MockUndoStack::new(["x"], 0));
    assert_eq!(panel.selection(), Some(0));

    panel.clear();
    assert!(panel.entries().is_empty());
    assert_eq!(panel.selection(), None);
    assert!(panel.jump_to(0).is_err());
}
