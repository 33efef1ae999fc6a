mod common;

use common::{create_files, snapshot, ScriptedInteraction};
use pensort_core::{
    plan_folder_renames, run_operation, Notice, Operation, RunOptions, RunState,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_single_pen_folder_is_planned_for_rename() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_files(
        root,
        &[
            ("smith/A_PEN000000000001.pdf", "a"),
            ("smith/B_PEN000000000001.pdf", "b"),
            ("smith/cover.txt", "not a pdf"),
        ],
    );

    let plan = plan_folder_renames(root);
    assert_eq!(plan.actions.len(), 1);
    assert_eq!(plan.actions[0].source, root.join("smith"));
    assert_eq!(plan.actions[0].destination, root.join("PEN000000000001"));
    assert!(plan.notices.is_empty());
}

#[test]
fn test_multiple_pens_are_reported_not_planned() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_files(
        root,
        &[
            ("mixed/A_PEN000000000001.pdf", "a"),
            ("mixed/B_PEN000000000002.pdf", "b"),
        ],
    );

    let plan = plan_folder_renames(root);
    assert!(plan.actions.is_empty());
    assert_eq!(plan.notices.len(), 1);
    match &plan.notices[0] {
        Notice::MultiplePens { folder, pens } => {
            assert_eq!(folder, &root.join("mixed"));
            assert_eq!(pens.len(), 2);
            assert_eq!(pens[0], "PEN000000000001");
            assert_eq!(pens[1], "PEN000000000002");
        },
        other => panic!("unexpected notice: {other:?}"),
    }
}

#[test]
fn test_folder_without_pen_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_files(root, &[("misc/readme.pdf", "x"), ("empty/notes.txt", "x")]);

    let plan = plan_folder_renames(root);
    assert!(plan.actions.is_empty());
    assert_eq!(
        plan.notices,
        vec![
            Notice::NoPen {
                folder: root.join("empty")
            },
            Notice::NoPen {
                folder: root.join("misc")
            },
        ]
    );
}

#[test]
fn test_only_immediate_pdfs_count() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_files(
        root,
        &[
            ("outer/A_PEN000000000001.pdf", "a"),
            ("outer/inner/B_PEN000000000002.pdf", "b"),
        ],
    );

    let plan = plan_folder_renames(root);
    let destinations: Vec<_> = plan.actions.iter().map(|a| a.destination.clone()).collect();
    assert_eq!(
        destinations,
        vec![
            root.join("outer").join("PEN000000000002"),
            root.join("PEN000000000001"),
        ]
    );
}

#[test]
fn test_run_renames_nested_folders() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_files(
        root,
        &[
            ("outer/A_PEN000000000001.pdf", "a"),
            ("outer/inner/B_PEN000000000002.pdf", "b"),
        ],
    );

    let mut ui = ScriptedInteraction::answering(&[true]);
    let result = run_operation(Operation::FolderRename, root, &mut ui, &RunOptions::default())
        .unwrap();

    assert_eq!(result.state, RunState::Done);
    let report = result.report.unwrap();
    assert_eq!(report.applied(), 2);
    assert!(root
        .join("PEN000000000001")
        .join("PEN000000000002")
        .join("B_PEN000000000002.pdf")
        .exists());
    assert!(ui.contains("[RENAMED]"));
}

#[test]
fn test_run_skips_existing_destination_folder() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_files(
        root,
        &[
            ("smith/A_PEN000000000001.pdf", "a"),
            ("PEN000000000001/old.txt", "already here"),
        ],
    );

    let mut ui = ScriptedInteraction::answering(&[true]);
    let result = run_operation(Operation::FolderRename, root, &mut ui, &RunOptions::default())
        .unwrap();

    let report = result.report.unwrap();
    assert_eq!(report.applied(), 0);
    assert_eq!(report.skipped(), 1);
    assert!(root.join("smith").join("A_PEN000000000001.pdf").exists());
    assert_eq!(
        fs::read_to_string(root.join("PEN000000000001").join("old.txt")).unwrap(),
        "already here"
    );
    assert!(ui.contains("Target folder"));
}

#[test]
fn test_run_cancel_leaves_tree_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_files(
        root,
        &[
            ("smith/A_PEN000000000001.pdf", "a"),
            ("jones/B_PEN000000000002.pdf", "b"),
        ],
    );
    let before = snapshot(root);

    let mut ui = ScriptedInteraction::answering(&[false]);
    let result = run_operation(Operation::FolderRename, root, &mut ui, &RunOptions::default())
        .unwrap();

    assert_eq!(result.state, RunState::Cancelled);
    assert!(result.report.is_none());
    assert_eq!(snapshot(root), before);
    assert!(ui.contains("Operation cancelled."));
}
