mod common;

use common::{create_files, snapshot, ScriptedInteraction};
use pensort_core::{
    execute_plan, plan_pdf_separation, run_operation, Operation, RunOptions, RunState,
};
use std::fs;
use tempfile::TempDir;

const PEN_ONES: &str = "PEN111111111111";
const PEN_TWOS: &str = "PEN222222222222";

#[test]
fn test_mixed_folder_is_split_by_pen() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_files(
        root,
        &[
            ("box/x_PEN111111111111.pdf", "x"),
            ("box/y_PEN222222222222.pdf", "y"),
            ("box/readme.pdf", "no pen"),
        ],
    );

    let plan = plan_pdf_separation(root);
    let pairs: Vec<_> = plan
        .actions
        .iter()
        .map(|a| (a.source.clone(), a.destination.clone()))
        .collect();
    let folder = root.join("box");
    assert_eq!(
        pairs,
        vec![
            (
                folder.join("x_PEN111111111111.pdf"),
                folder.join(PEN_ONES).join("x_PEN111111111111.pdf"),
            ),
            (
                folder.join("y_PEN222222222222.pdf"),
                folder.join(PEN_TWOS).join("y_PEN222222222222.pdf"),
            ),
        ]
    );
}

#[test]
fn test_single_group_folder_produces_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_files(
        root,
        &[
            ("box/a_PEN111111111111.pdf", "a"),
            ("box/111111111111_b.pdf", "b"),
            ("box/readme.pdf", "no pen"),
        ],
    );

    let plan = plan_pdf_separation(root);
    assert!(plan.actions.is_empty());
}

#[test]
fn test_root_folder_is_included() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_files(
        root,
        &[
            ("a_PEN111111111111.pdf", "a"),
            ("222222222222_scan.pdf", "b"),
        ],
    );

    let plan = plan_pdf_separation(root);
    assert_eq!(plan.actions.len(), 2);
    assert_eq!(
        plan.actions[1].destination,
        root.join(PEN_TWOS).join("222222222222_scan.pdf")
    );
}

#[test]
fn test_run_moves_files_and_leaves_unmatched() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_files(
        root,
        &[
            ("box/x_PEN111111111111.pdf", "x"),
            ("box/z_PEN111111111111.pdf", "z"),
            ("box/y_PEN222222222222.pdf", "y"),
            ("box/readme.pdf", "no pen"),
        ],
    );

    let mut ui = ScriptedInteraction::answering(&[true]);
    let result =
        run_operation(Operation::SeparatePdfs, root, &mut ui, &RunOptions::default()).unwrap();

    assert_eq!(result.state, RunState::Done);
    assert_eq!(result.report.unwrap().applied(), 3);
    let folder = root.join("box");
    assert_eq!(
        fs::read_to_string(folder.join(PEN_ONES).join("z_PEN111111111111.pdf")).unwrap(),
        "z"
    );
    assert!(folder.join(PEN_TWOS).join("y_PEN222222222222.pdf").exists());
    assert!(folder.join("readme.pdf").exists());
    assert!(ui.contains("[MOVED]"));
}

#[test]
fn test_run_skips_existing_file_in_pen_folder() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_files(
        root,
        &[
            ("box/x_PEN111111111111.pdf", "new"),
            ("box/y_PEN222222222222.pdf", "y"),
            ("box/PEN111111111111/x_PEN111111111111.pdf", "old"),
        ],
    );

    let mut ui = ScriptedInteraction::answering(&[true]);
    let result =
        run_operation(Operation::SeparatePdfs, root, &mut ui, &RunOptions::default()).unwrap();

    let report = result.report.unwrap();
    assert_eq!(report.applied(), 1);
    assert_eq!(report.skipped(), 1);
    let folder = root.join("box");
    assert_eq!(
        fs::read_to_string(folder.join("x_PEN111111111111.pdf")).unwrap(),
        "new"
    );
    assert_eq!(
        fs::read_to_string(folder.join(PEN_ONES).join("x_PEN111111111111.pdf")).unwrap(),
        "old"
    );
}

#[test]
fn test_cancel_leaves_tree_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_files(
        root,
        &[
            ("box/x_PEN111111111111.pdf", "x"),
            ("box/y_PEN222222222222.pdf", "y"),
        ],
    );
    let before = snapshot(root);

    let mut ui = ScriptedInteraction::answering(&[false]);
    let result =
        run_operation(Operation::SeparatePdfs, root, &mut ui, &RunOptions::default()).unwrap();

    assert_eq!(result.state, RunState::Cancelled);
    assert_eq!(snapshot(root), before);
}

#[cfg(unix)]
#[test]
fn test_non_utf8_name_is_moved_unchanged() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = TempDir::new().unwrap();
    let folder = temp_dir.path().join("box");
    fs::create_dir(&folder).unwrap();
    let latin1 = OsStr::from_bytes(b"r\xe9sum\xe9_PEN111111111111.pdf");
    if fs::write(folder.join(latin1), "cv").is_err() {
        // filesystem only accepts UTF-8 names
        return;
    }
    fs::write(folder.join("y_PEN222222222222.pdf"), "y").unwrap();

    let plan = plan_pdf_separation(temp_dir.path());
    assert_eq!(plan.actions.len(), 2);
    assert_eq!(
        plan.actions[0].destination,
        folder.join(PEN_ONES).join(latin1)
    );

    let mut ui = ScriptedInteraction::answering(&[]);
    let report = execute_plan(&plan, &mut ui);
    assert_eq!(report.applied(), 2);
    assert_eq!(
        fs::read_to_string(folder.join(PEN_ONES).join(latin1)).unwrap(),
        "cv"
    );
    let moved: Vec<_> = fs::read_dir(folder.join(PEN_ONES))
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(moved, vec![latin1.to_os_string()]);
}

#[cfg(unix)]
#[test]
fn test_unreadable_folder_is_reported_and_others_still_run() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    create_files(
        root,
        &[
            ("box/x_PEN111111111111.pdf", "x"),
            ("box/y_PEN222222222222.pdf", "y"),
            ("locked/a_PEN111111111111.pdf", "a"),
            ("locked/b_PEN222222222222.pdf", "b"),
        ],
    );
    let locked = root.join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(&locked).is_ok() {
        // permissions are not enforced, e.g. running as root
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let mut ui = ScriptedInteraction::answering(&[true]);
    let result = run_operation(Operation::SeparatePdfs, root, &mut ui, &RunOptions::default());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    let result = result.unwrap();

    assert_eq!(result.state, RunState::Done);
    assert_eq!(result.planned, 2);
    assert_eq!(result.report.unwrap().applied(), 2);
    assert!(root
        .join("box")
        .join(PEN_ONES)
        .join("x_PEN111111111111.pdf")
        .exists());
    assert!(locked.join("a_PEN111111111111.pdf").exists());

    let skip_line = format!("[SKIP] {}: Unreadable", locked.display());
    assert!(ui.contains(&skip_line), "reports: {:?}", ui.messages());
}
