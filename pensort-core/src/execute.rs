use crate::interaction::{ReportLevel, UserInteraction};
use crate::plan::{file_name_lossy, path_exists, Action, ActionKind, Plan};
use serde::Serialize;
use std::fs;

/// What happened to one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "kebab-case")]
pub enum ActionOutcome {
    Applied,
    /// The destination already existed; nothing was touched.
    Skipped,
    Failed(String),
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ExecutionReport {
    pub outcomes: Vec<(Action, ActionOutcome)>,
}

impl ExecutionReport {
    pub fn applied(&self) -> usize {
        self.count(|outcome| matches!(outcome, ActionOutcome::Applied))
    }

    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, ActionOutcome::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, ActionOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&ActionOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, outcome)| pred(outcome)).count()
    }
}

/// Apply one action. Never overwrites: an existing destination skips it.
pub fn execute_action(action: &Action) -> ActionOutcome {
    if action.kind == ActionKind::FileMove {
        if let Some(parent) = action.destination.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                return ActionOutcome::Failed(format!(
                    "cannot create {}: {}",
                    parent.display(),
                    err
                ));
            }
        }
    }

    if path_exists(&action.destination) {
        return ActionOutcome::Skipped;
    }
    if !path_exists(&action.source) {
        return ActionOutcome::Failed("source no longer exists".to_string());
    }

    match fs::rename(&action.source, &action.destination) {
        Ok(()) => ActionOutcome::Applied,
        Err(err) => ActionOutcome::Failed(err.to_string()),
    }
}

/// Apply every action of `plan` in order, reporting each outcome.
///
/// A skipped or failed action never stops the ones after it.
pub fn execute_plan(plan: &Plan, ui: &mut dyn UserInteraction) -> ExecutionReport {
    let mut report = ExecutionReport::default();

    for action in &plan.actions {
        let outcome = execute_action(action);
        tracing::debug!(
            "{} -> {}: {:?}",
            action.source.display(),
            action.destination.display(),
            outcome
        );
        let (level, message) = describe(action, &outcome);
        ui.report(level, &message);
        report.outcomes.push((action.clone(), outcome));
    }

    report
}

fn describe(action: &Action, outcome: &ActionOutcome) -> (ReportLevel, String) {
    let source = action.source.display();
    match (outcome, action.kind) {
        (ActionOutcome::Applied, ActionKind::FileMove) => {
            (ReportLevel::Success, format!("[MOVED] {action}"))
        },
        (ActionOutcome::Applied, _) => (ReportLevel::Success, format!("[RENAMED] {action}")),
        (ActionOutcome::Skipped, ActionKind::FolderRename) => (
            ReportLevel::Warning,
            format!(
                "[SKIP] {source}: Target folder {} already exists.",
                action.destination.display()
            ),
        ),
        (ActionOutcome::Skipped, ActionKind::FileRename) => (
            ReportLevel::Warning,
            format!(
                "[SKIP] {source}: Target file {} already exists.",
                file_name_lossy(&action.destination)
            ),
        ),
        (ActionOutcome::Skipped, ActionKind::FileMove) => (
            ReportLevel::Warning,
            format!("[SKIP] {source}: Target file already exists."),
        ),
        (ActionOutcome::Failed(error), _) => {
            (ReportLevel::Error, format!("[ERROR] {source}: {error}"))
        },
    }
}
