//! The shared plan, preview, confirm, execute flow.

use crate::error::PensortError;
use crate::execute::{execute_plan, ExecutionReport};
use crate::interaction::{ReportLevel, UserInteraction};
use crate::operations::{plan_operation, PlanOptions};
use crate::plan::Operation;
use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub plan: PlanOptions,
    /// Stop after the preview without prompting.
    pub dry_run: bool,
}

/// Where an operation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunState {
    /// The scan produced no actions; nothing was asked.
    NothingToDo,
    /// Dry run: the plan was shown and nothing else happened.
    Previewed,
    /// The user declined; the filesystem was not touched.
    Cancelled,
    /// Every action was attempted.
    Done,
}

#[derive(Debug, Clone, Serialize)]
pub struct OperationResult {
    pub operation: Operation,
    pub state: RunState,
    pub planned: usize,
    pub conflicts: usize,
    pub notices: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ExecutionReport>,
}

/// Check that `root` is an existing directory.
pub fn resolve_root(root: &Path) -> Result<PathBuf, PensortError> {
    if root.is_dir() {
        Ok(root.to_path_buf())
    } else {
        Err(PensortError::InvalidRoot {
            path: root.to_path_buf(),
        })
    }
}

/// Run one operation against `root`: scan, preview, confirm, execute.
///
/// The filesystem is only touched after `ui` confirms. Partial execution is a
/// normal outcome; per-action results are in the returned report.
pub fn run_operation(
    operation: Operation,
    root: &Path,
    ui: &mut dyn UserInteraction,
    options: &RunOptions,
) -> Result<OperationResult> {
    ui.report(ReportLevel::Heading, &format!("--- {} ---", operation.title()));

    let plan = plan_operation(operation, root, &options.plan);
    for notice in &plan.notices {
        ui.report(ReportLevel::Warning, &notice.to_string());
    }

    let mut result = OperationResult {
        operation,
        state: RunState::NothingToDo,
        planned: plan.len(),
        conflicts: 0,
        notices: plan.notices.len(),
        report: None,
    };

    if plan.is_empty() {
        ui.report(ReportLevel::Info, operation.nothing_to_do_message());
        return Ok(result);
    }

    result.conflicts = plan.conflict_count();
    ui.preview(&plan);

    if options.dry_run {
        ui.report(
            ReportLevel::Info,
            &format!("Dry run: {} planned, nothing changed.", plan.len()),
        );
        result.state = RunState::Previewed;
        return Ok(result);
    }

    if !ui.confirm(&plan)? {
        ui.report(ReportLevel::Info, "Operation cancelled.");
        result.state = RunState::Cancelled;
        return Ok(result);
    }

    let report = execute_plan(&plan, ui);
    ui.report(
        ReportLevel::Heading,
        &format!(
            "Done: {} applied, {} skipped, {} failed.",
            report.applied(),
            report.skipped(),
            report.failed()
        ),
    );
    tracing::debug!("{} finished: {} actions", operation, report.outcomes.len());

    result.state = RunState::Done;
    result.report = Some(report);
    Ok(result)
}
