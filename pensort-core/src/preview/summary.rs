use crate::plan::{ActionKind, Plan};
use std::fmt::Write;

/// Render plan as a short count summary
pub fn render_summary(plan: &Plan) -> String {
    let mut output = String::new();

    writeln!(output, "[PLAN SUMMARY]").unwrap();
    writeln!(output, "Operation: {}", plan.operation).unwrap();
    writeln!(output, "Root: {}", plan.root.display()).unwrap();
    writeln!(output, "Actions: {}", plan.actions.len()).unwrap();

    for kind in [
        ActionKind::FolderRename,
        ActionKind::FileRename,
        ActionKind::FileMove,
    ] {
        let count = plan.actions.iter().filter(|a| a.kind == kind).count();
        if count > 0 {
            writeln!(output, "  {}: {}", kind.label(), count).unwrap();
        }
    }

    writeln!(output, "Conflicts: {}", plan.conflict_count()).unwrap();
    writeln!(output, "Notices: {}", plan.notices.len()).unwrap();

    output
}
