use crate::plan::{Conflict, Plan};
use serde_json::json;

/// Render plan as pretty-printed JSON
pub fn render_json(plan: &Plan) -> String {
    let conflicts: Vec<Option<Conflict>> = plan.conflicts();
    let mut rendered = serde_json::to_string_pretty(&json!({
        "operation": plan.operation,
        "root": plan.root,
        "actions": plan.actions,
        "conflicts": conflicts,
        "notices": plan.notices,
    }))
    .unwrap_or_default();
    rendered.push('\n');
    rendered
}
