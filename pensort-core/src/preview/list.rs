use crate::plan::Plan;
use nu_ansi_term::Color;
use std::fmt::Write;

/// One `source -> destination` line per action, conflicts flagged inline.
pub fn render_list(plan: &Plan, use_color: bool) -> String {
    let mut output = String::new();

    for (action, conflict) in plan.actions.iter().zip(plan.conflicts()) {
        write!(output, "{action}").unwrap();
        if let Some(conflict) = conflict {
            let note = format!("  (conflict: {conflict})");
            if use_color {
                write!(output, "{}", Color::Yellow.paint(note)).unwrap();
            } else {
                output.push_str(&note);
            }
        }
        output.push('\n');
    }

    output
}
