use crate::plan::Plan;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::{self, IsTerminal};

/// Render plan as a table
pub fn render_table(plan: &Plan, use_color: bool) -> String {
    let mut table = Table::new();

    if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table.set_content_arrangement(ContentArrangement::Disabled);
    }

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("Kind").fg(Color::Cyan),
            Cell::new("Source").fg(Color::Cyan),
            Cell::new("Destination").fg(Color::Cyan),
            Cell::new("Note").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["Kind", "Source", "Destination", "Note"]);
    }

    for (action, conflict) in plan.actions.iter().zip(plan.conflicts()) {
        let source = relative_to_root(plan, &action.source);
        let destination = relative_to_root(plan, &action.destination);
        let note = conflict.map(|c| c.to_string()).unwrap_or_default();

        if use_color {
            table.add_row(vec![
                Cell::new(action.kind.label()).fg(Color::Green),
                Cell::new(source),
                Cell::new(destination),
                Cell::new(note).fg(Color::Yellow),
            ]);
        } else {
            table.add_row(vec![action.kind.label().to_string(), source, destination, note]);
        }
    }

    format!("{table}\n")
}

fn relative_to_root(plan: &Plan, path: &std::path::Path) -> String {
    match path.strip_prefix(&plan.root) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative.display().to_string(),
        _ => path.display().to_string(),
    }
}
