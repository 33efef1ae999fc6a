mod json;
mod list;
mod summary;
mod table;

pub use json::render_json;
pub use list::render_list;
pub use summary::render_summary;
pub use table::render_table;

use crate::plan::Plan;
use std::io::{self, IsTerminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preview {
    #[default]
    List,
    Table,
    Summary,
    Json,
}

impl std::str::FromStr for Preview {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" => Ok(Self::List),
            "table" => Ok(Self::Table),
            "summary" => Ok(Self::Summary),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid preview format: {}", s)),
        }
    }
}

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color(use_color: Option<bool>) -> bool {
    use_color.unwrap_or_else(|| io::stdout().is_terminal())
}

/// Render the plan in the specified format
pub fn render_plan(plan: &Plan, format: Preview, use_color: bool) -> String {
    match format {
        Preview::List => render_list(plan, use_color),
        Preview::Table => render_table(plan, use_color),
        Preview::Summary => render_summary(plan),
        Preview::Json => render_json(plan),
    }
}
