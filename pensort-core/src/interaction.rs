//! How operations talk to the person running them.
//!
//! Planning and execution never touch stdin or stdout directly; they go
//! through a [`UserInteraction`] so the whole flow can be driven from tests.

use crate::plan::Plan;
use crate::preview::{render_plan, Preview};
use anyhow::{Context, Result};
use nu_ansi_term::{Color, Style};
use std::io::{BufRead, Write};

/// Kind of line being reported, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Heading,
    Info,
    Success,
    Warning,
    Error,
}

pub trait UserInteraction {
    /// Show one progress or outcome line.
    fn report(&mut self, level: ReportLevel, message: &str);

    /// Ask whether the previewed plan should be applied.
    fn confirm(&mut self, plan: &Plan) -> Result<bool>;

    /// Show every planned action before confirmation.
    fn preview(&mut self, plan: &Plan) {
        self.report(ReportLevel::Heading, plan.operation.preview_heading());
        for action in &plan.actions {
            self.report(ReportLevel::Info, &action.to_string());
        }
    }
}

/// Only a lone `y` (any case) counts as consent. Surrounding whitespace
/// makes the answer a no.
pub fn is_affirmative(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y")
}

/// Line-oriented console session over any reader/writer pair.
pub struct ConsoleInteraction<R, W> {
    input: R,
    output: W,
    preview: Preview,
    use_color: bool,
    auto_approve: bool,
}

impl<R: BufRead, W: Write> ConsoleInteraction<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            preview: Preview::List,
            use_color: false,
            auto_approve: false,
        }
    }

    #[must_use]
    pub fn with_preview(mut self, preview: Preview) -> Self {
        self.preview = preview;
        self
    }

    #[must_use]
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    #[must_use]
    pub fn with_auto_approve(mut self, auto_approve: bool) -> Self {
        self.auto_approve = auto_approve;
        self
    }

    /// Print `prompt` and read one line without its line ending. `None` on end
    /// of input.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read user input")?;
        if read == 0 {
            writeln!(self.output).context("Failed to write output")?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn style(&self, level: ReportLevel) -> Style {
        if !self.use_color {
            return Style::new();
        }
        match level {
            ReportLevel::Heading => Style::new().bold(),
            ReportLevel::Info => Style::new(),
            ReportLevel::Success => Color::Green.normal(),
            ReportLevel::Warning => Color::Yellow.normal(),
            ReportLevel::Error => Color::Red.normal(),
        }
    }
}

impl<R: BufRead, W: Write> UserInteraction for ConsoleInteraction<R, W> {
    fn report(&mut self, level: ReportLevel, message: &str) {
        let line = self.style(level).paint(message).to_string();
        // blank line before each section
        let separator = if level == ReportLevel::Heading { "\n" } else { "" };
        if let Err(err) = writeln!(self.output, "{separator}{line}") {
            tracing::warn!("failed to write report: {}", err);
        }
    }

    fn confirm(&mut self, plan: &Plan) -> Result<bool> {
        let prompt = format!("\n{}", plan.operation.confirm_prompt());
        if self.auto_approve {
            writeln!(self.output, "{prompt}y").context("Failed to write prompt")?;
            return Ok(true);
        }
        let answer = self.ask(&prompt)?;
        Ok(answer.as_deref().is_some_and(is_affirmative))
    }

    fn preview(&mut self, plan: &Plan) {
        self.report(ReportLevel::Heading, plan.operation.preview_heading());
        let rendered = render_plan(plan, self.preview, self.use_color);
        if let Err(err) = write!(self.output, "{rendered}") {
            tracing::warn!("failed to write preview: {}", err);
        }
    }
}
