use anyhow::Result;
use pensort_core::{
    resolve_root, run_operation, take_inventory, ConsoleInteraction, DigitPolicy, Operation,
    PlanOptions, Preview, ReportLevel, RunOptions, UserInteraction,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const BANNER: &str = "Pensort - Pension PDF File Management Tool";

/// Everything resolved from arguments and config before the session starts.
#[derive(Debug, Clone)]
pub struct Settings {
    pub root: Option<PathBuf>,
    pub operation: Option<Operation>,
    pub preview: Preview,
    pub use_color: bool,
    pub auto_approve: bool,
    pub dry_run: bool,
    pub digit_policy: DigitPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: None,
            operation: None,
            preview: Preview::List,
            use_color: false,
            auto_approve: false,
            dry_run: false,
            digit_policy: DigitPolicy::Strict,
        }
    }
}

/// One interactive session: root prompt, inventory, menu, then the chosen
/// operation.
///
/// An invalid root or menu choice ends the session normally.
pub fn run_session<R: BufRead, W: Write>(settings: &Settings, input: R, output: W) -> Result<()> {
    let mut ui = ConsoleInteraction::new(input, output)
        .with_preview(settings.preview)
        .with_color(settings.use_color)
        .with_auto_approve(settings.auto_approve);

    ui.report(ReportLevel::Info, BANNER);

    let root = match &settings.root {
        Some(root) => root.clone(),
        None => {
            let answer = ui.ask("Enter the root directory: ")?.unwrap_or_default();
            PathBuf::from(answer.trim())
        },
    };
    let Ok(root) = resolve_root(&root) else {
        ui.report(ReportLevel::Error, "Invalid directory.");
        return Ok(());
    };
    tracing::debug!("root: {}", root.display());

    let inventory = take_inventory(&root);
    ui.report(
        ReportLevel::Info,
        &format!("Selected folder: {}", root.display()),
    );
    ui.report(
        ReportLevel::Info,
        &format!("Total files: {}", inventory.total_files),
    );
    ui.report(
        ReportLevel::Info,
        &format!("PDF files: {}", inventory.pdf_files),
    );
    if inventory.other_files() > 0 {
        ui.report(
            ReportLevel::Info,
            &format!("Other files: {}", inventory.other_files()),
        );
    }

    let operation = match settings.operation {
        Some(operation) => operation,
        None => {
            ui.report(ReportLevel::Heading, "Select operation:");
            for operation in Operation::ALL {
                ui.report(
                    ReportLevel::Info,
                    &format!("{}. {}", operation.menu_key(), operation.title()),
                );
            }
            let choice = ui.ask("Enter 1, 2, or 3: ")?.unwrap_or_default();
            let Some(operation) = Operation::from_menu_choice(choice.trim()) else {
                ui.report(ReportLevel::Error, "Invalid choice.");
                return Ok(());
            };
            operation
        },
    };

    let options = RunOptions {
        plan: PlanOptions {
            digit_policy: settings.digit_policy,
        },
        dry_run: settings.dry_run,
    };
    run_operation(operation, &root, &mut ui, &options)?;
    Ok(())
}
