#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod execute;
pub mod interaction;
pub mod inventory;
pub mod operations;
pub mod pen;
pub mod plan;
pub mod preview;
pub mod run;
pub mod scan;

pub use config::Config;
pub use error::PensortError;
pub use execute::{execute_action, execute_plan, ActionOutcome, ExecutionReport};
pub use interaction::{is_affirmative, ConsoleInteraction, ReportLevel, UserInteraction};
pub use inventory::{take_inventory, Inventory};
pub use operations::{
    canonical_name, plan_filename_normalization, plan_folder_renames, plan_operation,
    plan_pdf_separation, Canonical, DigitPolicy, PlanOptions,
};
pub use pen::{extract_pen, Pen};
pub use plan::{Action, ActionKind, Conflict, Notice, Operation, Plan};
pub use preview::{render_plan, should_use_color, Preview};
pub use run::{resolve_root, run_operation, OperationResult, RunOptions, RunState};
