//! The three batch operations.
//!
//! Each planner only reads the tree; nothing here mutates the filesystem.
//! Execution lives in [`crate::execute`].

pub mod folder_rename;
pub mod normalize;
pub mod separate;

pub use folder_rename::plan_folder_renames;
pub use normalize::{canonical_name, plan_filename_normalization, Canonical, DigitPolicy};
pub use separate::plan_pdf_separation;

use crate::plan::{Operation, Plan};
use std::path::Path;

/// Settings that affect how a plan is built.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanOptions {
    pub digit_policy: DigitPolicy,
}

/// Scan `root` and build the plan for `operation`.
pub fn plan_operation(operation: Operation, root: &Path, options: &PlanOptions) -> Plan {
    tracing::debug!("scanning {} for {}", root.display(), operation);
    match operation {
        Operation::FolderRename => plan_folder_renames(root),
        Operation::NormalizeFilenames => plan_filename_normalization(root, options.digit_policy),
        Operation::SeparatePdfs => plan_pdf_separation(root),
    }
}
