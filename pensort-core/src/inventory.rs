use crate::scan::is_pdf_name;
use std::path::Path;
use walkdir::WalkDir;

/// File counts for a tree, shown once the root is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inventory {
    pub total_files: usize,
    pub pdf_files: usize,
}

impl Inventory {
    pub fn other_files(&self) -> usize {
        self.total_files - self.pdf_files
    }
}

/// Count files under `root` recursively. Unreadable entries are ignored.
pub fn take_inventory(root: &Path) -> Inventory {
    let mut inventory = Inventory::default();
    for entry in WalkDir::new(root).follow_links(false).into_iter().flatten() {
        if entry.file_type().is_dir() {
            continue;
        }
        inventory.total_files += 1;
        if is_pdf_name(&entry.file_name().to_string_lossy()) {
            inventory.pdf_files += 1;
        }
    }
    inventory
}
