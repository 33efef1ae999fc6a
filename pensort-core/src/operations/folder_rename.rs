use crate::pen::{extract_pen, Pen};
use crate::plan::{Action, ActionKind, Notice, Operation, Plan};
use crate::scan::{list_pdfs, walk_folders, WalkOrder};
use std::collections::BTreeSet;
use std::path::Path;

/// Plan renaming every folder below `root` to the single PEN its PDFs share.
///
/// Only the immediate `.pdf` files of each folder count. Folders with no PEN,
/// or with several, are reported and left alone. The root itself is never
/// renamed.
pub fn plan_folder_renames(root: &Path) -> Plan {
    let mut plan = Plan::new(Operation::FolderRename, root);

    for folder in walk_folders(root, WalkOrder::DeepestFirst) {
        if folder == root {
            continue;
        }
        let Some(pdfs) = list_pdfs(&folder, &mut plan.notices) else {
            continue;
        };

        let pens: BTreeSet<Pen> = pdfs.iter().filter_map(|pdf| extract_pen(&pdf.name)).collect();
        tracing::debug!("{}: {} pdfs, {} pens", folder.display(), pdfs.len(), pens.len());

        let mut pens = pens.into_iter();
        match (pens.next(), pens.next()) {
            (Some(pen), None) => {
                let current = folder.file_name().map(|name| name.to_string_lossy());
                if current.as_deref() == Some(pen.as_str()) {
                    continue;
                }
                let Some(parent) = folder.parent() else {
                    continue;
                };
                let destination = parent.join(pen.as_str());
                plan.actions
                    .push(Action::new(folder, destination, ActionKind::FolderRename));
            },
            (Some(first), Some(second)) => {
                let pens = [first, second].into_iter().chain(pens).collect();
                plan.notices.push(Notice::MultiplePens { folder, pens });
            },
            (None, _) => plan.notices.push(Notice::NoPen { folder }),
        }
    }

    plan
}
