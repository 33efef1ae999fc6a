use crate::pen::{extract_pen, Pen};
use crate::plan::{Action, ActionKind, Operation, Plan};
use crate::scan::{list_pdfs, walk_folders, PdfEntry, WalkOrder};
use std::collections::BTreeMap;
use std::path::Path;

/// Plan moving the PDFs of every folder that mixes several PENs into one
/// subfolder per PEN.
///
/// PDFs without an extractable PEN stay where they are. Folders holding a
/// single PEN group are left alone.
pub fn plan_pdf_separation(root: &Path) -> Plan {
    let mut plan = Plan::new(Operation::SeparatePdfs, root);

    for folder in walk_folders(root, WalkOrder::TopDown) {
        let Some(pdfs) = list_pdfs(&folder, &mut plan.notices) else {
            continue;
        };

        let mut groups: BTreeMap<Pen, Vec<PdfEntry>> = BTreeMap::new();
        for pdf in pdfs {
            if let Some(pen) = extract_pen(&pdf.name) {
                groups.entry(pen).or_default().push(pdf);
            }
        }
        if groups.len() < 2 {
            continue;
        }
        tracing::debug!("{}: {} PEN groups", folder.display(), groups.len());

        for (pen, files) in groups {
            let pen_folder = folder.join(pen.as_str());
            for pdf in files {
                let destination = pen_folder.join(&pdf.file_name);
                plan.actions
                    .push(Action::new(pdf.path, destination, ActionKind::FileMove));
            }
        }
    }

    plan
}
