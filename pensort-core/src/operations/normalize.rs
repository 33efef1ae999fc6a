use crate::pen::{is_pen_digits, PEN_PREFIX};
use crate::plan::{file_name_lossy, Action, ActionKind, Notice, Operation, Plan};
use crate::scan::{is_pdf_name, walk_files};
use std::path::Path;

const MARKER: &str = "_PEN";
const PDF_EXTENSION: &str = ".pdf";

/// How strictly the digits after `_PEN` are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigitPolicy {
    /// The suffix must be exactly 12 ASCII digits followed by `.pdf`.
    #[default]
    Strict,
    /// Use whatever precedes the extension verbatim.
    Permissive,
}

/// Result of rewriting one filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Canonical {
    /// The canonical name differs from the current one.
    Renamed(String),
    /// Already canonical.
    Unchanged,
    /// `_PEN` is absent, or present more than once, or the file is not a PDF.
    NotApplicable,
    /// The suffix is not 12 digits and the policy is strict.
    Malformed,
}

/// Rewrite `<doctype>_PEN<digits>.pdf` as `PEN<digits>_<doctype>.pdf`.
///
/// The digits come straight from the text after the single `_PEN` marker; the
/// doctype is everything before it, verbatim.
pub fn canonical_name(filename: &str, policy: DigitPolicy) -> Canonical {
    if !is_pdf_name(filename) {
        return Canonical::NotApplicable;
    }
    let mut parts = filename.split(MARKER);
    let (Some(doc_type), Some(suffix), None) = (parts.next(), parts.next(), parts.next()) else {
        return Canonical::NotApplicable;
    };

    let digits = strip_pdf_extension(suffix);
    if policy == DigitPolicy::Strict && !is_pen_digits(digits) {
        return Canonical::Malformed;
    }

    let new_name = format!("{PEN_PREFIX}{digits}_{doc_type}{PDF_EXTENSION}");
    if new_name == filename {
        Canonical::Unchanged
    } else {
        Canonical::Renamed(new_name)
    }
}

fn strip_pdf_extension(suffix: &str) -> &str {
    let cut = suffix.len().saturating_sub(PDF_EXTENSION.len());
    match suffix.get(cut..) {
        Some(ext) if ext.eq_ignore_ascii_case(PDF_EXTENSION) => &suffix[..cut],
        _ => suffix,
    }
}

/// Plan renaming every PDF below `root` that embeds `_PEN<digits>` into the
/// canonical `PEN<digits>_<doctype>.pdf` form. Files stay in their directory.
///
/// Names that are not valid UTF-8 are reported and left alone.
pub fn plan_filename_normalization(root: &Path, policy: DigitPolicy) -> Plan {
    let mut plan = Plan::new(Operation::NormalizeFilenames, root);

    for file in walk_files(root, &mut plan.notices) {
        let name = file_name_lossy(&file);
        let decodable = file.file_name().and_then(|n| n.to_str()).is_some();
        match canonical_name(&name, policy) {
            Canonical::Renamed(_) | Canonical::Malformed if !decodable => {
                plan.notices.push(Notice::UndecodableName { file });
            },
            Canonical::Renamed(new_name) => {
                let destination = file.with_file_name(new_name);
                plan.actions
                    .push(Action::new(file, destination, ActionKind::FileRename));
            },
            Canonical::Malformed => plan.notices.push(Notice::MalformedPen { file }),
            Canonical::Unchanged | Canonical::NotApplicable => {},
        }
    }

    plan
}
