use crate::plan::Notice;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Order in which folders are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOrder {
    /// Parents before children.
    TopDown,
    /// Children before parents, so renaming a folder never invalidates a path
    /// that is visited later.
    DeepestFirst,
}

/// A `.pdf` file directly inside a scanned folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfEntry {
    pub path: PathBuf,
    /// The name exactly as stored on disk.
    pub file_name: OsString,
    /// Lossy UTF-8 form of `file_name`, for PEN matching and display only.
    pub name: String,
}

/// Case-insensitive `.pdf` suffix check.
pub fn is_pdf_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".pdf")
}

/// Every folder under `root` (the root included), sorted by name at each
/// level.
///
/// Directories that cannot be read are still returned; the per-folder listing
/// reports them.
pub fn walk_folders(root: &Path, order: WalkOrder) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .contents_first(order == WalkOrder::DeepestFirst)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) if entry.file_type().is_dir() => Some(entry.into_path()),
            Ok(_) => None,
            Err(err) => {
                tracing::debug!("walk error below {}: {}", root.display(), err);
                None
            },
        })
        .collect()
}

/// The `.pdf` files directly inside `folder`, sorted by name.
///
/// Returns `None` when the folder itself cannot be listed; that failure and
/// any per-entry failures are pushed onto `notices`.
pub fn list_pdfs(folder: &Path, notices: &mut Vec<Notice>) -> Option<Vec<PdfEntry>> {
    let mut pdfs = Vec::new();

    for entry in WalkDir::new(folder)
        .follow_links(false)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_dir() {
                    continue;
                }
                let file_name = entry.file_name().to_os_string();
                let name = file_name.to_string_lossy().into_owned();
                if is_pdf_name(&name) {
                    pdfs.push(PdfEntry {
                        path: entry.into_path(),
                        file_name,
                        name,
                    });
                }
            },
            Err(err) => {
                let failed_on_folder = err.depth() == 0;
                notices.push(unreadable(folder, &err));
                if failed_on_folder {
                    return None;
                }
            },
        }
    }

    Some(pdfs)
}

/// Every non-directory entry under `root`, top-down, sorted by name at each
/// level.
pub fn walk_files(root: &Path, notices: &mut Vec<Notice>) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) if !entry.file_type().is_dir() => Some(entry.into_path()),
            Ok(_) => None,
            Err(err) => {
                notices.push(unreadable(root, &err));
                None
            },
        })
        .collect()
}

fn unreadable(fallback: &Path, err: &walkdir::Error) -> Notice {
    let path = err.path().unwrap_or(fallback).to_path_buf();
    tracing::warn!("cannot read {}: {}", path.display(), err);
    let error = err
        .io_error()
        .map_or_else(|| err.to_string(), ToString::to_string);
    Notice::Unreadable { path, error }
}
