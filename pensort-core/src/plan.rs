use crate::pen::Pen;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// The three batch operations offered by the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    /// Rename each folder to the single PEN its PDFs share.
    FolderRename,
    /// Rewrite `<doctype>_PEN<digits>.pdf` into `PEN<digits>_<doctype>.pdf`.
    NormalizeFilenames,
    /// Split folders mixing several PENs into per-PEN subfolders.
    SeparatePdfs,
}

impl Operation {
    pub const ALL: [Self; 3] = [
        Self::FolderRename,
        Self::NormalizeFilenames,
        Self::SeparatePdfs,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::FolderRename => "Folder Renaming by PEN",
            Self::NormalizeFilenames => "File Naming Convention",
            Self::SeparatePdfs => "PDF Separation by PEN",
        }
    }

    /// Menu key used by the interactive session.
    pub fn menu_key(self) -> char {
        match self {
            Self::FolderRename => '1',
            Self::NormalizeFilenames => '2',
            Self::SeparatePdfs => '3',
        }
    }

    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        let mut chars = choice.chars();
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::ALL.into_iter().find(|op| op.menu_key() == key)
    }

    pub fn nothing_to_do_message(self) -> &'static str {
        match self {
            Self::FolderRename => "No folders to rename.",
            Self::NormalizeFilenames => "No files to rename.",
            Self::SeparatePdfs => "No PDFs to separate.",
        }
    }

    pub fn preview_heading(self) -> &'static str {
        match self {
            Self::FolderRename => "Folders to be renamed:",
            Self::NormalizeFilenames => "Files to be renamed:",
            Self::SeparatePdfs => "PDFs to be moved:",
        }
    }

    pub fn confirm_prompt(self) -> &'static str {
        match self {
            Self::FolderRename | Self::NormalizeFilenames => "Proceed with renaming? (y/n): ",
            Self::SeparatePdfs => "Proceed with moving files? (y/n): ",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    FolderRename,
    FileRename,
    FileMove,
}

impl ActionKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::FolderRename => "Folder",
            Self::FileRename => "File",
            Self::FileMove => "Move",
        }
    }
}

/// A pending rename or move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub kind: ActionKind,
}

impl Action {
    pub fn new(source: PathBuf, destination: PathBuf, kind: ActionKind) -> Self {
        Self {
            source,
            destination,
            kind,
        }
    }

    /// Destination rendered the way the console shows it: file renames only
    /// show the new basename since the directory does not change.
    pub fn display_destination(&self) -> String {
        match self.kind {
            ActionKind::FileRename => file_name_lossy(&self.destination),
            ActionKind::FolderRename | ActionKind::FileMove => {
                self.destination.display().to_string()
            },
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.source.display(),
            self.display_destination()
        )
    }
}

/// Something noticed during a scan that did not become an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Notice {
    MultiplePens { folder: PathBuf, pens: Vec<Pen> },
    NoPen { folder: PathBuf },
    MalformedPen { file: PathBuf },
    UndecodableName { file: PathBuf },
    Unreadable { path: PathBuf, error: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultiplePens { folder, pens } => {
                let pens: Vec<&str> = pens.iter().map(Pen::as_str).collect();
                write!(
                    f,
                    "[SKIP] {}: Multiple PENs found: {}",
                    folder.display(),
                    pens.join(", ")
                )
            },
            Self::NoPen { folder } => {
                write!(f, "[SKIP] {}: No PEN found in PDFs", folder.display())
            },
            Self::MalformedPen { file } => write!(
                f,
                "[SKIP] {}: PEN suffix is not exactly 12 digits",
                file.display()
            ),
            Self::UndecodableName { file } => write!(
                f,
                "[SKIP] {}: File name is not valid UTF-8",
                file.display()
            ),
            Self::Unreadable { path, error } => {
                write!(f, "[SKIP] {}: Unreadable ({})", path.display(), error)
            },
        }
    }
}

/// The in-memory list of proposed actions built by a scan.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub operation: Operation,
    pub root: PathBuf,
    pub actions: Vec<Action>,
    pub notices: Vec<Notice>,
}

impl Plan {
    pub fn new(operation: Operation, root: &Path) -> Self {
        Self {
            operation,
            root: root.to_path_buf(),
            actions: Vec::new(),
            notices: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Flag each action whose destination already exists, or is claimed by an
    /// earlier action in this plan.
    ///
    /// The returned vector is parallel to `actions`.
    pub fn conflicts(&self) -> Vec<Option<Conflict>> {
        let mut claimed: HashSet<&Path> = HashSet::new();
        self.actions
            .iter()
            .map(|action| {
                if path_exists(&action.destination) {
                    Some(Conflict::DestinationExists)
                } else if !claimed.insert(&action.destination) {
                    Some(Conflict::DuplicateDestination)
                } else {
                    None
                }
            })
            .collect()
    }

    pub fn conflict_count(&self) -> usize {
        self.conflicts().iter().filter(|c| c.is_some()).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Conflict {
    DestinationExists,
    DuplicateDestination,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DestinationExists => f.write_str("destination exists"),
            Self::DuplicateDestination => f.write_str("duplicate destination"),
        }
    }
}

/// Existence check that also sees dangling symlinks, so they are never
/// replaced.
pub(crate) fn path_exists(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

pub(crate) fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
