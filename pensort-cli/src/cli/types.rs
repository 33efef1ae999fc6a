use clap::ValueEnum;
use pensort_core::{Operation, Preview};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OperationArg {
    /// Rename folders to the single PEN their PDFs share
    Folders,
    /// Rewrite `<doctype>_PEN<digits>.pdf` as `PEN<digits>_<doctype>.pdf`
    Filenames,
    /// Split folders that mix PENs into per-PEN subfolders
    Separate,
}

impl From<OperationArg> for Operation {
    fn from(arg: OperationArg) -> Self {
        match arg {
            OperationArg::Folders => Self::FolderRename,
            OperationArg::Filenames => Self::NormalizeFilenames,
            OperationArg::Separate => Self::SeparatePdfs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PreviewArg {
    List,
    Table,
    Summary,
    Json,
}

impl From<PreviewArg> for Preview {
    fn from(arg: PreviewArg) -> Self {
        match arg {
            PreviewArg::List => Self::List,
            PreviewArg::Table => Self::Table,
            PreviewArg::Summary => Self::Summary,
            PreviewArg::Json => Self::Json,
        }
    }
}
