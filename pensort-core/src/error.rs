use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PensortError {
    #[error("invalid directory: {}", path.display())]
    InvalidRoot { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
