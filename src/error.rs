use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ScaffoldError {
    #[error("template file {} does not exist", path.display())]
    MissingTemplate { path: PathBuf },

    #[error("failed to read template {}: {source}", path.display())]
    ReadTemplate { path: PathBuf, source: io::Error },

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    WriteFile { path: PathBuf, source: io::Error },
}
