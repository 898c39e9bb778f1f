use std::env;
use std::path::{Path, PathBuf};

/// File name of the reference catalog
pub const CATALOG_FILE_NAME: &str = "poke.csv";

/// Where the reference catalog is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLocation {
    path: PathBuf,
}

impl CatalogLocation {
    /// Use `custom_path` when given, otherwise `poke.csv` next to the executable
    pub fn new(custom_path: Option<PathBuf>) -> Self {
        let path = match custom_path {
            Some(path) => path,
            None => base_dir().join(CATALOG_FILE_NAME),
        };
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Directory holding the running executable, or the working directory
/// when that cannot be determined
pub fn base_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}
