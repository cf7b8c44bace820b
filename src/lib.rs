pub mod cli;
pub mod config;
pub mod daemon;
pub mod router;
pub mod selector;

pub use config::{Transition, WallpaperConfig};
pub use daemon::{Awww, CommandRunner, SystemRunner};
pub use router::{Intent, Router};

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Wallpapers directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    #[error("Category '{category}' not found in {}", .root.display())]
    CategoryNotFound { category: String, root: PathBuf },
    #[error("No wallpapers found{}", .0.as_ref().map(|scope| format!(" in {scope}")).unwrap_or_default())]
    NoWallpapersFound(Option<String>),
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Unknown option or category '{0}'")]
    UnknownArgument(String),
    #[error("Failed to read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to start awww daemon: {0}")]
    DaemonLaunchFailed(std::io::Error),
    #[error("Failed to set wallpaper: {0}")]
    WallpaperSetFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
