//! Error types for theme loading.

use std::path::PathBuf;

/// Errors that can occur while loading a theme.
///
/// Rule matching itself never errors: handlers decline by returning `None`
/// and the matcher falls through to the next candidate.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// YAML parse or shape error.
    #[error("failed to parse theme: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Failed to read a theme file from disk.
    #[error("failed to read theme file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
