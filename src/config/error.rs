//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot derive a package name from `{0}`")]
    PackageName(PathBuf),

    #[error("package name `{0}` is not valid UTF-8")]
    NonUtf8(PathBuf),
}
