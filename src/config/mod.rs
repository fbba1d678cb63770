//! Resolved run configuration.
//!
//! The CLI arguments are turned into a [`CloneConfig`] once, up front.
//! Everything downstream works from these resolved values and never looks
//! at the raw arguments again.
//!
//! ```text
//! <src>/                 # source package root, basename = source package
//! └── kibana/            # asset root
//!     ├── dashboard/
//!     ├── search/
//!     └── visualization/
//! ```

mod error;

pub use error::ConfigError;

use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Name of the asset root directory below a package root.
pub const ASSET_ROOT: &str = "kibana";

/// How the rewritten documents leave the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the whole collection to stdout, touch nothing on disk.
    Preview,
    /// Write one file per document into the destination tree.
    Commit,
}

impl Mode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run { Self::Preview } else { Self::Commit }
    }
}

#[derive(Debug, Clone)]
pub struct CloneConfig {
    pub src_root: PathBuf,
    pub dst_root: PathBuf,
    /// Package name the original identifiers are prefixed with.
    pub src_package: String,
    /// Package name every generated identifier is prefixed with.
    pub dst_package: String,
    pub mode: Mode,
}

impl CloneConfig {
    /// Resolve configuration from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        Self::new(cli.src.clone(), cli.dst.clone(), Mode::from_dry_run(cli.dry_run))
    }

    /// Resolve configuration; `dst_root` falls back to `src_root`.
    pub fn new(
        src_root: PathBuf,
        dst_root: Option<PathBuf>,
        mode: Mode,
    ) -> Result<Self, ConfigError> {
        let dst_root = dst_root.unwrap_or_else(|| src_root.clone());
        let src_package = package_name(&src_root)?;
        let dst_package = package_name(&dst_root)?;

        Ok(Self {
            src_root,
            dst_root,
            src_package,
            dst_package,
            mode,
        })
    }

    /// Source asset root (`<src>/kibana`).
    pub fn asset_root(&self) -> PathBuf {
        self.src_root.join(ASSET_ROOT)
    }

    /// Destination asset root (`<dst>/kibana`).
    pub fn dst_asset_root(&self) -> PathBuf {
        self.dst_root.join(ASSET_ROOT)
    }

    /// True when the copy lands back in the source package.
    pub fn is_in_place(&self) -> bool {
        self.src_root == self.dst_root
    }
}

/// Package name is the last path component of a package root.
fn package_name(root: &Path) -> Result<String, ConfigError> {
    let name = root
        .file_name()
        .ok_or_else(|| ConfigError::PackageName(root.to_path_buf()))?;
    name.to_str()
        .map(str::to_owned)
        .ok_or_else(|| ConfigError::NonUtf8(root.to_path_buf()))
}
