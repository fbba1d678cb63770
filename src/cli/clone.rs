//! Asset cloning orchestration.
//!
//! Pipeline phases:
//! - **Collect** - Load documents, assign fresh identifiers
//! - **Rewrite** - Relabel every known reference in place
//! - **Emit** - Print the preview, or write the destination tree

use anyhow::{Context, Result};
use std::io::Write;

use crate::{
    collect::{Collection, collect},
    config::{CloneConfig, Mode},
    core::IdentPattern,
    log, output,
    rewrite::Rewriter,
    utils::plural_count,
};

/// Clone the source package's assets as described by `config`.
///
/// The preview document, if any, is written to `out`.
pub fn clone_assets<W: Write>(config: &CloneConfig, out: W) -> Result<()> {
    let pattern = IdentPattern::new(&config.src_package)
        .with_context(|| format!("invalid package name `{}`", config.src_package))?;

    let asset_root = config.asset_root();
    let Collection {
        mut documents,
        table,
    } = collect(&asset_root, &config.dst_package).context("error during walk")?;
    if documents.is_empty() {
        log!("collect"; "no documents in {}", asset_root.display());
    } else {
        log!("collect"; "{} in {}", plural_count(documents.len(), "document"), asset_root.display());
    }

    let stats = Rewriter::new(&table, &pattern).rewrite_all(&mut documents);
    log!("rewrite"; "{} -> {}: {} ({} embedded)",
        config.src_package,
        config.dst_package,
        plural_count(stats.total(), "reference"),
        stats.embedded);

    match config.mode {
        Mode::Preview => output::preview(&documents, out)?,
        Mode::Commit => {
            if config.is_in_place() {
                log!("commit"; "relabeling {} in place", config.src_package);
            }
            let dst = config.dst_asset_root();
            let summary = output::commit(&documents, &table, &dst)?;
            log!("commit"; "wrote {} to {}", plural_count(summary.written.len(), "file"), dst.display());
        }
    }

    Ok(())
}
