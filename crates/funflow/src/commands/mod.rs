pub mod paths;
pub mod template;
pub mod vpc;

use anyhow::{Context, anyhow};
use funflow_core::Locator;
use std::path::PathBuf;

/// Resolve the active template from the working directory.
///
/// Relative custom paths are taken relative to the working directory.
pub(crate) fn locate_template(
    no_build: bool,
    custom: &[PathBuf],
) -> anyhow::Result<(Locator, PathBuf)> {
    let mut locator =
        Locator::from_current_dir().context("failed to read the current directory")?;

    let custom: Vec<PathBuf> = custom.iter().map(|p| locator.cwd().join(p)).collect();
    let template = locator
        .locate(!no_build, &custom)
        .ok_or_else(|| anyhow!("no template found"))?;

    Ok((locator, template))
}
