//! Template file discovery
//!
//! Finds the active template among custom locations, build artifacts and the
//! conventional names in the working directory.

use crate::layout::BUILD_ARTIFACTS_SUFFIX;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Recognized template file names, in priority order
pub const TEMPLATE_FILE_NAMES: &[&str] =
    &["template.yml", "template.yaml", "faas.yml", "faas.yaml"];

/// Template names looked up inside the build artifacts directory
const BUILD_TEMPLATE_FILE_NAMES: &[&str] = &["template.yml", "template.yaml"];

/// Override file placed next to a template
pub const OVERRIDE_FILE_NAME: &str = "template.override.yml";

/// Resolves template locations relative to a working directory.
///
/// One locator is created per command invocation. The first successful
/// resolution prints a `using template: ...` notice; later resolutions on the
/// same locator stay quiet.
#[derive(Debug, Clone)]
pub struct Locator {
    cwd: PathBuf,
    announced: bool,
}

impl Locator {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            announced: false,
        }
    }

    /// Locator rooted at the process working directory
    pub fn from_current_dir() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Whether the one-time notice has already been shown
    pub fn has_announced(&self) -> bool {
        self.announced
    }

    /// Ordered candidate list probed by [`Locator::locate`]
    pub fn candidates(&self, prefer_build: bool, custom: &[PathBuf]) -> Vec<PathBuf> {
        let mut candidates: Vec<PathBuf> = custom.to_vec();

        if prefer_build {
            let artifacts = self.cwd.join(BUILD_ARTIFACTS_SUFFIX);
            candidates.extend(BUILD_TEMPLATE_FILE_NAMES.iter().map(|f| artifacts.join(f)));
        }

        candidates.extend(TEMPLATE_FILE_NAMES.iter().map(|f| self.cwd.join(f)));
        candidates
    }

    /// Returns the first existing candidate, or `None` when nothing matches.
    #[tracing::instrument(skip(self, custom), fields(cwd = %self.cwd.display()))]
    pub fn locate(&mut self, prefer_build: bool, custom: &[PathBuf]) -> Option<PathBuf> {
        let found = self.candidates(prefer_build, custom).into_iter().find(|path| {
            debug!(candidate = %path.display(), "Probing template location");
            path.exists()
        })?;

        if !self.announced {
            let shown = found.strip_prefix(&self.cwd).unwrap_or(found.as_path());
            eprintln!("{}", format!("using template: {}", shown.display()).yellow());
            info!(template = %found.display(), "Resolved template");
            self.announced = true;
        }

        Some(found)
    }
}

/// Returns `template.override.yml` next to `template` if it exists.
pub fn detect_override(template: &Path) -> Option<PathBuf> {
    let dir = template.parent().unwrap_or_else(|| Path::new(""));
    let candidate = dir.join(OVERRIDE_FILE_NAME);
    if candidate.exists() {
        debug!(file = %candidate.display(), "Found override template");
        Some(candidate)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_build_template(root: &Path) -> PathBuf {
        let artifacts = root.join(BUILD_ARTIFACTS_SUFFIX);
        fs::create_dir_all(&artifacts).unwrap();
        let path = artifacts.join("template.yml");
        fs::write(&path, "ROSTemplateFormatVersion: '2015-09-01'").unwrap();
        path
    }

    #[test]
    fn test_prefers_build_artifact() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        let build = write_build_template(root);
        fs::write(root.join("template.yml"), "# root").unwrap();

        let mut locator = Locator::new(root);
        assert_eq!(locator.locate(true, &[]), Some(build));

        let mut locator = Locator::new(root);
        assert_eq!(locator.locate(false, &[]), Some(root.join("template.yml")));
    }

    #[test]
    fn test_default_name_priority() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("faas.yml"), "").unwrap();
        fs::write(root.join("template.yaml"), "").unwrap();

        let mut locator = Locator::new(root);
        assert_eq!(locator.locate(true, &[]), Some(root.join("template.yaml")));
    }

    #[test]
    fn test_legacy_faas_name() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("faas.yaml"), "").unwrap();

        let mut locator = Locator::new(root);
        assert_eq!(locator.locate(true, &[]), Some(root.join("faas.yaml")));
    }

    #[test]
    fn test_custom_locations_come_first() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        write_build_template(root);
        fs::write(root.join("template.yml"), "").unwrap();
        let custom = root.join("custom.yml");
        fs::write(&custom, "").unwrap();

        let mut locator = Locator::new(root);
        let missing = root.join("missing.yml");
        assert_eq!(
            locator.locate(true, &[missing, custom.clone()]),
            Some(custom)
        );
    }

    #[test]
    fn test_nothing_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut locator = Locator::new(temp_dir.path());

        assert_eq!(locator.locate(true, &[]), None);
        assert!(!locator.has_announced());
    }

    #[test]
    fn test_announces_once_per_locator() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("template.yml"), "").unwrap();

        let mut locator = Locator::new(root);
        locator.locate(true, &[]);
        assert!(locator.has_announced());
        locator.locate(true, &[]);
        assert!(locator.has_announced());

        // independent locators do not share the flag
        let fresh = Locator::new(root);
        assert!(!fresh.has_announced());
    }

    #[test]
    fn test_candidate_order() {
        let locator = Locator::new("/proj");
        let names: Vec<PathBuf> = locator.candidates(false, &[PathBuf::from("/x/t.yml")]);
        assert_eq!(
            names,
            vec![
                PathBuf::from("/x/t.yml"),
                PathBuf::from("/proj/template.yml"),
                PathBuf::from("/proj/template.yaml"),
                PathBuf::from("/proj/faas.yml"),
                PathBuf::from("/proj/faas.yaml"),
            ]
        );
        assert_eq!(locator.candidates(true, &[]).len(), 6);
    }

    #[test]
    fn test_detect_override() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        let template = root.join("template.yml");
        fs::write(&template, "").unwrap();

        assert_eq!(detect_override(&template), None);

        fs::write(root.join(OVERRIDE_FILE_NAME), "").unwrap();
        assert_eq!(
            detect_override(&template),
            Some(root.join(OVERRIDE_FILE_NAME))
        );
    }
}
