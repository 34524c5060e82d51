//! Project directory layout derived from a template path
//!
//! Pure path computations, no filesystem access.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Build output directory, relative to the project root
pub const BUILD_ARTIFACTS_SUFFIX: &str = ".fun/build/artifacts";

/// Local invocation scratch directory, relative to the project root
pub const LOCAL_TMP_SUFFIX: &str = ".fun/tmp/local";

/// NAS staging directory, relative to the project root
pub const NAS_SUFFIX: &str = ".fun/nas";

/// NAS configuration file name
pub const NAS_YML_FILE_NAME: &str = ".nas.yml";

const BUILD_ARTIFACTS_COMPONENTS: [&str; 3] = [".fun", "build", "artifacts"];

/// Everything before the first `.fun/build/artifacts` run of components, if any.
fn strip_build_artifacts(path: &Path) -> Option<PathBuf> {
    let components: Vec<Component<'_>> = path.components().collect();
    let width = BUILD_ARTIFACTS_COMPONENTS.len();
    if components.len() < width {
        return None;
    }

    (0..=components.len() - width)
        .find(|&start| {
            components[start..start + width]
                .iter()
                .zip(BUILD_ARTIFACTS_COMPONENTS)
                .all(|(c, expected)| c.as_os_str() == OsStr::new(expected))
        })
        .map(|start| components[..start].iter().collect())
}

/// Directory the template belongs to.
///
/// For a template inside the build artifacts directory this is the project
/// root above it (or `cwd` if the path starts at the artifacts directory).
/// Otherwise it is the template's parent, made absolute against `cwd`.
pub fn base_dir(template: &Path, cwd: &Path) -> PathBuf {
    if let Some(prefix) = strip_build_artifacts(template) {
        if prefix.as_os_str().is_empty() {
            return cwd.to_path_buf();
        }
        return prefix;
    }

    match template.parent() {
        Some(parent) if parent.is_absolute() => parent.to_path_buf(),
        Some(parent) => cwd.join(parent),
        None => cwd.to_path_buf(),
    }
}

/// `base` with any build artifacts suffix removed
pub fn root_base_dir(base: &Path) -> PathBuf {
    strip_build_artifacts(base).unwrap_or_else(|| base.to_path_buf())
}

/// Template of the same name at the project root
pub fn root_template_path(template: &Path, cwd: &Path) -> PathBuf {
    let base = base_dir(template, cwd);
    match template.file_name() {
        Some(name) => base.join(name),
        None => base,
    }
}

pub fn nas_yml_path(template: &Path, cwd: &Path) -> PathBuf {
    base_dir(template, cwd).join(NAS_YML_FILE_NAME)
}

/// Explicit `tmp_dir` wins; otherwise `.fun/tmp/local` under the base directory.
pub fn local_tmp_dir(template: &Path, cwd: &Path, tmp_dir: Option<&Path>) -> PathBuf {
    match tmp_dir {
        Some(dir) => dir.to_path_buf(),
        None => base_dir(template, cwd).join(LOCAL_TMP_SUFFIX),
    }
}

pub fn nas_base_dir(template: &Path, cwd: &Path) -> PathBuf {
    base_dir(template, cwd).join(NAS_SUFFIX)
}

/// All derived locations for a template, computed at once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub base_dir: PathBuf,
    pub root_base_dir: PathBuf,
    pub root_template: PathBuf,
    pub nas_yml: PathBuf,
    pub local_tmp_dir: PathBuf,
    pub nas_base_dir: PathBuf,
}

impl ProjectLayout {
    pub fn derive(template: &Path, cwd: &Path) -> Self {
        let base = base_dir(template, cwd);
        Self {
            root_base_dir: root_base_dir(&base),
            root_template: root_template_path(template, cwd),
            nas_yml: nas_yml_path(template, cwd),
            local_tmp_dir: local_tmp_dir(template, cwd, None),
            nas_base_dir: nas_base_dir(template, cwd),
            base_dir: base,
        }
    }
}
