//! funflow core
//!
//! Template discovery, loading and the project directory layout shared by the
//! packaging and deployment commands.

pub mod error;
pub mod layout;
pub mod loader;
pub mod locator;

pub use error::{Result, TemplateError};
pub use layout::{
    BUILD_ARTIFACTS_SUFFIX, LOCAL_TMP_SUFFIX, NAS_SUFFIX, NAS_YML_FILE_NAME, ProjectLayout,
    base_dir, local_tmp_dir, nas_base_dir, nas_yml_path, root_base_dir, root_template_path,
};
pub use loader::{load_template, merge_value, validate_yml_name};
pub use locator::{Locator, OVERRIDE_FILE_NAME, TEMPLATE_FILE_NAMES, detect_override};
