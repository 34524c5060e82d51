//! Template loading
//!
//! Reads one or more YAML templates and deep-merges them in order, so that an
//! override file layered after the main template wins on conflicting keys.

use crate::error::{Result, TemplateError};
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::{debug, instrument};

/// Fails with [`TemplateError::InvalidName`] unless every path ends in `.yml`/`.yaml`.
pub fn validate_yml_name<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    for path in paths {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        if !(name.ends_with(".yml") || name.ends_with(".yaml")) {
            return Err(TemplateError::InvalidName(path.to_path_buf()));
        }
    }
    Ok(())
}

/// Load and merge templates, later paths overlaying earlier ones.
///
/// Names are validated before any file is read.
#[instrument(skip(paths), fields(count = paths.len()))]
pub fn load_template<P: AsRef<Path>>(paths: &[P]) -> Result<Mapping> {
    validate_yml_name(paths)?;

    let mut merged = Mapping::new();
    for path in paths {
        let source = read_template(path.as_ref())?;
        merge_mapping(&mut merged, source);
    }

    debug!(template = ?merged, "Loaded template");
    Ok(merged)
}

fn read_template(path: &Path) -> Result<Mapping> {
    let content = std::fs::read_to_string(path).map_err(|e| TemplateError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let value: Value = serde_yaml::from_str(&content).map_err(|source| TemplateError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        // empty documents contribute nothing
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(TemplateError::NotAMapping {
            path: path.to_path_buf(),
        }),
    }
}

fn merge_mapping(target: &mut Mapping, source: Mapping) {
    for (key, value) in source {
        match target.get_mut(&key) {
            Some(existing) => merge_value(existing, value),
            None => {
                target.insert(key, value);
            }
        }
    }
}

/// Deep merge `source` into `target`.
///
/// Mappings merge key by key, sequences merge element by element (extra
/// source elements are appended), anything else is replaced by the source.
pub fn merge_value(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Mapping(target), Value::Mapping(source)) => merge_mapping(target, source),
        (Value::Sequence(target), Value::Sequence(source)) => {
            for (index, value) in source.into_iter().enumerate() {
                match target.get_mut(index) {
                    Some(existing) => merge_value(existing, value),
                    None => target.push(value),
                }
            }
        }
        (target, source) => *target = source,
    }
}
