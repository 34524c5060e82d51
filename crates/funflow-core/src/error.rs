use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("The template file name must end with yml or yaml: {}", .0.display())]
    InvalidName(PathBuf),

    #[error("Failed to parse template {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to read template {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    #[error("Template {} must contain a mapping at the top level", path.display())]
    NotAMapping { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, TemplateError>;
