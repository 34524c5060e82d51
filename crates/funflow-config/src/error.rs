use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "Missing configuration value: {0}\n\
        Set it in ~/.fcli/config.yaml or via the ALIBABA_CLOUD_* environment variables"
    )]
    Missing(&'static str),

    #[error("Invalid config file {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
