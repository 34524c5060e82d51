//! Alibaba Cloud provider error types

use funflow_cloud::CloudError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AliyunError {
    #[error("{action} failed with {code}: {message} (request id: {request_id})")]
    Api {
        action: String,
        code: String,
        message: String,
        request_id: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected {action} response: {source}")]
    Decode {
        action: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, AliyunError>;

impl From<AliyunError> for CloudError {
    fn from(err: AliyunError) -> Self {
        match err {
            AliyunError::Api {
                code,
                message,
                request_id,
                ..
            } => CloudError::Api {
                code,
                message,
                request_id,
            },
            AliyunError::Http(e) => CloudError::Http(e.to_string()),
            e @ AliyunError::Decode { .. } => CloudError::InvalidResponse(e.to_string()),
            AliyunError::InvalidConfig(msg) => CloudError::InvalidConfig(msg),
        }
    }
}
