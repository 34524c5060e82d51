//! Signed RPC-style API client
//!
//! Every call is a form-encoded `POST /` carrying the common parameters,
//! the action parameters and the request signature. Responses are JSON.

use crate::error::{AliyunError, Result};
use crate::signature::{SIGNATURE_METHOD, SIGNATURE_VERSION, sign};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use tracing::debug;

const HTTP_METHOD: &str = "POST";

/// Access key pair used to sign requests
#[derive(Clone)]
pub struct Credentials {
    pub access_key_id: String,
    pub access_key_secret: String,
}

impl Credentials {
    pub fn new(access_key_id: impl Into<String>, access_key_secret: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            access_key_secret: access_key_secret.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("access_key_secret", &"***")
            .finish()
    }
}

/// Error body returned with non-2xx responses
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorBody {
    #[serde(default)]
    request_id: String,
    code: String,
    #[serde(default)]
    message: String,
}

/// Client for one product endpoint and API version
#[derive(Debug, Clone)]
pub struct PopClient {
    http: reqwest::Client,
    endpoint: String,
    api_version: &'static str,
    credentials: Credentials,
}

impl PopClient {
    pub fn new(
        http: reqwest::Client,
        endpoint: impl Into<String>,
        api_version: &'static str,
        credentials: Credentials,
    ) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            api_version,
            credentials,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Common parameters plus `params`, signed
    fn signed_params(&self, action: &str, params: &[(&str, String)]) -> BTreeMap<String, String> {
        let mut all: BTreeMap<String, String> = BTreeMap::new();
        all.insert("Action".into(), action.to_string());
        all.insert("Format".into(), "JSON".into());
        all.insert("Version".into(), self.api_version.to_string());
        all.insert("AccessKeyId".into(), self.credentials.access_key_id.clone());
        all.insert("SignatureMethod".into(), SIGNATURE_METHOD.into());
        all.insert("SignatureVersion".into(), SIGNATURE_VERSION.into());
        all.insert("SignatureNonce".into(), uuid::Uuid::new_v4().to_string());
        all.insert(
            "Timestamp".into(),
            chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        );
        for (key, value) in params {
            all.insert((*key).to_string(), value.clone());
        }

        let signature = sign(HTTP_METHOD, &all, &self.credentials.access_key_secret);
        all.insert("Signature".into(), signature);
        all
    }

    /// Issue `action` and decode the JSON response body
    pub async fn request<T: DeserializeOwned>(
        &self,
        action: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let form = self.signed_params(action, params);
        let url = format!("{}/", self.endpoint.trim_end_matches('/'));
        debug!(action, endpoint = %self.endpoint, "Sending request");

        let response = self.http.post(&url).form(&form).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(action, %status, body = %body, "Received response");

        if !status.is_success() {
            return Err(match serde_json::from_str::<ErrorBody>(&body) {
                Ok(err) => AliyunError::Api {
                    action: action.to_string(),
                    code: err.code,
                    message: err.message,
                    request_id: err.request_id,
                },
                Err(_) => AliyunError::Api {
                    action: action.to_string(),
                    code: status.as_u16().to_string(),
                    message: body,
                    request_id: String::new(),
                },
            });
        }

        serde_json::from_str(&body).map_err(|source| AliyunError::Decode {
            action: action.to_string(),
            source,
        })
    }
}
