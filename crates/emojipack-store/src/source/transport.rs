use crate::errors::{fetch_error, Result};
use emojipack_core::errors::{ExError, ExErrorKind};
use reqwest::blocking::Client;
use reqwest::header::{HeaderName, ETAG, IF_MODIFIED_SINCE, IF_NONE_MATCH, LAST_MODIFIED};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP cache validators remembered between runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validators {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

impl Validators {
    pub fn is_empty(&self) -> bool {
        self.etag.is_none() && self.last_modified.is_none()
    }
}

/// Status, body and validators of a GET response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub validators: Validators,
}

/// Conditional GET
///
/// Implementations send `If-None-Match` / `If-Modified-Since` for whichever
/// validators are present and report the status as-is; interpreting it is
/// the caller's job.
pub trait HttpTransport {
    /// # Errors
    ///
    /// - `ExternalService` — the request could not be completed
    fn get(&self, url: &str, validators: &Validators) -> Result<HttpResponse>;
}

/// [`HttpTransport`] over a blocking reqwest client
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// - `ExternalService` — the TLS backend could not be initialised
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("emojipack/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                ExError::new(ExErrorKind::ExternalService)
                    .with_op("build_http_client")
                    .with_message(e.to_string())
            })?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str, validators: &Validators) -> Result<HttpResponse> {
        let mut request = self.client.get(url);
        if let Some(etag) = &validators.etag {
            request = request.header(IF_NONE_MATCH, etag);
        }
        if let Some(last_modified) = &validators.last_modified {
            request = request.header(IF_MODIFIED_SINCE, last_modified);
        }

        let response = request.send().map_err(|e| fetch_error(url, e.to_string()))?;
        let status = response.status().as_u16();
        let header = |name: HeaderName| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let validators = Validators {
            etag: header(ETAG),
            last_modified: header(LAST_MODIFIED),
        };
        let body = response
            .bytes()
            .map_err(|e| fetch_error(url, e.to_string()))?
            .to_vec();

        Ok(HttpResponse {
            status,
            body,
            validators,
        })
    }
}
