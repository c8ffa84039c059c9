// src/core/net.rs
//
// Blocking HTTP behind a small trait so the pipeline can run against a fake.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;

use crate::config::consts::USER_AGENT;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetError {
    #[error("request timed out")]
    Timeout,
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("{0}")]
    Request(String),
}

impl NetError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, NetError::Timeout)
    }
}

impl From<reqwest::Error> for NetError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            NetError::Timeout
        } else if let Some(status) = e.status() {
            NetError::Status(status.as_u16())
        } else {
            NetError::Request(e.to_string())
        }
    }
}

/// The three calls a run makes. Implementations block until the response
/// arrives; non-2xx responses are errors and bodies other than the page are
/// dropped.
pub trait Transport {
    fn get(&self, url: &str) -> Result<Vec<u8>, NetError>;
    fn put_json(&self, url: &str, body: &str) -> Result<(), NetError>;
    fn post_text(&self, url: &str, body: &str) -> Result<(), NetError>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// `timeout` applies to each request as a whole (connect to last byte).
    pub fn new(timeout: Duration) -> Result<Self, NetError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, NetError> {
        let resp = self.client.get(url).send()?.error_for_status()?;
        Ok(resp.bytes()?.to_vec())
    }

    fn put_json(&self, url: &str, body: &str) -> Result<(), NetError> {
        self.client
            .put(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_owned())
            .send()?
            .error_for_status()?;
        Ok(())
    }

    fn post_text(&self, url: &str, body: &str) -> Result<(), NetError> {
        self.client
            .post(url)
            .header(CONTENT_TYPE, "text/plain")
            .body(body.to_owned())
            .send()?
            .error_for_status()?;
        Ok(())
    }
}
