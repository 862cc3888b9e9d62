//! HTTP transport
//!
//! The client only needs a single capability from the network: issue a GET
//! and hand back status plus body. [`Transport`] is that seam; the default
//! implementation is [`http::HttpTransport`] over reqwest.

pub mod http;

#[cfg(test)]
pub(crate) mod fake;

use thiserror::Error;

/// Transport-level failure (connection, timeout, undecodable body)
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Connection(String),
}

/// A completed HTTP response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Numeric status code
    pub status: u16,
    /// Reason phrase for the status code
    pub status_text: String,
    /// Raw response body
    pub body: String,
}

impl HttpResponse {
    /// Decode the body as JSON
    pub fn json(&self) -> Result<serde_json::Value, TransportError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Whether the status is exactly 200
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Trait for HTTP transports
pub trait Transport: Send + Sync {
    /// Issue a GET request to `url`
    ///
    /// Any response the server sends back is `Ok`, whatever its status.
    fn get(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<HttpResponse, TransportError>> + Send;
}
