//! HTTP prober.
//!
//! # Responsibilities
//! - Issue a single GET against the test listener
//! - Read the status code and a bounded body preview
//! - Classify transport failures into [`ProbeError`]

use std::error::Error as StdError;
use std::time::Duration;
use url::Url;

use crate::config::ProbeConfig;
use crate::probe::{Probe, ProbeError, ProbeResponse};
use crate::resilience::timeouts;

/// Preview buffers grow past this only as bytes actually arrive.
const PREVIEW_PREALLOC_CAP: usize = 8 * 1024;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// `reqwest`-backed [`Probe`].
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: reqwest::Client,
    timeout: Duration,
    body_preview_bytes: usize,
}

impl HttpProber {
    pub fn new(config: &ProbeConfig) -> Result<Self, reqwest::Error> {
        let timeout = Duration::from_millis(config.timeout_ms);

        // Every probe opens a fresh connection so it is routed by the
        // listener like a new client would be.
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .connect_timeout(timeout)
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self {
            client,
            timeout,
            body_preview_bytes: config.body_preview_bytes,
        })
    }

    async fn fetch(&self, url: &Url) -> Result<ProbeResponse, ProbeError> {
        let mut response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status().as_u16();
        let mut preview = Vec::with_capacity(self.body_preview_bytes.min(PREVIEW_PREALLOC_CAP));

        while preview.len() < self.body_preview_bytes {
            let chunk = response.chunk().await.map_err(|e| self.classify(e))?;
            match chunk {
                Some(bytes) => {
                    let take = (self.body_preview_bytes - preview.len()).min(bytes.len());
                    preview.extend_from_slice(&bytes[..take]);
                }
                None => break,
            }
        }

        Ok(ProbeResponse {
            status,
            body_preview: decode_ignoring_errors(&preview),
        })
    }

    fn classify(&self, err: reqwest::Error) -> ProbeError {
        if err.is_timeout() {
            ProbeError::Timeout(self.timeout)
        } else if err.is_connect() {
            ProbeError::Connect(describe(&err))
        } else if err.is_body() || err.is_decode() {
            ProbeError::Body(describe(&err))
        } else {
            ProbeError::Request(describe(&err))
        }
    }
}

impl Probe for HttpProber {
    async fn probe(&self, url: &Url) -> Result<ProbeResponse, ProbeError> {
        timeouts::within(self.timeout, self.fetch(url)).await
    }
}

/// Render an error with its source chain, e.g.
/// `error sending request: client error (Connect): Connection refused`.
fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// UTF-8 decode that drops invalid sequences instead of replacing them.
pub fn decode_ignoring_errors(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            }
            Err(e) => {
                let (valid, after) = rest.split_at(e.valid_up_to());
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                match e.error_len() {
                    Some(len) => rest = &after[len..],
                    // Truncated multi-byte sequence at the end of the preview.
                    None => break,
                }
            }
        }
    }

    out
}
