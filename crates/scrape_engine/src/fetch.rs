use std::error::Error as _;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use scrape_logging::{scrape_debug, scrape_info, scrape_warn};

use crate::decode::decode_html;
use crate::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput};

/// HTTP client knobs. Every field defaults to the client's own behaviour:
/// no overall timeout, ten redirects, no size cap.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
    pub redirect_limit: usize,
    pub max_bytes: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            request_timeout: None,
            redirect_limit: 10,
            max_bytes: None,
            user_agent: None,
        }
    }
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

/// Forwards batch progress to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingProgressSink;

impl ProgressSink for LoggingProgressSink {
    fn emit(&self, event: EngineEvent) {
        match event {
            EngineEvent::UrlStarted { index, url } => {
                scrape_info!("Scraping #{} url={}", index + 1, url);
            }
            EngineEvent::UrlFinished {
                index,
                url,
                result: Ok(summary),
            } => {
                scrape_info!(
                    "Finished #{} url={} status={} final_url={} redirects={} content_type={} encoding={} bytes={} lines={}",
                    index + 1,
                    url,
                    summary.status,
                    summary.final_url,
                    summary.redirect_count,
                    summary.content_type.as_deref().unwrap_or("-"),
                    summary.encoding_label,
                    summary.byte_len,
                    summary.report_lines
                );
            }
            EngineEvent::UrlFinished {
                index,
                url,
                result: Err(kind),
            } => {
                scrape_warn!("Failed #{} url={}: {}", index + 1, url, kind);
            }
        }
    }
}

/// Performs exactly one GET per call; no retries.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self, redirect_counter: Arc<AtomicUsize>) -> Result<reqwest::Client, FetchError> {
        let redirect_limit = self.settings.redirect_limit;
        let policy = reqwest::redirect::Policy::custom(move |attempt| {
            let count = attempt.previous().len();
            redirect_counter.store(count, Ordering::Relaxed);
            if count > redirect_limit {
                attempt.error("redirect limit exceeded")
            } else {
                attempt.follow()
            }
        });

        let mut builder = reqwest::Client::builder().redirect(policy);
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(agent) = self.settings.user_agent.as_deref() {
            builder = builder.user_agent(agent);
        }

        builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, error_chain(&err)))
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError> {
        let parsed = url::Url::parse(url).map_err(|err| {
            FetchError::new(FailureKind::InvalidUrl, format!("invalid URL '{url}': {err}"))
        })?;
        let redirect_counter = Arc::new(AtomicUsize::new(0));
        let client = self.build_client(redirect_counter.clone())?;

        let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;

        // Only a plain 200 counts as a page; other 2xx codes are reported
        // like any other status.
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let (Some(max_bytes), Some(content_len)) =
            (self.settings.max_bytes, response.content_length())
        {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, content_len));
            }
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if let Some(max_bytes) = self.settings.max_bytes {
                if next_len > max_bytes {
                    return Err(too_large(max_bytes, next_len));
                }
            }
            bytes.extend_from_slice(&chunk);
        }

        let decoded = decode_html(&bytes, content_type.as_deref());
        scrape_debug!(
            "Fetched url={} final_url={} bytes={} encoding={}",
            url,
            final_url,
            bytes.len(),
            decoded.encoding_label
        );

        let metadata = FetchMetadata {
            final_url,
            redirect_count: redirect_counter.load(Ordering::Relaxed),
            content_type,
            encoding_label: decoded.encoding_label,
            byte_len: bytes.len() as u64,
        };

        Ok(FetchOutput {
            status: status.as_u16(),
            body: decoded.html,
            metadata,
        })
    }
}

fn too_large(max_bytes: u64, actual: u64) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        format!("response too large: {actual} bytes exceeds the {max_bytes} byte limit"),
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    let message = error_chain(&err);
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, message);
    }
    if err.is_redirect() {
        return FetchError::new(FailureKind::RedirectLimitExceeded, message);
    }
    FetchError::new(FailureKind::Network, message)
}

/// Joins an error with its sources, e.g. "error sending request: connection refused".
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
