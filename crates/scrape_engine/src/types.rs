use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    UrlStarted {
        index: usize,
        url: String,
    },
    UrlFinished {
        index: usize,
        url: String,
        result: Result<UrlSummary, FailureKind>,
    },
}

/// What a successfully scraped URL contributed to the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSummary {
    pub status: u16,
    pub final_url: String,
    pub redirect_count: usize,
    pub content_type: Option<String>,
    pub encoding_label: String,
    pub byte_len: u64,
    pub report_lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub status: u16,
    pub body: String,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub final_url: String,
    pub redirect_count: usize,
    pub content_type: Option<String>,
    pub encoding_label: String,
    pub byte_len: u64,
}

/// Why a URL produced no page. `message` is what the report shows for
/// transport-level failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The status code when the server answered with anything but 200.
    pub fn http_status(&self) -> Option<u16> {
        match self.kind {
            FailureKind::HttpStatus(code) => Some(code),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
