use crate::{ExtractionRequest, SessionState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub session: SessionState,
    /// Number of URLs the current input would scrape.
    pub url_count: usize,
    pub extraction: ExtractionRequest,
    /// Text of the last finished batch, if any.
    pub report: Option<String>,
}
