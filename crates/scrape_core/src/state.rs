use crate::view_model::AppViewModel;
use crate::{BatchRequest, Category, CategoryFlags, ExtractionRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Running,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    url_input: String,
    tag_input: String,
    flags: CategoryFlags,
    session: SessionState,
    report: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            session: self.session,
            url_count: crate::parse_urls(&self.url_input).len(),
            extraction: self.extraction_request(),
            report: self.report.clone(),
        }
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub(crate) fn set_url_input(&mut self, raw: String) {
        self.url_input = raw;
    }

    pub(crate) fn set_tag_input(&mut self, raw: String) {
        self.tag_input = raw;
    }

    pub(crate) fn set_category(&mut self, category: Category, enabled: bool) {
        self.flags.set(category, enabled);
    }

    pub(crate) fn extraction_request(&self) -> ExtractionRequest {
        ExtractionRequest::from_inputs(&self.tag_input, self.flags)
    }

    pub(crate) fn batch_request(&self) -> BatchRequest {
        BatchRequest::from_inputs(&self.url_input, &self.tag_input, self.flags)
    }

    pub(crate) fn start_batch(&mut self) {
        self.session = SessionState::Running;
        self.report = None;
    }

    pub(crate) fn finish_batch(&mut self, report: String) {
        self.session = SessionState::Finished;
        self.report = Some(report);
    }
}
