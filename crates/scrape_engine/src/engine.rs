use std::sync::Arc;

use scrape_core::{BatchRequest, ExtractionRequest};
use scrape_logging::{scrape_debug, scrape_warn};

use crate::dom::ParsedDocument;
use crate::extract::{ElementExtractor, Extractor};
use crate::fetch::{FetchSettings, Fetcher, ProgressSink, ReqwestFetcher};
use crate::{EngineEvent, Report, UrlSummary};

/// Runs a batch: one URL at a time, in input order, into a single report.
#[derive(Clone)]
pub struct ScrapeEngine {
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<dyn Extractor>,
}

impl ScrapeEngine {
    pub fn new(fetcher: Arc<dyn Fetcher>, extractor: Arc<dyn Extractor>) -> Self {
        Self { fetcher, extractor }
    }

    pub fn with_settings(settings: FetchSettings) -> Self {
        Self::new(
            Arc::new(ReqwestFetcher::new(settings)),
            Arc::new(ElementExtractor),
        )
    }

    /// Failures stay local to their URL: they become report lines and the
    /// batch carries on.
    pub async fn run_batch(&self, batch: &BatchRequest, sink: &dyn ProgressSink) -> Report {
        let mut report = Report::new();
        for (index, url) in batch.urls.iter().enumerate() {
            sink.emit(EngineEvent::UrlStarted {
                index,
                url: url.clone(),
            });
            report.begin_url(url);

            let result = match self.fetcher.fetch(url).await {
                Ok(output) => {
                    let lines = self.extract_page(&output.body, &batch.extraction);
                    let metadata = output.metadata;
                    let summary = UrlSummary {
                        status: output.status,
                        final_url: metadata.final_url,
                        redirect_count: metadata.redirect_count,
                        content_type: metadata.content_type,
                        encoding_label: metadata.encoding_label,
                        byte_len: metadata.byte_len,
                        report_lines: lines.len(),
                    };
                    report.extend(lines);
                    Ok(summary)
                }
                Err(err) => {
                    scrape_warn!("Fetch failed url={} kind={}: {}", url, err.kind, err.message);
                    report.push_fetch_failure(url, &err);
                    Err(err.kind)
                }
            };

            sink.emit(EngineEvent::UrlFinished {
                index,
                url: url.clone(),
                result,
            });
        }
        report
    }

    fn extract_page(&self, body: &str, request: &ExtractionRequest) -> Vec<String> {
        let document = ParsedDocument::parse(body);
        let lines = self.extractor.extract(&document, request);
        scrape_debug!("Extracted {} report lines", lines.len());
        lines
    }
}

/// Blocking front door for callers without an async runtime.
pub struct EngineHandle {
    runtime: tokio::runtime::Runtime,
    engine: ScrapeEngine,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> std::io::Result<Self> {
        Self::with_engine(ScrapeEngine::with_settings(settings))
    }

    pub fn with_engine(engine: ScrapeEngine) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { runtime, engine })
    }

    pub fn run(&self, batch: &BatchRequest, sink: &dyn ProgressSink) -> Report {
        self.runtime.block_on(self.engine.run_batch(batch, sink))
    }
}
