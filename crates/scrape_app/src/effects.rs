use anyhow::{Context, Result};
use scrape_core::{Effect, Msg};
use scrape_engine::{EngineHandle, FetchSettings, LoggingProgressSink};
use scrape_logging::scrape_info;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> Result<Self> {
        let engine = EngineHandle::new(settings).context("failed to start the HTTP runtime")?;
        Ok(Self { engine })
    }

    /// Runs effects to completion and returns the messages they produce.
    pub fn execute(&self, effects: Vec<Effect>) -> Vec<Msg> {
        effects
            .into_iter()
            .map(|effect| match effect {
                Effect::RunBatch(batch) => {
                    scrape_info!(
                        "RunBatch urls={} extraction={:?}",
                        batch.urls.len(),
                        batch.extraction
                    );
                    let report = self.engine.run(&batch, &LoggingProgressSink);
                    Msg::ReportReady(report.render())
                }
            })
            .collect()
    }
}
