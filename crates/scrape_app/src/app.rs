//! Drives the core state machine from command-line input.

use std::collections::VecDeque;

use anyhow::Result;
use scrape_core::{update, AppState, Msg};
use scrape_logging::scrape_debug;

use crate::cli::Args;
use crate::effects::EffectRunner;

/// Feeds the form inputs into the core, presses "scrape" and executes the
/// resulting effects until the report is ready.
pub fn run(args: &Args) -> Result<String> {
    let raw_urls = args.raw_urls()?;
    let runner = EffectRunner::new(args.fetch_settings())?;

    let mut queue: VecDeque<Msg> = args.form_messages(raw_urls).into();
    queue.push_back(Msg::ScrapeClicked);

    let mut state = AppState::new();
    while let Some(msg) = queue.pop_front() {
        let (next, effects) = update(state, msg);
        state = next;
        queue.extend(runner.execute(effects));
    }

    let view = state.view();
    scrape_debug!("Session ended in {:?} after {} urls", view.session, view.url_count);
    Ok(view.report.unwrap_or_default())
}
