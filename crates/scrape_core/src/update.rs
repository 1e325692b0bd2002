use crate::{AppState, Effect, Msg, SessionState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlInputChanged(raw) => {
            state.set_url_input(raw);
            Vec::new()
        }
        Msg::TagInputChanged(raw) => {
            state.set_tag_input(raw);
            Vec::new()
        }
        Msg::CategoryToggled { category, enabled } => {
            state.set_category(category, enabled);
            Vec::new()
        }
        Msg::ScrapeClicked => {
            // A batch cannot be cancelled, so a second click while one is
            // running is ignored.
            if state.session() == SessionState::Running {
                return (state, Vec::new());
            }
            let batch = state.batch_request();
            if batch.urls.is_empty() {
                state.finish_batch(String::new());
                return (state, Vec::new());
            }
            state.start_batch();
            vec![Effect::RunBatch(batch)]
        }
        Msg::ReportReady(report) => {
            if state.session() == SessionState::Running {
                state.finish_batch(report);
            }
            Vec::new()
        }
    };

    (state, effects)
}
