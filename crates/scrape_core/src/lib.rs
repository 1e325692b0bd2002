//! Scraper core: request model, URL intake and the pure form state machine.
mod effect;
mod msg;
mod request;
mod state;
mod update;
mod urls;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use request::{BatchRequest, Category, CategoryFlags, ExtractionRequest};
pub use state::{AppState, SessionState};
pub use update::update;
pub use urls::parse_urls;
pub use view_model::AppViewModel;
