//! Newsdesk core: pure state machine and view-model helpers.
mod effect;
mod keywords;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use keywords::KeywordSet;
pub use msg::{Msg, SearchOutcome};
pub use state::{AppState, NewsRecord, SearchGeneration, SessionHandle, Timings};
pub use update::{update, UNEXPECTED_ERROR_MESSAGE};
pub use view_model::{AppViewModel, Screen};
