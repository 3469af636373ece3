//! Newsdesk engine: news API client, search pipeline and effect execution.
mod api;
mod engine;
mod pipeline;
mod session;
mod types;

pub use api::{ApiSettings, NewsApi, ReqwestNewsApi};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use pipeline::run_search;
pub use session::{LocalSessionService, SessionService};
pub use types::{EngineError, EngineEvent, SearchError, SearchGeneration};
