use std::time::Duration;

use crate::{SearchGeneration, SessionHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run fetch then process for `query`; report back with `Msg::SearchCompleted`.
    Search {
        generation: SearchGeneration,
        query: String,
        session: SessionHandle,
    },
    /// Send `Msg::TransitionElapsed { token }` after `delay`.
    ScheduleTransitionEnd { token: u64, delay: Duration },
    /// Release the session with the session service.
    ClearSession { session: SessionHandle },
}
