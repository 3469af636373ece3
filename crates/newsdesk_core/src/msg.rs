use crate::{NewsRecord, SearchGeneration};

/// Result of one fetch + process round trip, already reduced to a display message on failure.
pub type SearchOutcome = Result<Vec<NewsRecord>, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User submitted text from a search box; its tokens are merged into the keyword set.
    SearchSubmitted(String),
    /// User toggled a single keyword on or off.
    KeywordToggled(String),
    /// User clicked the logo: back to the landing view with a clean slate.
    LogoClicked,
    /// Engine finished a search issued under `generation`.
    SearchCompleted {
        generation: SearchGeneration,
        outcome: SearchOutcome,
    },
    /// A scheduled transition delay ran out.
    TransitionElapsed { token: u64 },
    /// User asked to leave the application.
    QuitRequested,
}
