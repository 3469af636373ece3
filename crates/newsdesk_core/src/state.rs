use std::fmt;
use std::time::Duration;

use crate::view_model::{AppViewModel, Screen};
use crate::KeywordSet;

/// One processed article as returned by the process endpoint. Opaque to the core.
pub type NewsRecord = serde_json::Value;

/// Sequence number captured by each search issuance.
pub type SearchGeneration = u64;

/// Opaque correlation id attached to every request of one session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionHandle(String);

impl SessionHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Animation delays before `is_transitioning` drops back to false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub search_transition: Duration,
    pub reset_transition: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            search_transition: Duration::from_millis(1000),
            reset_transition: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    session: SessionHandle,
    timings: Timings,
    keywords: KeywordSet,
    results: Vec<NewsRecord>,
    has_searched: bool,
    is_transitioning: bool,
    show_shimmer: bool,
    error: Option<String>,
    provider_key: u64,
    generation: SearchGeneration,
    transition_token: u64,
    quit_requested: bool,
    dirty: bool,
}

impl AppState {
    pub fn new(session: SessionHandle) -> Self {
        Self::with_timings(session, Timings::default())
    }

    pub fn with_timings(session: SessionHandle, timings: Timings) -> Self {
        Self {
            session,
            timings,
            keywords: KeywordSet::new(),
            results: Vec::new(),
            has_searched: false,
            is_transitioning: false,
            show_shimmer: false,
            error: None,
            provider_key: 0,
            generation: 0,
            transition_token: 0,
            quit_requested: false,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            screen: if self.has_searched {
                Screen::Results
            } else {
                Screen::Landing
            },
            keywords: self.keywords.as_slice().to_vec(),
            results: self.results.clone(),
            loading_overlay: self.has_searched && self.show_shimmer,
            is_transitioning: self.is_transitioning,
            error: self.error.clone(),
            provider_key: self.provider_key,
            should_quit: self.quit_requested,
        }
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    pub fn results(&self) -> &[NewsRecord] {
        &self.results
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    pub fn show_shimmer(&self) -> bool {
        self.show_shimmer
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn provider_key(&self) -> u64 {
        self.provider_key
    }

    /// Generation of the most recently issued (or short-circuited) search.
    pub fn generation(&self) -> SearchGeneration {
        self.generation
    }

    pub fn transition_token(&self) -> u64 {
        self.transition_token
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Returns whether anything visible changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn keywords_mut(&mut self) -> &mut KeywordSet {
        self.dirty = true;
        &mut self.keywords
    }

    pub(crate) fn next_generation(&mut self) -> SearchGeneration {
        self.generation += 1;
        self.generation
    }

    /// Drops results and any loading state. A search still in flight is
    /// orphaned by the generation bump, so nothing else would clear it.
    pub(crate) fn clear_results(&mut self) {
        self.has_searched = false;
        self.results.clear();
        self.show_shimmer = false;
        self.is_transitioning = false;
        self.dirty = true;
    }

    pub(crate) fn begin_loading(&mut self) {
        self.show_shimmer = true;
        self.error = None;
        self.dirty = true;
        self.begin_transition();
    }

    pub(crate) fn apply_results(&mut self, results: Vec<NewsRecord>) {
        self.results = results;
        self.has_searched = true;
        self.show_shimmer = false;
        self.dirty = true;
    }

    pub(crate) fn apply_failure(&mut self, message: String) {
        self.error = Some(message);
        self.has_searched = false;
        self.show_shimmer = false;
        self.is_transitioning = false;
        self.dirty = true;
    }

    /// Back to the landing view with a fresh results scope.
    pub(crate) fn reset(&mut self) -> u64 {
        self.error = None;
        self.has_searched = false;
        self.show_shimmer = false;
        self.results.clear();
        self.provider_key += 1;
        self.keywords.clear();
        self.dirty = true;
        self.begin_transition()
    }

    /// Clears `is_transitioning` if `token` still names the current transition.
    pub(crate) fn end_transition(&mut self, token: u64) -> bool {
        if token != self.transition_token || !self.is_transitioning {
            return false;
        }
        self.is_transitioning = false;
        self.dirty = true;
        true
    }

    pub(crate) fn request_quit(&mut self) {
        self.quit_requested = true;
        self.dirty = true;
    }

    fn begin_transition(&mut self) -> u64 {
        self.is_transitioning = true;
        self.transition_token += 1;
        self.transition_token
    }
}
