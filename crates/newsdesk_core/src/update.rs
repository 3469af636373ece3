use news_logging::{news_debug, news_info, news_warn};

use crate::{AppState, Effect, Msg, SearchOutcome};

/// Banner text used when a failure carries no message of its own.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SearchSubmitted(raw) => {
            let added = state.keywords_mut().merge_typed(&raw);
            news_debug!("Merged typed query: added={} total={}", added, state.keywords().len());
            // Every merge re-runs the search, even one that added nothing.
            perform_search(&mut state)
        }
        Msg::KeywordToggled(keyword) => {
            let present = state.keywords_mut().toggle(&keyword);
            news_debug!("Toggled keyword {:?}: present={}", keyword, present);
            perform_search(&mut state)
        }
        Msg::LogoClicked => {
            news_info!("Logo clicked, resetting state");
            let token = state.reset();
            // Anything still in flight belongs to the previous session view.
            state.next_generation();
            vec![Effect::ScheduleTransitionEnd {
                token,
                delay: state.timings().reset_transition,
            }]
        }
        Msg::SearchCompleted {
            generation,
            outcome,
        } => {
            if generation != state.generation() {
                news_debug!(
                    "Discarding stale search result generation={} current={}",
                    generation,
                    state.generation()
                );
                return (state, Vec::new());
            }
            apply_outcome(&mut state, outcome)
        }
        Msg::TransitionElapsed { token } => {
            if !state.end_transition(token) {
                news_debug!("Ignoring superseded transition token={}", token);
            }
            Vec::new()
        }
        Msg::QuitRequested => {
            if state.quit_requested() {
                Vec::new()
            } else {
                state.request_quit();
                vec![Effect::ClearSession {
                    session: state.session().clone(),
                }]
            }
        }
    };

    (state, effects)
}

fn perform_search(state: &mut AppState) -> Vec<Effect> {
    let query = state.keywords().query();
    let generation = state.next_generation();
    if query.trim().is_empty() {
        state.clear_results();
        return Vec::new();
    }

    state.begin_loading();
    news_info!("Search issued generation={} query={:?}", generation, query);
    vec![Effect::Search {
        generation,
        query,
        session: state.session().clone(),
    }]
}

fn apply_outcome(state: &mut AppState, outcome: SearchOutcome) -> Vec<Effect> {
    match outcome {
        Ok(results) => {
            news_info!(
                "Search generation={} succeeded with {} records",
                state.generation(),
                results.len()
            );
            state.apply_results(results);
            vec![Effect::ScheduleTransitionEnd {
                token: state.transition_token(),
                delay: state.timings().search_transition,
            }]
        }
        Err(message) => {
            news_warn!("Search generation={} failed: {}", state.generation(), message);
            let message = if message.trim().is_empty() {
                UNEXPECTED_ERROR_MESSAGE.to_owned()
            } else {
                message
            };
            state.apply_failure(message);
            Vec::new()
        }
    }
}
