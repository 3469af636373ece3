use std::time::Duration;

use newsdesk_core::{update, AppState, Effect, Msg, Screen, SessionHandle};
use serde_json::json;

fn init_logging() {
    news_logging::initialize_for_tests();
}

fn searched_state() -> AppState {
    let state = AppState::new(SessionHandle::new("s"));
    let (state, effects) = update(state, Msg::SearchSubmitted("election china".into()));
    let generation = match effects.as_slice() {
        [Effect::Search { generation, .. }] => *generation,
        other => panic!("expected search effect, got {other:?}"),
    };
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            generation,
            outcome: Ok(vec![json!({ "id": 1 })]),
        },
    );
    assert!(state.has_searched());
    state
}

#[test]
fn reset_clears_everything_and_bumps_provider_key() {
    init_logging();
    let state = searched_state();
    let key_before = state.provider_key();

    let (mut state, effects) = update(state, Msg::LogoClicked);

    assert!(state.keywords().is_empty());
    assert!(!state.has_searched());
    assert!(state.results().is_empty());
    assert_eq!(state.error(), None);
    assert!(state.provider_key() > key_before);
    assert!(state.is_transitioning());
    assert!(state.consume_dirty());
    assert_eq!(
        effects,
        vec![Effect::ScheduleTransitionEnd {
            token: state.transition_token(),
            delay: Duration::from_millis(500),
        }]
    );

    let view = state.view();
    assert_eq!(view.screen, Screen::Landing);
    assert!(view.keywords.is_empty());

    let token = state.transition_token();
    let (state, _) = update(state, Msg::TransitionElapsed { token });
    assert!(!state.is_transitioning());
}

#[test]
fn reset_from_error_clears_banner() {
    init_logging();
    let state = AppState::new(SessionHandle::new("s"));
    let (state, effects) = update(state, Msg::SearchSubmitted("x".into()));
    let generation = match effects.as_slice() {
        [Effect::Search { generation, .. }] => *generation,
        other => panic!("expected search effect, got {other:?}"),
    };
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            generation,
            outcome: Err("Failed to process news".into()),
        },
    );
    assert!(state.error().is_some());

    let (state, _) = update(state, Msg::LogoClicked);
    assert_eq!(state.error(), None);
    assert_eq!(state.provider_key(), 1);
}

#[test]
fn repeated_resets_keep_increasing_provider_key() {
    init_logging();
    let mut state = AppState::new(SessionHandle::new("s"));
    let mut last = state.provider_key();
    for _ in 0..3 {
        let (next, _) = update(state, Msg::LogoClicked);
        assert!(next.provider_key() > last);
        last = next.provider_key();
        state = next;
    }
}

#[test]
fn result_arriving_after_reset_is_ignored() {
    init_logging();
    let state = AppState::new(SessionHandle::new("s"));
    let (state, effects) = update(state, Msg::SearchSubmitted("election".into()));
    let generation = match effects.as_slice() {
        [Effect::Search { generation, .. }] => *generation,
        other => panic!("expected search effect, got {other:?}"),
    };

    let (state, _) = update(state, Msg::LogoClicked);
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            generation,
            outcome: Ok(vec![json!({ "id": 1 })]),
        },
    );

    assert!(!state.has_searched());
    assert!(state.results().is_empty());
    assert!(!state.show_shimmer());
}

#[test]
fn quit_clears_session_once() {
    init_logging();
    let session = SessionHandle::new("session-42");
    let state = AppState::new(session.clone());

    let (state, effects) = update(state, Msg::QuitRequested);
    assert_eq!(effects, vec![Effect::ClearSession { session }]);
    assert!(state.view().should_quit);

    let (_state, effects) = update(state, Msg::QuitRequested);
    assert!(effects.is_empty());
}
