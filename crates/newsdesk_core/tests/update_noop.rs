use newsdesk_core::{update, AppState, Msg, SessionHandle};

#[test]
fn unknown_transition_token_is_ignored() {
    let state = AppState::new(SessionHandle::new("s"));
    let (next, effects) = update(state.clone(), Msg::TransitionElapsed { token: 99 });

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn completion_for_never_issued_generation_is_ignored() {
    let state = AppState::new(SessionHandle::new("s"));
    let (next, effects) = update(
        state.clone(),
        Msg::SearchCompleted {
            generation: 42,
            outcome: Ok(Vec::new()),
        },
    );

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
