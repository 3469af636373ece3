use std::sync::{mpsc, Arc};
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use log::LevelFilter;
use news_logging::{news_debug, news_info, news_warn};
use newsdesk_core::{update, AppState, AppViewModel, Msg, SessionHandle};
use newsdesk_engine::{LocalSessionService, SessionService};

use super::cli::Cli;
use super::config;
use super::effects::EffectRunner;
use super::logging;
use super::terminal::{self, Tui};
use super::ui::{input::UiState, render};

const TICK: Duration = Duration::from_millis(50);

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logging::initialize(cli.log_destination, &cli.log_file, level);

    let mut config = config::load(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    news_info!("Using news api at {}", config.api.base_url);

    let sessions: Arc<dyn SessionService> = Arc::new(LocalSessionService::new());
    let session = SessionHandle::new(sessions.init_session());

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(config.api_settings(), Arc::clone(&sessions), msg_tx)
        .context("failed to start search engine")?;
    let state = AppState::with_timings(session.clone(), config.timings());

    let mut tui = terminal::setup().context("failed to initialise terminal")?;
    let result = event_loop(&mut tui, state, &runner, &msg_rx, cli.query);
    let result = release_session_on_error(result, sessions.as_ref(), &session);
    terminal::restore(&mut tui).context("failed to restore terminal")?;
    news_info!("Newsdesk shut down");
    result
}

/// A clean quit releases the session through `Effect::ClearSession`; an
/// event loop failure skips that path, so release it here.
fn release_session_on_error(
    result: anyhow::Result<()>,
    sessions: &dyn SessionService,
    session: &SessionHandle,
) -> anyhow::Result<()> {
    if let Err(err) = &result {
        news_warn!("Event loop failed, releasing session {}: {:#}", session, err);
        sessions.clear_session(session.as_str());
    }
    result
}

fn event_loop(
    tui: &mut Tui,
    mut state: AppState,
    runner: &EffectRunner,
    msg_rx: &mpsc::Receiver<Msg>,
    initial_query: Option<String>,
) -> anyhow::Result<()> {
    let mut ui = UiState::default();
    if let Some(query) = initial_query {
        state = dispatch(state, Msg::SearchSubmitted(query), runner);
    }
    let mut view = refresh_view(&mut state, &mut ui, AppViewModel::default(), true);

    loop {
        view = refresh_view(&mut state, &mut ui, view, false);
        tui.draw(|frame| render::draw(frame, &view, &ui))?;
        if view.should_quit {
            return Ok(());
        }

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(msg) = ui.handle_key(key, &view) {
                        state = dispatch(state, msg, runner);
                    }
                }
            }
        }

        while let Ok(msg) = msg_rx.try_recv() {
            state = dispatch(state, msg, runner);
        }
    }
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    news_debug!("dispatch {:?}", MsgLabel(&msg));
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}

/// Rebuilds the view model only when the state changed since the last frame.
fn refresh_view(
    state: &mut AppState,
    ui: &mut UiState,
    current: AppViewModel,
    force: bool,
) -> AppViewModel {
    if state.consume_dirty() || force {
        let view = state.view();
        ui.sync(&view);
        view
    } else {
        current
    }
}

/// Short message name for logs; search results can be large.
struct MsgLabel<'a>(&'a Msg);

impl std::fmt::Debug for MsgLabel<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Msg::SearchCompleted {
                generation,
                outcome,
            } => match outcome {
                Ok(records) => write!(f, "SearchCompleted(gen={generation}, {} records)", records.len()),
                Err(message) => write!(f, "SearchCompleted(gen={generation}, err={message:?})"),
            },
            other => write!(f, "{other:?}"),
        }
    }
}
