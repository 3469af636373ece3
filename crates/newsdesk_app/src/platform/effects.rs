use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use news_logging::{news_debug, news_warn};
use newsdesk_core::{Effect, Msg};
use newsdesk_engine::{ApiSettings, EngineError, EngineEvent, EngineHandle, EventSink, SessionService};

/// Executes core effects: searches go to the engine, timers to short-lived
/// threads, session release to the session service.
pub struct EffectRunner {
    engine: EngineHandle,
    sessions: Arc<dyn SessionService>,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(
        settings: ApiSettings,
        sessions: Arc<dyn SessionService>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Result<Self, EngineError> {
        let sink = Arc::new(MsgSink {
            tx: msg_tx.clone(),
        });
        let engine = EngineHandle::new(settings, sink)?;
        Ok(Self {
            engine,
            sessions,
            msg_tx,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Search {
                    generation,
                    query,
                    session,
                } => {
                    news_debug!(
                        "Dispatching search generation={} query_len={}",
                        generation,
                        query.len()
                    );
                    self.engine.search(generation, query, session.as_str());
                }
                Effect::ScheduleTransitionEnd { token, delay } => {
                    self.schedule_transition_end(token, delay);
                }
                Effect::ClearSession { session } => {
                    self.sessions.clear_session(session.as_str());
                }
            }
        }
    }

    fn schedule_transition_end(&self, token: u64, delay: Duration) {
        news_debug!("Transition token={} ends in {:?}", token, delay);
        let tx = self.msg_tx.clone();
        thread::spawn(move || {
            thread::sleep(delay);
            let _ = tx.send(Msg::TransitionElapsed { token });
        });
    }
}

/// Forwards engine completions into the app message queue.
struct MsgSink {
    tx: mpsc::Sender<Msg>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        match event {
            EngineEvent::SearchCompleted { generation, result } => {
                let outcome = result.map_err(|err| {
                    news_warn!("Search generation={} failed: {:?}", generation, err);
                    err.to_string()
                });
                let _ = self.tx.send(Msg::SearchCompleted {
                    generation,
                    outcome,
                });
            }
        }
    }
}
