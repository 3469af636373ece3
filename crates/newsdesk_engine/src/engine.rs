use std::sync::{mpsc, Arc};
use std::thread;

use news_logging::{news_error, news_info};

use crate::pipeline::run_search;
use crate::{ApiSettings, EngineError, EngineEvent, NewsApi, ReqwestNewsApi, SearchError, SearchGeneration};

/// Receiver of engine completions. Called from runtime worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Search {
        generation: SearchGeneration,
        query: String,
        session_id: String,
    },
}

/// Handle to the search worker. Dropping it stops the worker; searches still
/// in flight are abandoned without reporting.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let api: Arc<dyn NewsApi> = Arc::new(ReqwestNewsApi::new(settings)?);
        Self::with_api(api, sink)
    }

    /// Starts the worker around any `NewsApi` implementation.
    pub fn with_api(api: Arc<dyn NewsApi>, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    handle_command(api, command, sink).await;
                });
            }
            news_info!("Search engine worker stopped");
        });

        Ok(Self { cmd_tx })
    }

    pub fn search(
        &self,
        generation: SearchGeneration,
        query: impl Into<String>,
        session_id: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::Search {
            generation,
            query: query.into(),
            session_id: session_id.into(),
        });
    }
}

async fn handle_command(api: Arc<dyn NewsApi>, command: EngineCommand, sink: Arc<dyn EventSink>) {
    match command {
        EngineCommand::Search {
            generation,
            query,
            session_id,
        } => {
            // Run in a child task so a panic still produces a completion.
            let task = tokio::spawn(async move { run_search(api.as_ref(), &query, &session_id).await });
            let result = match task.await {
                Ok(result) => result,
                Err(err) => {
                    news_error!("Search task generation={} aborted: {}", generation, err);
                    Err(SearchError::Unexpected)
                }
            };
            sink.emit(EngineEvent::SearchCompleted { generation, result });
        }
    }
}
