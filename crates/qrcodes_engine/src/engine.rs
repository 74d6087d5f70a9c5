use std::sync::{mpsc, Arc};
use std::thread;

use admin_logging::{admin_debug, admin_error, admin_info, admin_warn};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::retry::{fetch_with_retry, RetryFailure};
use crate::tracker::StatusTracker;
use crate::{EngineEvent, FailureKind, FetchError, QrCodeRecord};

/// Receives engine events in the order they happen.
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

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub base_url: String,
    pub codes_path: String,
    pub settings: FetchSettings,
}

impl EngineConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            codes_path: "/api/qrcodes".to_string(),
            settings: FetchSettings::default(),
        }
    }

    /// `{base_url}{codes_path}`; a path prefix on the base is kept.
    pub fn collection_url(&self) -> Result<Url, FetchError> {
        let base = self.base_url.trim_end_matches('/');
        let path = self.codes_path.trim_start_matches('/');
        Url::parse(&format!("{base}/{path}"))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

enum EngineCommand {
    Fetch,
}

/// Owns the worker thread that fetches the collection.
///
/// Commands are handled one at a time, so status snapshots reach the sink in
/// the order the transitions happened. Dropping the handle cancels any
/// in-flight fetch and stops the worker.
pub struct EngineHandle {
    cmd_tx: UnboundedSender<EngineCommand>,
    cancel: CancellationToken,
}

impl EngineHandle {
    pub fn new(config: EngineConfig, sink: Arc<dyn EventSink>) -> Result<Self, FetchError> {
        let fetcher = Arc::new(ReqwestFetcher::new(config.settings.clone()));
        Self::with_fetcher(config, fetcher, sink)
    }

    pub fn with_fetcher(
        config: EngineConfig,
        fetcher: Arc<dyn Fetcher>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, FetchError> {
        let url = config.collection_url()?;
        let (cmd_tx, cmd_rx) = unbounded_channel();
        let cancel = CancellationToken::new();

        let worker = Worker {
            url,
            settings: config.settings,
            fetcher,
            sink,
            cancel: cancel.clone(),
        };
        thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    admin_error!("Failed to start engine runtime: {}", err);
                    return;
                }
            };
            runtime.block_on(worker.run(cmd_rx));
        });

        Ok(Self { cmd_tx, cancel })
    }

    /// Queues a fetch. Requests queued behind one another collapse into one.
    pub fn request_fetch(&self) {
        if self.cmd_tx.send(EngineCommand::Fetch).is_err() {
            admin_warn!("Engine worker is gone; fetch request dropped");
        }
    }

    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

struct Worker {
    url: Url,
    settings: FetchSettings,
    fetcher: Arc<dyn Fetcher>,
    sink: Arc<dyn EventSink>,
    cancel: CancellationToken,
}

impl Worker {
    async fn run(self, mut cmd_rx: UnboundedReceiver<EngineCommand>) {
        let mut tracker = StatusTracker::<QrCodeRecord>::new();
        admin_info!("Engine worker started for {}", self.url);

        loop {
            let command = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                command = cmd_rx.recv() => match command {
                    Some(command) => command,
                    None => break,
                },
            };

            match command {
                EngineCommand::Fetch => {
                    while cmd_rx.try_recv().is_ok() {}
                    self.sink.emit(EngineEvent::Status(tracker.begin()));

                    let outcome = tokio::select! {
                        biased;
                        _ = self.cancel.cancelled() => break,
                        outcome = fetch_with_retry(
                            self.fetcher.as_ref(),
                            self.url.as_str(),
                            &self.settings,
                        ) => outcome,
                    };

                    match outcome {
                        Ok(records) => {
                            admin_debug!("Collection settled with {} codes", records.len());
                            self.sink.emit(EngineEvent::Status(tracker.complete(records)));
                        }
                        Err(RetryFailure { error, attempts }) => {
                            admin_warn!("Fetch failed after {} attempts: {}", attempts, error);
                            self.sink.emit(EngineEvent::Status(tracker.fail()));
                            self.sink
                                .emit(EngineEvent::FetchFailed { error, attempts });
                        }
                    }
                }
            }
        }

        admin_info!("Engine worker stopped");
    }
}
