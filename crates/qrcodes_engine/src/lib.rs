//! QR codes engine: the collection data source behind the index page.
mod engine;
mod fetch;
mod retry;
mod tracker;
mod types;

pub use engine::{ChannelEventSink, EngineConfig, EngineHandle, EventSink};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use retry::{backoff_delay, fetch_with_retry, RetryFailure};
pub use tracker::StatusTracker;
pub use types::{EngineEvent, FailureKind, FetchError, ProductRef, QrCodeRecord};
