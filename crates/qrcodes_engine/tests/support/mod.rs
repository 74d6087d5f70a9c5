#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use qrcodes_engine::{FetchError, FetchSettings, Fetcher, QrCodeRecord};

/// Fetcher that replays scripted outcomes and counts calls.
pub struct ScriptedFetcher {
    outcomes: Mutex<VecDeque<Result<Vec<QrCodeRecord>, FetchError>>>,
    calls: Mutex<u32>,
}

impl ScriptedFetcher {
    pub fn new(outcomes: Vec<Result<Vec<QrCodeRecord>, FetchError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch_codes(&self, _url: &str) -> Result<Vec<QrCodeRecord>, FetchError> {
        *self.calls.lock().unwrap() += 1;
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub fn record(id: u64, title: &str) -> QrCodeRecord {
    QrCodeRecord {
        id,
        title: title.to_string(),
        product_title: None,
        product: None,
        destination: Some("product".to_string()),
        discount_code: None,
        scans: 0,
        created_at: "2024-01-03T10:00:00Z".to_string(),
    }
}

pub fn fast_settings() -> FetchSettings {
    FetchSettings {
        max_attempts: 3,
        initial_backoff: Duration::from_millis(1),
        max_backoff: Duration::from_millis(4),
        ..FetchSettings::default()
    }
}
