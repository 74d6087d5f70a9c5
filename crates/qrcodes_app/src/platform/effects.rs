use std::sync::{mpsc, Arc};

use admin_logging::{admin_debug, admin_warn};
use qrcodes_core::{Destination, Effect, Msg, QrCode};
use qrcodes_engine::{EngineConfig, EngineEvent, EngineHandle, EventSink, FetchError, QrCodeRecord};

use super::app::LoopEvent;
use super::navigation::Navigator;

pub struct EffectRunner {
    engine: EngineHandle,
    navigator: Box<dyn Navigator>,
}

impl EffectRunner {
    pub fn new(
        config: EngineConfig,
        loop_tx: mpsc::Sender<LoopEvent>,
        navigator: Box<dyn Navigator>,
    ) -> Result<Self, FetchError> {
        let engine = EngineHandle::new(config, Arc::new(MsgSink { tx: loop_tx }))?;
        Ok(Self { engine, navigator })
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Navigate { target } => self.navigator.navigate(&target),
                Effect::Refetch => {
                    admin_debug!("Requesting collection fetch");
                    self.engine.request_fetch();
                }
            }
        }
    }

    pub fn shutdown(&self) {
        self.engine.shutdown();
    }
}

/// Forwards engine events into the page loop as messages.
struct MsgSink {
    tx: mpsc::Sender<LoopEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(LoopEvent::Dispatch(map_event(event)));
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Status(status) => Msg::StatusChanged(status.map_items(map_code)),
        EngineEvent::FetchFailed { error, attempts } => {
            admin_warn!("Giving up on QR codes after {} attempts: {}", attempts, error);
            Msg::FetchFailed {
                message: error.to_string(),
            }
        }
    }
}

fn map_code(record: QrCodeRecord) -> QrCode {
    let product_title = record.resolved_product_title().map(str::to_owned);
    let discount_code = record.resolved_discount_code().map(str::to_owned);
    let destination = map_destination(record.destination.as_deref());
    QrCode {
        id: record.id,
        title: record.title,
        product_title,
        destination,
        discount_code,
        scans: record.scans,
        created_at: record.created_at,
    }
}

fn map_destination(destination: Option<&str>) -> Destination {
    match destination {
        Some(value) if value.eq_ignore_ascii_case("checkout") => Destination::Checkout,
        _ => Destination::Product,
    }
}
