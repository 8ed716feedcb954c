use std::sync::{mpsc, Arc};

use intake_core::{Condition, Effect, LookupError, Msg, ProductRecord};
use intake_engine::{
    EngineError, EngineEvent, EngineHandle, EventSink, LookupSettings, ProductItem, ProductLookup,
    ReqwestLookup,
};
use intake_logging::{intake_info, intake_warn};

use super::app::UiEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: LookupSettings, ui_tx: mpsc::Sender<UiEvent>) -> Result<Self, EngineError> {
        let lookup = ReqwestLookup::new(settings)?;
        Self::with_lookup(Arc::new(lookup), ui_tx)
    }

    pub fn with_lookup(
        lookup: Arc<dyn ProductLookup>,
        ui_tx: mpsc::Sender<UiEvent>,
    ) -> Result<Self, EngineError> {
        let engine = EngineHandle::with_lookup(lookup, Arc::new(UiEventSink { ui_tx }))?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Lookup { request_id, upc } => {
                    intake_info!("Lookup request_id={} upc_len={} upc={}", request_id, upc.len(), upc);
                    self.engine.lookup(request_id, upc);
                }
                Effect::Alert(error) => {
                    intake_warn!("Alert shown: {}", error.alert_text());
                }
            }
        }
    }
}

struct UiEventSink {
    ui_tx: mpsc::Sender<UiEvent>,
}

impl EventSink for UiEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.ui_tx.send(UiEvent::Engine(map_event(event)));
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::LookupCompleted {
            request_id,
            upc,
            result,
        } => Msg::LookupCompleted {
            request_id,
            result: map_result(upc, result),
        },
    }
}

fn map_result(
    upc: String,
    result: Result<ProductItem, intake_engine::LookupError>,
) -> Result<ProductRecord, LookupError> {
    match result {
        Ok(item) => Ok(ProductRecord {
            price: item.price_text(),
            title: item.title,
            description: item.description,
            brand: item.brand,
            category: item.category,
            upc,
            condition: Condition::New,
        }),
        Err(err) if err.is_not_found() => Err(LookupError::NotFound),
        Err(err) => Err(LookupError::failed(err.message)),
    }
}
