use std::sync::{mpsc, Arc};
use std::thread;

use intake_logging::{intake_debug, intake_warn};

use crate::lookup::{LookupSettings, ProductLookup, ReqwestLookup};
use crate::{EngineError, EngineEvent, RequestId};

/// Receives engine events on the runtime's worker threads.
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
    Lookup { request_id: RequestId, upc: String },
}

/// Runs lookups on a background tokio runtime. Dropping the handle shuts the
/// runtime down and cancels lookups still in flight.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: LookupSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let lookup = ReqwestLookup::new(settings)?;
        Self::with_lookup(Arc::new(lookup), sink)
    }

    pub fn with_lookup(
        lookup: Arc<dyn ProductLookup>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let lookup = lookup.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    handle_command(lookup.as_ref(), command, sink.as_ref()).await;
                });
            }
        });

        Ok(Self { cmd_tx })
    }

    pub fn lookup(&self, request_id: RequestId, upc: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Lookup {
            request_id,
            upc: upc.into(),
        });
    }
}

async fn handle_command(lookup: &dyn ProductLookup, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::Lookup { request_id, upc } => {
            let result = lookup.lookup(&upc).await;
            match &result {
                Ok(item) => intake_debug!("Lookup {} found {:?}", request_id, item.title),
                Err(err) => intake_warn!("Lookup {} for {} failed ({}): {}", request_id, upc, err.kind, err),
            }
            sink.emit(EngineEvent::LookupCompleted {
                request_id,
                upc,
                result,
            });
        }
    }
}
