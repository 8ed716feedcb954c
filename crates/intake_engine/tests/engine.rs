use std::sync::{mpsc, Arc};
use std::time::Duration;

use intake_engine::{
    ChannelEventSink, EngineEvent, EngineHandle, FailureKind, LookupError, ProductItem,
    ProductLookup,
};

struct StubLookup;

#[async_trait::async_trait]
impl ProductLookup for StubLookup {
    async fn lookup(&self, upc: &str) -> Result<ProductItem, LookupError> {
        match upc {
            "111" => Ok(ProductItem {
                title: "Stub".to_string(),
                ..ProductItem::default()
            }),
            _ => Err(LookupError {
                kind: FailureKind::NotFound,
                message: "No product found for this UPC".to_string(),
            }),
        }
    }
}

fn start() -> (EngineHandle, mpsc::Receiver<EngineEvent>) {
    let (tx, rx) = mpsc::channel();
    let handle = EngineHandle::with_lookup(Arc::new(StubLookup), Arc::new(ChannelEventSink::new(tx)))
        .expect("engine starts");
    (handle, rx)
}

fn next_event(rx: &mpsc::Receiver<EngineEvent>) -> EngineEvent {
    rx.recv_timeout(Duration::from_secs(5)).expect("engine event")
}

#[test]
fn lookup_reports_completion_with_request_id() {
    let (engine, rx) = start();
    engine.lookup(7, "111");

    let EngineEvent::LookupCompleted {
        request_id,
        upc,
        result,
    } = next_event(&rx);
    assert_eq!(request_id, 7);
    assert_eq!(upc, "111");
    assert_eq!(result.unwrap().title, "Stub");
}

#[test]
fn failures_are_reported_not_dropped() {
    let (engine, rx) = start();
    engine.lookup(1, "000");

    let EngineEvent::LookupCompleted { request_id, result, .. } = next_event(&rx);
    assert_eq!(request_id, 1);
    assert!(result.unwrap_err().is_not_found());
}

#[test]
fn every_command_gets_one_event() {
    let (engine, rx) = start();
    engine.lookup(1, "111");
    engine.lookup(2, "222");

    let mut ids = vec![
        match next_event(&rx) {
            EngineEvent::LookupCompleted { request_id, .. } => request_id,
        },
        match next_event(&rx) {
            EngineEvent::LookupCompleted { request_id, .. } => request_id,
        },
    ];
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2]);
    assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
}
