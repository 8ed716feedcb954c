//! Intake engine: product lookup over HTTP and effect execution.
mod engine;
mod lookup;
mod types;

pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use lookup::{parse_endpoint, LookupSettings, ProductLookup, ReqwestLookup, DEFAULT_ENDPOINT};
pub use types::{
    EngineError, EngineEvent, FailureKind, LookupError, LookupRequest, LookupResponse,
    ProductItem, RequestId,
};
