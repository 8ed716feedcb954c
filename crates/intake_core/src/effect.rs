use crate::{LookupError, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one product lookup for `upc`; the result must come back as
    /// `Msg::LookupCompleted` carrying the same `request_id`.
    Lookup { request_id: RequestId, upc: String },
    /// Show a blocking notification to the operator.
    Alert(LookupError),
}
