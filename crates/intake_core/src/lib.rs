//! Intake core: pure state machine and view-model helpers for the product
//! entry form.
mod effect;
mod msg;
mod product;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use product::{Condition, LookupError, ProductRecord, UnknownCondition};
pub use state::{AppState, RequestId, ScanState};
pub use update::update;
pub use view_model::{AdditionalInfoView, AppViewModel, LookupStatus, ProductFormView};
