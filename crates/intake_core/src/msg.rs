use crate::{Condition, LookupError, ProductRecord, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Operator edited the barcode field.
    CodeChanged(String),
    /// Operator activated the Lookup action.
    LookupClicked,
    /// Enter was pressed in the barcode field (scanner terminator).
    EnterPressed,
    /// Engine settled a lookup.
    LookupCompleted {
        request_id: RequestId,
        result: Result<ProductRecord, LookupError>,
    },
    TitleEdited(String),
    DescriptionEdited(String),
    PriceEdited(String),
    ConditionSelected(Condition),
    /// Operator acknowledged the current notification.
    AlertDismissed,
    /// Placeholder action; no backend is wired.
    SaveDraftClicked,
    /// Placeholder action; no backend is wired.
    ProceedClicked,
}
