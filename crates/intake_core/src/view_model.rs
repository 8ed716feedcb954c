use crate::Condition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupStatus {
    #[default]
    Ready,
    Loading,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub status: LookupStatus,
    pub code: String,
    pub last_message: String,
    pub product_found: bool,
    pub lookup_enabled: bool,
    /// Editable fields; `None` while a lookup is in progress.
    pub form: Option<ProductFormView>,
    /// Pending notification text, if any.
    pub alert: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFormView {
    pub title: String,
    pub description: String,
    pub price: String,
    pub condition: Condition,
    /// Read-only details, present only when a brand is known.
    pub additional: Option<AdditionalInfoView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdditionalInfoView {
    pub brand: String,
    pub category: String,
    pub upc: String,
}
