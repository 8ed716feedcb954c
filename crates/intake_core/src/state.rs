use crate::view_model::{AdditionalInfoView, AppViewModel, LookupStatus, ProductFormView};
use crate::{Condition, Effect, LookupError, ProductRecord};

pub type RequestId = u64;

/// Barcode field plus lookup progress, as shown in the status panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanState {
    pub code: String,
    /// True only between `start_lookup` and the matching settlement.
    pub in_progress: bool,
    /// Diagnostic text for the status panel; never used for control flow.
    pub last_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingLookup {
    request_id: RequestId,
    upc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    scan: ScanState,
    product: ProductRecord,
    pending: Option<PendingLookup>,
    last_request_id: RequestId,
    alert: Option<LookupError>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scan(&self) -> &ScanState {
        &self.scan
    }

    pub fn product(&self) -> &ProductRecord {
        &self.product
    }

    pub fn alert(&self) -> Option<&LookupError> {
        self.alert.as_ref()
    }

    pub fn in_progress(&self) -> bool {
        self.scan.in_progress
    }

    /// Whether the Lookup action is currently enabled.
    pub fn can_lookup(&self) -> bool {
        !self.scan.code.is_empty() && !self.scan.in_progress
    }

    pub fn is_pending(&self, request_id: RequestId) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| pending.request_id == request_id)
    }

    pub fn view(&self) -> AppViewModel {
        let status = if self.scan.in_progress {
            LookupStatus::Loading
        } else {
            LookupStatus::Ready
        };
        let form = (!self.scan.in_progress).then(|| ProductFormView {
            title: self.product.title.clone(),
            description: self.product.description.clone(),
            price: self.product.price.clone(),
            condition: self.product.condition,
            additional: (!self.product.brand.is_empty()).then(|| AdditionalInfoView {
                brand: self.product.brand.clone(),
                category: self.product.category.clone(),
                upc: self.product.upc.clone(),
            }),
        });

        AppViewModel {
            status,
            code: self.scan.code.clone(),
            last_message: self.scan.last_message.clone(),
            product_found: !self.product.title.is_empty(),
            lookup_enabled: self.can_lookup(),
            form,
            alert: self.alert.as_ref().map(LookupError::alert_text),
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Begins a lookup for the current code.
    ///
    /// Returns `None` and leaves the state untouched when the code is empty
    /// or another lookup is still outstanding.
    pub fn start_lookup(&mut self) -> Option<Effect> {
        if !self.can_lookup() {
            return None;
        }

        self.last_request_id += 1;
        let request_id = self.last_request_id;
        let upc = self.scan.code.clone();

        self.scan.in_progress = true;
        self.scan.last_message = format!("Looking up UPC: {upc}");
        self.alert = None;
        self.pending = Some(PendingLookup {
            request_id,
            upc: upc.clone(),
        });
        self.dirty = true;

        Some(Effect::Lookup { request_id, upc })
    }

    /// Replaces the whole product with a looked-up one and clears the
    /// barcode field for the next scan.
    pub fn apply_success(&mut self, product: ProductRecord) {
        let upc = match self.pending.as_ref() {
            Some(pending) => pending.upc.clone(),
            None => product.upc.clone(),
        };
        self.scan.last_message = format!("Found product: {}", product.title);
        self.product = ProductRecord {
            upc,
            condition: Condition::New,
            ..product
        };
        self.scan.code.clear();
        self.finish_lookup();
    }

    /// Keeps the product as is and raises a not-found notification.
    pub fn apply_not_found(&mut self) -> Effect {
        self.scan.last_message = "No product found for this UPC".to_string();
        self.finish_lookup();
        self.raise_alert(LookupError::NotFound)
    }

    /// Keeps the product as is and raises a failure notification.
    pub fn apply_failure(&mut self, message: &str) -> Effect {
        self.scan.last_message = format!("Error: {message}");
        self.finish_lookup();
        self.raise_alert(LookupError::failed(message))
    }

    pub(crate) fn set_code(&mut self, code: String) {
        if self.scan.code != code {
            self.scan.code = code;
            self.dirty = true;
        }
    }

    pub(crate) fn set_last_message(&mut self, message: impl Into<String>) {
        self.scan.last_message = message.into();
        self.dirty = true;
    }

    pub(crate) fn product_mut(&mut self) -> &mut ProductRecord {
        self.dirty = true;
        &mut self.product
    }

    pub(crate) fn dismiss_alert(&mut self) {
        if self.alert.take().is_some() {
            self.dirty = true;
        }
    }

    fn raise_alert(&mut self, error: LookupError) -> Effect {
        self.alert = Some(error.clone());
        Effect::Alert(error)
    }

    fn finish_lookup(&mut self) {
        self.scan.in_progress = false;
        self.pending = None;
        self.dirty = true;
    }
}
