use std::fmt;
use std::str::FromStr;

/// Physical condition of the item being entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Condition {
    #[default]
    New,
    OpenBox,
    Used,
    Parts,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::New,
        Condition::OpenBox,
        Condition::Used,
        Condition::Parts,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::OpenBox => "Open Box",
            Condition::Used => "Used",
            Condition::Parts => "Parts",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCondition(pub String);

impl fmt::Display for UnknownCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown condition {:?} (expected new, open-box, used or parts)",
            self.0
        )
    }
}

impl std::error::Error for UnknownCondition {}

impl FromStr for Condition {
    type Err = UnknownCondition;

    /// Accepts the display labels and their kebab/compact spellings,
    /// case-insensitively.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "new" => Ok(Condition::New),
            "openbox" => Ok(Condition::OpenBox),
            "used" => Ok(Condition::Used),
            "parts" => Ok(Condition::Parts),
            _ => Err(UnknownCondition(raw.to_string())),
        }
    }
}

/// Editable product being entered. Every text field defaults to empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductRecord {
    pub title: String,
    pub description: String,
    pub brand: String,
    pub category: String,
    /// Barcode the record was looked up with.
    pub upc: String,
    /// Free-text price as shown in the form.
    pub price: String,
    pub condition: Condition,
}

/// Why a lookup did not produce a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The service answered successfully with zero matching items.
    NotFound,
    /// Transport failure, non-success status or unreadable response.
    Failed { message: String },
}

impl LookupError {
    pub fn failed(message: impl Into<String>) -> Self {
        LookupError::Failed {
            message: message.into(),
        }
    }

    /// Text shown to the operator in the notification.
    pub fn alert_text(&self) -> String {
        match self {
            LookupError::NotFound => {
                "Product not found in database. Please enter details manually.".to_string()
            }
            LookupError::Failed { message } => format!("Error looking up product: {message}"),
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::NotFound => write!(f, "no product found"),
            LookupError::Failed { message } => write!(f, "lookup failed: {message}"),
        }
    }
}

impl std::error::Error for LookupError {}
