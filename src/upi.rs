//! UPI payment deep links (`upi://pay?...`).

use url::form_urlencoded;

use crate::error::UpiError;

/// Transaction note used when none is given
pub const DEFAULT_NOTE: &str = "Expense Settlement";
/// Currency code carried in every link
pub const CURRENCY: &str = "INR";

/// True when `id` looks like a UPI virtual payment address
pub fn is_valid_upi_id(id: &str) -> bool {
    let id = id.trim();
    !id.is_empty() && id.contains('@')
}

/// A payment request to one payee
#[derive(Debug, Clone, PartialEq)]
pub struct UpiPayment {
    /// Payee virtual payment address (`name@bank`)
    pub payee_address: String,
    /// Payee display name
    pub payee_name: String,
    /// Amount in rupees
    pub amount: f64,
    /// Transaction note
    pub note: String,
}

impl UpiPayment {
    /// Payment with the default note
    pub fn new(payee_address: impl Into<String>, payee_name: impl Into<String>, amount: f64) -> Self {
        Self {
            payee_address: payee_address.into(),
            payee_name: payee_name.into(),
            amount,
            note: DEFAULT_NOTE.to_string(),
        }
    }

    /// Same payment with a different note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Check the fields without building the link
    pub fn validate(&self) -> Result<(), UpiError> {
        if !is_valid_upi_id(&self.payee_address) {
            return Err(UpiError::InvalidPayeeAddress(self.payee_address.clone()));
        }
        if self.payee_name.trim().is_empty() {
            return Err(UpiError::EmptyPayeeName);
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(UpiError::InvalidAmount(self.amount));
        }
        Ok(())
    }

    /// The `upi://pay` link with form-encoded query parameters
    pub fn to_uri(&self) -> Result<String, UpiError> {
        self.validate()?;
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("pa", self.payee_address.trim())
            .append_pair("pn", self.payee_name.trim())
            .append_pair("am", &format!("{:.2}", self.amount))
            .append_pair("cu", CURRENCY)
            .append_pair("tn", &self.note)
            .finish();
        Ok(format!("upi://pay?{query}"))
    }
}
