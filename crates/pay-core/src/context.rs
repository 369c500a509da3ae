//! # Order Context
//!
//! Identifiers the gateway assigns when an order is created. They are only
//! ever scraped from the order-creation page and sent back on confirmation.

use crate::form::FormBody;

/// Fields recovered from the `/Order/CreateOrder` response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderContext {
    /// Gateway order id (`#txtorderid` value)
    pub order_id: String,
    /// Payment item id (`payid`)
    pub pay_id: String,
    /// Auxiliary parameter (payment item `tag`)
    pub param1: String,
    /// Interchange/payment-type name (payment item `intername`)
    pub pay_type: String,
    /// Notice flag (`isnotice` input value)
    pub is_notice: String,
}

impl OrderContext {
    /// Form body for `/Pay/CommonMobilePay`.
    ///
    /// The passcode is the only field that differs between the two payment
    /// variants; the password-free variant sends it empty.
    pub fn confirmation_form(&self, passcode: &Passcode) -> FormBody {
        FormBody::new()
            .with("orderid", self.order_id.as_str())
            .with("payid", self.pay_id.as_str())
            .with("param1", self.param1.as_str())
            .with("passwd", passcode.expose())
            .with("paytype", self.pay_type.as_str())
            .with("isnotice", self.is_notice.as_str())
    }
}

/// Payment password. Redacted in `Debug` output.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Passcode(String);

impl Passcode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The empty passcode sent by password-free payments
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw value, for building the confirmation body only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Passcode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Passcode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl std::fmt::Debug for Passcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            f.write_str("Passcode(<empty>)")
        } else {
            f.write_str("Passcode(<redacted>)")
        }
    }
}
