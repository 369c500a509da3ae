//! # Payment Method Trait
//!
//! Capability trait for the confirmation step of a payment attempt.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  PaymentMethod (trait)                      │
//! │  ├── context()                                              │
//! │  ├── requires_passcode()                                    │
//! │  └── pay(passcode)                                          │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!          ┌─────────────────┼─────────────────┐
//!          │                 │                 │
//!  ┌───────┴───────┐ ┌───────┴───────┐ ┌───────┴───────┐
//!  │ PayWithPasswd │ │PayWithoutPass.│ │   PayMethod   │
//!  │               │ │               │ │    (enum)     │
//!  └───────────────┘ └───────────────┘ └───────────────┘
//! ```
//!
//! Which variant applies is decided once, when the order is created.
//! `pay` consumes the method, so an attempt can be confirmed only once.

use crate::context::{OrderContext, Passcode};
use crate::error::PaymentResult;
use async_trait::async_trait;

/// Confirmation step of one payment attempt.
#[async_trait]
pub trait PaymentMethod: Send {
    /// What a successful confirmation hands back to the caller
    type Handle: Send;

    /// Identifiers scraped at initiation
    fn context(&self) -> &OrderContext;

    /// Whether the gateway asked for a payment password
    fn requires_passcode(&self) -> bool;

    /// Confirm the payment.
    ///
    /// Password-free methods ignore `passcode`.
    async fn pay(self, passcode: Passcode) -> PaymentResult<Self::Handle>;
}

/// Client platform, which selects the fixed header set of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// The vendor's in-app browser
    Mobile,
    /// A generic desktop browser
    Desktop,
}

impl Platform {
    pub fn from_mobile(mobile: bool) -> Self {
        if mobile {
            Platform::Mobile
        } else {
            Platform::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Platform::Mobile)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Mobile => "mobile",
            Platform::Desktop => "desktop",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_mobile() {
        assert_eq!(Platform::from_mobile(true), Platform::Mobile);
        assert_eq!(Platform::from_mobile(false), Platform::Desktop);
        assert!(Platform::Mobile.is_mobile());
        assert_eq!(Platform::Desktop.to_string(), "desktop");
    }
}
