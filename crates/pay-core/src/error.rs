//! # Payment Error Types
//!
//! Typed error handling for the xjtupay client.
//! All payment operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Clone, Error)]
pub enum PaymentError {
    /// Reserved for callers taking the password-free path on a method that
    /// needs a passcode. Not raised by the client itself.
    #[error("Payment Error: Require Password")]
    RequirePassword,

    /// The gateway answered with a status other than 200
    #[error("Payment Error: Request Status Error ({status} from {url})")]
    RequestError { status: u16, url: String },

    /// A required element was missing from the order-creation page
    #[error("Payment Error: Initialization Failed (missing {missing})")]
    InitFailed { missing: &'static str },

    /// The confirmation page carried no auto-submit form
    #[error("Payment Error: Payment Failed")]
    PaymentFailed,

    /// Reserved for unhandled payment variants. Not raised by the client itself.
    #[error("Payment Error: Unimplemented")]
    Unimplemented,

    /// Network/HTTP error communicating with the gateway
    #[error("Network error: {0}")]
    Network(String),

    /// Configuration errors (bad env values, bad base URL)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A URL could not be built or parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl PaymentError {
    /// Returns true if a caller may reasonably retry the whole attempt.
    ///
    /// Nothing in this workspace retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            PaymentError::Network(_) => true,
            PaymentError::RequestError { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(PaymentError::Network("timeout".into()).is_retryable());
        assert!(PaymentError::RequestError {
            status: 502,
            url: "http://gateway/Order/CreateOrder".into()
        }
        .is_retryable());
        assert!(!PaymentError::RequestError {
            status: 404,
            url: "http://gateway/Order/CreateOrder".into()
        }
        .is_retryable());
        assert!(!PaymentError::PaymentFailed.is_retryable());
        assert!(!PaymentError::InitFailed { missing: "#txtorderid" }.is_retryable());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            PaymentError::PaymentFailed.to_string(),
            "Payment Error: Payment Failed"
        );
        assert_eq!(
            PaymentError::InitFailed { missing: "#password" }.to_string(),
            "Payment Error: Initialization Failed (missing #password)"
        );
        assert_eq!(
            PaymentError::RequirePassword.to_string(),
            "Payment Error: Require Password"
        );
    }
}
