//! # pay-core
//!
//! Core types and traits for the xjtupay payment client.
//!
//! This crate provides:
//! - `PaymentInfo` for describing an order
//! - `OrderContext` and `Passcode` for the confirmation step
//! - `FormBody` for url-encoded request bodies
//! - `extract` helpers for reading fields out of gateway pages
//! - `PaymentMethod` trait and `Platform`
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{PaymentInfo, Passcode, PaymentMethod};
//!
//! let info = PaymentInfo::new("100.00")
//!     .with_account("A1", "2201234567")
//!     .with_signature(sign);
//!
//! // Provider crates turn the order into a payment method
//! let method = pay_xjtu::initiate(true, &info).await?;
//!
//! let handle = method.pay(Passcode::new("888888")).await?;
//! ```

pub mod context;
pub mod error;
pub mod extract;
pub mod form;
pub mod order;
pub mod strategy;

// Re-exports for convenience
pub use context::{OrderContext, Passcode};
pub use error::{PaymentError, PaymentResult};
pub use extract::{
    attribute, child_elements, extract, password_hidden, FieldSelector, NotFound,
};
pub use form::{FormBody, FORM_CONTENT_TYPE};
pub use order::{MoneyAmount, PaymentInfo};
pub use strategy::{PaymentMethod, Platform};
