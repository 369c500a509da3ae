//! # pay-xjtu
//!
//! Client for the campus card payment gateway.
//!
//! The gateway has no API: every step is a form POST answered with HTML.
//! A payment attempt runs in two phases:
//!
//! 1. **Initiation** - `PaymentInfo` is posted to `/Order/CreateOrder`; the
//!    returned page yields the order id, pay id and whether a payment
//!    password is needed ([`initiate`]).
//! 2. **Confirmation** - the chosen [`PayMethod`] posts to
//!    `/Pay/CommonMobilePay` through the same cookie jar, then replays the
//!    gateway's auto-submit form through a fresh one and hands that client
//!    back as a [`SessionHandle`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_core::PaymentInfo;
//! use pay_xjtu::{initiate, PayMethod};
//!
//! let info = PaymentInfo::new("100.00").with_account("A1", "2201234567");
//!
//! let handle = match initiate(true, &info).await? {
//!     PayMethod::PasswordRequired(method) => method.pay("888888").await?,
//!     PayMethod::PasswordFree(method) => method.pay().await?,
//! };
//!
//! if !handle.submission().is_success() {
//!     // the final redirect did not go through; the handle is still usable
//! }
//! ```

pub mod config;
pub mod handle;
pub mod initiate;
pub mod method;
pub mod selectors;
pub mod session;

// Re-exports
pub use config::{gateway_config, GatewayConfig, GATEWAY_CONFIG};
pub use handle::{AutoSubmitForm, FinalSubmission, SessionHandle};
pub use initiate::{initiate, initiate_with};
pub use method::{PayMethod, PayWithPasswd, PayWithoutPasswd};
pub use session::Session;
