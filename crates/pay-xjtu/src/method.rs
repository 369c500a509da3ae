//! # Payment Methods
//!
//! The confirmation step of an attempt. Initiation decides once whether the
//! gateway wants a password; the two variants differ only in the `passwd`
//! field they send to `/Pay/CommonMobilePay`.
//!
//! ```rust,ignore
//! match pay_xjtu::initiate(true, &info).await? {
//!     PayMethod::PasswordRequired(method) => method.pay("888888").await?,
//!     PayMethod::PasswordFree(method) => method.pay().await?,
//! };
//! ```

use crate::config::GatewayConfig;
use crate::handle::{AutoSubmitForm, SessionHandle};
use crate::selectors::POST_FORM;
use crate::session::Session;
use async_trait::async_trait;
use pay_core::{
    attribute, child_elements, extract, FormBody, OrderContext, Passcode, PaymentError,
    PaymentMethod, PaymentResult,
};
use reqwest::Url;
use scraper::Html;
use tracing::{debug, instrument};

/// Session and context shared by both variants
#[derive(Debug)]
struct GeneralPayment {
    session: Session,
    context: OrderContext,
    config: GatewayConfig,
}

impl GeneralPayment {
    #[instrument(skip_all, fields(order_id = %self.context.order_id, with_passcode = !passcode.is_empty()))]
    async fn submit(self, passcode: Passcode) -> PaymentResult<SessionHandle> {
        let confirm_url = self.session.url_for(&self.config.confirm_path)?;
        let confirmation = self.context.confirmation_form(&passcode);
        drop(passcode);

        let form = {
            let document = self
                .session
                .post(&self.config.confirm_path, &confirmation)
                .await?;
            parse_auto_submit(&document, &confirm_url)?
        };

        SessionHandle::submit(&self.config, self.session.headers().clone(), form).await
    }
}

/// Read the auto-submit form from the confirmation page.
///
/// The action is resolved against the confirmation URL; child elements
/// without a `name` are not submitted.
pub(crate) fn parse_auto_submit(document: &Html, confirm_url: &Url) -> PaymentResult<AutoSubmitForm> {
    let form = extract(document, &POST_FORM).map_err(|_| PaymentError::PaymentFailed)?;

    let action = attribute(form, "action");
    let action = confirm_url
        .join(&action)
        .map_err(|e| PaymentError::InvalidUrl(format!("{}: {}", action, e)))?;

    let fields: FormBody = child_elements(form)
        .map(|child| (attribute(child, "name"), attribute(child, "value")))
        .filter(|(name, _)| !name.is_empty())
        .collect();

    debug!("Auto-submit form: action={}, {} fields", action, fields.len());

    Ok(AutoSubmitForm { action, fields })
}

/// Payment that must be confirmed with the account's payment password
#[derive(Debug)]
pub struct PayWithPasswd(GeneralPayment);

impl PayWithPasswd {
    pub fn context(&self) -> &OrderContext {
        &self.0.context
    }

    /// Confirm with a passcode. An empty one is only rejected by the gateway.
    pub async fn pay(self, passcode: impl Into<Passcode>) -> PaymentResult<SessionHandle> {
        self.0.submit(passcode.into()).await
    }
}

/// Payment the gateway confirms without a password
#[derive(Debug)]
pub struct PayWithoutPasswd(GeneralPayment);

impl PayWithoutPasswd {
    pub fn context(&self) -> &OrderContext {
        &self.0.context
    }

    pub async fn pay(self) -> PaymentResult<SessionHandle> {
        self.0.submit(Passcode::empty()).await
    }
}

/// Payment variant chosen at initiation
#[derive(Debug)]
pub enum PayMethod {
    PasswordRequired(PayWithPasswd),
    PasswordFree(PayWithoutPasswd),
}

impl PayMethod {
    pub(crate) fn from_parts(
        session: Session,
        context: OrderContext,
        config: GatewayConfig,
        requires_passcode: bool,
    ) -> Self {
        let general = GeneralPayment {
            session,
            context,
            config,
        };
        if requires_passcode {
            PayMethod::PasswordRequired(PayWithPasswd(general))
        } else {
            PayMethod::PasswordFree(PayWithoutPasswd(general))
        }
    }

    pub fn requires_passcode(&self) -> bool {
        matches!(self, PayMethod::PasswordRequired(_))
    }

    pub fn context(&self) -> &OrderContext {
        match self {
            PayMethod::PasswordRequired(method) => method.context(),
            PayMethod::PasswordFree(method) => method.context(),
        }
    }

    /// Confirm the payment; the passcode is ignored when none is required
    pub async fn pay(self, passcode: impl Into<Passcode>) -> PaymentResult<SessionHandle> {
        match self {
            PayMethod::PasswordRequired(method) => method.pay(passcode).await,
            PayMethod::PasswordFree(method) => method.pay().await,
        }
    }
}

#[async_trait]
impl PaymentMethod for PayWithPasswd {
    type Handle = SessionHandle;

    fn context(&self) -> &OrderContext {
        PayWithPasswd::context(self)
    }

    fn requires_passcode(&self) -> bool {
        true
    }

    async fn pay(self, passcode: Passcode) -> PaymentResult<SessionHandle> {
        PayWithPasswd::pay(self, passcode).await
    }
}

#[async_trait]
impl PaymentMethod for PayWithoutPasswd {
    type Handle = SessionHandle;

    fn context(&self) -> &OrderContext {
        PayWithoutPasswd::context(self)
    }

    fn requires_passcode(&self) -> bool {
        false
    }

    async fn pay(self, _passcode: Passcode) -> PaymentResult<SessionHandle> {
        PayWithoutPasswd::pay(self).await
    }
}

#[async_trait]
impl PaymentMethod for PayMethod {
    type Handle = SessionHandle;

    fn context(&self) -> &OrderContext {
        PayMethod::context(self)
    }

    fn requires_passcode(&self) -> bool {
        PayMethod::requires_passcode(self)
    }

    async fn pay(self, passcode: Passcode) -> PaymentResult<SessionHandle> {
        PayMethod::pay(self, passcode).await
    }
}
