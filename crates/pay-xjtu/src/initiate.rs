//! # Order Initiation
//!
//! Submits a [`PaymentInfo`] to `/Order/CreateOrder`, scrapes the
//! [`OrderContext`] out of the returned page and picks the payment variant.

use crate::config::{gateway_config, GatewayConfig};
use crate::method::PayMethod;
use crate::selectors::{IS_NOTICE, ORDER_ID, PASSWORD_INPUT, PAY_ITEM};
use crate::session::Session;
use pay_core::{
    attribute, extract, password_hidden, NotFound, OrderContext, PaymentError, PaymentInfo,
    PaymentResult, Platform,
};
use scraper::Html;
use tracing::{debug, info, instrument};

/// What the order-creation page tells us
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OrderPage {
    pub context: OrderContext,
    pub requires_passcode: bool,
}

/// Start a payment with the process-wide gateway configuration.
///
/// `mobile` selects the in-app browser identity instead of a desktop one.
/// Fails with [`PaymentError::Configuration`] when the environment holds a
/// bad override.
pub async fn initiate(mobile: bool, info: &PaymentInfo) -> PaymentResult<PayMethod> {
    let config = gateway_config()?;
    initiate_with(config, Platform::from_mobile(mobile), info).await
}

/// Start a payment against an explicit gateway configuration.
#[instrument(skip(config, info), fields(third_order_id = %info.third_order_id))]
pub async fn initiate_with(
    config: &GatewayConfig,
    platform: Platform,
    info: &PaymentInfo,
) -> PaymentResult<PayMethod> {
    let session = Session::new(config, platform)?;

    let page = {
        let document = session.post(&config.create_order_path, &info.to_form()).await?;
        parse_order_page(&document)?
    };

    info!(
        "Created gateway order: order_id={}, pay_type={}, password_required={}",
        page.context.order_id, page.context.pay_type, page.requires_passcode
    );

    Ok(PayMethod::from_parts(
        session,
        page.context,
        config.clone(),
        page.requires_passcode,
    ))
}

/// Pull the order context out of the order-creation page.
///
/// All four elements must be present; any missing one fails the whole page.
pub(crate) fn parse_order_page(document: &Html) -> PaymentResult<OrderPage> {
    let missing = |e: NotFound| PaymentError::InitFailed {
        missing: e.selector,
    };

    let pay_item = extract(document, &PAY_ITEM).map_err(missing)?;
    let order_id = extract(document, &ORDER_ID).map_err(missing)?;
    let password_input = extract(document, &PASSWORD_INPUT).map_err(missing)?;
    let is_notice = extract(document, &IS_NOTICE).map_err(missing)?;

    let context = OrderContext {
        order_id: attribute(order_id, "value"),
        pay_id: attribute(pay_item, "payid"),
        param1: attribute(pay_item, "tag"),
        pay_type: attribute(pay_item, "intername"),
        is_notice: attribute(is_notice, "value"),
    };
    debug!(?context, "Scraped order context");

    let requires_passcode = !password_hidden(&attribute(password_input, "style"));

    Ok(OrderPage {
        context,
        requires_passcode,
    })
}
