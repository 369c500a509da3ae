//! # pay-cli
//!
//! Command-line driver for one payment attempt.
//!
//! ## Usage
//!
//! ```bash
//! # Optional overrides
//! export XJTUPAY_BASE_URL=http://202.117.1.244:9001
//! export XJTUPAY_PASSCODE=888888
//!
//! xjtupay --order order.toml
//! ```

pub mod cli;
pub mod order;

use anyhow::Context;
use pay_core::{Passcode, PaymentError, Platform};
use pay_xjtu::{initiate_with, FinalSubmission, GatewayConfig, PayMethod};
use tracing::{info, warn};

pub use cli::Cli;

/// Env var consulted when `--passcode` is not given
pub const PASSCODE_ENV: &str = "XJTUPAY_PASSCODE";

/// Run one full attempt: create the order, confirm it, report the outcome
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = GatewayConfig::from_env()?;
    let info = order::load_order(&cli.order)?;
    let platform = Platform::from_mobile(!cli.desktop);

    info!("Gateway: {}", config.base_url);
    info!("Order: {} {} ({})", info.third_order_id, info.transaction_amount, platform);

    let method = initiate_with(&config, platform, &info)
        .await
        .map_err(with_retry_hint)?;

    let handle = match method {
        PayMethod::PasswordRequired(method) => {
            let passcode = cli
                .passcode
                .or_else(|| std::env::var(PASSCODE_ENV).ok())
                .map(Passcode::from)
                .filter(|p| !p.is_empty())
                .with_context(|| {
                    format!("gateway requires a passcode: pass --passcode or set {}", PASSCODE_ENV)
                })?;
            method.pay(passcode).await.map_err(with_retry_hint)?
        }
        PayMethod::PasswordFree(method) => method.pay().await.map_err(with_retry_hint)?,
    };

    match handle.submission() {
        FinalSubmission::Delivered { status, url } => {
            info!("Final submission delivered: status={}, url={}", status, url);
        }
        FinalSubmission::Failed { reason } => {
            warn!("Final submission failed: {}", reason);
        }
    }

    let gateway = config.url_for("/")?;
    match handle.cookie_header(&gateway) {
        Some(cookies) => info!("Redirect session cookies: {}", cookies),
        None => info!("Redirect session holds no gateway cookies"),
    }

    Ok(())
}

/// Tell the user when a failed attempt is worth starting over
fn with_retry_hint(err: PaymentError) -> anyhow::Error {
    if err.is_retryable() {
        anyhow::Error::new(err).context("gateway unavailable; starting a new attempt may succeed")
    } else {
        err.into()
    }
}
