//! Order files: a `PaymentInfo` in TOML, keyed by the gateway's field names.

use anyhow::Context;
use pay_core::PaymentInfo;
use std::path::Path;

/// Load an order from a TOML file
pub fn load_order(path: &Path) -> anyhow::Result<PaymentInfo> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read order file {}", path.display()))?;
    let info = parse_order(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded order {} from {}", info.third_order_id, path.display());
    Ok(info)
}

pub fn parse_order(content: &str) -> anyhow::Result<PaymentInfo> {
    let info: PaymentInfo = toml::from_str(content)?;
    if info.transaction_amount.as_str().is_empty() {
        anyhow::bail!("order has no tranamt");
    }
    Ok(info)
}
