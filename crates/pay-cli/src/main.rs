//! # xjtupay
//!
//! Pays one order through the campus card gateway.
//!
//! ```bash
//! export XJTUPAY_PASSCODE=888888
//! RUST_LOG=debug xjtupay --order order.toml
//! ```

use clap::Parser;
use pay_cli::Cli;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    pay_cli::run(cli).await
}
