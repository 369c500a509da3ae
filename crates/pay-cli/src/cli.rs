use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "xjtupay", about = "Pay a campus card order through the gateway", version)]
pub struct Cli {
    /// TOML file with the order fields (tranamt, account, sno, ...)
    #[arg(short, long)]
    pub order: PathBuf,

    /// Identify as a desktop browser instead of the in-app browser
    #[arg(long)]
    pub desktop: bool,

    /// Payment password, when the gateway asks for one
    #[arg(short, long)]
    pub passcode: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_mobile() {
        let cli = Cli::try_parse_from(["xjtupay", "--order", "order.toml"]).unwrap();
        assert_eq!(cli.order, PathBuf::from("order.toml"));
        assert!(!cli.desktop);
        assert!(cli.passcode.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "xjtupay", "-o", "order.toml", "--desktop", "-p", "888888",
        ])
        .unwrap();
        assert!(cli.desktop);
        assert_eq!(cli.passcode.as_deref(), Some("888888"));
    }

    #[test]
    fn test_order_is_required() {
        assert!(Cli::try_parse_from(["xjtupay"]).is_err());
    }
}
