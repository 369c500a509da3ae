//! # Order Types
//!
//! The caller-supplied order description submitted to `/Order/CreateOrder`.
//! Orders can also be loaded from TOML using the gateway's field names.

use crate::form::FormBody;
use serde::{Deserialize, Serialize};

/// Transaction amount as the gateway expects it (e.g. `"100.00"`)
///
/// Kept as text: the gateway compares it against the signed value, so it
/// must go out exactly as the caller wrote it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoneyAmount(String);

impl MoneyAmount {
    pub fn new(amount: impl Into<String>) -> Self {
        Self(amount.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MoneyAmount {
    fn from(amount: &str) -> Self {
        Self::new(amount)
    }
}

impl std::fmt::Display for MoneyAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An order to be paid through the gateway
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInfo {
    /// Amount to transfer
    #[serde(rename = "tranamt", default)]
    pub transaction_amount: MoneyAmount,

    /// Paying account
    #[serde(default)]
    pub account: String,

    /// Student/staff serial number
    #[serde(default)]
    pub sno: String,

    /// Receiving account
    #[serde(rename = "toaccount", default)]
    pub to_account: String,

    /// Third-party system identifier
    #[serde(rename = "thirdsystem", default)]
    pub third_system: String,

    /// Order id in the third-party system
    #[serde(rename = "thirdorderid", default)]
    pub third_order_id: String,

    #[serde(rename = "ordertype", default)]
    pub order_type: String,

    /// Signature issued by the third-party system
    #[serde(rename = "sign", default)]
    pub signature: String,

    #[serde(rename = "orderdesc", default)]
    pub order_desc: String,

    /// Auxiliary parameter (the gateway spells the field `praram1`)
    #[serde(rename = "praram1", default)]
    pub param1: String,

    /// Callback URL of the third-party system
    #[serde(rename = "thirdurl", default)]
    pub third_url: String,
}

impl PaymentInfo {
    /// Create an order for an amount; every other field starts empty
    pub fn new(amount: impl Into<MoneyAmount>) -> Self {
        Self {
            transaction_amount: amount.into(),
            ..Self::default()
        }
    }

    /// Builder: set the paying account and serial number
    pub fn with_account(mut self, account: impl Into<String>, sno: impl Into<String>) -> Self {
        self.account = account.into();
        self.sno = sno.into();
        self
    }

    /// Builder: set the receiving account
    pub fn with_to_account(mut self, to_account: impl Into<String>) -> Self {
        self.to_account = to_account.into();
        self
    }

    /// Builder: set the third-party system, its order id and callback URL
    pub fn with_third_party(
        mut self,
        system: impl Into<String>,
        order_id: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        self.third_system = system.into();
        self.third_order_id = order_id.into();
        self.third_url = url.into();
        self
    }

    /// Builder: set order type and description
    pub fn with_order(mut self, order_type: impl Into<String>, desc: impl Into<String>) -> Self {
        self.order_type = order_type.into();
        self.order_desc = desc.into();
        self
    }

    /// Builder: set the signature
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = signature.into();
        self
    }

    /// Builder: set the auxiliary parameter
    pub fn with_param1(mut self, param1: impl Into<String>) -> Self {
        self.param1 = param1.into();
        self
    }

    /// Form body for `/Order/CreateOrder`, in the gateway's field order
    pub fn to_form(&self) -> FormBody {
        FormBody::new()
            .with("tranamt", self.transaction_amount.as_str())
            .with("account", self.account.as_str())
            .with("sno", self.sno.as_str())
            .with("toaccount", self.to_account.as_str())
            .with("thirdsystem", self.third_system.as_str())
            .with("thirdorderid", self.third_order_id.as_str())
            .with("ordertype", self.order_type.as_str())
            .with("sign", self.signature.as_str())
            .with("orderdesc", self.order_desc.as_str())
            .with("praram1", self.param1.as_str())
            .with("thirdurl", self.third_url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PaymentInfo {
        PaymentInfo::new("100.00")
            .with_account("A1", "2201234567")
            .with_to_account("1000001")
            .with_third_party("card", "T-42", "http://shop.example/notify?x=1&y=2")
            .with_order("1", "dorm power top-up")
            .with_signature("c0ffee")
    }

    #[test]
    fn test_form_field_order() {
        let form = sample().to_form();
        let names: Vec<&str> = form.fields().iter().map(|(k, _)| k.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "tranamt",
                "account",
                "sno",
                "toaccount",
                "thirdsystem",
                "thirdorderid",
                "ordertype",
                "sign",
                "orderdesc",
                "praram1",
                "thirdurl"
            ]
        );
    }

    #[test]
    fn test_form_round_trip_keeps_empty_fields() {
        let info = sample();
        let decoded = FormBody::decode(&info.to_form().encode());

        assert_eq!(decoded, info.to_form());
        assert_eq!(decoded.get("tranamt"), Some("100.00"));
        assert_eq!(decoded.get("account"), Some("A1"));
        assert_eq!(decoded.get("thirdurl"), Some("http://shop.example/notify?x=1&y=2"));
        assert_eq!(decoded.get("orderdesc"), Some("dorm power top-up"));
        // never set
        assert_eq!(decoded.get("praram1"), Some(""));
    }

    #[test]
    fn test_empty_info_encodes_every_field() {
        let encoded = PaymentInfo::default().to_form().encode();
        assert_eq!(
            encoded,
            "tranamt=&account=&sno=&toaccount=&thirdsystem=&thirdorderid=&ordertype=&sign=&orderdesc=&praram1=&thirdurl="
        );
    }

    #[test]
    fn test_load_from_toml_with_wire_names() {
        let toml_str = r#"
            tranamt = "12.50"
            account = "A9"
            praram1 = "extra"
            thirdurl = "http://shop.example/cb"
        "#;

        let info: PaymentInfo = toml::from_str(toml_str).unwrap();
        assert_eq!(info.transaction_amount, MoneyAmount::new("12.50"));
        assert_eq!(info.account, "A9");
        assert_eq!(info.param1, "extra");
        assert_eq!(info.third_url, "http://shop.example/cb");
        assert!(info.signature.is_empty());
    }
}
