//! Fixed selectors for the gateway's pages, compiled once per process.

use once_cell::sync::Lazy;
use pay_core::FieldSelector;

/// Payment item carrying `payid`, `tag` and `intername`
pub static PAY_ITEM: Lazy<FieldSelector> = Lazy::new(|| compile(".payitem>li>span"));

/// Hidden input holding the gateway order id
pub static ORDER_ID: Lazy<FieldSelector> = Lazy::new(|| compile("#txtorderid"));

/// Password input; its inline style says whether a password is needed
pub static PASSWORD_INPUT: Lazy<FieldSelector> = Lazy::new(|| compile("#password"));

pub static IS_NOTICE: Lazy<FieldSelector> = Lazy::new(|| compile("#form1>input[name=isnotice]"));

/// Auto-submit form on the confirmation page
pub static POST_FORM: Lazy<FieldSelector> = Lazy::new(|| compile("#myform"));

fn compile(source: &'static str) -> FieldSelector {
    FieldSelector::parse(source).expect("gateway selectors are valid CSS")
}
