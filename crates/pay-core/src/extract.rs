//! # HTML Field Extraction
//!
//! Selector lookups over gateway pages. A failed lookup is a typed
//! [`NotFound`], never an empty value; a missing attribute on a found
//! element reads as `""`.

use crate::error::{PaymentError, PaymentResult};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// No element matched a selector
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no element matches `{selector}`")]
pub struct NotFound {
    pub selector: &'static str,
}

/// A compiled CSS selector that remembers its source text
#[derive(Debug, Clone)]
pub struct FieldSelector {
    source: &'static str,
    selector: Selector,
}

impl FieldSelector {
    pub fn parse(source: &'static str) -> PaymentResult<Self> {
        let selector = Selector::parse(source).map_err(|e| {
            PaymentError::Configuration(format!("invalid selector `{}`: {}", source, e))
        })?;
        Ok(Self { source, selector })
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }
}

/// First element in document order matching `selector`
pub fn extract<'a>(document: &'a Html, selector: &FieldSelector) -> Result<ElementRef<'a>, NotFound> {
    document
        .select(selector.selector())
        .next()
        .ok_or(NotFound {
            selector: selector.source(),
        })
}

/// Attribute value, or `""` when the attribute is absent
pub fn attribute(element: ElementRef<'_>, name: &str) -> String {
    element.value().attr(name).unwrap_or_default().to_string()
}

/// Direct element children of `element`, in document order
pub fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    element.children().filter_map(ElementRef::wrap)
}

/// Whether a password input's inline style hides it with `display: none`.
///
/// Whitespace and case are ignored, so `display:none;` and
/// `DISPLAY: none` both count.
pub fn password_hidden(style: &str) -> bool {
    let compact: String = style
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    compact.contains("display:none")
}
