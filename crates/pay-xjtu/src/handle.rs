//! # Redirect Session
//!
//! The client handed back after confirmation. It owns its own cookie jar,
//! separate from the scraping [`Session`](crate::session::Session), so the
//! caller's browsing after payment never shares state with initiation.

use crate::config::GatewayConfig;
use crate::session::{build_client, cookie_header};
use pay_core::{FormBody, PaymentError, PaymentResult, FORM_CONTENT_TYPE};
use reqwest::cookie::Jar;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, Response, Url};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Target and hidden fields of the gateway's auto-submit form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoSubmitForm {
    pub action: Url,
    pub fields: FormBody,
}

/// Outcome of the final auto-submit POST.
///
/// The handle is returned either way; this records what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalSubmission {
    /// The gateway answered (after redirects)
    Delivered { status: u16, url: String },
    /// The request never got an answer
    Failed { reason: String },
}

impl FinalSubmission {
    pub fn is_delivered(&self) -> bool {
        matches!(self, FinalSubmission::Delivered { .. })
    }

    /// Delivered with a 2xx status
    pub fn is_success(&self) -> bool {
        matches!(self, FinalSubmission::Delivered { status, .. } if (200..300).contains(status))
    }
}

/// Client for following the gateway's pages after payment
#[derive(Debug)]
pub struct SessionHandle {
    client: Client,
    jar: Arc<Jar>,
    headers: HeaderMap,
    target: Url,
    submission: FinalSubmission,
}

impl SessionHandle {
    /// Re-post the auto-submit form through a brand new cookie jar
    #[instrument(skip_all, fields(action = %form.action))]
    pub(crate) async fn submit(
        config: &GatewayConfig,
        headers: HeaderMap,
        form: AutoSubmitForm,
    ) -> PaymentResult<Self> {
        let (client, jar) = build_client(config)?;

        let result = client
            .post(form.action.clone())
            .headers(headers.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(form.fields.encode())
            .send()
            .await;

        let submission = match result {
            Ok(response) => {
                info!(
                    "Final submission answered: status={}, url={}",
                    response.status(),
                    response.url()
                );
                FinalSubmission::Delivered {
                    status: response.status().as_u16(),
                    url: response.url().to_string(),
                }
            }
            Err(e) => {
                warn!("Final submission failed: {}", e);
                FinalSubmission::Failed {
                    reason: e.to_string(),
                }
            }
        };

        Ok(Self {
            client,
            jar,
            headers,
            target: form.action,
            submission,
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn into_client(self) -> Client {
        self.client
    }

    /// Where the auto-submit form was posted
    pub fn target(&self) -> &Url {
        &self.target
    }

    pub fn submission(&self) -> &FinalSubmission {
        &self.submission
    }

    /// `Cookie` header this handle would send to `url`
    pub fn cookie_header(&self, url: &Url) -> Option<String> {
        cookie_header(&self.jar, url)
    }

    /// GET a follow-up page with the session's fixed headers
    pub async fn get(&self, url: &str) -> PaymentResult<Response> {
        let url = Url::parse(url).map_err(|e| PaymentError::InvalidUrl(format!("{}: {}", url, e)))?;
        self.client
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(|e| PaymentError::Network(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_submission_flags() {
        let ok = FinalSubmission::Delivered {
            status: 200,
            url: "http://shop.example/paid".into(),
        };
        assert!(ok.is_delivered());
        assert!(ok.is_success());

        let rejected = FinalSubmission::Delivered {
            status: 500,
            url: "http://shop.example/paid".into(),
        };
        assert!(rejected.is_delivered());
        assert!(!rejected.is_success());

        let failed = FinalSubmission::Failed {
            reason: "connection refused".into(),
        };
        assert!(!failed.is_delivered());
        assert!(!failed.is_success());
    }
}
