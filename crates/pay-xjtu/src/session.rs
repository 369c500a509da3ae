//! # Gateway Session
//!
//! One HTTP client bound to one cookie jar and one fixed header set.
//! Order creation and confirmation go through the same `Session`, which is
//! what keeps both steps attached to the same server-side session.

use crate::config::{join_url, GatewayConfig};
use pay_core::{FormBody, PaymentError, PaymentResult, Platform, FORM_CONTENT_TYPE};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, StatusCode, Url};
use scraper::Html;
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Scraping session for one payment attempt
#[derive(Debug)]
pub struct Session {
    client: Client,
    jar: Arc<Jar>,
    headers: HeaderMap,
    base_url: String,
    platform: Platform,
}

impl Session {
    /// Create a session with a fresh cookie jar
    pub fn new(config: &GatewayConfig, platform: Platform) -> PaymentResult<Self> {
        let headers = config.headers(platform)?;
        let (client, jar) = build_client(config)?;

        Ok(Self {
            client,
            jar,
            headers,
            base_url: config.base_url.clone(),
            platform,
        })
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Fixed headers attached to every request
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Absolute URL for a gateway path
    pub fn url_for(&self, path: &str) -> PaymentResult<Url> {
        join_url(&self.base_url, path)
    }

    /// `Cookie` header this session would send to `url`
    pub fn cookie_header(&self, url: &Url) -> Option<String> {
        cookie_header(&self.jar, url)
    }

    /// POST a form to a gateway path and parse the reply as HTML.
    ///
    /// Anything but `200 OK` is a `RequestError`; the body is not parsed.
    #[instrument(skip(self, form), fields(platform = %self.platform))]
    pub async fn post(&self, path: &str, form: &FormBody) -> PaymentResult<Html> {
        let url = self.url_for(path)?;
        let body = self.post_text(url, form).await?;
        Ok(Html::parse_document(&body))
    }

    async fn post_text(&self, url: Url, form: &FormBody) -> PaymentResult<String> {
        debug!("POST {} ({} fields)", url, form.len());

        let response = self
            .client
            .post(url.clone())
            .headers(self.headers.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(form.encode())
            .send()
            .await
            .map_err(|e| PaymentError::Network(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            error!("Gateway error: status={}, url={}", status, url);
            return Err(PaymentError::RequestError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| PaymentError::Network(e.to_string()))
    }
}

/// Client wired to a new, empty cookie jar
pub(crate) fn build_client(config: &GatewayConfig) -> PaymentResult<(Client, Arc<Jar>)> {
    let jar = Arc::new(Jar::default());
    let mut builder = Client::builder().cookie_provider(Arc::clone(&jar));
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder
        .build()
        .map_err(|e| PaymentError::Configuration(format!("failed to create HTTP client: {}", e)))?;
    Ok((client, jar))
}

pub(crate) fn cookie_header(jar: &Jar, url: &Url) -> Option<String> {
    jar.cookies(url)
        .and_then(|value| value.to_str().ok().map(str::to_string))
}
