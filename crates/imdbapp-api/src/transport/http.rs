//! `HttpExecutor` - reqwest-backed request executor implementation.

use anyhow::{Context, Result, bail};
use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::api::LocalRequestExecutor;

/// Default base URL for the IMDb iPhone API.
const DEFAULT_BASE_URL: &str = "https://app.imdb.com";

/// Locale sent with requests when none is configured.
const DEFAULT_LOCALE: &str = "en_US";

/// IMDb iPhone API request executor.
///
/// Performs one GET request per call and returns the raw JSON body
/// without decoding it.
#[derive(Debug)]
pub struct HttpExecutor {
    /// HTTP client (reqwest, gzip enabled).
    http_client: Client,
    /// Base URL.
    base_url: Url,
    /// Localization parameter forwarded with every request.
    locale: String,
}

/// Builder for `HttpExecutor`.
#[derive(Debug)]
pub struct HttpExecutorBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    locale: Option<String>,
}

impl HttpExecutorBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            locale: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the localization parameter in the format `en_US`
    /// (default: `en_US`).
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Builds the executor.
    ///
    /// # Errors
    ///
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<HttpExecutor> {
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };

        let locale = self.locale.unwrap_or_else(|| String::from(DEFAULT_LOCALE));

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(HttpExecutor {
            http_client,
            base_url,
            locale,
        })
    }
}

impl HttpExecutor {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> HttpExecutorBuilder {
        HttpExecutorBuilder::new()
    }
}

impl LocalRequestExecutor for HttpExecutor {
    #[instrument(skip_all)]
    async fn execute(&self, path: &str, args: &[(&str, String)]) -> Result<String> {
        let url = self
            .base_url
            .join(path)
            .with_context(|| format!("failed to join URL path: {path}"))?;

        let request = self
            .http_client
            .get(url)
            .query(args)
            .query(&[("locale", self.locale.as_str())])
            .build()
            .with_context(|| format!("failed to build request: {path}"))?;

        tracing::debug!(url = %request.url(), "IMDb API request");

        let result = self.http_client.execute(request).await;
        let response = result.with_context(|| format!("request failed: {path}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            bail!("IMDb API error (HTTP {status}): {body}");
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read response body: {path}"))?;

        tracing::debug!(path, body_len = body.len(), "Response body received");
        Ok(body)
    }
}
