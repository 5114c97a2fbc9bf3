//! Public client surface + builder.
//! The request pipeline itself lives in `call`; `constants` holds the
//! UA and fallback defaults.

mod call;
mod constants;

use std::collections::HashMap;
use std::time::Duration;

use constants::{DEFAULT_API_KEY, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, USER_AGENT};
use reqwest::Client;
use url::Url;

use crate::core::connectivity::ConnectivityWatch;
use crate::core::error::FxError;

/// HTTP methods accepted by [`FxClient::call`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub(crate) const fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Caller-supplied query parameters, appended after the access key.
pub type QueryParams = HashMap<String, String>;

/// Authenticated client for a Fixer-compatible pricing provider.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct FxClient {
    http: Client,
    base_url: Url,
    api_key: String,
    connectivity: Option<ConnectivityWatch>,
}

impl Default for FxClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl FxClient {
    /// Create a new builder.
    pub fn builder() -> FxClientBuilder {
        FxClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }
    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
    pub(crate) fn connectivity(&self) -> Option<&ConnectivityWatch> {
        self.connectivity.as_ref()
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FxClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    connectivity: Option<ConnectivityWatch>,
}

impl FxClientBuilder {
    /// Override the provider base (e.g. `https://data.fixer.io/api/`).
    ///
    /// Defaults to the Fixer API base when not set.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the provider access key. It is sent both as the `access_key`
    /// query parameter and as a bearer `Authorization` header.
    ///
    /// Defaults to an empty key, which the provider will reject with a
    /// classified error rather than a crash.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set the overall request timeout. Default: 30 seconds.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none beyond the overall timeout.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Attach the platform's reachability signal. When the watch reports
    /// offline, calls fail fast with [`FxError::Disconnected`] instead of
    /// waiting on a dead socket. Without a watch the client assumes
    /// reachability.
    #[must_use]
    pub fn connectivity(mut self, watch: ConnectivityWatch) -> Self {
        self.connectivity = Some(watch);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::InvalidTarget`] if the default base URL constant
    /// is malformed (a crate bug), or [`FxError::Transport`] if the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<FxClient, FxError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let http = Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .connect_timeout(self.connect_timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()?;

        Ok(FxClient {
            http,
            base_url,
            api_key: self.api_key.unwrap_or_else(|| DEFAULT_API_KEY.to_string()),
            connectivity: self.connectivity,
        })
    }
}
