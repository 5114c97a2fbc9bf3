//! The provider's two pricing endpoints: `/latest` and `/convert`.

mod api;
mod model;
pub(crate) mod wire;

pub use model::{Conversion, ConversionRequest, RateTable, RatesSnapshot};

use crate::{FxClient, FxError};

/// Fetches the current rate table quoted against `base`.
///
/// # Errors
///
/// Returns [`FxError`] if the network request fails or the response cannot
/// be parsed.
pub async fn latest(client: &FxClient, base: impl Into<String>) -> Result<RatesSnapshot, FxError> {
    LatestBuilder::new(client).base_currency(base).fetch().await
}

/// Asks the provider to convert `req` remotely.
///
/// # Errors
///
/// Returns [`FxError`] if the network request fails or the response cannot
/// be parsed.
pub async fn convert(client: &FxClient, req: ConversionRequest) -> Result<Conversion, FxError> {
    ConvertBuilder::new(client, req).fetch().await
}

/// A builder for fetching the current rate table.
#[derive(Debug)]
pub struct LatestBuilder {
    client: FxClient,
    base_currency: String,
}

impl LatestBuilder {
    /// Creates a new `LatestBuilder` quoting against USD.
    pub fn new(client: &FxClient) -> Self {
        Self {
            client: client.clone(),
            base_currency: "USD".to_string(),
        }
    }

    /// Sets the quote base currency.
    #[must_use]
    pub fn base_currency(mut self, base: impl Into<String>) -> Self {
        self.base_currency = base.into();
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns [`FxError`] if the network request fails, the provider
    /// answers with an error, or the body cannot be parsed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(base = %self.base_currency))
    )]
    pub async fn fetch(self) -> Result<RatesSnapshot, FxError> {
        api::fetch_latest(&self.client, &self.base_currency).await
    }
}

/// A builder for a remote conversion.
#[derive(Debug)]
pub struct ConvertBuilder {
    client: FxClient,
    request: ConversionRequest,
}

impl ConvertBuilder {
    /// Creates a new `ConvertBuilder` for an already-validated request.
    pub fn new(client: &FxClient, request: ConversionRequest) -> Self {
        Self {
            client: client.clone(),
            request,
        }
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns [`FxError`] if the network request fails, the provider
    /// answers with an error, or the body cannot be parsed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(from = %self.request.from(), to = %self.request.to()))
    )]
    pub async fn fetch(self) -> Result<Conversion, FxError> {
        api::fetch_convert(&self.client, &self.request).await
    }
}
