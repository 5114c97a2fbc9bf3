//! Conversion session: cached rates plus the local-first conversion logic.

use crate::{
    core::{FxClient, FxError},
    rates::{self, ConversionRequest, RateTable},
};

/// Where the session's rate cache currently stands.
///
/// `Ready` and `Failed` are not terminal: a failed session can call
/// [`FxSession::refresh_rates`] again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// No fetch attempted yet; the rate table is empty.
    Uninitialized,
    /// A rate fetch is in flight.
    Loading,
    /// Rates are populated.
    Ready,
    /// The last fetch failed; the rate table is still empty.
    Failed,
}

/// What the last settled conversion attempt produced.
///
/// Result and error are mutually exclusive by construction: an attempt
/// settles into exactly one variant, never both, never neither.
#[derive(Clone, Debug, PartialEq)]
pub enum ConversionOutcome {
    /// The amount expressed in the target currency.
    Converted(f64),
    /// The classified error's human-readable description.
    Failed(String),
}

/// A single-owner conversion session.
///
/// The session holds the last-known [`RateTable`] and the last
/// [`ConversionOutcome`]; both are mutated only by completed operations.
/// All mutation goes through `&mut self`, so one owner serializes every
/// state change and observers never see a torn result/error pair. To share
/// a session across tasks, wrap it in a `tokio::sync::Mutex` or give it to
/// a dedicated owning task.
#[derive(Debug)]
pub struct FxSession {
    client: FxClient,
    base_currency: String,
    phase: SessionPhase,
    rates: RateTable,
    outcome: Option<ConversionOutcome>,
}

impl FxSession {
    /// Creates a session quoting rates against USD.
    pub fn new(client: FxClient) -> Self {
        Self::with_base_currency(client, "USD")
    }

    /// Creates a session quoting rates against `base`.
    pub fn with_base_currency(client: FxClient, base: impl Into<String>) -> Self {
        Self {
            client,
            base_currency: base.into(),
            phase: SessionPhase::Uninitialized,
            rates: RateTable::new(),
            outcome: None,
        }
    }

    /// Fetches the rate table from the provider's `/latest` endpoint.
    ///
    /// A no-op while the table is already populated: re-entry never refires
    /// the network call. The guard is the table itself, not the last
    /// conversion outcome, so a failed session retries cleanly. On success
    /// the table is replaced wholesale, and only if the new table actually
    /// differs; on failure the error description is published, again only
    /// if it differs from the current one.
    ///
    /// The outcome is observable through [`error`](Self::error) either way;
    /// the returned `Result` additionally carries the structured error kind
    /// for callers that want it.
    ///
    /// # Errors
    ///
    /// Returns the classified [`FxError`] when the fetch fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(base = %self.base_currency))
    )]
    pub async fn refresh_rates(&mut self) -> Result<(), FxError> {
        if !self.rates.is_empty() {
            return Ok(());
        }
        self.phase = SessionPhase::Loading;

        match rates::latest(&self.client, self.base_currency.clone()).await {
            Ok(snapshot) => {
                if snapshot.rates != self.rates {
                    self.rates = snapshot.rates;
                }
                self.phase = SessionPhase::Ready;
                Ok(())
            }
            Err(err) => {
                let description = err.to_string();
                if self.error() != Some(description.as_str()) {
                    self.outcome = Some(ConversionOutcome::Failed(description));
                }
                self.phase = SessionPhase::Failed;
                Err(err)
            }
        }
    }

    /// Converts `req`, preferring the cached table.
    ///
    /// When both currency codes are cached the result is computed locally
    /// as `(amount / rate[from]) * rate[to]` and no network call is made.
    /// Otherwise the provider's `/convert` endpoint answers. Either way the
    /// attempt settles into exactly one of result or error, replacing
    /// whatever the previous attempt left behind.
    ///
    /// # Errors
    ///
    /// Returns the classified [`FxError`] when the remote conversion fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, req), err, fields(from = %req.from(), to = %req.to()))
    )]
    pub async fn convert(&mut self, req: ConversionRequest) -> Result<f64, FxError> {
        if let Some(local) = self.rates.convert(req.amount(), req.from(), req.to()) {
            self.outcome = Some(ConversionOutcome::Converted(local));
            return Ok(local);
        }

        match rates::convert(&self.client, req).await {
            Ok(conversion) => {
                self.outcome = Some(ConversionOutcome::Converted(conversion.result));
                Ok(conversion.result)
            }
            Err(err) => {
                self.outcome = Some(ConversionOutcome::Failed(err.to_string()));
                Err(err)
            }
        }
    }

    /// Clears the last outcome without touching the rate table. Idempotent.
    pub fn reset(&mut self) {
        self.outcome = None;
    }

    /// The session's current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The cached rate table. Empty until the first successful fetch.
    #[must_use]
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// The last settled outcome, if any.
    #[must_use]
    pub fn outcome(&self) -> Option<&ConversionOutcome> {
        self.outcome.as_ref()
    }

    /// The last conversion result, if the last attempt succeeded.
    #[must_use]
    pub fn result(&self) -> Option<f64> {
        match self.outcome {
            Some(ConversionOutcome::Converted(v)) => Some(v),
            _ => None,
        }
    }

    /// The last error description, if the last attempt failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Some(ConversionOutcome::Failed(msg)) => Some(msg.as_str()),
            _ => None,
        }
    }
}
